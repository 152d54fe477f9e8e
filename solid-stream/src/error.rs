//! Errors produced by stream operators.
//!
//! Failures inside caller supplied functions are not represented here: they
//! propagate unmodified. Pipelines that can fail carry `Result` elements
//! instead, and use [`StreamExt::try_fold`](crate::StreamExt::try_fold).

/// A stream error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Element cannot be cast.
    ///
    /// The element at `index` (counted from the start of the iteration) could
    /// not be converted from type `from` to type `to`.
    #[error("cannot cast element {index} of type {from} to {to}")]
    Cast {
        index: usize,
        from: &'static str,
        to: &'static str,
    },
    /// An absent value was accessed.
    #[error(transparent)]
    Absent(#[from] solid_optional::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, StreamExt};

    fn first_or_error() -> Result<i32> {
        let first = empty::<i32>().first();
        Ok(*first.try_get()?)
    }

    #[test]
    fn test_absent_converts() {
        assert_eq!(
            first_or_error(),
            Err(Error::Absent(solid_optional::Error::AbsentValue))
        );
    }

    #[test]
    fn test_cast_message() {
        let e = Error::Cast {
            index: 3,
            from: "i64",
            to: "u8",
        };
        assert_eq!(e.to_string(), "cannot cast element 3 of type i64 to u8");
    }
}
