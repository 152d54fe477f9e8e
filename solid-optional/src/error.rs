/// Errors raised by [`Optional`](crate::Optional).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Absent value accessed.
    ///
    /// The value of an absent optional was requested. This is a programming
    /// error: check with `is_present` or use one of the defaulting accessors.
    #[error("absent value accessed")]
    AbsentValue,
}

pub type Result<T> = std::result::Result<T, Error>;
