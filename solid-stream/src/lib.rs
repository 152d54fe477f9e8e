//! Lazy, re-iterable streams.
//!
//! A [`Stream`] describes a pipeline of elements without holding any cursor
//! state. Operators from [`StreamExt`] wrap a stream in a new one; nothing
//! runs until a terminal operator (or [`Stream::iter`]) asks for elements,
//! and then only as many upstream elements are pulled as the answer needs.
//! Iterating the same stream again starts from scratch.
//!
//! ```
//! use solid_stream::{range, Optional, StreamExt};
//!
//! let evens = range(0, 10).filter(|x| x % 2 == 0).map(|x| x * x);
//! assert_eq!(evens.to_vec(), vec![0, 4, 16, 36, 64]);
//! assert_eq!(evens.first(), Optional::present(0));
//! assert_eq!(evens.take(2).reduce(|a, b| a + b), Optional::present(4));
//! ```
//!
//! Operators that might have no answer, such as [`StreamExt::first`], return
//! an [`Optional`].
mod adapter;
mod boxed;
mod buffered;
pub mod collectors;
mod error;
mod source;
mod stream;

pub use adapter::{
    Cast, CastIter, Filter, FlatMap, FlatMapIter, Inspect, Map, Merge, Skip, Take, Without,
    WithoutIter,
};
pub use boxed::BoxedStream;
pub use buffered::{
    Distinct, DistinctIter, Reverse, Separate, SeparateIter, Sorted, SortedBy, SortedByKey,
};
pub use error::{Error, Result};
pub use solid_optional::Optional;
pub use source::{
    empty, from_fn, from_iterable, from_slice, from_vec, of, range, single, Empty, FromFn,
    Iterable, Many, ManyIntoIter, One, Range,
};
pub use stream::{Stream, StreamExt};

/// Create a stream of the given values.
///
/// ```
/// use solid_stream::{stream, StreamExt};
///
/// assert_eq!(stream![1, 2, 3].count(), 3);
/// assert_eq!(stream![].map(|x: u8| x).count(), 0);
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::of([$($value),+])
    };
}
