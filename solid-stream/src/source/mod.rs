//! Root streams.
//!
//! These are the places a pipeline starts. Every root produces a fresh cursor
//! on each `iter` call; none of them hold cursor state.
mod empty;
mod from_fn;
mod iterable;
mod many;
mod one;
mod range;

use std::rc::Rc;

pub use empty::Empty;
pub use from_fn::FromFn;
pub use iterable::Iterable;
pub use many::{Many, ManyIntoIter};
pub use one::One;
pub use range::Range;

/// A stream without elements.
#[inline]
pub fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// A stream of exactly one element.
#[inline]
pub fn single<T>(value: T) -> One<T>
where
    T: Clone,
{
    One::new(value)
}

/// A stream of the given values, in order.
///
/// The values are moved into a shared buffer, so cloning the stream is cheap
/// and nothing the caller does afterwards changes what it produces.
///
/// ```
/// use solid_stream::{of, StreamExt};
///
/// assert_eq!(of([1, 2, 3]).to_vec(), vec![1, 2, 3]);
/// ```
#[inline]
pub fn of<T, V>(values: V) -> Many<T>
where
    V: Into<Rc<[T]>>,
{
    Many::new(values.into())
}

#[inline]
pub fn from_vec<T>(values: Vec<T>) -> Many<T> {
    of(values)
}

/// A stream over a snapshot of `values`.
#[inline]
pub fn from_slice<T>(values: &[T]) -> Many<T>
where
    T: Clone,
{
    of(values)
}

/// A stream over a borrowed-on-demand collection.
///
/// Unlike [`of`], nothing is copied up front: every iteration asks
/// `collection` for a fresh cursor and clones the elements it yields.
///
/// ```
/// use std::collections::BTreeSet;
/// use solid_stream::{from_iterable, StreamExt};
///
/// let set: BTreeSet<_> = [3, 1, 2].into_iter().collect();
/// let s = from_iterable(set);
/// assert_eq!(s.to_vec(), vec![1, 2, 3]);
/// ```
#[inline]
pub fn from_iterable<C, T>(collection: C) -> Iterable<C, T>
where
    for<'b> &'b C: IntoIterator<Item = &'b T>,
    T: Clone,
{
    Iterable::new(collection)
}

/// A stream whose cursors come from `factory`.
///
/// `factory` is called once per iteration. This is the quickest way to define
/// a custom root; the other way is to implement [`Stream`](crate::Stream)
/// directly.
///
/// ```
/// use solid_stream::{from_fn, StreamExt};
///
/// let squares = from_fn(|| (1..4).map(|x| x * x));
/// assert_eq!(squares.to_vec(), vec![1, 4, 9]);
/// assert_eq!(squares.to_vec(), vec![1, 4, 9]);
/// ```
#[inline]
pub fn from_fn<F, I>(factory: F) -> FromFn<F, I>
where
    F: Fn() -> I,
    I: Iterator,
{
    FromFn::new(factory)
}

/// The integers from `start` up to but not including `end`.
///
/// Empty if `start >= end`.
#[inline]
pub fn range(start: i64, end: i64) -> Range {
    Range::new(start, end)
}
