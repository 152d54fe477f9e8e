use std::cmp::Ordering;
use std::hash::Hash;
use std::rc::Rc;

use solid_optional::Optional;

use crate::{
    adapter::{Cast, Filter, FlatMap, Inspect, Map, Merge, Skip, Take, Without},
    boxed::BoxedStream,
    buffered::{Distinct, Reverse, Separate, Sorted, SortedBy, SortedByKey},
    collectors, error,
};

/// The core stream interface: a re-iterable producer of elements.
///
/// A stream holds no cursor state of its own. Every call to [`Stream::iter`]
/// creates a fresh cursor, so iterating a stream twice produces the same
/// elements twice as long as the source and the functions in the pipeline
/// are stable. If you implement this, [`StreamExt`] provides all operators on
/// top of it.
pub trait Stream {
    /// The type of the elements produced.
    type Item;

    /// The cursor produced by [`Stream::iter`]. It may borrow the stream.
    type Iter<'a>: Iterator<Item = Self::Item> + 'a
    where
        Self: 'a;

    /// Create a fresh cursor over the elements of the stream.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<S> Stream for &S
where
    S: Stream + ?Sized,
{
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

impl<S> Stream for Rc<S>
where
    S: Stream + ?Sized,
{
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

impl<S> Stream for Box<S>
where
    S: Stream + ?Sized,
{
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

/// Operators available on every [`Stream`].
///
/// Operators that produce a stream take the upstream by value and wrap it;
/// nothing is evaluated until the result is iterated. To keep using the
/// upstream afterwards, operate on a reference (`(&stream).map(..)`), an
/// `Rc`, or a clone. Terminal operators take `&self` and iterate once.
pub trait StreamExt: Stream {
    /// Transform every element with `f`.
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R,
    {
        Map::new(self, f)
    }

    /// Transform every element into zero or more elements.
    ///
    /// `f` may return any stream pipeline built from owned streams, or any
    /// other `IntoIterator`. Elements for which `f` produces nothing are
    /// skipped.
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, F, U>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
        U: IntoIterator,
    {
        FlatMap::new(self, f)
    }

    /// Keep the elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Drop every element equal to `value`.
    fn without(self, value: Self::Item) -> Without<Self>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Without::new(self, value)
    }

    /// Produce at most `count` elements.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Discard the first `count` elements of every iteration.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Produce the elements of `other` after the elements of this stream.
    fn merge<O>(self, other: O) -> Merge<Self, O>
    where
        Self: Sized,
        O: Stream<Item = Self::Item>,
    {
        Merge::new(self, other)
    }

    /// Convert every element into `R`, reporting mismatches as
    /// [`Error::Cast`](crate::Error::Cast) items.
    fn cast<R>(self) -> Cast<Self, R>
    where
        Self: Sized,
        R: TryFrom<Self::Item>,
    {
        Cast::new(self)
    }

    /// Convert every element into `R`.
    ///
    /// # Panics
    ///
    /// The cursor panics with [`Error::Cast`](crate::Error::Cast) when it
    /// reaches an element that cannot be converted.
    #[allow(clippy::type_complexity)]
    fn cast_or_panic<R>(self) -> Map<Cast<Self, R>, fn(error::Result<R>) -> R>
    where
        Self: Sized,
        R: TryFrom<Self::Item>,
    {
        self.cast::<R>().map(unwrap_cast::<R> as fn(error::Result<R>) -> R)
    }

    /// Call `f` on every element as it is pulled through.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Drop every element equal to an earlier element of the same iteration.
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
    {
        Distinct::new(self)
    }

    /// Produce the elements in their natural order.
    fn sorted(self) -> Sorted<Self>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        SortedBy::new(
            self,
            <Self::Item as Ord>::cmp as fn(&Self::Item, &Self::Item) -> Ordering,
        )
    }

    /// Produce the elements ordered by `compare`. The sort is stable.
    fn sorted_by<C>(self, compare: C) -> SortedBy<Self, C>
    where
        Self: Sized,
        C: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        SortedBy::new(self, compare)
    }

    /// Produce the elements ordered by the key `key` extracts. The sort is
    /// stable.
    fn sorted_by_key<K, F>(self, key: F) -> SortedByKey<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Ord,
    {
        SortedByKey::new(self, key)
    }

    /// Produce the elements last to first.
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse::new(self)
    }

    /// Drop every element that `exclude` contains.
    ///
    /// `exclude` is iterated once, right here, and not again.
    ///
    /// Elements are looked up in a hash set, so unlike
    /// [`StreamExt::without`], which only needs `PartialEq`, this requires
    /// `Eq + Hash`. For elements without them, such as `f64`, filter against
    /// a collected exclusion list instead:
    ///
    /// ```
    /// use solid_stream::{of, StreamExt};
    ///
    /// let exclude = of([2.0, 4.0]).to_vec();
    /// let s = of([1.0, 2.0, 3.0, 4.0]).filter(|x| !exclude.contains(x));
    /// assert_eq!(s.to_vec(), vec![1.0, 3.0]);
    /// ```
    fn separate<E>(self, exclude: E) -> Separate<Self>
    where
        Self: Sized,
        E: Stream<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        Separate::new(self, &exclude)
    }

    /// Build a new stream out of this one with `factory`.
    fn compose<R, F>(self, factory: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R,
        R: Stream,
    {
        factory(self)
    }

    /// Erase the type of this stream.
    fn boxed<'s>(self) -> BoxedStream<'s, Self::Item>
    where
        Self: Sized + 's,
    {
        BoxedStream::new(self)
    }

    /// Accumulate the elements left to right, starting with `initial`.
    fn fold<R, F>(&self, initial: R, op: F) -> R
    where
        F: FnMut(R, Self::Item) -> R,
    {
        self.iter().fold(initial, op)
    }

    /// Like [`StreamExt::fold`], but stops at the first error `op` returns.
    fn try_fold<R, E, F>(&self, initial: R, op: F) -> Result<R, E>
    where
        F: FnMut(R, Self::Item) -> Result<R, E>,
    {
        self.iter().try_fold(initial, op)
    }

    /// Accumulate the elements left to right, starting with the first one.
    ///
    /// Absent if the stream is empty.
    fn reduce<F>(&self, op: F) -> Optional<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Optional::of(self.iter().reduce(op))
    }

    /// The first element. Pulls at most one element.
    fn first(&self) -> Optional<Self::Item> {
        Optional::of(self.iter().next())
    }

    /// The last element.
    ///
    /// Presence follows from the cursor running out after at least one
    /// element, so a last element that is itself `None` is still present.
    fn last(&self) -> Optional<Self::Item> {
        let mut last = Optional::absent();
        for item in self.iter() {
            last = Optional::present(item);
        }
        last
    }

    /// The number of elements. Pulls the entire stream.
    fn count(&self) -> usize {
        self.iter().count()
    }

    /// Whether any element matches `predicate`. Stops at the first match.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// Whether every element matches `predicate`. Stops at the first
    /// mismatch.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// Whether any element equals `value`. Stops at the first match.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|item| item == *value)
    }

    /// Materialize the stream into a vector, in iteration order.
    fn to_vec(&self) -> Vec<Self::Item> {
        collectors::to_vec(self)
    }

    /// Turn the stream into anything with `collector`.
    ///
    /// ```
    /// use solid_stream::{collectors, stream, StreamExt};
    ///
    /// let set = stream![1, 2, 2].collect(collectors::to_hash_set);
    /// assert_eq!(set.len(), 2);
    /// ```
    fn collect<R, C>(&self, collector: C) -> R
    where
        C: FnOnce(&Self) -> R,
    {
        collector(self)
    }
}

impl<S> StreamExt for S where S: Stream + ?Sized {}

fn unwrap_cast<R>(result: error::Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}
