use std::cmp::Ordering;

use crate::{collectors, Stream};

/// A stream sorted by natural order.
///
/// Created by [`StreamExt::sorted`](crate::StreamExt::sorted).
pub type Sorted<S> = SortedBy<S, fn(&<S as Stream>::Item, &<S as Stream>::Item) -> Ordering>;

/// A stream that produces the elements of its upstream ordered by a
/// comparator.
///
/// Every iteration materializes the upstream into a buffer and sorts it,
/// stably, before producing the first element. If the comparator panics the
/// buffer is dropped with the cursor that was being created.
///
/// Created by [`StreamExt::sorted_by`](crate::StreamExt::sorted_by).
#[derive(Clone)]
pub struct SortedBy<S, C> {
    stream: S,
    compare: C,
}

impl<S, C> SortedBy<S, C> {
    pub(crate) fn new(stream: S, compare: C) -> Self {
        SortedBy { stream, compare }
    }
}

impl<S, C> Stream for SortedBy<S, C>
where
    S: Stream,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;
    type Iter<'a>
        = std::vec::IntoIter<S::Item>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let mut buffer = collectors::to_vec(&self.stream);
        tracing::trace!(len = buffer.len(), "sorting materialized upstream");
        buffer.sort_by(&self.compare);
        buffer.into_iter()
    }
}

impl<S, C> IntoIterator for SortedBy<S, C>
where
    S: IntoIterator,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;
    type IntoIter = std::vec::IntoIter<S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let mut buffer: Vec<_> = self.stream.into_iter().collect();
        tracing::trace!(len = buffer.len(), "sorting materialized upstream");
        buffer.sort_by(self.compare);
        buffer.into_iter()
    }
}

/// A stream that produces the elements of its upstream ordered by a key.
///
/// Created by [`StreamExt::sorted_by_key`](crate::StreamExt::sorted_by_key).
#[derive(Clone)]
pub struct SortedByKey<S, F> {
    stream: S,
    key: F,
}

impl<S, F> SortedByKey<S, F> {
    pub(crate) fn new(stream: S, key: F) -> Self {
        SortedByKey { stream, key }
    }
}

impl<S, F, K> Stream for SortedByKey<S, F>
where
    S: Stream,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    type Item = S::Item;
    type Iter<'a>
        = std::vec::IntoIter<S::Item>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let mut buffer = collectors::to_vec(&self.stream);
        tracing::trace!(len = buffer.len(), "sorting materialized upstream by key");
        buffer.sort_by_key(&self.key);
        buffer.into_iter()
    }
}

impl<S, F, K> IntoIterator for SortedByKey<S, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item) -> K,
    K: Ord,
{
    type Item = S::Item;
    type IntoIter = std::vec::IntoIter<S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let mut buffer: Vec<_> = self.stream.into_iter().collect();
        tracing::trace!(len = buffer.len(), "sorting materialized upstream by key");
        buffer.sort_by_key(self.key);
        buffer.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::{empty, of, range, Stream, StreamExt};

    #[test]
    fn test_sorted() {
        assert_eq!(of([3, 1, 2]).sorted().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_by_descending() {
        let s = of([3, 1, 2]).sorted_by(|a, b| b.cmp(a));
        assert_eq!(s.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sorted_by_is_stable() {
        let s = of([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')])
            .sorted_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(s.to_vec(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_sorted_by_key_is_stable() {
        let s = of(["ccc", "a", "bb", "d"]).sorted_by_key(|s| s.len());
        assert_eq!(s.to_vec(), vec!["a", "d", "bb", "ccc"]);
    }

    #[test]
    fn test_sorted_empty() {
        assert_eq!(empty::<i32>().sorted().count(), 0);
    }

    #[test]
    fn test_sorted_is_lazy_until_iterated() {
        let pulled = Cell::new(0);
        let s = range(0, 3).inspect(|_| pulled.set(pulled.get() + 1)).sorted();
        assert_eq!(pulled.get(), 0);
        let _iter = s.iter();
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_sorted_materializes_every_iteration() {
        let pulled = Cell::new(0);
        let s = range(0, 3)
            .inspect(|_| pulled.set(pulled.get() + 1))
            .sorted_by(|a, b| b.cmp(a));
        assert_eq!(s.to_vec(), vec![2, 1, 0]);
        assert_eq!(pulled.get(), 3);
        assert_eq!(s.to_vec(), vec![2, 1, 0]);
        assert_eq!(pulled.get(), 6);
    }

    #[test]
    fn test_sorted_by_key_materializes_every_iteration() {
        let pulled = Cell::new(0);
        let s = of([3, 1, 2])
            .inspect(|_| pulled.set(pulled.get() + 1))
            .sorted_by_key(|x| *x);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(pulled.get(), 6);
    }

    #[test]
    fn test_sorted_comparator_panic_propagates() {
        let source = of([2, 1]);
        let s = (&source).sorted_by(|_, _| panic!("comparator failed"));
        let result = catch_unwind(AssertUnwindSafe(|| s.to_vec()));
        assert!(result.is_err());
        assert_eq!(source.to_vec(), vec![2, 1]);
    }
}
