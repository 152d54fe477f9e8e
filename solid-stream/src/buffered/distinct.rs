use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use crate::Stream;

/// A stream that drops elements equal to an earlier element.
///
/// Created by [`StreamExt::distinct`](crate::StreamExt::distinct).
#[derive(Debug, Clone)]
pub struct Distinct<S> {
    stream: S,
}

impl<S> Distinct<S> {
    pub(crate) fn new(stream: S) -> Self {
        Distinct { stream }
    }
}

impl<S> Stream for Distinct<S>
where
    S: Stream,
    S::Item: Clone + Eq + Hash,
{
    type Item = S::Item;
    type Iter<'a>
        = DistinctIter<S::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        DistinctIter {
            iter: self.stream.iter(),
            seen: HashSet::new(),
        }
    }
}

/// The cursor of [`Distinct`]. It owns the set of elements seen so far.
pub struct DistinctIter<I>
where
    I: Iterator,
{
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for DistinctIter<I>
where
    I: Iterator,
    I::Item: Clone + Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        // a non-empty upstream produces at least one new element unless
        // everything has been seen already
        let lower = if lower > 0 && self.seen.is_empty() { 1 } else { 0 };
        (lower, upper)
    }
}

impl<S> IntoIterator for Distinct<S>
where
    S: IntoIterator,
    S::Item: Clone + Eq + Hash,
{
    type Item = S::Item;
    type IntoIter = DistinctIter<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        DistinctIter {
            iter: self.stream.into_iter(),
            seen: HashSet::new(),
        }
    }
}
