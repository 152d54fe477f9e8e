use std::hash::Hash;
use std::rc::Rc;

use ahash::HashSet;

use crate::{collectors, Stream};

/// A stream that drops the elements contained in an exclusion set.
///
/// The exclusion set is built once, when the operator is created, and shared
/// by every iteration and every clone. Each iteration filters the upstream
/// lazily.
///
/// Created by [`StreamExt::separate`](crate::StreamExt::separate).
pub struct Separate<S>
where
    S: Stream,
{
    stream: S,
    exclude: Rc<HashSet<S::Item>>,
}

impl<S> Separate<S>
where
    S: Stream,
    S::Item: Eq + Hash,
{
    pub(crate) fn new<E>(stream: S, exclude: &E) -> Self
    where
        E: Stream<Item = S::Item> + ?Sized,
    {
        let exclude = collectors::to_hash_set(exclude);
        tracing::trace!(len = exclude.len(), "separate built exclusion set");
        Separate {
            stream,
            exclude: Rc::new(exclude),
        }
    }
}

impl<S> Clone for Separate<S>
where
    S: Stream + Clone,
{
    fn clone(&self) -> Self {
        Separate {
            stream: self.stream.clone(),
            exclude: Rc::clone(&self.exclude),
        }
    }
}

impl<S> Stream for Separate<S>
where
    S: Stream,
    S::Item: Eq + Hash,
{
    type Item = S::Item;
    type Iter<'a>
        = SeparateIter<S::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        SeparateIter {
            iter: self.stream.iter(),
            exclude: Rc::clone(&self.exclude),
        }
    }
}

impl<S> IntoIterator for Separate<S>
where
    S: Stream + IntoIterator<Item = <S as Stream>::Item>,
    <S as Stream>::Item: Eq + Hash,
{
    type Item = <S as Stream>::Item;
    type IntoIter = SeparateIter<<S as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        SeparateIter {
            iter: self.stream.into_iter(),
            exclude: self.exclude,
        }
    }
}

/// The cursor of [`Separate`]. It shares the exclusion set with its stream.
pub struct SeparateIter<I>
where
    I: Iterator,
{
    iter: I,
    exclude: Rc<HashSet<I::Item>>,
}

impl<I> Iterator for SeparateIter<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.find(|item| !self.exclude.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{empty, from_vec, of, range, StreamExt};

    #[test]
    fn test_separate() {
        let s = of([1, 2, 3, 4]).separate(of([2, 4]));
        assert_eq!(s.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_separate_empty_exclusion() {
        let s = of([1, 2]).separate(empty());
        assert_eq!(s.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_separate_none() {
        let s = from_vec(vec![Some(1), None, Some(2)]).separate(of([None]));
        assert_eq!(s.to_vec(), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_separate_reads_exclusion_once() {
        let pulled = Cell::new(0);
        let exclude = of([2i64]).inspect(|_| pulled.set(pulled.get() + 1));
        let s = range(0, 4).separate(exclude);
        assert_eq!(pulled.get(), 1);
        assert_eq!(s.to_vec(), vec![0, 1, 3]);
        assert_eq!(s.to_vec(), vec![0, 1, 3]);
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_separate_clone_shares_exclusion() {
        let s = of([1, 2, 3]).separate(of([1]));
        let t = s.clone();
        assert_eq!(s.to_vec(), t.to_vec());
    }
}
