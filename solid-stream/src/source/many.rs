use std::rc::Rc;

use crate::Stream;

/// A stream over a shared, immutable buffer of elements.
///
/// Cloning a `Many` shares the buffer. Every iteration yields clones of the
/// elements in index order.
///
/// Created by [`of`](crate::of), [`from_vec`](crate::from_vec),
/// [`from_slice`](crate::from_slice), the [`stream!`](crate::stream) macro, or
/// by collecting an iterator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Many<T> {
    items: Rc<[T]>,
}

impl<T> Many<T> {
    pub(crate) fn new(items: Rc<[T]>) -> Self {
        Many { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Many<T> {
    fn from(items: Vec<T>) -> Self {
        Many::new(items.into())
    }
}

impl<T> FromIterator<T> for Many<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Many::new(iter.into_iter().collect())
    }
}

impl<T> Stream for Many<T>
where
    T: Clone,
{
    type Item = T;
    type Iter<'a>
        = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter().cloned()
    }
}

impl<T> IntoIterator for Many<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = ManyIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        ManyIntoIter {
            items: self.items,
            index: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a Many<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = std::iter::Cloned<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().cloned()
    }
}

/// An owning cursor over a [`Many`].
///
/// It keeps the shared buffer alive, so it can outlive the stream it came
/// from.
#[derive(Debug, Clone)]
pub struct ManyIntoIter<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T> Iterator for ManyIntoIter<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ManyIntoIter<T> where T: Clone {}

#[cfg(test)]
mod tests {
    use crate::{from_slice, from_vec, of, stream, Many, StreamExt};

    #[test]
    fn test_of_keeps_order() {
        assert_eq!(of(["x", "y", "z"]).to_vec(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_reiterates() {
        let s = from_vec(vec![1, 2, 3]);
        assert_eq!(s.to_vec(), s.to_vec());
    }

    #[test]
    fn test_from_slice_is_a_snapshot() {
        let mut v = vec![1, 2];
        let s = from_slice(&v);
        v.push(3);
        v[0] = 10;
        assert_eq!(s.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_clone_shares_buffer() {
        let s = of([1, 2]);
        let t = s.clone();
        assert_eq!(s, t);
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_collect_into_many() {
        let s: Many<i32> = (0..3).map(|x| x * 2).collect();
        assert_eq!(s.as_slice(), &[0, 2, 4]);
    }

    #[test]
    fn test_into_iter_outlives_stream() {
        let iter = {
            let s = stream![1, 2, 3];
            s.into_iter()
        };
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_stream_macro() {
        assert_eq!(stream![1, 2,].to_vec(), vec![1, 2]);
        assert_eq!(stream![].map(|x: i32| x).count(), 0);
    }
}
