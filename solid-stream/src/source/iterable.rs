use std::marker::PhantomData;

use crate::Stream;

/// A stream over a collection that is iterated anew every time.
///
/// Created by [`from_iterable`](crate::from_iterable).
pub struct Iterable<C, T> {
    collection: C,
    _item: PhantomData<fn() -> T>,
}

impl<C, T> Iterable<C, T> {
    pub(crate) fn new(collection: C) -> Self {
        Iterable {
            collection,
            _item: PhantomData,
        }
    }

    /// The underlying collection.
    pub fn collection(&self) -> &C {
        &self.collection
    }
}

impl<C, T> Clone for Iterable<C, T>
where
    C: Clone,
{
    fn clone(&self) -> Self {
        Iterable::new(self.collection.clone())
    }
}

impl<C, T> Stream for Iterable<C, T>
where
    for<'b> &'b C: IntoIterator<Item = &'b T>,
    T: Clone,
{
    type Item = T;
    type Iter<'a>
        = std::iter::Cloned<<&'a C as IntoIterator>::IntoIter>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (&self.collection).into_iter().cloned()
    }
}

impl<C, T> IntoIterator for Iterable<C, T>
where
    C: IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = C::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.collection.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::{from_iterable, StreamExt};

    #[test]
    fn test_from_iterable() {
        let deque: VecDeque<_> = [1, 2, 3].into_iter().collect();
        let s = from_iterable(deque);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);
        assert_eq!(s.map(|x| x * 2).to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn test_from_iterable_vec() {
        let s = from_iterable(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(s.collection().len(), 2);
        assert_eq!(s.first().into_value(), "a");
    }
}
