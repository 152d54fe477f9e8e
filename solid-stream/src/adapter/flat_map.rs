use std::marker::PhantomData;

use crate::Stream;

/// A stream that expands every element of its upstream into zero or more
/// elements.
///
/// Created by [`StreamExt::flat_map`](crate::StreamExt::flat_map).
pub struct FlatMap<S, F, U> {
    stream: S,
    f: F,
    _inner: PhantomData<fn() -> U>,
}

impl<S, F, U> FlatMap<S, F, U> {
    pub(crate) fn new(stream: S, f: F) -> Self {
        FlatMap {
            stream,
            f,
            _inner: PhantomData,
        }
    }
}

impl<S, F, U> Clone for FlatMap<S, F, U>
where
    S: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        FlatMap::new(self.stream.clone(), self.f.clone())
    }
}

impl<S, F, U> Stream for FlatMap<S, F, U>
where
    S: Stream,
    F: Fn(S::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;
    type Iter<'a>
        = FlatMapIter<S::Iter<'a>, &'a F, U>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        FlatMapIter {
            iter: self.stream.iter(),
            f: &self.f,
            inner: None,
        }
    }
}

impl<S, F, U> IntoIterator for FlatMap<S, F, U>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;
    type IntoIter = FlatMapIter<S::IntoIter, F, U>;

    fn into_iter(self) -> Self::IntoIter {
        FlatMapIter {
            iter: self.stream.into_iter(),
            f: self.f,
            inner: None,
        }
    }
}

/// The cursor of [`FlatMap`].
pub struct FlatMapIter<I, F, U>
where
    U: IntoIterator,
{
    iter: I,
    f: F,
    inner: Option<U::IntoIter>,
}

impl<I, F, U> Iterator for FlatMapIter<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // if there are any more elements in the current inner cursor,
            // supply those
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            // if not, move on to the next outer element; an inner cursor
            // that turns out empty just sends us around again
            let item = self.iter.next()?;
            self.inner = Some((self.f)(item).into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // whatever is left in the current inner cursor is a lower bound;
        // the outer elements can expand to anything
        let lower = self.inner.as_ref().map_or(0, |inner| inner.size_hint().0);
        match (self.iter.size_hint(), &self.inner) {
            ((0, Some(0)), Some(inner)) => (lower, inner.size_hint().1),
            ((0, Some(0)), None) => (0, Some(0)),
            _ => (lower, None),
        }
    }
}
