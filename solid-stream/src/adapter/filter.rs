use std::borrow::Borrow;

use crate::Stream;

/// A stream that keeps the elements matching a predicate.
///
/// Created by [`StreamExt::filter`](crate::StreamExt::filter).
#[derive(Clone)]
pub struct Filter<S, P> {
    stream: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(stream: S, predicate: P) -> Self {
        Filter { stream, predicate }
    }
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a>
        = std::iter::Filter<S::Iter<'a>, &'a P>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.stream.iter().filter(&self.predicate)
    }
}

impl<S, P> IntoIterator for Filter<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    type IntoIter = std::iter::Filter<S::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream.into_iter().filter(self.predicate)
    }
}

/// A stream that drops the elements equal to a value.
///
/// Created by [`StreamExt::without`](crate::StreamExt::without).
pub struct Without<S>
where
    S: Stream,
{
    stream: S,
    value: S::Item,
}

impl<S> Without<S>
where
    S: Stream,
{
    pub(crate) fn new(stream: S, value: S::Item) -> Self {
        Without { stream, value }
    }
}

impl<S> Clone for Without<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Without {
            stream: self.stream.clone(),
            value: self.value.clone(),
        }
    }
}

impl<S> Stream for Without<S>
where
    S: Stream,
    S::Item: PartialEq,
{
    type Item = S::Item;
    type Iter<'a>
        = WithoutIter<S::Iter<'a>, &'a S::Item>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        WithoutIter {
            iter: self.stream.iter(),
            value: &self.value,
        }
    }
}

impl<S> IntoIterator for Without<S>
where
    S: Stream + IntoIterator<Item = <S as Stream>::Item>,
    <S as Stream>::Item: PartialEq,
{
    type Item = <S as Stream>::Item;
    type IntoIter = WithoutIter<<S as IntoIterator>::IntoIter, <S as Stream>::Item>;

    fn into_iter(self) -> Self::IntoIter {
        WithoutIter {
            iter: self.stream.into_iter(),
            value: self.value,
        }
    }
}

/// The cursor of [`Without`]. It holds the excluded value, or a reference
/// to it.
pub struct WithoutIter<I, V> {
    iter: I,
    value: V,
}

impl<I, V> Iterator for WithoutIter<I, V>
where
    I: Iterator,
    I::Item: PartialEq,
    V: Borrow<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value: &I::Item = self.value.borrow();
        self.iter.find(|item| item != value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}
