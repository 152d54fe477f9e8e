use std::marker::PhantomData;

use crate::Stream;

/// A stream that asks a factory for each of its cursors.
///
/// Created by [`from_fn`](crate::from_fn).
pub struct FromFn<F, I> {
    factory: F,
    _iter: PhantomData<fn() -> I>,
}

impl<F, I> FromFn<F, I> {
    pub(crate) fn new(factory: F) -> Self {
        FromFn {
            factory,
            _iter: PhantomData,
        }
    }
}

impl<F, I> Clone for FromFn<F, I>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        FromFn::new(self.factory.clone())
    }
}

impl<F, I> Stream for FromFn<F, I>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Item = I::Item;
    type Iter<'a>
        = I
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (self.factory)()
    }
}

impl<F, I> IntoIterator for FromFn<F, I>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> Self::IntoIter {
        (self.factory)()
    }
}
