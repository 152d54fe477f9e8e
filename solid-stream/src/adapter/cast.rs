use std::any::type_name;
use std::marker::PhantomData;

use crate::{error, Stream};

/// A stream that converts every element of its upstream into `R`.
///
/// Every element becomes a `Result`; elements that cannot be converted
/// become [`Error::Cast`](crate::Error::Cast), naming their position in the
/// stream.
///
/// Created by [`StreamExt::cast`](crate::StreamExt::cast).
pub struct Cast<S, R> {
    stream: S,
    _target: PhantomData<fn() -> R>,
}

impl<S, R> Cast<S, R> {
    pub(crate) fn new(stream: S) -> Self {
        Cast {
            stream,
            _target: PhantomData,
        }
    }
}

impl<S, R> Clone for Cast<S, R>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Cast::new(self.stream.clone())
    }
}

impl<S, R> Stream for Cast<S, R>
where
    S: Stream,
    R: TryFrom<S::Item>,
{
    type Item = error::Result<R>;
    type Iter<'a>
        = CastIter<S::Iter<'a>, R>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        CastIter::new(self.stream.iter())
    }
}

/// The cursor of [`Cast`].
pub struct CastIter<I, R> {
    iter: I,
    index: usize,
    _target: PhantomData<fn() -> R>,
}

impl<I, R> CastIter<I, R> {
    fn new(iter: I) -> Self {
        CastIter {
            iter,
            index: 0,
            _target: PhantomData,
        }
    }
}

impl<I, R> Iterator for CastIter<I, R>
where
    I: Iterator,
    R: TryFrom<I::Item>,
{
    type Item = error::Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some(R::try_from(item).map_err(|_| error::Error::Cast {
            index,
            from: type_name::<I::Item>(),
            to: type_name::<R>(),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<S, R> IntoIterator for Cast<S, R>
where
    S: IntoIterator,
    R: TryFrom<S::Item>,
{
    type Item = error::Result<R>;
    type IntoIter = CastIter<S::IntoIter, R>;

    fn into_iter(self) -> Self::IntoIter {
        CastIter::new(self.stream.into_iter())
    }
}
