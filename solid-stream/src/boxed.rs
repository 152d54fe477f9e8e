use std::fmt;
use std::rc::Rc;

use crate::Stream;

pub(crate) type BoxedIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

// object safe face of Stream
trait DynStream<T> {
    fn dyn_iter(&self) -> BoxedIter<'_, T>;
}

impl<S> DynStream<S::Item> for S
where
    S: Stream,
{
    fn dyn_iter(&self) -> BoxedIter<'_, S::Item> {
        Box::new(self.iter())
    }
}

/// A stream with its type erased.
///
/// Useful when different branches build differently typed pipelines, or to
/// name the result of [`StreamExt::compose`](crate::StreamExt::compose).
/// Cloning is cheap: the underlying stream is shared.
///
/// ```
/// use solid_stream::{range, BoxedStream, StreamExt};
///
/// fn evens_or_odds(evens: bool) -> BoxedStream<'static, i64> {
///     if evens {
///         range(0, 6).filter(|x| x % 2 == 0).boxed()
///     } else {
///         range(0, 6).filter(|x| x % 2 == 1).boxed()
///     }
/// }
/// assert_eq!(evens_or_odds(false).to_vec(), vec![1, 3, 5]);
/// ```
pub struct BoxedStream<'s, T> {
    inner: Rc<dyn DynStream<T> + 's>,
}

impl<'s, T> BoxedStream<'s, T> {
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + 's,
    {
        BoxedStream {
            inner: Rc::new(stream),
        }
    }
}

impl<T> Clone for BoxedStream<'_, T> {
    fn clone(&self) -> Self {
        BoxedStream {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for BoxedStream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedStream").finish_non_exhaustive()
    }
}

impl<T> Stream for BoxedStream<'_, T> {
    type Item = T;
    type Iter<'a>
        = BoxedIter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.inner.dyn_iter()
    }
}
