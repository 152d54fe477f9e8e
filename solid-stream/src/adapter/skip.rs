use crate::Stream;

/// A stream that discards a number of leading elements.
///
/// Created by [`StreamExt::skip`](crate::StreamExt::skip).
#[derive(Debug, Clone)]
pub struct Skip<S> {
    stream: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(stream: S, count: usize) -> Self {
        Skip { stream, count }
    }
}

impl<S> Stream for Skip<S>
where
    S: Stream,
{
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        discard(self.stream.iter(), self.count)
    }
}

impl<S> IntoIterator for Skip<S>
where
    S: IntoIterator,
{
    type Item = S::Item;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        discard(self.stream.into_iter(), self.count)
    }
}

// the leading elements are discarded when the cursor is created, once per
// iteration
fn discard<I: Iterator>(mut iter: I, count: usize) -> I {
    for _ in 0..count {
        if iter.next().is_none() {
            break;
        }
    }
    iter
}
