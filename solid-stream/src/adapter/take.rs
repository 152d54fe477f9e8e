use crate::Stream;

/// A stream that stops after a number of elements.
///
/// Created by [`StreamExt::take`](crate::StreamExt::take).
#[derive(Debug, Clone)]
pub struct Take<S> {
    stream: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(stream: S, count: usize) -> Self {
        Take { stream, count }
    }
}

impl<S> Stream for Take<S>
where
    S: Stream,
{
    type Item = S::Item;
    // std's Take does not pull from upstream once the count is used up
    type Iter<'a>
        = std::iter::Take<S::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.stream.iter().take(self.count)
    }
}

impl<S> IntoIterator for Take<S>
where
    S: IntoIterator,
{
    type Item = S::Item;
    type IntoIter = std::iter::Take<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream.into_iter().take(self.count)
    }
}
