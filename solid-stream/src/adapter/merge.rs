use crate::Stream;

/// A stream that produces the elements of a second stream after the first.
///
/// Created by [`StreamExt::merge`](crate::StreamExt::merge).
#[derive(Debug, Clone)]
pub struct Merge<S, O> {
    stream: S,
    other: O,
}

impl<S, O> Merge<S, O> {
    pub(crate) fn new(stream: S, other: O) -> Self {
        Merge { stream, other }
    }
}

impl<S, O> Stream for Merge<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    type Item = S::Item;
    type Iter<'a>
        = std::iter::Chain<S::Iter<'a>, O::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.stream.iter().chain(self.other.iter())
    }
}

impl<S, O> IntoIterator for Merge<S, O>
where
    S: IntoIterator,
    O: IntoIterator<Item = S::Item>,
{
    type Item = S::Item;
    type IntoIter = std::iter::Chain<S::IntoIter, O::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream.into_iter().chain(self.other)
    }
}
