use crate::Stream;

/// A stream that transforms every element of its upstream.
///
/// Created by [`StreamExt::map`](crate::StreamExt::map).
#[derive(Clone)]
pub struct Map<S, F> {
    stream: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(stream: S, f: F) -> Self {
        Map { stream, f }
    }
}

impl<S, F, R> Stream for Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Iter<'a>
        = std::iter::Map<S::Iter<'a>, &'a F>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.stream.iter().map(&self.f)
    }
}

impl<S, F, R> IntoIterator for Map<S, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
{
    type Item = R;
    type IntoIter = std::iter::Map<S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream.into_iter().map(self.f)
    }
}
