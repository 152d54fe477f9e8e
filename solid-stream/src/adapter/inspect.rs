use crate::Stream;

/// A stream that hands every element to a callback as it passes.
///
/// Created by [`StreamExt::inspect`](crate::StreamExt::inspect).
#[derive(Clone)]
pub struct Inspect<S, F> {
    stream: S,
    f: F,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(stream: S, f: F) -> Self {
        Inspect { stream, f }
    }
}

impl<S, F> Stream for Inspect<S, F>
where
    S: Stream,
    F: Fn(&S::Item),
{
    type Item = S::Item;
    type Iter<'a>
        = std::iter::Inspect<S::Iter<'a>, &'a F>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.stream.iter().inspect(&self.f)
    }
}

impl<S, F> IntoIterator for Inspect<S, F>
where
    S: IntoIterator,
    F: FnMut(&S::Item),
{
    type Item = S::Item;
    type IntoIter = std::iter::Inspect<S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream.into_iter().inspect(self.f)
    }
}
