use crate::Stream;

/// A stream of exactly one element.
///
/// Created by [`single`](crate::single).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct One<T> {
    value: T,
}

impl<T> One<T> {
    pub(crate) fn new(value: T) -> Self {
        One { value }
    }
}

impl<T> Stream for One<T>
where
    T: Clone,
{
    type Item = T;
    type Iter<'a>
        = std::iter::Once<T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        std::iter::once(self.value.clone())
    }
}

impl<T> IntoIterator for One<T> {
    type Item = T;
    type IntoIter = std::iter::Once<T>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.value)
    }
}
