use std::fmt;
use std::marker::PhantomData;

use crate::Stream;

/// A stream without elements.
///
/// Created by [`empty`](crate::empty).
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

static_assertions::assert_eq_size!(Empty<String>, ());

impl<T> Empty<T> {
    pub(crate) fn new() -> Self {
        Empty {
            _item: PhantomData,
        }
    }
}

// derives would require T to implement these too
impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty::new()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Stream for Empty<T> {
    type Item = T;
    type Iter<'a>
        = std::iter::Empty<T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        std::iter::empty()
    }
}

impl<T> IntoIterator for Empty<T> {
    type Item = T;
    type IntoIter = std::iter::Empty<T>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::empty()
    }
}
