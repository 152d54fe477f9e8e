use crate::Stream;

/// A stream of consecutive integers, end exclusive.
///
/// Created by [`range`](crate::range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    pub(crate) fn new(start: i64, end: i64) -> Self {
        Range { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl Stream for Range {
    type Item = i64;
    type Iter<'a>
        = std::ops::Range<i64>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.start..self.end
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = std::ops::Range<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..self.end
    }
}
