use crate::{collectors, Stream};

/// A stream that produces the elements of its upstream last to first.
///
/// Created by [`StreamExt::reverse`](crate::StreamExt::reverse).
#[derive(Debug, Clone)]
pub struct Reverse<S> {
    stream: S,
}

impl<S> Reverse<S> {
    pub(crate) fn new(stream: S) -> Self {
        Reverse { stream }
    }
}

impl<S> Stream for Reverse<S>
where
    S: Stream,
{
    type Item = S::Item;
    type Iter<'a>
        = std::iter::Rev<std::vec::IntoIter<S::Item>>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let buffer = collectors::to_vec(&self.stream);
        tracing::trace!(len = buffer.len(), "reverse materialized upstream");
        buffer.into_iter().rev()
    }
}

impl<S> IntoIterator for Reverse<S>
where
    S: IntoIterator,
{
    type Item = S::Item;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<S::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        let buffer: Vec<_> = self.stream.into_iter().collect();
        tracing::trace!(len = buffer.len(), "reverse materialized upstream");
        buffer.into_iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{empty, range, single, StreamExt};

    #[test]
    fn test_reverse() {
        assert_eq!(range(0, 4).reverse().to_vec(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_reverse_trivial() {
        assert_eq!(single(1).reverse().to_vec(), vec![1]);
        assert_eq!(empty::<i32>().reverse().count(), 0);
    }

    #[test]
    fn test_reverse_materializes_every_iteration() {
        let pulled = Cell::new(0);
        let s = range(0, 3).inspect(|_| pulled.set(pulled.get() + 1)).reverse();
        assert_eq!(s.first().into_value(), 2);
        assert_eq!(pulled.get(), 3);
        assert_eq!(s.first().into_value(), 2);
        assert_eq!(pulled.get(), 6);
    }
}
