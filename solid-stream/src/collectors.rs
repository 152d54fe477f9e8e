//! Materializing a stream into a collection.
//!
//! These functions fit [`StreamExt::collect`](crate::StreamExt::collect):
//!
//! ```
//! use solid_stream::{collectors, range, StreamExt};
//!
//! let v = range(0, 3).collect(collectors::to_vec);
//! assert_eq!(v, vec![0, 1, 2]);
//! ```
use std::hash::Hash;

use ahash::HashSet;

use crate::Stream;

/// Materialize a stream into a vector, in iteration order.
///
/// Duplicates are kept. The buffering operators use this to take their
/// snapshot of the upstream.
pub fn to_vec<S>(stream: &S) -> Vec<S::Item>
where
    S: Stream + ?Sized,
{
    stream.iter().collect()
}

/// Materialize a stream into a hash set.
pub fn to_hash_set<S>(stream: &S) -> HashSet<S::Item>
where
    S: Stream + ?Sized,
    S::Item: Eq + Hash,
{
    stream.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, from_vec, of, StreamExt};

    #[test]
    fn test_to_vec_keeps_order_and_duplicates() {
        assert_eq!(to_vec(&of([3, 1, 3])), vec![3, 1, 3]);
        assert_eq!(to_vec(&empty::<i32>()), Vec::<i32>::new());
    }

    #[test]
    fn test_to_vec_round_trip() {
        let s = of([5, 4, 4]).map(|x| x + 1);
        let again = from_vec(to_vec(&s));
        assert_eq!(again.to_vec(), s.to_vec());
    }

    #[test]
    fn test_to_hash_set() {
        let set = to_hash_set(&of([3, 1, 3]));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(set.contains(&3));
    }
}
