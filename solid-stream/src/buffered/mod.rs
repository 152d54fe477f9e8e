//! Adapters that have to buffer elements before they can produce any.
//!
//! None of them keep what they buffered between iterations: every call to
//! `iter` starts over from a fresh upstream cursor.
mod distinct;
mod reverse;
mod separate;
mod sorted;

pub use distinct::{Distinct, DistinctIter};
pub use reverse::Reverse;
pub use separate::{Separate, SeparateIter};
pub use sorted::{Sorted, SortedBy, SortedByKey};
