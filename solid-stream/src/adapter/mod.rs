//! Lazy adapters.
//!
//! Each adapter wraps its upstream stream and the state the operator
//! captured. Its cursor pulls from a fresh upstream cursor only as far as
//! needed to answer the current `next`.
mod cast;
mod filter;
mod flat_map;
mod inspect;
mod map;
mod merge;
mod skip;
mod take;

pub use cast::{Cast, CastIter};
pub use filter::{Filter, Without, WithoutIter};
pub use flat_map::{FlatMap, FlatMapIter};
pub use inspect::Inspect;
pub use map::Map;
pub use merge::Merge;
pub use skip::Skip;
pub use take::Take;
