//! A value that is either present or absent.
//!
//! [`Optional`] is the result type for stream operations that may have no
//! answer, such as taking the first element of an empty stream. Presence is
//! tracked by the type itself, so a present value can be anything, including
//! an `Option::None`.
//!
//! ```
//! use solid_optional::Optional;
//!
//! let o = Optional::of(Some(5));
//! assert_eq!(o.map(|x| x.to_string()).get(), "5");
//! assert!(!Optional::<i32>::of(None).is_present());
//! ```
mod error;
mod optional;

pub use error::{Error, Result};
pub use optional::{Iter, Optional};
