//! Optional container with combinators whose access mode (shared reference, exclusive reference, or ownership
//! transfer) is resolved at compile time.
//!
//! ```
//! use optional_ext_core::Optional;
//!
//! let o = Optional::new(2);
//! let p = o
//!   .transform(|v| v * 2)
//!   .transform(|v| v + 1)
//!   .transform(|v| v * 4);
//! assert_eq!(p, Optional::new(20));
//! ```

pub use error::EmptyAccess;
pub use optional::Optional;

pub mod optional;
pub mod combinator;
pub mod access;
pub mod error;

pub mod app;
