#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Verdict Library
//!
//! Closed `Result` and `Option` types, their constructors, and the single
//! error raised when a value is demanded from the wrong variant.

pub mod describe;
pub mod error;
pub mod option;
pub mod outcome;
pub mod result;

mod proptests;

// Re-exports for convenience
pub use describe::{Describe, Payload, Shown, Structured, Symbol};
pub use error::{UnwrapError, catch_unwrap};
pub use option::{Option, none, some};
pub use outcome::Outcome;
pub use result::{Result, err, ok};
