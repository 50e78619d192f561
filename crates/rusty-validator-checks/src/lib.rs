//! Rusty-Validator Checks
//!
//! Pure predicate functions over text and numbers. Each function answers a
//! single yes/no question about its input; the engine in `rusty-validator`
//! decides which value gets asked and which message gets recorded.

pub mod email;
pub mod format;
pub mod network;
pub mod numeric;
pub mod pattern;
pub mod string;

// Re-export all validators
pub use email::*;
pub use format::*;
pub use network::*;
pub use numeric::*;
pub use pattern::*;
pub use string::*;
