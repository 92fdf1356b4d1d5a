//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod compile;
pub mod transaction;
pub mod units;

pub use compile::*;
pub use transaction::*;
pub use units::*;
