//! Execution Order
//!
//! The dependency model a test runner's scheduler consumes to order test
//! execution: parse `@depends` annotations into immutable
//! [`DependencyTarget`] values and combine them with pure, order-preserving
//! list operations.

pub mod dependency;
pub mod error;

pub use dependency::DependencyTarget;
pub use error::TargetParseError;
