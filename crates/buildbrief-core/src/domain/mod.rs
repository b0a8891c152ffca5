//! Domain value types for build and test results.

pub mod error;
pub mod failure;
pub mod result;
