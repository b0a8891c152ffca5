//! Buildbrief core - domain model for compact build/test reporting.
//!
//! Value types shared by the compaction pipeline:
//! - Typed build results (status, compilation diagnostics, test summary)
//! - Test failure records, replaced rather than mutated between stages
//! - Text helpers for bounding collaborator-supplied output

pub mod domain;
pub mod text;

// Re-export key types
pub use domain::error::DomainError;
pub use domain::failure::TestFailure;
pub use domain::result::{BuildResult, BuildStatus, CompilationError, Severity, TestSummary};
