//! Typed build results and compilation diagnostics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::failure::TestFailure;

/// Outcome of a build-tool invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Success,
    Failure,
    Timeout,
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuildStatus::Success => "SUCCESS",
            BuildStatus::Failure => "FAILURE",
            BuildStatus::Timeout => "TIMEOUT",
        };
        f.write_str(s)
    }
}

impl FromStr for BuildStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(BuildStatus::Success),
            "FAILURE" => Ok(BuildStatus::Failure),
            "TIMEOUT" => Ok(BuildStatus::Timeout),
            other => Err(DomainError::UnknownBuildStatus(other.to_string())),
        }
    }
}

/// Severity of a compilation diagnostic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        f.write_str(s)
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            other => Err(DomainError::UnknownSeverity(other.to_string())),
        }
    }
}

/// A single compiler diagnostic parsed from build output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompilationError {
    /// Source file path as reported by the compiler.
    pub file: String,

    /// Line number (1-indexed).
    pub line: u32,

    /// Column number (1-indexed), when the compiler reports one.
    pub column: Option<u32>,

    /// Human-readable message.
    pub message: String,

    /// Severity level.
    pub severity: Severity,
}

impl CompilationError {
    /// Create a new diagnostic without column information.
    pub fn new(
        file: impl Into<String>,
        line: u32,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column: None,
            message: message.into(),
            severity,
        }
    }

    /// Set the column number.
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }
}

/// Aggregate test counts from a structured report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TestSummary {
    /// Total tests run.
    pub tests_run: u32,

    /// Tests that failed an assertion.
    pub tests_failed: u32,

    /// Tests skipped.
    pub tests_skipped: u32,

    /// Tests that errored outside an assertion.
    pub tests_errored: u32,
}

/// The root value consumed by the report renderer.
///
/// Invariant: `raw_output_tail` is rendered only when both `errors` and
/// `failures` are empty or absent. Structured data always takes precedence
/// over raw text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildResult {
    /// Outcome of the invocation.
    pub status: BuildStatus,

    /// Elapsed wall time in milliseconds.
    pub duration_ms: u64,

    /// Compilation errors, when parsed from build output.
    pub errors: Option<Vec<CompilationError>>,

    /// Compilation warnings, when parsed from build output.
    pub warnings: Option<Vec<CompilationError>>,

    /// Aggregate test counts, when structured reports were available.
    pub summary: Option<TestSummary>,

    /// Processed test failures, when structured reports were available.
    pub failures: Option<Vec<TestFailure>>,

    /// Tail of the captured raw output, for runs with no structured data.
    pub raw_output_tail: Option<String>,

    /// Advisory note surfaced to the reader (e.g. which phases were skipped).
    pub note: Option<String>,
}

impl BuildResult {
    /// Create a result with all optional sections absent.
    pub fn new(status: BuildStatus, duration_ms: u64) -> Self {
        Self {
            status,
            duration_ms,
            errors: None,
            warnings: None,
            summary: None,
            failures: None,
            raw_output_tail: None,
            note: None,
        }
    }

    /// Attach compilation errors.
    pub fn with_errors(mut self, errors: Vec<CompilationError>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Attach compilation warnings.
    pub fn with_warnings(mut self, warnings: Vec<CompilationError>) -> Self {
        self.warnings = Some(warnings);
        self
    }

    /// Attach an aggregate test summary.
    pub fn with_summary(mut self, summary: TestSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Attach processed test failures.
    pub fn with_failures(mut self, failures: Vec<TestFailure>) -> Self {
        self.failures = Some(failures);
        self
    }

    /// Attach the raw output tail.
    pub fn with_raw_output_tail(mut self, tail: impl Into<String>) -> Self {
        self.raw_output_tail = Some(tail.into());
        self
    }

    /// Attach an advisory note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
