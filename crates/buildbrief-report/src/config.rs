//! Per-invocation configuration for failure processing.

use serde::{Deserialize, Serialize};

/// Default hard cap on compacted stack trace lines per failure.
pub const DEFAULT_STACK_TRACE_LINES: usize = 50;

/// Default per-test character limit for captured output.
pub const DEFAULT_TEST_OUTPUT_LIMIT: usize = 2000;

/// Configuration for one report-processing invocation.
///
/// The front end derives `app_package` once per invocation (e.g. from
/// project metadata) and it applies uniformly to every failure in the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Hard cap on compacted stack trace lines per failure (0 = no cap).
    pub stack_trace_lines: usize,

    /// Application package prefix for frame classification (None = keep all).
    pub app_package: Option<String>,

    /// Whether captured stdout/stderr from failing tests is kept.
    pub include_test_logs: bool,

    /// Per-test character limit for captured output (0 = no limit).
    pub test_output_limit: usize,

    /// Lines kept from the tail of raw build output.
    pub output_tail_lines: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stack_trace_lines: DEFAULT_STACK_TRACE_LINES,
            app_package: None,
            include_test_logs: true,
            test_output_limit: DEFAULT_TEST_OUTPUT_LIMIT,
            output_tail_lines: buildbrief_core::text::DEFAULT_OUTPUT_TAIL_LINES,
        }
    }
}

impl ReportConfig {
    /// Set the application package prefix.
    pub fn with_app_package(mut self, app_package: impl Into<String>) -> Self {
        self.app_package = Some(app_package.into());
        self
    }

    /// Drop captured test output from processed failures.
    pub fn without_test_logs(mut self) -> Self {
        self.include_test_logs = false;
        self
    }
}
