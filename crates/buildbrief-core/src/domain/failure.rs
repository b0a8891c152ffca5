//! Test failure records.

use serde::{Deserialize, Serialize};

/// One failing (or errored) test, as supplied by the structured-report
/// collaborator and transformed by the pipeline.
///
/// Pipeline stages never mutate a failure in place: trace compaction and
/// group merging each produce a new value via the `with_*` methods, keeping
/// every stage referentially transparent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestFailure {
    /// Fully qualified test class name.
    pub test_class: String,

    /// Test method name, or a merged summary after deduplication.
    pub test_method: Option<String>,

    /// Failure message, usually pre-truncated by the report parser.
    pub message: Option<String>,

    /// Stack trace text; replaced with its compacted form by the pipeline.
    pub stack_trace: Option<String>,

    /// Captured stdout/stderr from the failing test.
    pub test_output: Option<String>,
}

impl TestFailure {
    /// Create a failure with only the class name set.
    pub fn new(test_class: impl Into<String>) -> Self {
        Self {
            test_class: test_class.into(),
            test_method: None,
            message: None,
            stack_trace: None,
            test_output: None,
        }
    }

    /// Set the test method name.
    pub fn with_method(mut self, test_method: impl Into<String>) -> Self {
        self.test_method = Some(test_method.into());
        self
    }

    /// Set the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replace the stack trace, possibly clearing it.
    pub fn with_stack_trace(mut self, stack_trace: Option<String>) -> Self {
        self.stack_trace = stack_trace;
        self
    }

    /// Replace the captured test output, possibly clearing it.
    pub fn with_test_output(mut self, test_output: Option<String>) -> Self {
        self.test_output = test_output;
        self
    }
}
