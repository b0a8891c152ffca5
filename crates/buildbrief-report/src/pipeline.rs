//! Failure processing pipeline: compact traces, bound outputs, deduplicate.

use buildbrief_core::text::{clip_chars, tail_lines};
use buildbrief_core::TestFailure;
use tracing::debug;

use crate::compact::compact_trace;
use crate::config::ReportConfig;
use crate::dedup::deduplicate;

/// Process raw test failures into their compact, deduplicated form.
///
/// Each failure's stack trace is replaced by its compacted form, captured
/// test output is dropped or clipped per the config, and failures sharing
/// one root cause are merged. Every step replaces values rather than
/// mutating them, so the input list is consumed.
pub fn process_failures(failures: Vec<TestFailure>, config: &ReportConfig) -> Vec<TestFailure> {
    let before = failures.len();

    let processed: Vec<TestFailure> = failures
        .into_iter()
        .map(|failure| {
            let compacted = compact_trace(
                failure.stack_trace.as_deref(),
                config.app_package.as_deref(),
                config.stack_trace_lines,
            );
            let output = if config.include_test_logs {
                failure
                    .test_output
                    .as_deref()
                    .map(|o| clip_chars(o, config.test_output_limit).into_owned())
            } else {
                None
            };
            failure.with_stack_trace(compacted).with_test_output(output)
        })
        .collect();

    let deduplicated = deduplicate(processed);
    if deduplicated.len() < before {
        debug!(
            before,
            after = deduplicated.len(),
            "merged failures sharing a root cause"
        );
    }
    deduplicated
}

/// Bound raw build output to the configured tail, for use as
/// `BuildResult::raw_output_tail`. A blank tail becomes absent.
pub fn tail_output(output: &str, config: &ReportConfig) -> Option<String> {
    let tail = tail_lines(output, config.output_tail_lines);
    if tail.trim().is_empty() {
        None
    } else {
        Some(tail.to_string())
    }
}
