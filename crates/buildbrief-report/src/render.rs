//! Compact textual rendering of a typed build result.

use buildbrief_core::{BuildResult, CompilationError};

/// Render a build result as a compact report for a context-limited reader.
///
/// Sections appear in order: header line, compilation errors grouped by
/// file, test failures, raw output, optional note. The raw-output section is
/// emitted only when no structured errors or failures exist; structured data
/// always takes precedence over raw text.
pub fn render(result: &BuildResult, operation: &str) -> String {
    let mut out = String::new();
    push_header(&mut out, result, operation);
    push_errors(&mut out, result);
    push_failures(&mut out, result);
    push_raw_output(&mut out, result);
    push_note(&mut out, result);
    out.trim_end().to_string()
}

fn push_header(out: &mut String, result: &BuildResult, operation: &str) {
    out.push_str(&format!(
        "{} {} ({})",
        operation,
        result.status,
        format_duration(result.duration_ms)
    ));

    if let Some(summary) = &result.summary {
        out.push_str(&format!(
            " — {} run, {} failed",
            summary.tests_run, summary.tests_failed
        ));
        if summary.tests_skipped > 0 {
            out.push_str(&format!(", {} skipped", summary.tests_skipped));
        }
    } else if let Some(errors) = non_empty(&result.errors) {
        out.push_str(&format!(" — {}", pluralize(errors.len(), "error")));
    } else if let Some(warnings) = non_empty(&result.warnings) {
        out.push_str(&format!(" — {}", pluralize(warnings.len(), "warning")));
    }
}

fn push_errors(out: &mut String, result: &BuildResult) {
    let Some(errors) = non_empty(&result.errors) else {
        return;
    };

    // Group by file, preserving first-seen file order
    let mut by_file: Vec<(&str, Vec<&CompilationError>)> = Vec::new();
    for error in errors {
        match by_file.iter_mut().find(|(file, _)| *file == error.file) {
            Some((_, group)) => group.push(error),
            None => by_file.push((&error.file, vec![error])),
        }
    }

    for (file, group) in by_file {
        out.push_str(&format!("\n\n### {file}"));
        for error in group {
            out.push_str(&format!("\n- L{}", error.line));
            if let Some(column) = error.column {
                out.push_str(&format!(":{column}"));
            }
            out.push_str(&format!(" — {}", error.message));
        }
    }
}

fn push_failures(out: &mut String, result: &BuildResult) {
    let Some(failures) = non_empty(&result.failures) else {
        return;
    };

    for failure in failures {
        let class = short_class_name(&failure.test_class);
        let method = failure.test_method.as_deref().unwrap_or("unknown");
        out.push_str(&format!("\n\n### FAILED: {class}#{method}"));

        if let Some(message) = &failure.message {
            out.push('\n');
            out.push_str(message);
        }
        if let Some(trace) = present(&failure.stack_trace) {
            push_indented(out, trace);
        }
        if let Some(output) = present(&failure.test_output) {
            out.push_str("\n  Test output:");
            push_indented(out, output);
        }
    }
}

fn push_raw_output(out: &mut String, result: &BuildResult) {
    let Some(output) = present(&result.raw_output_tail) else {
        return;
    };
    // Structured sections already cover the run
    if non_empty(&result.errors).is_some() || non_empty(&result.failures).is_some() {
        return;
    }
    out.push('\n');
    push_indented(out, output);
}

fn push_note(out: &mut String, result: &BuildResult) {
    if let Some(note) = present(&result.note) {
        out.push_str(&format!("\n\n> {note}"));
    }
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.split('\n') {
        out.push_str("\n  ");
        out.push_str(line);
    }
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    match list {
        Some(items) if !items.is_empty() => Some(items),
        _ => None,
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Seconds with one decimal digit, rounding half-up on the millisecond value
/// (integer math; float formatting rounds the binary value instead).
fn format_duration(millis: u64) -> String {
    let tenths = (millis + 50) / 100;
    format!("{}.{}s", tenths / 10, tenths % 10)
}

fn short_class_name(qualified: &str) -> &str {
    if qualified.is_empty() {
        return "Unknown";
    }
    qualified.rsplit('.').next().unwrap_or(qualified)
}
