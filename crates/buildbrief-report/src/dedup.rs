//! Root-cause deduplication of test failures.
//!
//! A build where one shared dependency breaks produces dozens of failures
//! that differ only in per-instance noise. Grouping on a root-cause key
//! collapses them into one consolidated record.

use std::collections::HashMap;

use buildbrief_core::TestFailure;

/// Methods/classes listed before a merged summary switches to `(+K more)`.
const SUMMARY_THRESHOLD: usize = 3;

/// Separator between merged per-test outputs.
const TEST_OUTPUT_SEPARATOR: &str = "\n---\n";

/// Deduplicate failures that share one root cause, preserving first-seen
/// order.
///
/// Lists of length <= 1 and inputs where every key is unique pass through
/// unchanged. Groups of size 1 keep their member as-is; larger groups merge
/// into a single record carrying the first member's message and stack trace
/// plus summarized method/class lists and concatenated outputs.
pub fn deduplicate(failures: Vec<TestFailure>) -> Vec<TestFailure> {
    if failures.len() <= 1 {
        return failures;
    }

    let total = failures.len();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<TestFailure>> = Vec::new();
    for failure in failures {
        let key = root_cause_key(&failure);
        match index.get(&key) {
            Some(&slot) => groups[slot].push(failure),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![failure]);
            }
        }
    }

    if groups.len() == total {
        return groups.into_iter().flatten().collect();
    }

    groups
        .into_iter()
        .map(|mut group| {
            if group.len() == 1 {
                group.remove(0)
            } else {
                merge(&group)
            }
        })
        .collect()
}

/// Extract the dedup key for a failure: the deepest `Caused by:` line of its
/// stack trace, else the first line of its message, else the empty string.
///
/// Keying on the deepest cause makes grouping insensitive to per-instance
/// noise above the root cause (object-identity hashes, differing test class
/// names inside a shared context description) while still separating
/// failures whose true root causes differ.
pub fn root_cause_key(failure: &TestFailure) -> String {
    if let Some(trace) = failure.stack_trace.as_deref() {
        let deepest = trace
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("Caused by:"))
            .last();
        if let Some(cause) = deepest {
            return cause.to_string();
        }
    }
    if let Some(message) = failure.message.as_deref() {
        return message.lines().next().unwrap_or("").trim().to_string();
    }
    String::new()
}

/// Merge a group of failures sharing one root cause into a single record.
fn merge(group: &[TestFailure]) -> TestFailure {
    let Some(first) = group.first() else {
        // merge() is only called for groups of size > 1
        return TestFailure::new(String::new());
    };

    let methods: Vec<String> = group
        .iter()
        .map(|f| {
            f.test_method
                .clone()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .collect();
    let classes: Vec<String> = group.iter().map(|f| f.test_class.clone()).collect();
    let outputs: Vec<&str> = group
        .iter()
        .filter_map(|f| f.test_output.as_deref())
        .collect();

    TestFailure {
        test_class: summarize_distinct(&classes),
        test_method: Some(summarize(&methods)),
        message: first.message.clone(),
        stack_trace: first.stack_trace.clone(),
        test_output: if outputs.is_empty() {
            None
        } else {
            Some(outputs.join(TEST_OUTPUT_SEPARATOR))
        },
    }
}

/// Comma-join up to [`SUMMARY_THRESHOLD`] items, summarizing the rest.
fn summarize(items: &[String]) -> String {
    if items.len() <= SUMMARY_THRESHOLD {
        return items.join(", ");
    }
    format!(
        "{} (+{} more)",
        items[..SUMMARY_THRESHOLD].join(", "),
        items.len() - SUMMARY_THRESHOLD
    )
}

/// Summarize distinct entries in first-seen order, collapsing to the single
/// name when all entries match.
fn summarize_distinct(items: &[String]) -> String {
    let mut distinct: Vec<String> = Vec::new();
    for item in items {
        if !distinct.contains(item) {
            distinct.push(item.clone());
        }
    }
    if let [only] = distinct.as_slice() {
        return only.clone();
    }
    summarize(&distinct)
}
