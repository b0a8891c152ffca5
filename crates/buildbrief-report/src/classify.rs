//! Frame classification: application vs framework vs structural lines.
//!
//! Small pure predicates kept separate from the compaction loop so the
//! structural-line policy can grow (additional VM marker formats) without
//! touching the truncation algorithm.

/// Check whether a stack frame line belongs to the application package.
///
/// With no `app_package` configured, every line counts as application (no
/// filtering). Otherwise a frame like `"\tat com.example.Foo.method(Foo.java:42)"`
/// is an application frame iff the qualified name after `at ` starts with the
/// prefix. Marker lines such as `"\t... 42 more"` are never application
/// frames when filtering is active.
pub fn is_application_frame(line: &str, app_package: Option<&str>) -> bool {
    let Some(prefix) = app_package.filter(|p| !p.trim().is_empty()) else {
        return true;
    };
    match line.trim().strip_prefix("at ") {
        Some(qualified) => qualified.starts_with(prefix),
        None => false,
    }
}

/// Check whether a line is a structural marker that must survive collapsing.
///
/// Structural lines carry information the VM itself inserted: `Suppressed:`
/// headers, `... N more` shared-frame elision markers, and `Caused by:`
/// headers indented inside a suppressed block. Dropping them would silently
/// lose which exception produced how many omitted frames.
pub fn is_structural_line(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    let stripped = line.trim();
    if stripped.starts_with("Suppressed:") {
        return true;
    }
    if stripped.starts_with("... ") && stripped.ends_with(" more") {
        return true;
    }
    // Indented "Caused by:" lives inside a suppressed block; a top-level one
    // (no leading whitespace) is a segment boundary, not a frame.
    stripped.starts_with("Caused by:")
        && line.chars().next().is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_PACKAGE: Option<&str> = Some("io.example.app");

    #[test]
    fn test_application_frame_matches_prefix() {
        assert!(is_application_frame(
            "\tat io.example.app.tool.Runner.execute(Runner.java:42)",
            APP_PACKAGE
        ));
        assert!(!is_application_frame(
            "\tat org.springframework.test.TestRunner.run(TestRunner.java:10)",
            APP_PACKAGE
        ));
    }

    #[test]
    fn test_elision_marker_is_never_application() {
        assert!(!is_application_frame("\t... 42 more", APP_PACKAGE));
    }

    #[test]
    fn test_no_package_means_no_filtering() {
        let frame = "\tat org.springframework.test.TestRunner.run(TestRunner.java:10)";
        assert!(is_application_frame(frame, None));
        assert!(is_application_frame(frame, Some("")));
        assert!(is_application_frame(frame, Some("   ")));
    }

    #[test]
    fn test_suppressed_header_is_structural() {
        assert!(is_structural_line(
            "\tSuppressed: java.lang.Exception: cleanup failed"
        ));
    }

    #[test]
    fn test_elision_marker_is_structural() {
        assert!(is_structural_line("\t\t... 3 more"));
    }

    #[test]
    fn test_indented_caused_by_is_structural() {
        assert!(is_structural_line(
            "\t\tCaused by: java.lang.RuntimeException: inner"
        ));
    }

    #[test]
    fn test_top_level_caused_by_is_not_structural() {
        assert!(!is_structural_line("Caused by: java.lang.Exception: root"));
    }

    #[test]
    fn test_ordinary_frame_is_not_structural() {
        assert!(!is_structural_line(
            "\tat org.framework.Runner.execute(Runner.java:50)"
        ));
    }

    #[test]
    fn test_empty_line_is_not_structural() {
        assert!(!is_structural_line(""));
    }
}
