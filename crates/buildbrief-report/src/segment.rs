//! Cause-chain segmentation of raw stack traces.

/// One exception level in a cause chain: a header line plus its frame lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Raw line introducing the exception: the top-level exception line, or
    /// a `Caused by:` line at column 0.
    pub header: String,

    /// Frame lines belonging to this exception, in input order.
    pub frames: Vec<String>,
}

/// Split a stack trace into segments.
///
/// The first line is always the header of segment 0, regardless of content.
/// A later line starting with `Caused by:` at zero indentation opens a new
/// segment. Indented occurrences (inside `Suppressed:` blocks) stay ordinary
/// frame lines of the enclosing segment; [`crate::classify::is_structural_line`]
/// relies on this invariant to preserve those headers during collapsing.
/// Non-blank input always yields at least one segment.
pub fn parse_segments(trace: &str) -> Vec<Segment> {
    let mut lines = trace.lines();
    let Some(first) = lines.next() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut current = Segment {
        header: first.to_string(),
        frames: Vec::new(),
    };

    for line in lines {
        if line.starts_with("Caused by:") {
            segments.push(std::mem::replace(
                &mut current,
                Segment {
                    header: line.to_string(),
                    frames: Vec::new(),
                },
            ));
        } else {
            current.frames.push(line.to_string());
        }
    }
    segments.push(current);

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_segments() {
        assert!(parse_segments("").is_empty());
    }

    #[test]
    fn test_single_segment() {
        let trace = "java.lang.AssertionError: boom\n\
                     \tat com.example.Foo.bar(Foo.java:10)\n\
                     \tat com.example.Baz.qux(Baz.java:20)";
        let segments = parse_segments(trace);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].header, "java.lang.AssertionError: boom");
        assert_eq!(segments[0].frames.len(), 2);
    }

    #[test]
    fn test_first_line_is_header_regardless_of_content() {
        // Even a line that looks like a frame becomes the header
        let segments = parse_segments("\tat com.example.Foo.bar(Foo.java:10)");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].header, "\tat com.example.Foo.bar(Foo.java:10)");
        assert!(segments[0].frames.is_empty());
    }

    #[test]
    fn test_caused_by_opens_new_segment() {
        let trace = "java.lang.RuntimeException: outer\n\
                     \tat com.example.A.a(A.java:1)\n\
                     Caused by: java.io.IOException: inner\n\
                     \tat com.example.B.b(B.java:2)\n\
                     Caused by: java.net.ConnectException: root\n\
                     \tat com.example.C.c(C.java:3)";
        let segments = parse_segments(trace);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].header, "java.lang.RuntimeException: outer");
        assert_eq!(segments[1].header, "Caused by: java.io.IOException: inner");
        assert_eq!(
            segments[2].header,
            "Caused by: java.net.ConnectException: root"
        );
        assert_eq!(segments[2].frames, vec!["\tat com.example.C.c(C.java:3)"]);
    }

    #[test]
    fn test_indented_caused_by_stays_a_frame_line() {
        let trace = "java.lang.Exception: main\n\
                     \tSuppressed: java.lang.Exception: sup\n\
                     \t\tCaused by: java.lang.RuntimeException: inner\n\
                     \t\t\tat com.example.IO.sync(IO.java:100)";
        let segments = parse_segments(trace);

        assert_eq!(segments.len(), 1);
        assert!(segments[0]
            .frames
            .contains(&"\t\tCaused by: java.lang.RuntimeException: inner".to_string()));
    }

    #[test]
    fn test_order_preserved_across_segments() {
        let trace = "top\nframe1\nCaused by: mid\nframe2\nCaused by: root\nframe3";
        let segments = parse_segments(trace);

        let headers: Vec<&str> = segments.iter().map(|s| s.header.as_str()).collect();
        assert_eq!(headers, vec!["top", "Caused by: mid", "Caused by: root"]);
    }
}
