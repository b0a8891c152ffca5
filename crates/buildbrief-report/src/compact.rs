//! Size-bounded stack trace compaction.
//!
//! Collapses consecutive framework frames into omission markers, caps the
//! number of application frames shown for the root-cause segment, and
//! enforces a hard line budget that never hides which exception is the root
//! cause.

use crate::classify::{is_application_frame, is_structural_line};
use crate::segment::{parse_segments, Segment};

/// Application frames kept from the root-cause segment when filtering.
const ROOT_CAUSE_APP_FRAMES: usize = 10;

/// Marker inserted when the hard cap cuts away the intermediate chain.
const TRUNCATION_MARKER: &str = "\t... (intermediate frames truncated)";

/// Compact a stack trace.
///
/// Returns `None` for absent or blank input. `app_package` enables framework
/// collapsing (absent or blank keeps every frame); `max_lines` is a hard cap
/// on output lines, with 0 disabling the cap. The root-cause header survives
/// any cap of at least 3 lines.
pub fn compact_trace(
    trace: Option<&str>,
    app_package: Option<&str>,
    max_lines: usize,
) -> Option<String> {
    let trace = trace?.trim();
    if trace.is_empty() {
        return None;
    }

    let filter = app_package.is_some_and(|p| !p.trim().is_empty());
    let segments = parse_segments(trace);
    let mut out: Vec<String> = Vec::new();

    match segments.as_slice() {
        [] => return Some(trace.to_string()),
        [only] => {
            // Simple trace with no cause chain: collapse, no root-cause cap
            out.push(only.header.clone());
            push_collapsed(&mut out, &only.frames, app_package, filter);
        }
        [top, middle @ .., root] => {
            out.push(top.header.clone());
            push_collapsed(&mut out, &top.frames, app_package, filter);

            for seg in middle {
                out.push(seg.header.clone());
                push_collapsed(&mut out, &seg.frames, app_package, filter);
            }

            out.push(root.header.clone());
            push_root_cause(&mut out, &root.frames, app_package, filter);
        }
    }

    if max_lines > 0 && out.len() > max_lines {
        out = apply_hard_cap(out, &segments, max_lines);
    }

    Some(out.join("\n"))
}

/// Emit frames, collapsing each consecutive run of framework frames into one
/// `"... N framework frames omitted"` marker.
fn push_collapsed(out: &mut Vec<String>, frames: &[String], app_package: Option<&str>, filter: bool) {
    if !filter {
        out.extend(frames.iter().cloned());
        return;
    }

    let mut framework = 0usize;
    for frame in frames {
        if is_structural_line(frame) || is_application_frame(frame, app_package) {
            flush_omitted(out, &mut framework);
            out.push(frame.clone());
        } else {
            framework += 1;
        }
    }
    flush_omitted(out, &mut framework);
}

/// Emit root-cause frames: up to [`ROOT_CAUSE_APP_FRAMES`] application frames
/// are shown, further ones count into the omission markers alongside the
/// framework frames. Structural lines are exempt from the cap.
fn push_root_cause(out: &mut Vec<String>, frames: &[String], app_package: Option<&str>, filter: bool) {
    if !filter {
        out.extend(frames.iter().cloned());
        return;
    }

    let mut app_frames = 0usize;
    let mut framework = 0usize;
    for frame in frames {
        if is_structural_line(frame) {
            flush_omitted(out, &mut framework);
            out.push(frame.clone());
        } else if is_application_frame(frame, app_package) && app_frames < ROOT_CAUSE_APP_FRAMES {
            flush_omitted(out, &mut framework);
            out.push(frame.clone());
            app_frames += 1;
        } else {
            framework += 1;
        }
    }
    flush_omitted(out, &mut framework);
}

fn flush_omitted(out: &mut Vec<String>, framework: &mut usize) {
    if *framework > 0 {
        out.push(format!("\t... {framework} framework frames omitted"));
        *framework = 0;
    }
}

/// Truncate the compacted output to `max_lines` while keeping the root cause
/// visible.
///
/// Two states: when the root-cause header already sits within the cap, a
/// plain prefix truncation keeps it. When it would fall beyond the cap, a
/// 3-line skeleton (top-level header, truncation marker, root-cause header)
/// is synthesized and filled with as many root-cause lines as fit.
fn apply_hard_cap(mut lines: Vec<String>, segments: &[Segment], max_lines: usize) -> Vec<String> {
    let root = match segments.split_last() {
        Some((root, rest)) if !rest.is_empty() => root,
        _ => {
            // Simple trace: plain prefix truncation
            lines.truncate(max_lines);
            return lines;
        }
    };

    let header_idx = lines.iter().rposition(|line| line == &root.header);
    if let Some(idx) = header_idx {
        if idx < max_lines.saturating_sub(1) {
            lines.truncate(max_lines);
            return lines;
        }
    }

    let mut result = Vec::with_capacity(max_lines);
    if let Some(first) = lines.first() {
        result.push(first.clone());
    }
    result.push(TRUNCATION_MARKER.to_string());
    result.push(root.header.clone());

    let start = header_idx.map_or(lines.len(), |idx| idx + 1);
    let remaining = max_lines.saturating_sub(3);
    result.extend(lines[start..].iter().take(remaining).cloned());
    result
}
