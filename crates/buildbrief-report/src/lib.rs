//! Buildbrief report - compacting build/test diagnostics.
//!
//! Turns verbose, redundant build output into compact summaries:
//! - Splits stack traces into cause-chain segments and collapses framework noise
//! - Deduplicates failures that share one root cause
//! - Renders a typed build result as a short textual report

pub mod classify;
pub mod compact;
pub mod config;
pub mod dedup;
pub mod pipeline;
pub mod render;
pub mod segment;

// Re-export key entry points
pub use compact::compact_trace;
pub use config::ReportConfig;
pub use dedup::deduplicate;
pub use pipeline::{process_failures, tail_output};
pub use render::render;
pub use segment::{parse_segments, Segment};
