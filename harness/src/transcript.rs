//! Trace transcript files.
//!
//! A recorded trace is written as a JSONL file (one event per line, the
//! deterministic rendering from `pathwise_search::trace_render`) next to a
//! small JSON manifest carrying the digest. Two identical runs produce
//! byte-identical transcript files and equal digests.

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pathwise_search::contract::State;
use pathwise_search::trace::TraceEvent;
use pathwise_search::trace_render::{render_trace_lines, trace_digest};

/// What was written and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSummary {
    /// Path of the JSONL event file.
    pub events_path: PathBuf,
    /// Path of the manifest file.
    pub manifest_path: PathBuf,
    /// Number of event lines written.
    pub lines: usize,
    /// SHA-256 digest of the rendered lines, lowercase hex.
    pub digest: String,
}

/// Write `events` under `dir` as `<name>.jsonl` plus `<name>.manifest.json`.
///
/// # Errors
///
/// Returns the underlying I/O error if either file cannot be written.
pub fn write_transcript<S: State + Display>(
    dir: &Path,
    name: &str,
    events: &[TraceEvent<S>],
) -> io::Result<TranscriptSummary> {
    let lines = render_trace_lines(events);
    let digest = trace_digest(&lines);

    let events_path = dir.join(format!("{name}.jsonl"));
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(&events_path, body)?;

    let manifest = serde_json::json!({
        "digest": digest,
        "lines": lines.len(),
        "name": name,
        "schema_version": "trace_transcript.v1",
    });
    let manifest_path = dir.join(format!("{name}.manifest.json"));
    fs::write(&manifest_path, manifest.to_string())?;

    Ok(TranscriptSummary {
        events_path,
        manifest_path,
        lines: lines.len(),
        digest,
    })
}
