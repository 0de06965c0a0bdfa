//! File loading for the gramdex CLI.
//!
//! Plain text files index one item per non-empty line; JSON Lines files carry
//! explicit keys and payloads.

use anyhow::{Context, Result};
use gramdex_core::{NgramIndex, NgramLength};
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// Source file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// One item per line, keyed by 0-based line number.
    Lines,
    /// One `{"key", "text", "payload"}` record per line.
    JsonLines,
}

impl SourceFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "jsonl" | "ndjson" => Self::JsonLines,
            _ => Self::Lines,
        }
    }
}

/// JSON Lines record structure
#[derive(Debug, Deserialize)]
struct JsonRecord {
    key: u64,
    text: String,
    #[serde(default)]
    payload: Option<Value>,
}

/// Load statistics
///
/// `total` counts every physical line read, blank lines included, and
/// `total == loaded + skipped` for both formats.
#[derive(Debug, Default)]
pub struct LoadStats {
    pub total: usize,
    pub loaded: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// Builds an index from a file, choosing the format by extension.
pub fn load_file(path: &Path, ngram_length: NgramLength) -> Result<(NgramIndex<Value>, LoadStats)> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    let mut index = NgramIndex::with_length(ngram_length);

    let start = Instant::now();
    let mut stats = match SourceFormat::from_path(path) {
        SourceFormat::Lines => load_lines(reader, &mut index)?,
        SourceFormat::JsonLines => load_jsonl(reader, &mut index)?,
    };
    stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(
        path = %path.display(),
        loaded = stats.loaded,
        skipped = stats.skipped,
        duration_ms = stats.duration_ms,
        "loaded index"
    );

    Ok((index, stats))
}

/// Calls `f` with each line's 0-based number and raw bytes, without the
/// trailing `\n` or `\r\n`. Lines are not required to be UTF-8.
fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[u8]),
{
    let mut buf = Vec::with_capacity(256);
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line {}", line_no + 1))?;
        if read == 0 {
            return Ok(());
        }

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        f(line_no, line);
        line_no += 1;
    }
}

/// Indexes every non-empty line; the payload is the line itself.
///
/// Invalid UTF-8 is replaced with U+FFFD and the line is still indexed.
pub fn load_lines<R: BufRead>(reader: R, index: &mut NgramIndex<Value>) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for_each_line(reader, |line_no, bytes| {
        stats.total += 1;

        if bytes.is_empty() {
            stats.skipped += 1;
            return;
        }

        let line = String::from_utf8_lossy(bytes);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!(line = line_no + 1, "line is not valid UTF-8, indexing lossy text");
        }

        index.add(line_no as u64, &line, Value::String(line.to_string()));
        stats.loaded += 1;
    })?;

    Ok(stats)
}

/// Indexes JSON Lines records; blank and malformed lines count as skipped.
pub fn load_jsonl<R: BufRead>(reader: R, index: &mut NgramIndex<Value>) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for_each_line(reader, |line_no, bytes| {
        stats.total += 1;

        if bytes.trim_ascii().is_empty() {
            stats.skipped += 1;
            return;
        }

        match serde_json::from_slice::<JsonRecord>(bytes) {
            Ok(record) => {
                let payload = record
                    .payload
                    .unwrap_or_else(|| Value::String(record.text.clone()));
                index.add(record.key, &record.text, payload);
                stats.loaded += 1;
            }
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "skipping malformed record");
                stats.skipped += 1;
            }
        }
    })?;

    Ok(stats)
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
