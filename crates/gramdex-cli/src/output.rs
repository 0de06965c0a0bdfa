//! Output formatting for the gramdex CLI.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use gramdex_core::{extract_ngram_bytes, Fingerprint, Item, NgramLength, NgramStats};
use serde::Serialize;
use serde_json::Value;

use crate::load::LoadStats;

/// Output format option
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One extracted window, as shown by `gramdex ngrams`.
#[derive(Debug, Serialize)]
pub struct NgramRow {
    pub offset: usize,
    pub window: String,
    pub fingerprint: Fingerprint,
}

/// Extracts the rows shown by `gramdex ngrams`.
pub fn ngram_rows(text: &str, n: NgramLength) -> Vec<NgramRow> {
    extract_ngram_bytes(text, n)
        .enumerate()
        .map(|(offset, window)| NgramRow {
            offset,
            window: window.escape_ascii().to_string(),
            fingerprint: Fingerprint::from_bytes(window),
        })
        .collect()
}

fn new_table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

fn payload_text(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Print ranked search results in the specified format
pub fn print_results(results: &[Item<Value>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
        OutputFormat::Table => {
            if results.is_empty() {
                println!("{}", "No results.".dimmed());
                return Ok(());
            }
            let mut table = new_table(&["rank", "key", "matches", "payload"]);
            for (rank, item) in results.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(rank + 1),
                    Cell::new(item.key),
                    Cell::new(item.match_count),
                    Cell::new(payload_text(&item.payload)),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

/// Print the n-gram windows of a text
pub fn print_ngrams(rows: &[NgramRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "Text is shorter than the n-gram length.".dimmed());
                return Ok(());
            }
            let mut table = new_table(&["offset", "window", "fingerprint"]);
            for row in rows {
                table.add_row(vec![
                    Cell::new(row.offset),
                    Cell::new(format!("\"{}\"", row.window)),
                    Cell::new(row.fingerprint.as_str()),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

/// Print load and index statistics
pub fn print_info(load: &LoadStats, stats: &NgramStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "lines": load.total,
                "loaded": load.loaded,
                "skipped": load.skipped,
                "duration_ms": load.duration_ms,
                "index": stats,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("{}", "Index Summary".green().bold());
            println!("  Items:            {}", stats.item_count);
            println!("  Skipped:          {}", load.skipped);
            println!("  N-gram length:    {}", stats.ngram_length);
            println!("  Distinct n-grams: {}", stats.ngram_count);
            println!("  Postings:         {}", stats.posting_count);
            println!("  Load time:        {} ms", load.duration_ms);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_rows_escape_windows() {
        let n = NgramLength::new(2).unwrap();

        let rows = ngram_rows("a\tb", n);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].window, "a\\t");
        assert_eq!(rows[1].offset, 1);
        assert_eq!(rows[1].fingerprint.decode().unwrap(), b"\tb");
    }

    #[test]
    fn test_payload_text_unquotes_strings() {
        assert_eq!(payload_text(&Value::String("x".into())), "x");
        assert_eq!(payload_text(&Value::Null), "-");
        assert_eq!(payload_text(&serde_json::json!({"a": 1})), "{\"a\":1}");
    }
}
