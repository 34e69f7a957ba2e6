use crate::Result;
use crate::perflog::{PerfRow, PerfTable};
use crate::perflog::unit::SizeUnit;

use anyhow::Context;
use regex::Regex;
use std::fs;

// Capture:
// 1) size literal: integer or decimal
// 2) size unit: optional k/m/g in either case
// -) two descriptor columns, skipped (e.g. "float sum")
// 3) bus bandwidth (GB/s)
// 4) average latency (us)
// Only the start is anchored; anything after the latency column is ignored.
// Digits are ASCII only so every capture parses as f64.
const PERF_LINE_RE: &str = r#"^\s*([0-9]+(?:\.[0-9]+)?)([kKmMgG]?)\s+\S+\s+\S+\s+([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)"#;

/// Matches nccl-tests result lines and turns them into rows.
pub struct LineParser {
    re: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(PERF_LINE_RE)?,
        })
    }

    /// Returns `None` for any line that is not a result row.
    pub fn parse_line(&self, line: &str) -> Option<PerfRow> {
        let caps = self.re.captures(line)?;

        let size: f64 = caps.get(1)?.as_str().parse().ok()?;
        let unit = SizeUnit::from_suffix(caps.get(2).map_or("", |m| m.as_str()))?;
        let bus_bw_gbs: f64 = caps.get(3)?.as_str().parse().ok()?;
        let avg_lat_us: f64 = caps.get(4)?.as_str().parse().ok()?;

        Some(PerfRow {
            msg_bytes: unit.to_bytes(size),
            bus_bw_gbs,
            avg_lat_us,
        })
    }

    /// Collect every matching line of `text`, in order.
    pub fn parse_text(&self, text: &str) -> PerfTable {
        let mut table = PerfTable::default();
        let mut skipped = 0usize;

        for (lineno, line) in split_lines(text).enumerate() {
            match self.parse_line(line) {
                Some(row) => table.rows.push(row),
                None => {
                    if !line.trim().is_empty() {
                        log::debug!("skip line {}: {:?}", lineno + 1, line);
                    }
                    skipped += 1;
                }
            }
        }

        log::debug!("matched {} lines, skipped {}", table.len(), skipped);
        table
    }
}

/// Parse an nccl-tests log file into a table of result rows.
///
/// Example result line (size, dtype, redop, busbw, avg latency):
///       131072K        float     sum       450.1      291.0
pub fn parse_log_file(path: &str) -> Result<PerfTable> {
    let bytes = fs::read(path).with_context(|| format!("read log file {}", path))?;
    let text = decode_lossy(bytes);

    let parser = LineParser::new()?;
    Ok(parser.parse_text(&text))
}

/// Split on `\n`, `\r\n` and lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .flat_map(|l| l.split('\r'))
}

/// Decode UTF-8, dropping byte sequences that are not valid.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let mut dropped = 0usize;
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
                dropped += chunk.invalid().len();
            }
            log::debug!("log is not valid UTF-8; dropped {} undecodable bytes", dropped);
            text
        }
    }
}
