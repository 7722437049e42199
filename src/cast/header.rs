use std::fs::File;
use std::io::{BufRead as _, BufReader};
use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::foundation::error::{DemoError, DemoResult};

/// First line of an asciicast recording (v2 `width`/`height`, v3 `term.cols`/`term.rows`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CastHeader {
    /// Format version.
    pub version: u8,
    /// Terminal columns (v2).
    #[serde(default)]
    pub width: Option<u32>,
    /// Terminal rows (v2).
    #[serde(default)]
    pub height: Option<u32>,
    /// Terminal description (v3).
    #[serde(default)]
    pub term: Option<TermInfo>,
    /// Recording title.
    #[serde(default)]
    pub title: Option<String>,
    /// Total duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// `term` object of a v3 header.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TermInfo {
    /// Terminal columns.
    #[serde(default)]
    pub cols: Option<u32>,
    /// Terminal rows.
    #[serde(default)]
    pub rows: Option<u32>,
}

impl CastHeader {
    /// Parse a header line.
    pub fn parse(line: &str) -> DemoResult<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(DemoError::cast("recording has no header line"));
        }
        serde_json::from_str(line)
            .map_err(|e| DemoError::cast(format!("invalid header line: {e}")))
    }

    /// Read and parse only the first line of the recording at `path`.
    pub fn read_from(path: &Path) -> DemoResult<Self> {
        let f = File::open(path).with_context(|| format!("open recording '{}'", path.display()))?;
        let mut line = String::new();
        BufReader::new(f)
            .read_line(&mut line)
            .with_context(|| format!("read header of '{}'", path.display()))?;
        Self::parse(&line)
    }

    /// Terminal `(cols, rows)` if the header records both.
    pub fn terminal_size(&self) -> Option<(u32, u32)> {
        let cols = self.width.or(self.term.as_ref().and_then(|t| t.cols))?;
        let rows = self.height.or(self.term.as_ref().and_then(|t| t.rows))?;
        Some((cols, rows))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cast/header.rs"]
mod tests;
