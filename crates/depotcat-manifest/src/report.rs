use crate::{header, table, DepotHeader, FileEntry, ReportError};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A fully parsed depot report: normalized header plus the ordered file
/// listing with directory placeholders already dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepotReport {
    pub header: DepotHeader,
    pub entries: Vec<FileEntry>,
}

/// Parses a whole report document. The document is held in memory; the
/// format is line-positional, so there is nothing to stream.
pub fn parse_report_str(input: &str) -> Result<DepotReport, ReportError> {
    let lines: Vec<&str> = input.lines().collect();
    let header = header::parse_header(&lines)?;
    let entries = table::parse_table(&lines)?;
    debug!(
        "parsed report for depot {}: {} qualifying entries",
        header.depot_id,
        entries.len()
    );
    Ok(DepotReport { header, entries })
}

pub fn parse_report_file(path: impl AsRef<Path>) -> Result<DepotReport, ReportError> {
    let content = fs::read_to_string(path)?;
    parse_report_str(&content)
}
