//! Depot manifest report parsing and normalization for depotcat.
//!
//! A depot manifest report is a fixed-layout text document produced by the
//! depot downloader: a header block of seven scalar fields followed by a
//! tabular file listing. This crate turns one document into a [`DepotReport`]:
//! a normalized [`DepotHeader`] plus the ordered list of qualifying
//! [`FileEntry`] rows. The line-position contract lives in [`layout`], the
//! scalar extraction in [`header`], and the row extraction in [`table`].

pub mod header;
pub mod layout;
pub mod report;
pub mod table;

pub use header::{parse_header, DepotHeader};
pub use layout::{classify, LineField, TABLE_HEADER_LINE, TABLE_START};
pub use report::{parse_report_file, parse_report_str, DepotReport};
pub use table::{parse_table, FileEntry};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line} does not match the expected {expected} field")]
    MalformedHeaderLine { line: usize, expected: &'static str },
    #[error("report is truncated: missing {expected} at line {line}")]
    Truncated { line: usize, expected: &'static str },
    #[error("unparseable manifest date '{0}'")]
    MalformedDate(String),
    #[error("table header row is missing or has unexpected columns")]
    MalformedTableHeader,
    #[error("no file entries found past the table header")]
    EmptyTable,
}
