use crate::layout::{TABLE_HEADER_LINE, TABLE_START};
use crate::ReportError;
use serde::Serialize;
use tracing::debug;

/// Column sequence the header row must carry, whitespace-collapsed.
const TABLE_COLUMNS: &str = "Size Chunks File SHA Flags Name";

/// One qualifying row of the file listing.
///
/// The first four columns are strictly delimited tokens; `name` is the rest
/// of the line and may contain internal spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub size: u64,
    pub chunks: u64,
    pub hash: String,
    pub flags: u32,
    pub name: String,
}

/// Parses the file listing: validates the column-header row, then extracts
/// every qualifying row in source order.
///
/// Directory placeholders (size 0) and rows that fail the token pattern are
/// skipped with a debug log. A listing with no qualifying rows at all is a
/// corrupt or incompatible manifest and fails the parse.
pub fn parse_table(lines: &[&str]) -> Result<Vec<FileEntry>, ReportError> {
    let header = lines
        .get(TABLE_HEADER_LINE)
        .ok_or(ReportError::MalformedTableHeader)?;
    let columns = header.split_whitespace().collect::<Vec<_>>().join(" ");
    if columns != TABLE_COLUMNS {
        return Err(ReportError::MalformedTableHeader);
    }

    let mut entries = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(TABLE_START) {
        let Some(entry) = parse_row(line) else {
            if !line.trim().is_empty() {
                debug!("skipping unrecognized table row at line {index}");
            }
            continue;
        };
        if entry.size == 0 {
            debug!("dropping directory placeholder '{}'", entry.name);
            continue;
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(ReportError::EmptyTable);
    }
    Ok(entries)
}

fn parse_row(line: &str) -> Option<FileEntry> {
    let (size, rest) = take_token(line)?;
    let (chunks, rest) = take_token(rest)?;
    let (hash, rest) = take_token(rest)?;
    let (flags, rest) = take_token(rest)?;
    let name = rest.trim();

    if !hash.bytes().all(|b| b.is_ascii_hexdigit()) || name.is_empty() {
        return None;
    }
    Some(FileEntry {
        size: parse_decimal(size)?,
        chunks: parse_decimal(chunks)?,
        hash: hash.to_owned(),
        flags: u32::try_from(parse_decimal(flags)?).ok()?,
        name: name.to_owned(),
    })
}

/// Splits the next whitespace-delimited token off the front of the line.
fn take_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}

/// Strict decimal parse: rejects signs and empty strings, unlike `str::parse`.
fn parse_decimal(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
