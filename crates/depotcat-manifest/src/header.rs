use crate::layout::{classify, LineField, TABLE_HEADER_LINE};
use crate::ReportError;
use chrono::NaiveDateTime;
use serde::Serialize;

const DEPOT_ID_LABEL: &str = "Content Manifest for Depot";
const MANIFEST_ID_DATE_LABEL: &str = "Manifest ID / date";
const FILE_COUNT_LABEL: &str = "Total number of files";
const CHUNK_COUNT_LABEL: &str = "Total number of chunks";
const BYTES_DISK_LABEL: &str = "Total bytes on disk";
const BYTES_COMPRESSED_LABEL: &str = "Total bytes compressed";

/// Date shapes observed in the `Manifest ID / date` line.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%d %b %Y %H:%M:%S"];

/// The seven scalar fields of a depot report's header block.
///
/// Ids stay as captured text (they can exceed what downstream JSON readers
/// handle as numbers); `manifest_date` is normalized to ISO-8601 with an
/// explicit `+00:00` offset. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotHeader {
    pub depot_id: String,
    pub manifest_id: String,
    pub manifest_date: String,
    pub num_files: u64,
    pub num_chunks: u64,
    pub bytes_disk: u64,
    pub bytes_compressed: u64,
}

/// Extracts the header block from the report's leading lines.
///
/// Every field is required; a line that fails its pattern is a structural
/// corruption signal and fails the whole parse.
pub fn parse_header(lines: &[&str]) -> Result<DepotHeader, ReportError> {
    let mut depot_id = None;
    let mut manifest_id = None;
    let mut manifest_date = None;
    let mut num_files = None;
    let mut num_chunks = None;
    let mut bytes_disk = None;
    let mut bytes_compressed = None;

    for index in 0..TABLE_HEADER_LINE {
        let field = classify(index);
        if field == LineField::Blank {
            continue;
        }
        let expected = field_name(field);
        let line = *lines.get(index).ok_or(ReportError::Truncated {
            line: index,
            expected,
        })?;
        let malformed = || ReportError::MalformedHeaderLine {
            line: index,
            expected,
        };

        match field {
            LineField::DepotId => {
                depot_id = Some(trailing_decimal(line, DEPOT_ID_LABEL).ok_or_else(malformed)?);
            }
            LineField::ManifestIdDate => {
                let (id, date) = id_and_date(line).ok_or_else(malformed)?;
                manifest_date = Some(normalize_date(&date)?);
                manifest_id = Some(id);
            }
            LineField::FileCount => {
                num_files = Some(labeled_count(line, FILE_COUNT_LABEL).ok_or_else(malformed)?);
            }
            LineField::ChunkCount => {
                num_chunks = Some(labeled_count(line, CHUNK_COUNT_LABEL).ok_or_else(malformed)?);
            }
            LineField::BytesDisk => {
                bytes_disk = Some(labeled_count(line, BYTES_DISK_LABEL).ok_or_else(malformed)?);
            }
            LineField::BytesCompressed => {
                bytes_compressed =
                    Some(labeled_count(line, BYTES_COMPRESSED_LABEL).ok_or_else(malformed)?);
            }
            LineField::TableHeader | LineField::TableRow | LineField::Blank => continue,
        }
    }

    // The loop either filled all seven fields or already returned an error.
    match (
        depot_id,
        manifest_id,
        manifest_date,
        num_files,
        num_chunks,
        bytes_disk,
        bytes_compressed,
    ) {
        (
            Some(depot_id),
            Some(manifest_id),
            Some(manifest_date),
            Some(num_files),
            Some(num_chunks),
            Some(bytes_disk),
            Some(bytes_compressed),
        ) => Ok(DepotHeader {
            depot_id,
            manifest_id,
            manifest_date,
            num_files,
            num_chunks,
            bytes_disk,
            bytes_compressed,
        }),
        _ => Err(ReportError::Truncated {
            line: TABLE_HEADER_LINE,
            expected: "header block",
        }),
    }
}

fn field_name(field: LineField) -> &'static str {
    match field {
        LineField::DepotId => "depot id",
        LineField::ManifestIdDate => "manifest id / date",
        LineField::FileCount => "file count",
        LineField::ChunkCount => "chunk count",
        LineField::BytesDisk => "bytes on disk",
        LineField::BytesCompressed => "bytes compressed",
        LineField::TableHeader => "table header",
        LineField::TableRow => "table row",
        LineField::Blank => "blank",
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `<label> <decimal>` with no separator, e.g. the depot id line.
fn trailing_decimal(line: &str, label: &str) -> Option<String> {
    let value = line.strip_prefix(label)?.trim();
    is_decimal(value).then(|| value.to_owned())
}

/// `<label> : <decimal>` count and byte fields.
fn labeled_count(line: &str, label: &str) -> Option<u64> {
    let (lhs, value) = line.split_once(':')?;
    if lhs.trim() != label {
        return None;
    }
    let value = value.trim();
    if !is_decimal(value) {
        return None;
    }
    value.parse().ok()
}

/// `<label> : <decimal id> / <free-text date>`. Only the first `:` and the
/// first `/` of the value delimit, so the date may contain either character.
fn id_and_date(line: &str) -> Option<(String, String)> {
    let (lhs, value) = line.split_once(':')?;
    if lhs.trim() != MANIFEST_ID_DATE_LABEL {
        return None;
    }
    let (id, date) = value.split_once('/')?;
    let id = id.trim();
    let date = date.trim();
    (is_decimal(id) && !date.is_empty()).then(|| (id.to_owned(), date.to_owned()))
}

/// Normalizes the report's free-text date to `YYYY-MM-DDTHH:MM:SS+00:00`.
fn normalize_date(raw: &str) -> Result<String, ReportError> {
    for fmt in DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(format!("{}+00:00", parsed.format("%Y-%m-%dT%H:%M:%S")));
        }
    }
    Err(ReportError::MalformedDate(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lines() -> Vec<&'static str> {
        vec![
            "Content Manifest for Depot 108601",
            "",
            "Manifest ID / date     : 7649580527091758034 / 12 Jan 2024 10:00:00",
            "Total number of files  : 2",
            "Total number of chunks : 2",
            "Total bytes on disk    : 100",
            "Total bytes compressed : 80",
            "",
        ]
    }

    #[test]
    fn parses_every_header_field() {
        let header = parse_header(&sample_lines()).expect("should parse");
        assert_eq!(header.depot_id, "108601");
        assert_eq!(header.manifest_id, "7649580527091758034");
        assert_eq!(header.manifest_date, "2024-01-12T10:00:00+00:00");
        assert_eq!(header.num_files, 2);
        assert_eq!(header.num_chunks, 2);
        assert_eq!(header.bytes_disk, 100);
        assert_eq!(header.bytes_compressed, 80);
    }

    #[test]
    fn accepts_iso_style_dates() {
        let mut lines = sample_lines();
        lines[2] = "Manifest ID / date : 42 / 2024-01-12 10:00:00";
        let header = parse_header(&lines).expect("should parse");
        assert_eq!(header.manifest_date, "2024-01-12T10:00:00+00:00");
    }

    #[test]
    fn rejects_unparseable_date() {
        let mut lines = sample_lines();
        lines[2] = "Manifest ID / date : 42 / sometime last week";
        let err = parse_header(&lines).unwrap_err();
        assert!(matches!(err, ReportError::MalformedDate(_)));
    }

    #[test]
    fn rejects_wrong_depot_label() {
        let mut lines = sample_lines();
        lines[0] = "Depot Manifest 108601";
        let err = parse_header(&lines).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MalformedHeaderLine { line: 0, .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_count() {
        let mut lines = sample_lines();
        lines[3] = "Total number of files  : many";
        let err = parse_header(&lines).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MalformedHeaderLine { line: 3, .. }
        ));
    }

    #[test]
    fn rejects_missing_manifest_id() {
        let mut lines = sample_lines();
        lines[2] = "Manifest ID / date : / 12 Jan 2024 10:00:00";
        let err = parse_header(&lines).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MalformedHeaderLine { line: 2, .. }
        ));
    }

    #[test]
    fn truncated_document_is_fatal() {
        let lines = ["Content Manifest for Depot 108601", ""];
        let err = parse_header(&lines).unwrap_err();
        assert!(matches!(err, ReportError::Truncated { line: 2, .. }));
    }
}
