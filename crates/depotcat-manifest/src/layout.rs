/// Semantic field expected at a given zero-based line of a depot report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    DepotId,
    ManifestIdDate,
    FileCount,
    ChunkCount,
    BytesDisk,
    BytesCompressed,
    TableHeader,
    TableRow,
    /// Separator line carrying no data. Skipped, never matched.
    Blank,
}

/// Line positions of the header scalars and the column-header row.
///
/// The report generator emits these fields at fixed lines; the mapping is a
/// contract constant of that generator, not something to infer from content.
const FIXED_LINES: [(usize, LineField); 7] = [
    (0, LineField::DepotId),
    (2, LineField::ManifestIdDate),
    (3, LineField::FileCount),
    (4, LineField::ChunkCount),
    (5, LineField::BytesDisk),
    (6, LineField::BytesCompressed),
    (TABLE_HEADER_LINE, LineField::TableHeader),
];

/// Line carrying the table's column headers. Validated, then discarded.
pub const TABLE_HEADER_LINE: usize = 8;

/// First line of the file listing; everything from here on is a table row.
pub const TABLE_START: usize = 9;

/// Maps a zero-based line index to the field that line must contain.
pub fn classify(index: usize) -> LineField {
    if index >= TABLE_START {
        return LineField::TableRow;
    }
    FIXED_LINES
        .iter()
        .find(|(line, _)| *line == index)
        .map_or(LineField::Blank, |(_, field)| *field)
}
