//! Core data structures for CSV to LaTeX conversion
//!
//! Defines the raw and normalised table shapes, header subgroup ranges,
//! formatted header cells, encoding attempt reports and the summary returned
//! by a conversion run. All of them live for a single conversion only.

use std::fmt;
use std::path::PathBuf;

use crate::constants::MISSING_VALUE_MARKER;

/// Rows of raw CSV fields exactly as decoded, possibly ragged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a raw table from decoded rows
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows were decoded
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Right-pad every row with empty fields up to the longest row length
    pub fn normalize(self) -> Table {
        let ncols = self.max_columns();
        let rows = self
            .rows
            .into_iter()
            .map(|mut row| {
                row.resize(ncols, String::new());
                row
            })
            .collect();

        Table { rows, ncols }
    }
}

/// Rectangular table where every row has exactly `ncols` fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    ncols: usize,
}

impl Table {
    /// All rows, header rows first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns shared by every row
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split into header rows and data rows
    ///
    /// `header_lines` is clamped to the row count.
    pub fn split_header(&self, header_lines: usize) -> (&[Vec<String>], &[Vec<String>]) {
        self.rows.split_at(header_lines.min(self.rows.len()))
    }
}

/// Check if an escaped cell counts as blank for subgroup detection
pub fn is_blank(cell: &str) -> bool {
    cell.is_empty() || cell == MISSING_VALUE_MARKER
}

/// Closed interval of 0-based column indices forming one blank run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubgroupRange {
    pub start: usize,
    pub end: usize,
}

impl SubgroupRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// 1-based inclusive column span as used by `\cmidrule`
    pub fn column_span(&self) -> (usize, usize) {
        (self.start + 1, self.end + 1)
    }

    /// Partial rule directive spanning this range
    pub fn directive(&self) -> String {
        let (first, last) = self.column_span();
        format!("\\cmidrule(lr){{{}-{}}}", first, last)
    }
}

/// One header cell after subgroup formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedCell {
    /// Blank cell, rendered as nothing
    Blank,
    /// Populated cell without a rule above it
    Plain(String),
    /// Populated cell preceded by a partial rule over `rule`
    Ruled { rule: SubgroupRange, value: String },
}

impl FormattedCell {
    /// Partial rule attached to the cell, if any
    pub fn rule(&self) -> Option<SubgroupRange> {
        match self {
            FormattedCell::Ruled { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}

impl fmt::Display for FormattedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedCell::Blank => Ok(()),
            FormattedCell::Plain(value) => f.write_str(value),
            FormattedCell::Ruled { rule, value } => write!(f, "{}\n{}", rule.directive(), value),
        }
    }
}

/// Outcome of decoding the input with one candidate encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Decoded and parsed into this many rows
    Decoded { rows: usize },
    /// Decoded and parsed, but no rows came out
    Empty,
    /// Bytes are not valid in this encoding
    Malformed,
    /// Text decoded but the CSV reader rejected it
    Csv { message: String },
}

impl AttemptOutcome {
    /// Check if the attempt produced usable rows
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Decoded { .. })
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Decoded { rows } => write!(f, "read {} rows", rows),
            AttemptOutcome::Empty => f.write_str("no rows"),
            AttemptOutcome::Malformed => f.write_str("malformed byte sequence"),
            AttemptOutcome::Csv { message } => write!(f, "CSV error: {}", message),
        }
    }
}

/// Record of one candidate encoding attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptReport {
    /// Label the candidate was requested by
    pub label: String,
    /// Canonical name of the resolved encoding
    pub encoding: String,
    pub outcome: AttemptOutcome,
}

impl fmt::Display for AttemptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.label, self.encoding, self.outcome)
    }
}

/// CSV rows together with the encoding that decoded them
#[derive(Debug, Clone)]
pub struct ResolvedTable {
    pub table: RawTable,
    /// Encoding name guessed from the sample
    pub detected_encoding: String,
    /// Encoding name that actually decoded the file
    pub encoding: String,
    pub attempts: Vec<AttemptReport>,
}

/// Statistics for a completed conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionSummary {
    pub detected_encoding: String,
    pub encoding: String,
    pub columns: usize,
    pub header_rows: usize,
    pub data_rows: usize,
    /// Number of partial rules placed in the header
    pub partial_rules: usize,
    pub output_path: PathBuf,
    pub bytes_written: usize,
}
