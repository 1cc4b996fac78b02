//! Strict decoding and CSV parsing for one candidate encoding

use encoding_rs::Encoding;

use super::detection::Candidate;
use crate::app::models::{AttemptOutcome, AttemptReport, RawTable};

/// Result of decoding the input with one candidate
#[derive(Debug)]
pub enum DecodeAttempt {
    /// Decoded into at least one row
    Decoded(RawTable),
    /// Decoded cleanly but produced no rows
    Empty,
    /// Input contains byte sequences invalid in this encoding
    Malformed,
    /// Decoded text was rejected by the CSV reader
    Csv(csv::Error),
}

impl DecodeAttempt {
    /// Typed outcome for reporting
    pub fn outcome(&self) -> AttemptOutcome {
        match self {
            DecodeAttempt::Decoded(table) => AttemptOutcome::Decoded { rows: table.len() },
            DecodeAttempt::Empty => AttemptOutcome::Empty,
            DecodeAttempt::Malformed => AttemptOutcome::Malformed,
            DecodeAttempt::Csv(error) => AttemptOutcome::Csv {
                message: error.to_string(),
            },
        }
    }

    /// Report naming the candidate this attempt used
    pub fn report(&self, candidate: &Candidate) -> AttemptReport {
        AttemptReport {
            label: candidate.label.to_string(),
            encoding: candidate.encoding.name().to_string(),
            outcome: self.outcome(),
        }
    }
}

/// Decode the whole input with one candidate and parse it as CSV
pub fn decode_candidate(bytes: &[u8], encoding: &'static Encoding) -> DecodeAttempt {
    let Some(text) = encoding
        .decode_without_bom_handling_and_without_replacement(strip_own_bom(bytes, encoding))
    else {
        return DecodeAttempt::Malformed;
    };

    match parse_csv(&text) {
        Ok(table) if table.is_empty() => DecodeAttempt::Empty,
        Ok(table) => DecodeAttempt::Decoded(table),
        Err(error) => DecodeAttempt::Csv(error),
    }
}

/// Parse comma-separated text into ragged rows
///
/// Every line is data (no header record) and rows may differ in length. An
/// empty line outside a quoted field is kept as an empty row, so blank lines
/// still occupy their header or data position.
pub fn parse_csv(text: &str) -> Result<RawTable, csv::Error> {
    let mut rows = Vec::new();
    let mut pending = String::new();
    let mut in_quoted_field = false;

    for line in text.split_inclusive('\n') {
        if !in_quoted_field && line.trim_end_matches(['\r', '\n']).is_empty() {
            parse_records(&pending, &mut rows)?;
            pending.clear();
            rows.push(Vec::new());
            continue;
        }

        // An odd number of quotes leaves a quoted field open past this line
        if line.matches('"').count() % 2 == 1 {
            in_quoted_field = !in_quoted_field;
        }
        pending.push_str(line);
    }
    parse_records(&pending, &mut rows)?;

    Ok(RawTable::new(rows))
}

fn parse_records(text: &str, rows: &mut Vec<Vec<String>>) -> Result<(), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(())
}

fn strip_own_bom<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> &'a [u8] {
    match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_length)) if bom_encoding == encoding => &bytes[bom_length..],
        _ => bytes,
    }
}
