//! Header subgroup detection and partial rule placement
//!
//! A header row groups columns by leaving cells blank. A maximal run of
//! blank cells is a subgroup range; the first populated cell after a run
//! gets a `\cmidrule` over that run, unless the cell above it in the
//! previous header row already carries content, in which case the column
//! continues an existing group rather than starting a new one.

use tracing::trace;

use crate::app::models::{FormattedCell, SubgroupRange, is_blank};

/// Collect the maximal blank runs of an escaped header row
///
/// A run still open at the end of the row closes at the last index, so a
/// fully blank row yields one range spanning the whole row.
pub fn find_subgroup_ranges<S: AsRef<str>>(row: &[S]) -> Vec<SubgroupRange> {
    let mut ranges = Vec::new();
    let mut open_start: Option<usize> = None;

    for (index, cell) in row.iter().enumerate() {
        if is_blank(cell.as_ref()) {
            if open_start.is_none() {
                open_start = Some(index);
            }
        } else if let Some(start) = open_start.take() {
            ranges.push(SubgroupRange::new(start, index - 1));
        }
    }

    if let Some(start) = open_start {
        ranges.push(SubgroupRange::new(start, row.len() - 1));
    }

    ranges
}

/// Format one escaped header row against the previous escaped header row
pub fn format_header_row(row: &[String], prev_row: Option<&[String]>) -> Vec<FormattedCell> {
    let ranges = find_subgroup_ranges(row);

    row.iter()
        .enumerate()
        .map(|(index, cell)| {
            if is_blank(cell) {
                return FormattedCell::Blank;
            }

            let closed_run = index
                .checked_sub(1)
                .and_then(|before| ranges.iter().find(|range| range.end == before));

            match closed_run {
                Some(range) if !prev_has_content(prev_row, index) => {
                    trace!(
                        "Partial rule over columns {}-{} before column {}",
                        range.start + 1,
                        range.end + 1,
                        index + 1
                    );
                    FormattedCell::Ruled {
                        rule: *range,
                        value: cell.clone(),
                    }
                }
                _ => FormattedCell::Plain(cell.clone()),
            }
        })
        .collect()
}

/// Format consecutive escaped header rows, each against the one before it
pub fn format_header_rows(rows: &[Vec<String>]) -> Vec<Vec<FormattedCell>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let prev_row = index.checked_sub(1).map(|prev| rows[prev].as_slice());
            format_header_row(row, prev_row)
        })
        .collect()
}

fn prev_has_content(prev_row: Option<&[String]>, index: usize) -> bool {
    prev_row
        .and_then(|prev| prev.get(index))
        .is_some_and(|cell| !is_blank(cell))
}
