//! Table assembly from decoded rows

use tracing::debug;

use crate::app::models::{FormattedCell, RawTable};
use crate::app::services::latex_writer::LongtableDocument;
use crate::app::services::table_formatter::{escape_row, format_header_rows};
use crate::config::TableConfig;
use crate::{Error, Result};

/// Header and data cells ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledTable {
    pub ncols: usize,
    pub header_rows: Vec<Vec<FormattedCell>>,
    pub data_rows: Vec<Vec<String>>,
}

impl AssembledTable {
    /// Number of partial rules placed across all header rows
    pub fn partial_rules(&self) -> usize {
        self.header_rows
            .iter()
            .flatten()
            .filter(|cell| cell.rule().is_some())
            .count()
    }

    /// Render the complete LaTeX document
    pub fn render(&self, table: &TableConfig) -> String {
        LongtableDocument::new(table, self.ncols, &self.header_rows, &self.data_rows).to_string()
    }
}

/// Normalise, escape and format decoded rows
///
/// The first `header_lines` rows become header rows, each formatted against
/// the escaped form of the row before it. The remaining rows are escaped as
/// data.
pub fn assemble(raw: RawTable, header_lines: usize) -> Result<AssembledTable> {
    if raw.len() < header_lines {
        return Err(Error::insufficient_rows(raw.len(), header_lines));
    }

    let table = raw.normalize();
    debug!("Detected {} columns in CSV", table.ncols());

    let (header, data) = table.split_header(header_lines);
    let escaped_header: Vec<Vec<String>> = header.iter().map(|row| escape_row(row)).collect();
    let header_rows = format_header_rows(&escaped_header);
    let data_rows = data.iter().map(|row| escape_row(row)).collect();

    Ok(AssembledTable {
        ncols: table.ncols(),
        header_rows,
        data_rows,
    })
}
