//! File-level conversion pipeline

use tracing::{error, info};

use super::assembler::assemble;
use crate::Result;
use crate::app::models::ConversionSummary;
use crate::app::services::csv_reader::CsvReader;
use crate::app::services::latex_writer::write_document;
use crate::config::Config;

/// Converts one CSV file into one LaTeX document
#[derive(Debug, Clone, Default)]
pub struct TableConverter {
    reader: CsvReader,
}

impl TableConverter {
    /// Create a converter with the default CSV reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom CSV reader
    pub fn with_reader(mut self, reader: CsvReader) -> Self {
        self.reader = reader;
        self
    }

    /// Run the full conversion described by `config`
    pub fn convert(&self, config: &Config) -> Result<ConversionSummary> {
        let input_path = &config.input.path;
        let output_path = &config.output.path;
        info!(
            "Converting {} to {}",
            input_path.display(),
            output_path.display()
        );

        let resolved = self.reader.resolve(input_path).inspect_err(|e| {
            error!("Could not read CSV data: {}", e);
        })?;

        let assembled = assemble(resolved.table, config.table.header_lines)
            .inspect_err(|e| error!("{}", e))?;
        info!(
            "Assembled {} header rows and {} data rows across {} columns",
            assembled.header_rows.len(),
            assembled.data_rows.len(),
            assembled.ncols
        );

        let rendered = assembled.render(&config.table);
        let bytes_written =
            write_document(output_path, &rendered).inspect_err(|e| error!("{}", e))?;
        info!("Wrote {} bytes to {}", bytes_written, output_path.display());

        Ok(ConversionSummary {
            detected_encoding: resolved.detected_encoding,
            encoding: resolved.encoding,
            columns: assembled.ncols,
            header_rows: assembled.header_rows.len(),
            data_rows: assembled.data_rows.len(),
            partial_rules: assembled.partial_rules(),
            output_path: output_path.clone(),
            bytes_written,
        })
    }
}
