//! CSV to LaTeX conversion pipeline
//!
//! Ties the other services together: read and decode the CSV, normalise row
//! lengths, escape cells, format header rows with partial rules, render the
//! `longtable` document and write it out.
//!
//! - [`assembler`] - Pure table assembly from decoded rows to renderable cells
//! - [`pipeline`] - File-level conversion with reading, rendering and writing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use csv2latex::Config;
//! use csv2latex::app::services::converter::TableConverter;
//!
//! # fn example() -> csv2latex::Result<()> {
//! let summary = TableConverter::new().convert(&Config::default())?;
//! println!("Wrote {} data rows to {}", summary.data_rows, summary.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod pipeline;

#[cfg(test)]
pub mod tests;

pub use assembler::{AssembledTable, assemble};
pub use pipeline::TableConverter;
