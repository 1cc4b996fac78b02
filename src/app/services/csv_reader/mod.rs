//! CSV reading for files of unknown encoding
//!
//! The input encoding is guessed from a leading sample, then a fixed list of
//! fallback encodings is tried in order until one decodes the whole file
//! into at least one CSV row.
//!
//! ## Architecture
//!
//! - [`detection`] - Encoding guess from a byte sample and candidate ordering
//! - [`decoding`] - Strict decoding and CSV parsing for a single candidate
//! - [`reader`] - The retry loop that resolves a file into rows
//!
//! ## Usage
//!
//! ```rust,no_run
//! use csv2latex::app::services::csv_reader::CsvReader;
//!
//! # fn example() -> csv2latex::Result<()> {
//! let resolved = CsvReader::new().resolve(std::path::Path::new("Book1.csv"))?;
//! println!("Read {} rows as {}", resolved.table.len(), resolved.encoding);
//! # Ok(())
//! # }
//! ```

pub mod decoding;
pub mod detection;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use decoding::{DecodeAttempt, decode_candidate, parse_csv};
pub use detection::{Candidate, candidate_encodings, detect_encoding};
pub use reader::CsvReader;
