//! csv2latex library
//!
//! Converts CSV tables into LaTeX `longtable` documents. Multi-line headers
//! are supported, with partial rules (`\cmidrule`) drawn above column
//! subgroups.
//!
//! This library provides tools for:
//! - Reading CSV files of unknown encoding with detection and fallback decoding
//! - Escaping LaTeX special characters and normalising missing values
//! - Detecting header subgroups and placing partial rules
//! - Rendering and writing the complete `longtable` markup

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod converter;
        pub mod csv_reader;
        pub mod latex_writer;
        pub mod table_formatter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ConversionSummary, FormattedCell, RawTable, SubgroupRange, Table};
pub use config::Config;

use std::path::PathBuf;

/// Result type alias for csv2latex
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for conversion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No candidate encoding produced any rows
    #[error(
        "Could not read CSV data from '{}' ({} encodings attempted)",
        .path.display(),
        .attempts.len()
    )]
    Decode {
        path: PathBuf,
        detected_encoding: String,
        attempts: Vec<app::models::AttemptReport>,
    },

    /// Fewer rows than requested header lines
    #[error("Not enough rows for {header_lines} header lines (input has {rows} rows)")]
    InsufficientRows { rows: usize, header_lines: usize },

    /// Output document could not be written
    #[error("Error writing LaTeX to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error carrying every attempt report
    pub fn decode(
        path: impl Into<PathBuf>,
        detected_encoding: impl Into<String>,
        attempts: Vec<app::models::AttemptReport>,
    ) -> Self {
        Self::Decode {
            path: path.into(),
            detected_encoding: detected_encoding.into(),
            attempts,
        }
    }

    /// Create an insufficient-rows error
    pub fn insufficient_rows(rows: usize, header_lines: usize) -> Self {
        Self::InsufficientRows { rows, header_lines }
    }

    /// Create a write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error means the input file was absent before processing
    pub fn is_input_missing(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid config file: {}", error),
        }
    }
}
