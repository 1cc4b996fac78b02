//! Command-line argument definitions for csv2latex
//!
//! This module defines the CLI interface using the clap derive API. Every
//! option is an override on top of the layered [`Config`].

use crate::config::{Config, FontSize};
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the CSV to LaTeX table converter
///
/// Converts a CSV file into a LaTeX longtable, with multi-line headers and
/// partial rules above column subgroups.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv2latex",
    version,
    about = "Convert CSV tables with grouped multi-line headers into LaTeX longtables",
    long_about = "Reads a CSV file of unknown encoding and writes a LaTeX longtable document. \
                  Leading rows are treated as a multi-line header: blank header cells group \
                  columns, and \\cmidrule partial rules are placed above new subgroups. Special \
                  characters are escaped and missing values rendered as an em-dash."
)]
pub struct Args {
    /// Input CSV file
    ///
    /// Defaults to the configured input path (Book1.csv).
    #[arg(value_name = "INPUT")]
    pub input_path: Option<PathBuf>,

    /// Output LaTeX file (overwritten)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the generated .tex file"
    )]
    pub output_path: Option<PathBuf>,

    /// Table caption
    #[arg(long = "caption", value_name = "TEXT")]
    pub caption: Option<String>,

    /// Table label used for \ref
    #[arg(long = "label", value_name = "ID")]
    pub label: Option<String>,

    /// Typeset the table in portrait orientation
    #[arg(long = "portrait", conflicts_with = "landscape")]
    pub portrait: bool,

    /// Wrap the table in a landscape environment
    #[arg(long = "landscape")]
    pub landscape: bool,

    /// Number of leading rows treated as header
    #[arg(
        short = 'H',
        long = "header-lines",
        value_name = "COUNT",
        help = "Number of header lines at the top of the CSV"
    )]
    pub header_lines: Option<usize>,

    /// Uniform column width in centimetres
    #[arg(long = "column-width", value_name = "CM")]
    pub column_width_cm: Option<f64>,

    /// Font size for the whole table
    #[arg(long = "font-size", value_enum)]
    pub font_size: Option<FontSize>,

    /// longtable placement specifier
    #[arg(long = "placement", value_name = "SPEC")]
    pub placement: Option<String>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/csv2latex/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress console output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if self.header_lines == Some(0) {
            return Err(Error::configuration(
                "Number of header lines must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Apply explicitly given options on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(input_path) = &self.input_path {
            config.input.path = input_path.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.output.path = output_path.clone();
        }
        if let Some(caption) = &self.caption {
            config.table.caption = caption.clone();
        }
        if let Some(label) = &self.label {
            config.table.label = label.clone();
        }
        if self.portrait {
            config.table.landscape = false;
        }
        if self.landscape {
            config.table.landscape = true;
        }
        if let Some(header_lines) = self.header_lines {
            config.table.header_lines = header_lines;
        }
        if let Some(column_width_cm) = self.column_width_cm {
            config.table.column_width_cm = column_width_cm;
        }
        if let Some(font_size) = self.font_size {
            config.table.font_size = font_size;
        }
        if let Some(placement) = &self.placement {
            config.table.placement = placement.clone();
        }
    }

    /// Determine the log level, falling back to the configured one
    pub fn get_log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => configured,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should print progress and summaries (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
