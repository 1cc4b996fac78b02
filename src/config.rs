//! Configuration management and validation.
//!
//! Settings come from three layers: built-in defaults, an optional TOML
//! config file, and command-line overrides applied by the CLI. The
//! resulting [`Config`] describes one conversion run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, DEFAULT_CAPTION, DEFAULT_COLUMN_WIDTH_CM, DEFAULT_HEADER_LINES,
    DEFAULT_INPUT_PATH, DEFAULT_LABEL, DEFAULT_LANDSCAPE, DEFAULT_OUTPUT_PATH, DEFAULT_PLACEMENT,
};
use crate::{Error, Result};

/// Font size command wrapping the whole table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Tiny,
    Scriptsize,
    #[default]
    Footnotesize,
    Small,
    Normalsize,
}

impl FontSize {
    /// LaTeX command name without the leading backslash
    pub fn command(&self) -> &'static str {
        match self {
            FontSize::Tiny => "tiny",
            FontSize::Scriptsize => "scriptsize",
            FontSize::Footnotesize => "footnotesize",
            FontSize::Small => "small",
            FontSize::Normalsize => "normalsize",
        }
    }
}

/// Input settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// CSV file to convert
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// LaTeX file to write (overwritten)
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Table layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub caption: String,
    pub label: String,

    /// Wrap the table in a `landscape` environment
    pub landscape: bool,

    /// Number of leading rows treated as header
    pub header_lines: usize,

    /// Uniform column width in centimetres
    pub column_width_cm: f64,

    pub font_size: FontSize,

    /// `longtable` placement specifier
    pub placement: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            caption: DEFAULT_CAPTION.to_string(),
            label: DEFAULT_LABEL.to_string(),
            landscape: DEFAULT_LANDSCAPE,
            header_lines: DEFAULT_HEADER_LINES,
            column_width_cm: DEFAULT_COLUMN_WIDTH_CM,
            font_size: FontSize::default(),
            placement: DEFAULT_PLACEMENT.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for the crate's log filter (`RUST_LOG` takes precedence)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration for one conversion run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Parse a TOML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}: {}", path.display(), e),
                e,
            )
        })?;
        Self::from_toml(&content)
    }

    /// Parse TOML config text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load defaults, then the explicit config file or the default one if it exists
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => {
                    debug!("Loading default config file {}", path.display());
                    Self::from_file(&path)?
                }
                _ => Self::default(),
            },
        };

        Ok(config)
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.table.header_lines == 0 {
            return Err(Error::configuration(
                "Number of header lines must be greater than 0",
            ));
        }

        if !(self.table.column_width_cm.is_finite() && self.table.column_width_cm > 0.0) {
            return Err(Error::configuration(format!(
                "Column width must be a positive number of centimetres, got {}",
                self.table.column_width_cm
            )));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path cannot be empty"));
        }

        if self.table.placement.trim().is_empty() {
            return Err(Error::configuration("Table placement cannot be empty"));
        }

        Ok(())
    }
}
