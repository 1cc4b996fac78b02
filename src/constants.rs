//! Application constants for csv2latex
//!
//! This module contains the default configuration values, the missing-value
//! policy, the LaTeX escape table and the fixed markup fragments used when
//! rendering a `longtable`.

// =============================================================================
// Default Configuration
// =============================================================================

/// Default input CSV path
pub const DEFAULT_INPUT_PATH: &str = "Book1.csv";

/// Default output LaTeX path
pub const DEFAULT_OUTPUT_PATH: &str = "output.tex";

/// Default table caption
pub const DEFAULT_CAPTION: &str = "Controller Configurations Summary";

/// Default table label
pub const DEFAULT_LABEL: &str = "tab:controller_configs";

/// Tables are typeset in landscape unless disabled
pub const DEFAULT_LANDSCAPE: bool = true;

/// Number of leading CSV rows treated as header
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Uniform column width in centimetres
pub const DEFAULT_COLUMN_WIDTH_CM: f64 = 2.0;

/// Default `longtable` placement specifier
pub const DEFAULT_PLACEMENT: &str = "p";

/// Application name used for config directories and log filters
pub const APP_NAME: &str = "csv2latex";

/// Config file name looked up under the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Encoding Detection
// =============================================================================

/// Number of leading bytes fed to the encoding detector
pub const ENCODING_SAMPLE_BYTES: usize = 10_000;

/// Encoding assumed when detection has nothing to work with
pub const DEFAULT_ENCODING_LABEL: &str = "utf-8";

/// Encodings tried, in order, after the detected one
pub const FALLBACK_ENCODING_LABELS: &[&str] = &["latin1", "cp1252", "iso-8859-1", "utf-16"];

// =============================================================================
// Missing Values and Escaping
// =============================================================================

/// Escaped marker substituted for missing values
pub const MISSING_VALUE_MARKER: &str = r"\textemdash";

/// Raw values (after trimming) treated as missing
pub const MISSING_VALUE_SENTINELS: &[&str] =
    &["", "NA", "N/A", "NaN", "None", "\\", "//", "---", "_"];

/// Value passed through without escaping
pub const PRESERVED_SLASH: &str = "/";

/// LaTeX replacements for special characters
pub const LATEX_REPLACEMENTS: &[(char, &str)] = &[
    ('\\', r"\textbackslash{}"),
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
    ('<', r"\textless{}"),
    ('>', r"\textgreater{}"),
    ('[', "{[}"),
    (']', "{]}"),
];

// =============================================================================
// LaTeX Markup
// =============================================================================

/// Separator placed between cells of one row
pub const CELL_SEPARATOR: &str = " & ";

/// Terminator appended to every table row
pub const ROW_TERMINATOR: &str = r" \\";

/// Banner shown above the repeated header on continuation pages
pub const CONTINUED_FROM_BANNER: &str =
    r"{\bfseries \tablename\ \thetable{} -- continued from previous page}";

/// Banner shown in the footer of every page but the last
pub const CONTINUED_ON_BANNER: &str = "{Continued on next page}";

/// Packages the generated markup depends on
pub const REQUIRED_PACKAGES: &str = r"\usepackage{array, longtable, lscape, booktabs}";
