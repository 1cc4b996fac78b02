//! Cell escaping and header subgroup formatting
//!
//! This module turns raw CSV fields into LaTeX-safe cell text and lays out
//! multi-line headers with partial rules above column subgroups.
//!
//! ## Architecture
//!
//! - [`escape`] - LaTeX character escaping and the missing-value policy
//! - [`header`] - Blank-run detection and `\cmidrule` placement for header rows
//!
//! ## Usage
//!
//! ```rust
//! use csv2latex::app::services::table_formatter::{escape_row, format_header_row};
//!
//! let top = escape_row(&["Ref", "Predicted", "", ""]);
//! let bottom = escape_row(&["", "a", "b", "c"]);
//! let formatted = format_header_row(&bottom, Some(top.as_slice()));
//! assert_eq!(formatted.len(), 4);
//! ```

pub mod escape;
pub mod header;


pub use escape::{escape, escape_row, is_missing_value};
pub use header::{find_subgroup_ranges, format_header_row, format_header_rows};
