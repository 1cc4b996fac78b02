//! LaTeX `longtable` rendering and output
//!
//! - [`document`] - Markup layout for preamble, repeated headers, footers and rows
//! - [`writer`] - Writing the rendered document to its destination

pub mod document;
pub mod writer;


pub use document::LongtableDocument;
pub use writer::write_document;
