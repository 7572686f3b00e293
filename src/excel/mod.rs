//! Spreadsheet access for the pipeline
//!
//! - Workbook: opens the source file once and exposes its cells by 1-indexed coordinate
//! - Reader: copies a cell range into a `Buffer`

mod reader;
mod workbook;

pub use reader::RangeReader;
pub use workbook::{display_text, CellSource, SourceWorkbook};
