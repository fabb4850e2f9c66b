//! Spreadsheet output for extracted invoice rows.

mod writer;

pub use writer::{build_workbook, write_workbook};
