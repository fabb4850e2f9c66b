//! UBL Extractor - Consolidate invoice lines from UBL electronic invoices.
//!
//! This crate reads a folder of UBL 2.1 XML invoices (DIAN profile), pulls
//! every `cac:InvoiceLine` out as a row, and writes all rows from all files
//! into a single `.xlsx` workbook.
//!
//! # Example
//!
//! ```
//! use roxmltree::Document;
//! use ubl_extractor::{extract, Namespaces};
//!
//! let xml = r#"<Invoice xmlns:cac="urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2"/>"#;
//! let doc = Document::parse(xml).unwrap();
//! assert!(extract(&doc, &Namespaces::ubl()).rows.is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Fixed names and the namespace table
//! - [`types`]: Rows and extraction/batch reports
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Namespace-aware XML lookups
//! - [`resolver`]: Input directory discovery
//! - [`extractor`]: Per-document line extraction
//! - [`spreadsheet`]: XLSX output
//! - [`batch`]: Main batch service
//! - [`cli`]: Command-line interface

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod resolver;
pub mod spreadsheet;
pub mod types;
pub mod xml;

// Re-export main functions
pub use batch::run_batch;
pub use extractor::extract;
pub use resolver::locate_inputs;

// Re-export commonly used items
pub use config::Namespaces;
pub use error::{ExtractorError, LineError, Result};
pub use types::{BatchReport, ExtractionReport, InvoiceRow};
