//! Core data types for the extractor.

use std::path::PathBuf;

use crate::error::LineError;

/// One output row: a single invoice line plus its document-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    /// Product identifier (`cbc:ID`).
    pub product_number: String,
    /// Product description (`cbc:Description`).
    pub description: String,
    /// Billed quantity (`cbc:BaseQuantity`).
    pub quantity: f64,
    /// Unit price (`cbc:PriceAmount`).
    pub price: f64,
    /// Line total (`cbc:LineExtensionAmount`).
    pub total: f64,
    /// Invoice generation date (`campoString[@name='FechaGeneracion']`).
    pub invoice_date: String,
    /// Invoiced "real quantity" (`ECB14`), trimmed.
    pub real_quantity: String,
}

/// Fields read once per document and copied onto each of its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFields {
    pub invoice_date: String,
    pub real_quantity: String,
}

/// Outcome of extracting a single invoice line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Extracted(InvoiceRow),
    Skipped(LineError),
}

/// A line that produced no row.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// Zero-based position of the line among the document's invoice lines.
    pub line_index: usize,
    pub reason: LineError,
}

/// Rows and skipped lines extracted from one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    pub rows: Vec<InvoiceRow>,
    pub skipped: Vec<SkippedLine>,
}

impl ExtractionReport {
    /// Record the outcome of the line at `line_index`.
    pub fn push(&mut self, line_index: usize, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Extracted(row) => self.rows.push(row),
            LineOutcome::Skipped(reason) => self.skipped.push(SkippedLine { line_index, reason }),
        }
    }

    #[must_use]
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A skipped line, tagged with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSkip {
    pub file: String,
    pub line: SkippedLine,
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Directory that was scanned.
    pub input_dir: PathBuf,
    /// Workbook that was written.
    pub output_path: PathBuf,
    /// Number of XML files processed.
    pub files: usize,
    /// Number of rows written.
    pub rows: usize,
    pub skipped: Vec<FileSkip>,
}
