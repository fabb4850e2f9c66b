//! Batch service that ties discovery, extraction and output together.

use std::fs;
use std::path::Path;

use roxmltree::{Document, ParsingOptions};

use crate::config::{Namespaces, OUTPUT_FILE_NAME};
use crate::error::{ExtractorError, Result};
use crate::extractor::extract;
use crate::resolver::locate_inputs;
use crate::spreadsheet::write_workbook;
use crate::types::{BatchReport, ExtractionReport, FileSkip, InvoiceRow};
use crate::xml::decode_document;

/// Convert every invoice under `base_dir` into one workbook.
///
/// # Arguments
/// * `base_dir` - Directory containing the `bills_supermarket` folder
/// * `namespaces` - Namespace table used to address UBL elements
///
/// # Returns
/// A `BatchReport` describing what was read and written
pub fn run_batch(base_dir: &Path, namespaces: &Namespaces) -> Result<BatchReport> {
    run_batch_with_progress(base_dir, namespaces, |_, _, _| {})
}

/// Like [`run_batch`], calling `on_file(name, index, total)` before each file.
///
/// A read, decode or parse failure on any file aborts the batch before
/// anything is written.
pub fn run_batch_with_progress<F>(
    base_dir: &Path,
    namespaces: &Namespaces,
    mut on_file: F,
) -> Result<BatchReport>
where
    F: FnMut(&str, usize, usize),
{
    let inputs = locate_inputs(base_dir)?;
    let total = inputs.files.len();

    let mut rows: Vec<InvoiceRow> = Vec::new();
    let mut skipped: Vec<FileSkip> = Vec::new();

    for (index, (name, path)) in inputs.files.iter().zip(inputs.paths()).enumerate() {
        on_file(name, index, total);

        let report = process_file(&path, namespaces)?;
        tracing::debug!(
            file = %name,
            rows = report.rows.len(),
            skipped = report.skip_count(),
            "Processed invoice"
        );

        rows.extend(report.rows);
        skipped.extend(report.skipped.into_iter().map(|line| FileSkip {
            file: name.clone(),
            line,
        }));
    }

    let output_path = inputs.dir.join(OUTPUT_FILE_NAME);
    write_workbook(&rows, &output_path)?;

    Ok(BatchReport {
        input_dir: inputs.dir,
        output_path,
        files: total,
        rows: rows.len(),
        skipped,
    })
}

/// Read, parse and extract a single invoice file.
pub fn process_file(path: &Path, namespaces: &Namespaces) -> Result<ExtractionReport> {
    let bytes = fs::read(path).map_err(|source| ExtractorError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let xml = decode_document(&bytes).map_err(|source| ExtractorError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = Document::parse_with_options(&xml, parsing_options()).map_err(|source| {
        ExtractorError::XmlParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let span = tracing::warn_span!("invoice", file = %path.display());
    let _guard = span.enter();
    Ok(extract(&doc, namespaces))
}

/// Invoices may carry a `<!DOCTYPE>`; internal entities are expanded.
fn parsing_options<'input>() -> ParsingOptions<'input> {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}
