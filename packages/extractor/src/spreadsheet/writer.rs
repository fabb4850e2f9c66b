//! XLSX writer for consolidated invoice rows.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::config::OUTPUT_COLUMNS;
use crate::error::Result;
use crate::types::InvoiceRow;

/// Build a workbook with a header row followed by one row per invoice line.
///
/// Uses the default single worksheet. Amounts are written as numeric cells,
/// everything else as text.
pub fn build_workbook(rows: &[InvoiceRow]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    write_header(worksheet)?;
    for (index, row) in rows.iter().enumerate() {
        // Row 0 is the header; past the sheet limit the write itself fails.
        let sheet_row = u32::try_from(index + 1).unwrap_or(u32::MAX);
        write_row(worksheet, sheet_row, row)?;
    }

    Ok(workbook)
}

/// Write rows to an `.xlsx` file, replacing any existing file.
///
/// # Arguments
/// * `rows` - Rows in output order
/// * `path` - Destination file
pub fn write_workbook(rows: &[InvoiceRow], path: &Path) -> Result<()> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Wrote workbook");
    Ok(())
}

fn write_header(worksheet: &mut Worksheet) -> std::result::Result<(), XlsxError> {
    for (col, name) in (0u16..).zip(OUTPUT_COLUMNS) {
        worksheet.write_string(0, col, name)?;
    }
    Ok(())
}

/// Quantity goes under `Cantidad_producto` and unit price under
/// `Precio_producto`; older spreadsheets from the legacy script had these two
/// values swapped.
fn write_row(
    worksheet: &mut Worksheet,
    sheet_row: u32,
    row: &InvoiceRow,
) -> std::result::Result<(), XlsxError> {
    worksheet
        .write_string(sheet_row, 0, &row.product_number)?
        .write_string(sheet_row, 1, &row.description)?
        .write_number(sheet_row, 2, row.quantity)?
        .write_number(sheet_row, 3, row.price)?
        .write_number(sheet_row, 4, row.total)?
        .write_string(sheet_row, 5, &row.invoice_date)?
        .write_string(sheet_row, 6, &row.real_quantity)?;
    Ok(())
}
