//! Invoice line extraction from parsed UBL documents.
//!
//! Every `cac:InvoiceLine` becomes one [`InvoiceRow`] unless one of its
//! fields is missing or not numeric, in which case the line is logged and
//! skipped and the remaining lines are still processed.

use roxmltree::{Document, Node};

use crate::config::{Namespaces, GENERATION_DATE_FIELD, REAL_QUANTITY_ELEMENT};
use crate::error::LineError;
use crate::types::{DocumentFields, ExtractionReport, InvoiceRow, LineOutcome};
use crate::xml::{
    element_text, find_descendant, find_descendant_with_attribute, find_descendants, QName,
};

/// Extract all invoice lines from a document.
///
/// # Arguments
/// * `doc` - Parsed invoice document
/// * `namespaces` - Namespace table used to address UBL elements
///
/// # Returns
/// Rows in document order, plus the lines that were skipped and why
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ubl_extractor::config::Namespaces;
/// use ubl_extractor::extractor::extract;
///
/// let doc = Document::parse("<Invoice/>").unwrap();
/// let report = extract(&doc, &Namespaces::ubl());
/// assert!(report.rows.is_empty());
/// assert_eq!(report.skip_count(), 0);
/// ```
pub fn extract(doc: &Document<'_>, namespaces: &Namespaces) -> ExtractionReport {
    let root = doc.root_element();
    let line_name = namespaces.aggregate.name("InvoiceLine");

    // Invariant across lines, so resolved once; a failure here skips every line.
    let fields = document_fields(root, namespaces);

    let mut report = ExtractionReport::default();
    for (index, line) in find_descendants(root, line_name).enumerate() {
        let outcome = match extract_line(line, namespaces, &fields) {
            Ok(row) => LineOutcome::Extracted(row),
            Err(reason) => {
                tracing::warn!(line = index, "Skipping invoice line: {reason}");
                LineOutcome::Skipped(reason)
            }
        };
        report.push(index, outcome);
    }

    report
}

/// Read the generation date and real quantity from the document root.
pub fn document_fields(
    root: Node<'_, '_>,
    namespaces: &Namespaces,
) -> Result<DocumentFields, LineError> {
    let date_name = namespaces.invoice.name("campoString");
    let invoice_date =
        find_descendant_with_attribute(root, &date_name, "name", GENERATION_DATE_FIELD)
            .map(element_text)
            .ok_or_else(|| {
                LineError::missing(format!("{date_name}[@name='{GENERATION_DATE_FIELD}']"))
            })?;

    let quantity_name = QName::unqualified(REAL_QUANTITY_ELEMENT);
    let real_quantity = find_descendant(root, &quantity_name)
        .map(element_text)
        .ok_or_else(|| LineError::missing(quantity_name.to_string()))?;

    Ok(DocumentFields {
        invoice_date: invoice_date.to_string(),
        real_quantity: real_quantity.trim().to_string(),
    })
}

/// Extract one invoice line.
fn extract_line(
    line: Node<'_, '_>,
    namespaces: &Namespaces,
    fields: &Result<DocumentFields, LineError>,
) -> Result<InvoiceRow, LineError> {
    let basic = &namespaces.basic;

    let product_number = required_text(line, &basic.name("ID"))?;
    let description = required_text(line, &basic.name("Description"))?;
    let price = required_number(line, &basic.name("PriceAmount"))?;
    let quantity = required_number(line, &basic.name("BaseQuantity"))?;
    let total = required_number(line, &basic.name("LineExtensionAmount"))?;

    let fields = fields.as_ref().map_err(Clone::clone)?;

    Ok(InvoiceRow {
        product_number: product_number.to_string(),
        description: description.to_string(),
        quantity,
        price,
        total,
        invoice_date: fields.invoice_date.clone(),
        real_quantity: fields.real_quantity.clone(),
    })
}

fn required_text<'a>(line: Node<'a, '_>, name: &QName<'_>) -> Result<&'a str, LineError> {
    find_descendant(line, name)
        .map(element_text)
        .ok_or_else(|| LineError::missing(name.to_string()))
}

fn required_number(line: Node<'_, '_>, name: &QName<'_>) -> Result<f64, LineError> {
    let text = required_text(line, name)?;
    parse_amount(text).ok_or_else(|| LineError::InvalidNumber {
        element: name.to_string(),
        value: text.to_string(),
    })
}

/// Parse an amount, ignoring surrounding whitespace.
///
/// # Examples
/// ```
/// use ubl_extractor::extractor::parse_amount;
///
/// assert_eq!(parse_amount(" 12.50\n"), Some(12.5));
/// assert_eq!(parse_amount("1e3"), Some(1000.0));
/// assert_eq!(parse_amount("12,50"), None);
/// assert_eq!(parse_amount(""), None);
/// ```
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
