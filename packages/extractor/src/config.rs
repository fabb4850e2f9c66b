//! Configuration constants and the namespace table for UBL invoices.

use crate::xml::QName;

/// Subdirectory, next to the executable, that holds the invoice XML files.
pub const INPUT_DIR_NAME: &str = "bills_supermarket";

/// Suffix an entry name must end with to be treated as an invoice.
///
/// Case-sensitive: `FACTURA.XML` is not picked up.
pub const INPUT_FILE_SUFFIX: &str = ".xml";

/// Workbook written into the input directory.
pub const OUTPUT_FILE_NAME: &str = "info_xmls.xlsx";

/// Output columns, in the order they are written.
pub const OUTPUT_COLUMNS: [&str; 7] = [
    "Numero_producto",
    "Descripcion_producto",
    "Cantidad_producto",
    "Precio_producto",
    "Total_producto",
    "Fecha_factura",
    "Cantidad_factura",
];

/// Value of the `name` attribute on the `campoString` holding the generation date.
pub const GENERATION_DATE_FIELD: &str = "FechaGeneracion";

/// Element carrying the invoiced "real quantity".
///
/// Looked up without a namespace: it only matches an element that is in no
/// namespace at all.
pub const REAL_QUANTITY_ELEMENT: &str = "ECB14";

/// URI of the UBL common aggregate components namespace (`cac`).
pub const CAC_URI: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2";

/// URI of the UBL common basic components namespace (`cbc`).
pub const CBC_URI: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2";

/// URI of the UBL invoice root namespace.
pub const INVOICE_URI: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";

/// Namespaces DIAN invoices declare but no lookup uses.
///
/// Kept as documentation of what a well-formed input looks like.
pub const DECLARED_ONLY_NAMESPACES: [(&str, &str); 8] = [
    (
        "ext",
        "urn:oasis:names:specification:ubl:schema:xsd:CommonExtensionComponents-2",
    ),
    ("sts", "dian:gov:co:facturaelectronica:Structures-2-1"),
    ("xades", "http://uri.etsi.org/01903/v1.3.2#"),
    ("xades141", "http://uri.etsi.org/01903/v1.4.1#"),
    ("fn", "http://www.w3.org/2005/xpath-functions"),
    ("xs", "http://www.w3.org/2001/XMLSchema"),
    ("xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("ds", "http://www.w3.org/2000/09/xmldsig#"),
];

/// A namespace prefix bound to its URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: String,
    pub uri: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }

    /// Qualified name for an element in this namespace.
    #[must_use]
    pub fn name<'a>(&'a self, local: &'a str) -> QName<'a> {
        QName::qualified(&self.prefix, &self.uri, local)
    }
}

/// The namespaces the extractor needs to address invoice elements.
///
/// Passed explicitly into extraction so tests (or other UBL profiles) can
/// supply different URIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    /// `cac`: holds `InvoiceLine`.
    pub aggregate: Namespace,
    /// `cbc`: holds the line fields (`ID`, `PriceAmount`, ...).
    pub basic: Namespace,
    /// Invoice root namespace: holds `campoString`.
    pub invoice: Namespace,
}

impl Namespaces {
    /// Standard UBL 2.1 invoice namespaces.
    #[must_use]
    pub fn ubl() -> Self {
        Self {
            aggregate: Namespace::new("cac", CAC_URI),
            basic: Namespace::new("cbc", CBC_URI),
            invoice: Namespace::new("ns", INVOICE_URI),
        }
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::ubl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_columns_order() {
        assert_eq!(OUTPUT_COLUMNS[0], "Numero_producto");
        assert_eq!(OUTPUT_COLUMNS[2], "Cantidad_producto");
        assert_eq!(OUTPUT_COLUMNS[3], "Precio_producto");
        assert_eq!(OUTPUT_COLUMNS[6], "Cantidad_factura");
    }

    #[test]
    fn test_default_namespaces_are_ubl() {
        let ns = Namespaces::default();
        assert_eq!(ns.aggregate.prefix, "cac");
        assert_eq!(ns.basic.uri, CBC_URI);
        assert_eq!(ns.invoice.uri, INVOICE_URI);
    }

    #[test]
    fn test_namespace_name_display() {
        let ns = Namespaces::ubl();
        assert_eq!(ns.basic.name("PriceAmount").to_string(), "cbc:PriceAmount");
    }

    #[test]
    fn test_declared_only_namespaces_do_not_overlap_required() {
        for (_, uri) in DECLARED_ONLY_NAMESPACES {
            assert_ne!(uri, CAC_URI);
            assert_ne!(uri, CBC_URI);
            assert_ne!(uri, INVOICE_URI);
        }
    }
}
