//! XML utility functions for navigating and extracting data from DOM trees.

use std::fmt;

use roxmltree::Node;

/// An element name, optionally bound to a namespace.
///
/// The prefix is only used for display; matching compares the namespace URI
/// and the local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QName<'a> {
    pub prefix: Option<&'a str>,
    pub uri: Option<&'a str>,
    pub local: &'a str,
}

impl<'a> QName<'a> {
    /// Name in the namespace `uri`, displayed as `prefix:local`.
    pub fn qualified(prefix: &'a str, uri: &'a str, local: &'a str) -> Self {
        Self {
            prefix: Some(prefix),
            uri: Some(uri),
            local,
        }
    }

    /// Name of an element that is in no namespace.
    pub fn unqualified(local: &'a str) -> Self {
        Self {
            prefix: None,
            uri: None,
            local,
        }
    }
}

impl fmt::Display for QName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => f.write_str(self.local),
        }
    }
}

/// Check if a node is an element with the given expanded name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ubl_extractor::xml::{has_name, QName};
///
/// let xml = r#"<a:root xmlns:a="urn:a"><child/></a:root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(has_name(root, &QName::qualified("a", "urn:a", "root")));
/// assert!(!has_name(root, &QName::unqualified("root")));
/// ```
pub fn has_name(node: Node<'_, '_>, name: &QName<'_>) -> bool {
    // `xmlns=""` resets the default namespace; treat an empty URI as none.
    let namespace = node.tag_name().namespace().filter(|uri| !uri.is_empty());
    node.is_element() && node.tag_name().name() == name.local && namespace == name.uri
}

/// Find all descendant elements with the given name, in document order.
///
/// The node itself is not included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ubl_extractor::xml::{find_descendants, QName};
///
/// let xml = r#"<root><item/><group><item/></group><other/></root>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_descendants(doc.root_element(), QName::unqualified("item")).collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    name: QName<'a>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |n| has_name(*n, &name))
}

/// Find the first descendant element with the given name, at any depth.
///
/// # Returns
/// First matching element in document order, or `None` if not found
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &QName<'_>,
) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|n| has_name(*n, name))
}

/// Find the first descendant element with the given name whose attribute
/// `attr` equals `value`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ubl_extractor::xml::{element_text, find_descendant_with_attribute, QName};
///
/// let xml = r#"<root><field name="a">1</field><field name="b">2</field></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let field = QName::unqualified("field");
///
/// let b = find_descendant_with_attribute(doc.root_element(), &field, "name", "b").unwrap();
/// assert_eq!(element_text(b), "2");
/// ```
pub fn find_descendant_with_attribute<'a, 'input>(
    node: Node<'a, 'input>,
    name: &QName<'_>,
    attr: &str,
    value: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| has_name(*n, name) && n.attribute(attr) == Some(value))
}

/// Get the direct text content of an element, untrimmed.
///
/// Returns an empty string for an element without text.
pub fn element_text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const NS_XML: &str = r#"<inv:Invoice xmlns:inv="urn:inv" xmlns:b="urn:b">
        <b:ID>outer</b:ID>
        <inv:Line><b:ID>1</b:ID><wrap><b:ID>nested</b:ID></wrap></inv:Line>
        <inv:Line><b:ID>2</b:ID></inv:Line>
        <ID>plain</ID>
    </inv:Invoice>"#;

    #[test]
    fn test_qname_display() {
        assert_eq!(QName::qualified("cbc", "urn:b", "ID").to_string(), "cbc:ID");
        assert_eq!(QName::unqualified("ECB14").to_string(), "ECB14");
    }

    #[test]
    fn test_has_name_checks_namespace() {
        let doc = Document::parse(NS_XML).unwrap();
        let root = doc.root_element();
        assert!(has_name(root, &QName::qualified("x", "urn:inv", "Invoice")));
        assert!(!has_name(root, &QName::qualified("x", "urn:b", "Invoice")));
        assert!(!has_name(root, &QName::unqualified("Invoice")));
    }

    #[test]
    fn test_find_descendants_excludes_self() {
        let doc = Document::parse(NS_XML).unwrap();
        let root = doc.root_element();
        let name = QName::qualified("inv", "urn:inv", "Invoice");
        assert_eq!(find_descendants(root, name).count(), 0);

        let line = QName::qualified("inv", "urn:inv", "Line");
        assert_eq!(find_descendants(root, line).count(), 2);
    }

    #[test]
    fn test_find_descendant_first_in_document_order() {
        let doc = Document::parse(NS_XML).unwrap();
        let line_name = QName::qualified("inv", "urn:inv", "Line");
        let line = find_descendants(doc.root_element(), line_name)
            .next()
            .unwrap();

        let id = find_descendant(line, &QName::qualified("b", "urn:b", "ID")).unwrap();
        assert_eq!(element_text(id), "1");
    }

    #[test]
    fn test_find_descendant_unqualified_ignores_namespaced() {
        let doc = Document::parse(NS_XML).unwrap();
        let id = find_descendant(doc.root_element(), &QName::unqualified("ID")).unwrap();
        assert_eq!(element_text(id), "plain");
    }

    #[test]
    fn test_reset_default_namespace_is_unqualified() {
        let xml = r#"<Invoice xmlns="urn:inv"><ECB14>a</ECB14><ext xmlns=""><ECB14>b</ECB14></ext></Invoice>"#;
        let doc = Document::parse(xml).unwrap();
        let found = find_descendant(doc.root_element(), &QName::unqualified("ECB14")).unwrap();
        assert_eq!(element_text(found), "b");
    }

    #[test]
    fn test_find_descendant_with_attribute_missing() {
        let xml = r#"<root><field name="a">1</field></root>"#;
        let doc = Document::parse(xml).unwrap();
        let field = QName::unqualified("field");
        assert!(find_descendant_with_attribute(doc.root_element(), &field, "name", "z").is_none());
    }

    #[test]
    fn test_element_text_empty() {
        let doc = Document::parse("<root><empty/></root>").unwrap();
        let empty = find_descendant(doc.root_element(), &QName::unqualified("empty")).unwrap();
        assert_eq!(element_text(empty), "");
    }
}
