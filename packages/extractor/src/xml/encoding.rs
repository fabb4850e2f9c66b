//! Decoding of XML documents into UTF-8 text.
//!
//! `roxmltree` only parses `&str`, so invoices declared as ISO-8859-1 (or any
//! other non-UTF-8 encoding) are decoded here first.

use std::borrow::Cow;

use encoding_rs::Encoding;
use thiserror::Error;

/// Bytes of the document searched for the XML declaration.
const DECLARATION_SCAN_LIMIT: usize = 1024;

/// Why a document could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The declared encoding label is not known.
    #[error("unsupported encoding '{0}'")]
    Unsupported(String),

    /// The bytes are not valid in the detected encoding.
    #[error("invalid {0} byte sequence")]
    Malformed(&'static str),
}

/// Read the `encoding` pseudo-attribute from an XML declaration.
///
/// # Examples
/// ```
/// use ubl_extractor::xml::declared_encoding;
///
/// let xml = br#"<?xml version="1.0" encoding='ISO-8859-1'?><a/>"#;
/// assert_eq!(declared_encoding(xml), Some("ISO-8859-1"));
/// assert_eq!(declared_encoding(b"<a/>"), None);
/// ```
pub fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let head = &bytes[..bytes.len().min(DECLARATION_SCAN_LIMIT)];
    let end = head.windows(2).position(|w| w == b"?>")?;
    let declaration = std::str::from_utf8(&head[..end]).ok()?;

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    value.find(quote).map(|close| &value[..close])
}

/// Decode a document to UTF-8 text.
///
/// A byte order mark wins over the declaration; without either the document
/// is taken to be UTF-8. Malformed input is an error rather than being
/// replaced with U+FFFD.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, EncodingError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => {
            let encoding = match declared_encoding(bytes) {
                Some(label) => Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| EncodingError::Unsupported(label.to_string()))?,
                None => encoding_rs::UTF_8,
            };
            (encoding, bytes)
        }
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(EncodingError::Malformed(encoding.name()))
}
