//! XML utilities for namespace-aware lookups in DOM trees.

mod encoding;
mod utils;

pub use encoding::{declared_encoding, decode_document, EncodingError};

pub use utils::{
    element_text, find_descendant, find_descendant_with_attribute, find_descendants, has_name,
    QName,
};
