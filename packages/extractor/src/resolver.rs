//! Input discovery: the invoice directory and the XML files in it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{INPUT_DIR_NAME, INPUT_FILE_SUFFIX};
use crate::error::{ExtractorError, Result};

/// The input directory and the invoice files found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    pub dir: PathBuf,
    /// File names (not paths), sorted.
    pub files: Vec<String>,
}

impl InputSet {
    /// Full paths of the input files, in processing order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|name| self.dir.join(name))
    }
}

/// Directory containing the running executable.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .and_then(|path| path.canonicalize())
        .map_err(ExtractorError::ProgramLocation)?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ExtractorError::ProgramLocation(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

/// Locate the invoice files under `base_dir`.
///
/// Looks in the `bills_supermarket` subdirectory and keeps entries whose name
/// ends in `.xml`. Names are sorted so the output order does not depend on
/// the platform's directory listing order.
///
/// # Errors
/// Returns `ExtractorError::InputDirectory` if the subdirectory is missing or
/// cannot be listed.
pub fn locate_inputs(base_dir: &Path) -> Result<InputSet> {
    let dir = base_dir.join(INPUT_DIR_NAME);
    let input_error = |source| ExtractorError::InputDirectory {
        path: dir.clone(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(&dir).map_err(input_error)? {
        let entry = entry.map_err(input_error)?;
        // Non-UTF-8 names cannot end in ".xml" as a string; skip them.
        if let Some(name) = entry.file_name().to_str() {
            if is_invoice_file(name) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "Located invoice files");
    Ok(InputSet { dir, files })
}

/// Case-sensitive suffix check for invoice file names.
///
/// # Examples
/// ```
/// use ubl_extractor::resolver::is_invoice_file;
///
/// assert!(is_invoice_file("factura.xml"));
/// assert!(!is_invoice_file("factura.XML"));
/// assert!(!is_invoice_file("factura.xml.bak"));
/// ```
pub fn is_invoice_file(name: &str) -> bool {
    name.ends_with(INPUT_FILE_SUFFIX)
}
