//! Output file handling for rendered documents

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Write a rendered document, replacing any existing file
///
/// Missing parent directories are created. Returns the number of bytes
/// written.
pub fn write_document(path: &Path, content: &str) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| Error::write(path, e))?;
        }
    }

    fs::write(path, content).map_err(|e| Error::write(path, e))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());

    Ok(content.len())
}
