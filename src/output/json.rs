//! JSON file writer.

use crate::error::WriteError;
use crate::models::OutputDocument;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `document` as pretty JSON to `path`, replacing any existing file.
///
/// The JSON goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers never see a partial file and a failed
/// write leaves the previous file untouched.
///
/// # Returns
/// * `Ok(usize)` - Number of records written
/// * `Err` - On serialization or filesystem failure
pub fn write_document(document: &OutputDocument, path: &Path) -> Result<usize, WriteError> {
    let json = serde_json::to_string_pretty(document).map_err(WriteError::Serialize)?;
    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.write_all(b"\n").map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    // NamedTempFile is created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_err)?;
    }

    tmp.persist(path).map_err(|e| io_err(e.error))?;
    log::debug!("Wrote {} bytes to {}", json.len() + 1, path.display());

    Ok(document.len())
}
