use crate::error::{IsoAssetsError, Result};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => IsoAssetsError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => IsoAssetsError::from(e),
        })?;
    }
    Ok(())
}

/// Directory containing `path`; a bare file name resolves to the current directory.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Creates a hidden temporary file next to `destination` so it can later be
/// renamed over it without crossing filesystems.
pub fn create_staging_file(destination: &Path) -> std::io::Result<NamedTempFile> {
    let prefix = match destination.file_name().and_then(|name| name.to_str()) {
        Some(name) => format!(".{name}."),
        None => ".iso-assets.".to_string(),
    };

    tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".part")
        .tempfile_in(parent_dir(destination))
}
