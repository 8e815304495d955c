//! Blocking JSON read/write over a single dotfile path.
//!
//! These are the primitives behind [`crate::Dotfile`]. Writes replace the
//! whole file in place (no temp file, no rename) and never create missing
//! parent directories.

use crate::error::{DotfileError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// UTF-8 byte-order mark, tolerated at the start of a dotfile.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// JSON layout used when writing a dotfile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Indented, one member per line.
    Pretty,
}

impl Format {
    /// Encode `document`, terminated by a newline.
    pub fn encode<T: Serialize + ?Sized>(self, document: &T) -> serde_json::Result<Vec<u8>> {
        let mut bytes = match self {
            Format::Compact => serde_json::to_vec(document)?,
            Format::Pretty => serde_json::to_vec_pretty(document)?,
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Check whether `path` exists.
///
/// A missing file is `Ok(false)`. Failures that leave the answer unknown,
/// such as a permission error on a parent directory, are returned as errors.
pub fn exists(path: &Path) -> Result<bool> {
    let found = path
        .try_exists()
        .map_err(|e| DotfileError::io("failed to check", path, e))?;
    log::debug!("dotfile {} exists: {found}", path.display());
    Ok(found)
}

/// Read and decode the JSON document at `path`.
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read(path).map_err(|e| not_found_or_io("failed to read", path, e))?;
    log::trace!("read {} bytes from {}", content.len(), path.display());

    let json = content.strip_prefix(UTF8_BOM).unwrap_or(&content[..]);
    serde_json::from_slice(json).map_err(|source| DotfileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode `document` and write it to `path`, replacing any previous content.
///
/// When `owner_only` is set the file mode is then restricted to owner
/// read/write. A failure there fails the whole write.
pub fn write<T: Serialize + ?Sized>(
    path: &Path,
    document: &T,
    format: Format,
    owner_only: bool,
) -> Result<()> {
    let bytes = format
        .encode(document)
        .map_err(|source| DotfileError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    std::fs::write(path, &bytes).map_err(|e| DotfileError::io("failed to write", path, e))?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());

    if owner_only {
        restrict_to_owner(path)
            .map_err(|e| DotfileError::io("failed to set permissions on", path, e))?;
    }
    Ok(())
}

/// Delete the dotfile at `path`.
pub fn remove(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| not_found_or_io("failed to delete", path, e))?;
    log::debug!("deleted {}", path.display());
    Ok(())
}

fn not_found_or_io(action: &'static str, path: &Path, err: std::io::Error) -> DotfileError {
    if err.kind() == std::io::ErrorKind::NotFound {
        DotfileError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        DotfileError::io(action, path, err)
    }
}

/// Set the file mode to owner read/write only (`chmod 600`).
#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mode = u32::from(libc::S_IRUSR | libc::S_IWUSR);
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> std::io::Result<()> {
    // No POSIX mode bits to set
    Ok(())
}
