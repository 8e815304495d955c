//! Error type shared by every dotfile operation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = DotfileError> = std::result::Result<T, E>;

/// Errors that can occur when resolving or accessing a dotfile.
#[derive(Debug, Error)]
pub enum DotfileError {
    /// A constructor argument was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The directory starts with `~` but no home directory is known.
    #[error("cannot expand '~': home directory could not be resolved")]
    HomeDirUnavailable,

    /// The dotfile does not exist.
    #[error("dotfile not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The dotfile content is not valid JSON for the requested type.
    #[error("failed to parse dotfile {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be encoded as JSON.
    #[error("failed to serialize document for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other filesystem failure.
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DotfileError {
    /// Returns true if the error reports a missing dotfile.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DotfileError::NotFound { .. })
    }

    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DotfileError::InvalidArgument(_) | DotfileError::HomeDirUnavailable => None,
            DotfileError::NotFound { path }
            | DotfileError::Parse { path, .. }
            | DotfileError::Serialize { path, .. }
            | DotfileError::Io { path, .. } => Some(path),
        }
    }

    pub(crate) fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        DotfileError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_display() {
        let err = DotfileError::NotFound {
            path: PathBuf::from("/tmp/.myrc"),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "dotfile not found: /tmp/.myrc");
        assert_eq!(err.path(), Some(Path::new("/tmp/.myrc")));
    }

    #[test]
    fn test_io_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DotfileError::io("failed to write", Path::new("/x/.rc"), source);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "failed to write /x/.rc: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_argument_errors_have_no_path() {
        assert_eq!(DotfileError::InvalidArgument("name is required").path(), None);
        assert_eq!(DotfileError::HomeDirUnavailable.path(), None);
    }
}
