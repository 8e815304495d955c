//! Host platform context.
//!
//! Everything a handle needs to know about the machine it runs on is captured
//! in a [`Platform`] value: where the user's home directory is, and whether the
//! filesystem understands POSIX permission bits. `Platform::host()` reads the
//! real host; tests build their own with [`Platform::new`].

use std::path::{Path, PathBuf};

/// Home directory and filesystem capabilities of the target platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    home_dir: Option<PathBuf>,
    posix_permissions: bool,
}

impl Platform {
    /// Platform with an explicit home directory and capability.
    pub fn new(home_dir: Option<PathBuf>, posix_permissions: bool) -> Self {
        Self {
            home_dir,
            posix_permissions,
        }
    }

    /// The platform this process runs on.
    ///
    /// The home directory comes from `dirs::home_dir()`. POSIX permission bits
    /// are reported on every unix target and never on Windows.
    pub fn host() -> Self {
        Self::new(dirs::home_dir(), cfg!(unix))
    }

    /// The invoking user's home directory, if known.
    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Whether files can be restricted with POSIX permission bits.
    pub fn supports_posix_permissions(&self) -> bool {
        self.posix_permissions
    }

    /// Same platform with a different home directory.
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// Same platform with the POSIX permission capability switched.
    pub fn with_posix_permissions(mut self, enabled: bool) -> Self {
        self.posix_permissions = enabled;
        self
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}
