//! The dotfile handle.
//!
//! A [`Dotfile`] is created once with a directory and a name. Its path is
//! resolved at construction and never changes; every operation afterwards is
//! an independent filesystem call run on tokio's blocking pool.

use crate::error::{DotfileError, Result};
use crate::path;
use crate::platform::Platform;
use crate::store::{self, Format};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Handle to a single JSON dotfile.
///
/// Holds no open file between calls. Cloning is cheap and clones refer to
/// the same path.
#[derive(Debug, Clone)]
pub struct Dotfile {
    fullpath: Arc<Path>,
    owner_only: bool,
    format: Format,
}

impl Dotfile {
    /// Handle for `<directory>/.<name>` on the host platform.
    ///
    /// A `directory` starting with `~` means the user's home directory.
    pub fn new(directory: impl AsRef<Path>, name: &str) -> Result<Self> {
        Self::with_platform(directory, name, &Platform::host())
    }

    /// Handle for `<directory>/.<name>` on an explicit platform.
    pub fn with_platform(
        directory: impl AsRef<Path>,
        name: &str,
        platform: &Platform,
    ) -> Result<Self> {
        let fullpath = path::resolve(directory.as_ref(), name, platform)?;
        Ok(Self {
            fullpath: Arc::from(fullpath),
            owner_only: platform.supports_posix_permissions(),
            format: Format::default(),
        })
    }

    /// Same dotfile, written with another JSON layout.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Resolved path of the dotfile.
    pub fn path(&self) -> &Path {
        &self.fullpath
    }

    /// JSON layout used by [`Dotfile::write`].
    pub fn format(&self) -> Format {
        self.format
    }

    /// Whether the dotfile currently exists.
    pub async fn exists(&self) -> Result<bool> {
        let path = Arc::clone(&self.fullpath);
        run_blocking(&self.fullpath, move || store::exists(&path)).await
    }

    /// Read and decode the dotfile.
    ///
    /// Fails with [`DotfileError::NotFound`] if the file is missing and
    /// [`DotfileError::Parse`] if it does not hold a valid `T`.
    pub async fn read<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = Arc::clone(&self.fullpath);
        run_blocking(&self.fullpath, move || store::read(&path)).await
    }

    /// Replace the dotfile content with `document` and hand it back.
    ///
    /// On platforms with POSIX permission bits the file is left readable and
    /// writable by its owner only.
    pub async fn write<T>(&self, document: T) -> Result<T>
    where
        T: Serialize + Send + 'static,
    {
        let path = Arc::clone(&self.fullpath);
        let (format, owner_only) = (self.format, self.owner_only);
        run_blocking(&self.fullpath, move || {
            store::write(&path, &document, format, owner_only)?;
            Ok(document)
        })
        .await
    }

    /// Delete the dotfile. Fails with [`DotfileError::NotFound`] if it is missing.
    pub async fn delete(&self) -> Result<()> {
        let path = Arc::clone(&self.fullpath);
        run_blocking(&self.fullpath, move || store::remove(&path)).await
    }
}

/// Run a blocking filesystem call without stalling the async caller.
async fn run_blocking<T, F>(path: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => Err(DotfileError::io(
            "runtime shut down while accessing",
            path,
            std::io::Error::other(err),
        )),
    }
}
