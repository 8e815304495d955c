//! Dotfile path resolution.
//!
//! A dotfile lives at `<directory>/.<name>`. A directory starting with `~`
//! stands for the home directory as a whole: `~`, `~/` and `~/anything` all
//! resolve to the home directory itself.

use crate::error::{DotfileError, Result};
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Prefix that makes the file hidden.
pub const DOT_PREFIX: &str = ".";

/// Home directory shorthand.
const TILDE: char = '~';

/// Resolve the full path of the dotfile `name` inside `directory`.
///
/// Pure: no filesystem access happens here.
pub fn resolve(directory: &Path, name: &str, platform: &Platform) -> Result<PathBuf> {
    if directory.as_os_str().is_empty() {
        return Err(DotfileError::InvalidArgument("directory is required"));
    }
    if name.is_empty() {
        return Err(DotfileError::InvalidArgument("name is required"));
    }

    let base = if is_home_shorthand(directory) {
        platform
            .home_dir()
            .ok_or(DotfileError::HomeDirUnavailable)?
    } else {
        directory
    };

    let fullpath = base.join(file_name(name));
    log::debug!("resolved dotfile '{name}' to {}", fullpath.display());
    Ok(fullpath)
}

/// Base name of the dotfile: `.` followed by `name`.
pub fn file_name(name: &str) -> String {
    format!("{DOT_PREFIX}{name}")
}

fn is_home_shorthand(directory: &Path) -> bool {
    directory.to_string_lossy().starts_with(TILDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Platform {
        Platform::new(Some(PathBuf::from("/home/alice")), true)
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("myrc"), ".myrc");
        assert_eq!(file_name(".already"), "..already");
    }

    #[test]
    fn test_resolve_plain_directory() {
        let path = resolve(Path::new("/srv/project"), "myrc", &platform()).unwrap();
        assert_eq!(path, Path::new("/srv/project").join(".myrc"));
    }

    #[test]
    fn test_resolve_tilde() {
        let path = resolve(Path::new("~"), "cfgtest", &platform()).unwrap();
        assert_eq!(path, Path::new("/home/alice").join(".cfgtest"));
    }

    #[test]
    fn test_tilde_replaces_whole_directory() {
        let path = resolve(Path::new("~/nested/dir"), "cfgtest", &platform()).unwrap();
        assert_eq!(path, Path::new("/home/alice").join(".cfgtest"));
    }

    #[test]
    fn test_relative_directory_kept_verbatim() {
        let path = resolve(Path::new("config"), "myrc", &platform()).unwrap();
        assert_eq!(path, PathBuf::from("config").join(".myrc"));
    }

    #[test]
    fn test_tilde_in_middle_is_not_expanded() {
        let path = resolve(Path::new("/tmp/~x"), "myrc", &platform()).unwrap();
        assert_eq!(path, Path::new("/tmp/~x").join(".myrc"));
    }

    #[test]
    fn test_empty_arguments_rejected() {
        assert!(matches!(
            resolve(Path::new(""), "myrc", &platform()),
            Err(DotfileError::InvalidArgument(_))
        ));
        assert!(matches!(
            resolve(Path::new("/tmp"), "", &platform()),
            Err(DotfileError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_tilde_without_home_fails() {
        let platform = Platform::new(None, true);
        assert!(matches!(
            resolve(Path::new("~"), "myrc", &platform),
            Err(DotfileError::HomeDirUnavailable)
        ));
        // A plain directory never needs the home directory.
        assert!(resolve(Path::new("/tmp"), "myrc", &platform).is_ok());
    }
}
