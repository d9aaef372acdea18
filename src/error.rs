//! Error types for grove.
//!
//! Only [`Error::DirectoryRead`] and [`Error::Io`] ever abort anything.
//! The other variants are reported to the user or the log and the caller
//! carries on.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory a scan was started on could not be listed.
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A nested directory could not be listed during a recursive scan.
    #[error("cannot read subdirectory {}: {source}", .path.display())]
    SubtreeRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The descend target does not exist.
    #[error("no such file or directory {}: {source}", .path.display())]
    NavigationTargetMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "gone")
    }

    #[test]
    fn test_directory_read_displays_path_and_cause() {
        let err = Error::DirectoryRead {
            path: PathBuf::from("/missing"),
            source: not_found(),
        };
        assert_eq!(err.to_string(), "cannot read directory /missing: gone");
    }

    #[test]
    fn test_subtree_read_displays_path() {
        let err = Error::SubtreeRead {
            path: PathBuf::from("/root/locked"),
            source: not_found(),
        };
        assert!(err.to_string().contains("/root/locked"));
    }

    #[test]
    fn test_navigation_target_missing_displays_path() {
        let err = Error::NavigationTargetMissing {
            path: PathBuf::from("/tmp/nope"),
            source: not_found(),
        };
        assert_eq!(err.to_string(), "no such file or directory /tmp/nope: gone");
    }

    #[test]
    fn test_not_a_directory() {
        let err = Error::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(err.to_string(), "not a directory: /etc/hosts");
    }

    #[test]
    fn test_invalid_menu_choice_quotes_input() {
        let err = Error::InvalidMenuChoice("abc".to_string());
        assert_eq!(err.to_string(), "invalid menu choice: \"abc\"");
    }

    #[test]
    fn test_io_error_from_std() {
        let err: Error = not_found().into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;
        let err = Error::DirectoryRead {
            path: PathBuf::from("/x"),
            source: not_found(),
        };
        assert!(err.source().is_some());
    }
}
