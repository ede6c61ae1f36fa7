//! Error types for tree walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while walking and printing a tree.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Permission denied listing a directory.
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path vanished or never existed.
    #[error("no such file or directory: {path}")]
    NotFound { path: PathBuf },

    /// Any other I/O failure while listing a directory.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing output or reading the prompt answer failed.
    #[error("console I/O error: {0}")]
    Console(#[from] io::Error),
}

impl WalkError {
    /// Classify an I/O error raised for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Whether the walker renders this error as a placeholder and carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

pub type Result<T, E = WalkError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_is_classified() {
        let err = WalkError::io(
            "/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, WalkError::PermissionDenied { .. }));
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "permission denied: /locked");
    }

    #[test]
    fn test_not_found_is_not_recoverable() {
        let err = WalkError::io("/gone", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, WalkError::NotFound { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_other_errors_keep_their_source() {
        let err = WalkError::io("/dev/weird", io::Error::other("disk on fire"));
        match &err {
            WalkError::Io { path, source } => {
                assert_eq!(path, &PathBuf::from("/dev/weird"));
                assert_eq!(source.to_string(), "disk on fire");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        assert!(err.to_string().contains("disk on fire"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_console_errors_convert_from_io() {
        let err: WalkError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, WalkError::Console(_)));
        assert!(!err.is_recoverable());
    }
}
