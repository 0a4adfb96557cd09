//! File system errors

use std::path::Path;

use super::AcError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AcError {
    AcError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AcError {
    AcError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Wraps an IO error raised while reading `path`
pub fn read_error(path: &Path, err: &std::io::Error) -> AcError {
    read_failed(path.display().to_string(), err.to_string())
}

/// Wraps an IO error raised while writing `path`
pub fn write_error(path: &Path, err: &std::io::Error) -> AcError {
    write_failed(path.display().to_string(), err.to_string())
}
