//! Source directory and artifact lookup errors

use super::AcError;

/// Creates a source not found error
pub fn not_found(path: impl Into<String>) -> AcError {
    AcError::SourceNotFound { path: path.into() }
}

/// Creates a no components error
pub fn no_components(path: impl Into<String>) -> AcError {
    AcError::NoComponents { path: path.into() }
}

/// Creates an artifact not found error
pub fn artifact_not_found(kind: impl Into<String>, name: impl Into<String>) -> AcError {
    AcError::ArtifactNotFound {
        kind: kind.into(),
        name: name.into(),
    }
}
