//! Platform and merge policy errors

use super::AcError;

/// Creates an unknown platform error
pub fn unknown(name: impl Into<String>) -> AcError {
    AcError::UnknownPlatform { name: name.into() }
}

/// Creates an invalid merge policy error
pub fn invalid_merge_policy(value: impl Into<String>) -> AcError {
    AcError::InvalidMergePolicy {
        value: value.into(),
    }
}
