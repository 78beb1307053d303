//! File system errors

use std::path::Path;

use super::CompanionError;

/// Creates a file read error
pub fn read_failed(path: &Path, err: impl ToString) -> CompanionError {
    CompanionError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, err: impl ToString) -> CompanionError {
    CompanionError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CompanionError {
    CompanionError::IoError {
        message: message.into(),
    }
}
