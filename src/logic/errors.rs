//! Domain errors
//!
//! User-facing failures of the materials operations. The `Display` text is
//! what the dashboard shows.

use thiserror::Error;

/// Why an upload batch was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("You can only upload up to {max} files at once.")]
    TooManyFiles { max: usize },

    #[error("Some files are too large. Maximum size is {max_mb}MB.")]
    FileTooLarge { max_mb: u64 },

    #[error("Oops! Some files aren't allowed.")]
    TypeNotAccepted,

    #[error("No files matched that path.")]
    NoFiles,

    #[error("Could not read that path: {0}")]
    Pattern(String),
}

/// Why a drag-and-drop move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("A folder can't go inside itself!")]
    SelfParent,

    #[error("A folder can't go inside one of its own folders!")]
    IntoDescendant,

    #[error("That item no longer exists")]
    UnknownItem,

    #[error("That folder no longer exists")]
    UnknownTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_messages_match_uploader_copy() {
        assert_eq!(
            UploadError::TooManyFiles { max: 10 }.to_string(),
            "You can only upload up to 10 files at once."
        );
        assert_eq!(
            UploadError::FileTooLarge { max_mb: 10 }.to_string(),
            "Some files are too large. Maximum size is 10MB."
        );
    }
}
