//! Upload intake logic
//!
//! Validation of a proposed batch against the client-side limits, and
//! synthesis of the material records for an accepted batch.

use chrono::{DateTime, Utc};

use crate::logic::errors::UploadError;
use crate::logic::file;
use crate::model::types::{Material, ProposedFile};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Limits applied before anything is uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_size_mb: u64,
    /// MIME patterns ("image/*", "application/pdf") or extensions (".docx").
    /// Empty means everything is accepted.
    pub accepted_types: Vec<String>,
}

impl UploadPolicy {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(BYTES_PER_MB)
    }
}

/// Whether a file matches one of the accepted patterns
///
/// # Examples
/// ```
/// use lepeva::logic::upload::is_accepted;
/// use lepeva::model::types::ProposedFile;
///
/// let accepted = vec!["image/*".to_string(), ".docx".to_string()];
/// let photo = ProposedFile { name: "cat.png".into(), mime_type: "image/png".into(), size: 1 };
/// let notes = ProposedFile { name: "Notes.DOCX".into(), mime_type: "application/octet-stream".into(), size: 1 };
/// let script = ProposedFile { name: "run.sh".into(), mime_type: "application/x-sh".into(), size: 1 };
/// assert!(is_accepted(&photo, &accepted));
/// assert!(is_accepted(&notes, &accepted));
/// assert!(!is_accepted(&script, &accepted));
/// ```
pub fn is_accepted(file: &ProposedFile, accepted_types: &[String]) -> bool {
    if accepted_types.is_empty() {
        return true;
    }

    let extension = file::dotted_extension(&file.name);
    let mime_type = file.mime_type.to_lowercase();

    accepted_types.iter().any(|pattern| {
        let pattern = pattern.trim().to_lowercase();
        if pattern.starts_with('.') {
            extension.as_deref() == Some(pattern.as_str())
        } else {
            match glob::Pattern::new(&pattern) {
                Ok(p) => p.matches(&mime_type),
                Err(_) => pattern == mime_type,
            }
        }
    })
}

/// Validate a batch before any state changes
///
/// Files of a type outside `accepted_types` are dropped first; the count
/// and size limits then apply to what is left. Returns the files to upload.
///
/// Checks in order: empty batch, nothing accepted, file count, per-file
/// size. The first failure wins and nothing is uploaded.
pub fn validate_batch(
    files: &[ProposedFile],
    policy: &UploadPolicy,
) -> Result<Vec<ProposedFile>, UploadError> {
    if files.is_empty() {
        return Err(UploadError::NoFiles);
    }

    let accepted: Vec<ProposedFile> = files
        .iter()
        .filter(|f| is_accepted(f, &policy.accepted_types))
        .cloned()
        .collect();
    if accepted.is_empty() {
        return Err(UploadError::TypeNotAccepted);
    }

    if accepted.len() > policy.max_files {
        return Err(UploadError::TooManyFiles {
            max: policy.max_files,
        });
    }

    let max_bytes = policy.max_size_bytes();
    if accepted.iter().any(|f| f.size > max_bytes) {
        return Err(UploadError::FileTooLarge {
            max_mb: policy.max_size_mb,
        });
    }

    Ok(accepted)
}

/// Fresh id for an uploaded material
pub fn new_material_id() -> String {
    format!("material-new-{}", uuid::Uuid::new_v4())
}

/// Build material records for an accepted batch, tagged with `folder_id`
pub fn synthesize_materials(
    files: &[ProposedFile],
    folder_id: &str,
    now: DateTime<Utc>,
) -> Vec<Material> {
    files
        .iter()
        .map(|f| Material {
            id: new_material_id(),
            name: f.name.clone(),
            mime_type: if f.mime_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                f.mime_type.clone()
            },
            size: f.size,
            last_modified: now,
            folder_id: folder_id.to_string(),
            url: None,
            session_id: None,
        })
        .collect()
}
