//! Local file intake
//!
//! Turns a path or glob typed into the upload dialog into proposed files.
//! Only metadata is read; file contents are never opened.

use std::path::{Path, PathBuf};

use crate::logic::errors::UploadError;
use crate::logic::file::guess_mime_type;
use crate::model::types::ProposedFile;

/// Expand a leading `~` to the home directory
fn expand_home(pattern: &str) -> String {
    if let Some(rest) = pattern.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    }
    pattern.to_string()
}

fn proposed_from_path(path: &Path) -> Option<ProposedFile> {
    let metadata = std::fs::metadata(path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    let name = path.file_name()?.to_string_lossy().into_owned();
    Some(ProposedFile {
        mime_type: guess_mime_type(&name),
        name,
        size: metadata.len(),
    })
}

/// Collect the regular files matched by `pattern`, sorted by path
///
/// Directories and unreadable entries are skipped. An empty match is
/// `UploadError::NoFiles`.
pub fn collect_files(pattern: &str) -> Result<Vec<ProposedFile>, UploadError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(UploadError::NoFiles);
    }

    let expanded = expand_home(pattern);
    let entries = glob::glob(&expanded).map_err(|e| UploadError::Pattern(e.to_string()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable upload candidate");
                None
            }
        })
        .collect();
    paths.sort();

    let files: Vec<ProposedFile> = paths.iter().filter_map(|p| proposed_from_path(p)).collect();
    tracing::debug!(pattern = %expanded, matched = files.len(), "collected upload candidates");

    if files.is_empty() {
        return Err(UploadError::NoFiles);
    }
    Ok(files)
}
