//! Folder business logic
//!
//! Name validation, id generation and drag-and-drop move validation.

use crate::logic::errors::MoveError;
use crate::logic::path;
use crate::model::types::{Folder, ItemKind, Material, ROOT_FOLDER_ID};

/// Validate a proposed folder name
///
/// Returns the trimmed name, or `None` when nothing is left after trimming.
///
/// # Examples
/// ```
/// use lepeva::logic::folder::validate_folder_name;
///
/// assert_eq!(validate_folder_name("  Shapes "), Some("Shapes"));
/// assert_eq!(validate_folder_name("   "), None);
/// assert_eq!(validate_folder_name(""), None);
/// ```
pub fn validate_folder_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Fresh id for a user-created folder
pub fn new_folder_id() -> String {
    format!("folder-new-{}", uuid::Uuid::new_v4())
}

/// Check that moving `id` under `target_id` keeps the folder forest valid
///
/// Rejects:
/// - a folder dropped onto itself
/// - a folder dropped into one of its own descendants
/// - an unknown dragged item
/// - an unknown target (anything but the root or an existing folder)
pub fn validate_move(
    kind: ItemKind,
    id: &str,
    target_id: &str,
    folders: &[Folder],
    materials: &[Material],
) -> Result<(), MoveError> {
    if kind == ItemKind::Folder && id == target_id {
        return Err(MoveError::SelfParent);
    }

    let known = match kind {
        ItemKind::Folder => folders.iter().any(|f| f.id == id),
        ItemKind::File => materials.iter().any(|m| m.id == id),
    };
    if !known {
        return Err(MoveError::UnknownItem);
    }

    if target_id != ROOT_FOLDER_ID && !folders.iter().any(|f| f.id == target_id) {
        return Err(MoveError::UnknownTarget);
    }

    if kind == ItemKind::Folder && path::is_ancestor(id, target_id, folders) {
        return Err(MoveError::IntoDescendant);
    }

    Ok(())
}
