//! Breadcrumb path logic
//!
//! Pure functions for reconstructing the ancestor chain of a folder and for
//! deciding where "back" goes.

use std::collections::HashSet;

use crate::model::types::{Folder, ROOT_FOLDER_ID};

/// Build the breadcrumb path from the top-level ancestor down to `target_id`
///
/// Walks parent references until the root sentinel is reached, prepending
/// each folder found. The result is empty when `target_id` is the root.
///
/// A parent id that names no folder truncates the chain at that point: the
/// part already collected is returned and a warning is logged. A repeated
/// id also stops the walk.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use lepeva::logic::path::build_folder_path;
/// use lepeva::model::mock::generate_mock_folders;
///
/// let folders = generate_mock_folders(Utc::now());
/// let path = build_folder_path("folder-4", &folders);
/// let names: Vec<&str> = path.iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(names, vec!["Animals", "Farm Animals"]);
///
/// assert!(build_folder_path("root", &folders).is_empty());
/// ```
pub fn build_folder_path(target_id: &str, folders: &[Folder]) -> Vec<Folder> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor = target_id;

    while cursor != ROOT_FOLDER_ID {
        if !seen.insert(cursor) {
            tracing::warn!(folder = cursor, "cycle in folder parents, truncating path");
            break;
        }
        let Some(folder) = folders.iter().find(|f| f.id == cursor) else {
            tracing::warn!(folder = cursor, "dangling folder reference, truncating path");
            break;
        };
        path.push(folder.clone());
        cursor = &folder.parent_id;
    }

    path.reverse();
    path
}

/// Where "back" navigates to from the given path
///
/// - empty path (already at root): `None`, nothing happens
/// - one element: the root
/// - otherwise: the parent of the current folder
///
/// # Examples
/// ```
/// use lepeva::logic::path::back_target;
///
/// assert_eq!(back_target(&[]), None);
/// ```
pub fn back_target(path: &[Folder]) -> Option<String> {
    match path.len() {
        0 => None,
        1 => Some(ROOT_FOLDER_ID.to_string()),
        n => Some(path[n - 2].id.clone()),
    }
}

/// Whether `ancestor_id` appears on the parent chain above `folder_id`
pub fn is_ancestor(ancestor_id: &str, folder_id: &str, folders: &[Folder]) -> bool {
    let path = build_folder_path(folder_id, folders);
    // The last element is folder_id itself
    path.iter()
        .take(path.len().saturating_sub(1))
        .any(|f| f.id == ancestor_id)
}
