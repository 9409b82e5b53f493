//! Folder view filtering
//!
//! Pure functions selecting what the current folder shows.

use crate::model::types::{Folder, Material};

/// Folders whose parent is `parent_id`
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use lepeva::logic::filter::child_folders;
/// use lepeva::model::mock::generate_mock_folders;
///
/// let folders = generate_mock_folders(Utc::now());
/// let names: Vec<&str> = child_folders(&folders, "folder-1").iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(names, vec!["Farm Animals", "Wild Animals"]);
/// ```
pub fn child_folders<'a>(folders: &'a [Folder], parent_id: &str) -> Vec<&'a Folder> {
    folders.iter().filter(|f| f.parent_id == parent_id).collect()
}

/// Materials stored directly in `folder_id`
pub fn materials_in<'a>(materials: &'a [Material], folder_id: &str) -> Vec<&'a Material> {
    materials.iter().filter(|m| m.folder_id == folder_id).collect()
}

/// Case-insensitive substring match used by the search box
///
/// An empty or whitespace-only query matches everything.
///
/// # Examples
/// ```
/// use lepeva::logic::filter::matches_query;
///
/// assert!(matches_query("Cat picture.jpg", ""));
/// assert!(matches_query("Cat picture.jpg", "PIC"));
/// assert!(!matches_query("Cat picture.jpg", "dog"));
/// ```
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}
