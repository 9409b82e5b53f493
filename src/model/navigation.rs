//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! current folder, breadcrumb path, grid selection and the carried item.

use super::types::{DragItem, Folder, ROOT_FOLDER_ID};

/// Navigation state (current folder, breadcrumbs, selection, drag)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Id of the folder being viewed (ROOT_FOLDER_ID at the top)
    pub current_folder: String,

    /// Derived breadcrumb path, recomputed whenever current_folder changes
    pub path: Vec<Folder>,

    /// Selected cell in the contents grid (folders first, then files)
    pub selected: Option<usize>,

    /// Item picked up for drag-and-drop, if any
    pub drag: Option<DragItem>,
}

impl NavigationModel {
    /// Create initial navigation model at the root
    pub fn new() -> Self {
        Self {
            current_folder: ROOT_FOLDER_ID.to_string(),
            path: Vec::new(),
            selected: None,
            drag: None,
        }
    }

    pub fn is_at_root(&self) -> bool {
        self.current_folder == ROOT_FOLDER_ID
    }

    /// Move to `folder_id` with its precomputed path
    pub fn set_location(&mut self, folder_id: &str, path: Vec<Folder>) {
        self.current_folder = folder_id.to_string();
        self.path = path;
        self.selected = None;
    }

    /// Display name of the current folder (None at root)
    pub fn current_folder_name(&self) -> Option<&str> {
        self.path.last().map(|f| f.name.as_str())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert!(model.is_at_root());
        assert!(model.path.is_empty());
        assert!(model.selected.is_none());
        assert!(!model.is_dragging());
    }

    #[test]
    fn test_set_location_resets_selection() {
        let mut model = NavigationModel::new();
        model.selected = Some(3);
        let animals = Folder {
            id: "folder-1".to_string(),
            name: "Animals".to_string(),
            parent_id: ROOT_FOLDER_ID.to_string(),
            created_at: Utc::now(),
        };
        model.set_location("folder-1", vec![animals]);
        assert_eq!(model.current_folder, "folder-1");
        assert_eq!(model.current_folder_name(), Some("Animals"));
        assert!(model.selected.is_none());
    }
}
