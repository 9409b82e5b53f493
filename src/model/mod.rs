//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **Library**: the authoritative folders and materials
//! - **NavigationModel**: current folder, breadcrumb path, selection, drag
//! - **UiModel**: screen, theme, dialogs, messages, effects
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state for debugging
//! - No services: All I/O lives in the binary's runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod library;
pub mod mock;
pub mod navigation;
pub mod types;
pub mod ui;

pub use library::Library;
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use crate::logic;
use crate::Theme;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Folders and materials
    pub library: Library,

    /// Navigation state
    pub navigation: NavigationModel,

    /// UI state
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with an empty library
    pub fn new(vim_mode: bool, theme: Theme) -> Self {
        Self {
            library: Library::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode, theme),
        }
    }

    /// Folders shown in the current view (search applied)
    pub fn visible_folders(&self) -> Vec<&Folder> {
        self.library
            .child_folders(&self.navigation.current_folder)
            .into_iter()
            .filter(|f| logic::filter::matches_query(&f.name, &self.ui.search_query))
            .collect()
    }

    /// Materials shown in the current view (search applied)
    pub fn visible_materials(&self) -> Vec<&Material> {
        self.library
            .materials_in(&self.navigation.current_folder)
            .into_iter()
            .filter(|m| logic::filter::matches_query(&m.name, &self.ui.search_query))
            .collect()
    }

    /// Grid entries in display order: folders first, then files
    pub fn visible_entries(&self) -> Vec<Entry<'_>> {
        let mut entries: Vec<Entry> = self.visible_folders().into_iter().map(Entry::Folder).collect();
        entries.extend(self.visible_materials().into_iter().map(Entry::File));
        entries
    }

    /// Entry under the grid selection
    pub fn selected_entry(&self) -> Option<Entry<'_>> {
        let idx = self.navigation.selected?;
        self.visible_entries().get(idx).copied()
    }

    /// Check if any modal input is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn loaded() -> Model {
        let now = Utc::now();
        let mut model = Model::new(false, Theme::Default);
        model.library = Library::from_records(
            mock::generate_mock_folders(now),
            mock::generate_mock_materials(now),
        );
        model
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new(false, Theme::Default);
        assert!(model.library.folders().is_empty());
        assert!(model.navigation.is_at_root());
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_visible_entries_folders_first() {
        let model = loaded();
        let names: Vec<&str> = model.visible_entries().iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["Animals", "Colors", "Numbers", "ABC Phonics.mp3", "Welcome Presentation.pptx"]
        );
    }

    #[test]
    fn test_search_narrows_view() {
        let mut model = loaded();
        model.ui.search_query = "col".to_string();
        let names: Vec<&str> = model.visible_entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Colors"]);
    }

    #[test]
    fn test_selected_entry() {
        let mut model = loaded();
        assert!(model.selected_entry().is_none());
        model.navigation.selected = Some(3);
        assert_eq!(model.selected_entry().map(|e| e.name()), Some("ABC Phonics.mp3"));
    }
}
