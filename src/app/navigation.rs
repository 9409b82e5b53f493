//! Navigation orchestration methods
//!
//! Methods for moving around the folder forest:
//! - Entering folders and jumping to breadcrumbs
//! - Going back to the parent folder and home
//! - Moving the selection around the contents grid

use crate::{logic, App};
use lepeva::model::types::{Entry, ROOT_FOLDER_ID};
use lepeva::Screen;
use std::time::{Duration, Instant};

impl App {
    /// Leave the landing page for the materials dashboard
    pub(crate) fn open_dashboard(&mut self) {
        self.model.ui.screen = Screen::Materials;
        let delay = Duration::from_millis(logic::ui::WELCOME_CONFETTI_DELAY_MS as u64);
        self.model.ui.welcome_confetti_at = Some(Instant::now() + delay);
        let current = self.model.navigation.current_folder.clone();
        self.set_current_folder(&current);
        tracing::debug!("dashboard opened");
    }

    pub(crate) fn show_landing(&mut self) {
        self.model.ui.close_all_modals();
        self.model.ui.screen = Screen::Landing;
    }

    /// Make `folder_id` current and rebuild the breadcrumb path
    pub(crate) fn set_current_folder(&mut self, folder_id: &str) {
        let path = self.model.library.path_to(folder_id);
        self.model.navigation.set_location(folder_id, path);
        self.model.ui.search_query.clear();
        self.model.ui.search_mode = false;

        let len = self.model.visible_entries().len();
        self.model.navigation.selected = logic::navigation::clamp_selection(None, len);

        tracing::debug!(
            folder = folder_id,
            depth = self.model.navigation.path.len(),
            "current folder changed"
        );
    }

    /// Rebuild the path for the current folder after the library changed
    pub(crate) fn refresh_location(&mut self) {
        let current = self.model.navigation.current_folder.clone();
        self.model.navigation.path = self.model.library.path_to(&current);

        let len = self.model.visible_entries().len();
        self.model.navigation.selected =
            logic::navigation::clamp_selection(self.model.navigation.selected, len);
    }

    /// Enter the selected folder card; file cards do nothing
    pub(crate) fn open_selected(&mut self) {
        let target = match self.model.selected_entry() {
            Some(Entry::Folder(folder)) => folder.id.clone(),
            _ => return,
        };
        self.set_current_folder(&target);
    }

    /// Go up one level; nothing happens at the root
    pub(crate) fn go_back(&mut self) {
        if let Some(target) = logic::path::back_target(&self.model.navigation.path) {
            let came_from = self.model.navigation.current_folder.clone();
            self.set_current_folder(&target);
            self.select_entry_by_id(&came_from);
        }
    }

    pub(crate) fn go_home(&mut self) {
        if !self.model.navigation.is_at_root() {
            self.set_current_folder(ROOT_FOLDER_ID);
        }
    }

    /// Jump to the breadcrumb at `index` (0 = top-level folder)
    pub(crate) fn navigate_to_crumb(&mut self, index: usize) {
        let Some(folder) = self.model.navigation.path.get(index) else {
            return;
        };
        let target = folder.id.clone();
        if target != self.model.navigation.current_folder {
            self.set_current_folder(&target);
        }
    }

    fn select_entry_by_id(&mut self, id: &str) {
        if let Some(idx) = self.model.visible_entries().iter().position(|e| e.id() == id) {
            self.model.navigation.selected = Some(idx);
        }
    }

    pub(crate) fn next_item(&mut self) {
        let len = self.model.visible_entries().len();
        self.model.navigation.selected =
            logic::navigation::next_selection(self.model.navigation.selected, len);
    }

    pub(crate) fn previous_item(&mut self) {
        let len = self.model.visible_entries().len();
        self.model.navigation.selected =
            logic::navigation::prev_selection(self.model.navigation.selected, len);
    }

    pub(crate) fn row_down(&mut self) {
        let len = self.model.visible_entries().len();
        self.model.navigation.selected =
            logic::navigation::row_down(self.model.navigation.selected, len, self.grid_columns);
    }

    pub(crate) fn row_up(&mut self) {
        let len = self.model.visible_entries().len();
        self.model.navigation.selected =
            logic::navigation::row_up(self.model.navigation.selected, len, self.grid_columns);
    }

    pub(crate) fn jump_to_first(&mut self) {
        if !self.model.visible_entries().is_empty() {
            self.model.navigation.selected = Some(0);
        }
    }

    pub(crate) fn jump_to_last(&mut self) {
        let len = self.model.visible_entries().len();
        if len > 0 {
            self.model.navigation.selected = Some(len - 1);
        }
    }
}
