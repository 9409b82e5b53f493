//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in lepeva::model)
//! - Services (upload worker, file intake)
//! - Handlers (in src/handlers/)
//! - Logic (pure business logic in lepeva::logic)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod effects;
pub(crate) mod materials;
pub(crate) mod navigation;

#[cfg(test)]
pub(crate) mod testing {
    use crate::ui::icons::{IconRenderer, IconTheme};
    use crate::App;
    use chrono::Utc;
    use lepeva::logic::upload::UploadPolicy;
    use lepeva::model::types::ROOT_FOLDER_ID;
    use lepeva::model::{mock, Library, Model};
    use lepeva::services::{UploadRequest, UploadResponse};
    use lepeva::{IconMode, Screen, Theme};
    use tokio::sync::mpsc;

    /// The service side of an app's upload channels
    pub(crate) struct UploadEnds {
        pub requests: mpsc::UnboundedReceiver<UploadRequest>,
        pub responses: mpsc::UnboundedSender<UploadResponse>,
    }

    /// Pictures only, at most three per batch, 1 MB each
    pub(crate) fn picture_policy() -> UploadPolicy {
        UploadPolicy {
            max_files: 3,
            max_size_mb: 1,
            accepted_types: vec!["image/*".to_string()],
        }
    }

    /// Dashboard open at Home over the mock library, confetti off
    pub(crate) fn test_app() -> (App, UploadEnds) {
        let now = Utc::now();
        let library = Library::from_records(
            mock::generate_mock_folders(now),
            mock::generate_mock_materials(now),
        );
        let mut model = Model::new(false, Theme::Default);
        model.ui.confetti_enabled = false;
        model.ui.screen = Screen::Materials;

        let (upload_tx, requests) = mpsc::unbounded_channel();
        let (responses, upload_rx) = mpsc::unbounded_channel();
        let mut app = App::from_parts(
            model,
            library,
            upload_tx,
            upload_rx,
            picture_policy(),
            IconRenderer::new(IconMode::Emoji, IconTheme::default()),
        );
        app.set_current_folder(ROOT_FOLDER_ID);
        (app, UploadEnds { requests, responses })
    }

    pub(crate) fn select(app: &mut App, name: &str) {
        let idx = app
            .model
            .visible_entries()
            .iter()
            .position(|e| e.name() == name)
            .unwrap_or_else(|| panic!("{} is not visible", name));
        app.model.navigation.selected = Some(idx);
    }

    pub(crate) fn selected_name(app: &App) -> Option<String> {
        app.model.selected_entry().map(|e| e.name().to_string())
    }
}
