//! Materials orchestration methods
//!
//! Methods that change the library:
//! - Creating folders
//! - Upload intake, dispatch and completion
//! - Keyboard drag-and-drop (pick up, drop, cancel)

use crate::{logic, App};
use chrono::Utc;
use lepeva::model::types::{DragItem, Entry, InputDialog, UploadPhase, ROOT_FOLDER_ID};
use lepeva::services::{intake, UploadRequest, UploadResponse};
use std::time::Instant;

impl App {
    pub(crate) fn open_create_folder_dialog(&mut self) {
        self.model.ui.search_mode = false;
        self.model.ui.input_dialog = Some(InputDialog::CreateFolder {
            name: String::new(),
        });
    }

    /// Create a folder in the current folder; a blank name does nothing
    pub(crate) fn submit_create_folder(&mut self, name: &str) {
        let parent = self.model.navigation.current_folder.clone();
        let created = self
            .model
            .library
            .create_folder(name, &parent, Utc::now())
            .map(|f| (f.id.clone(), f.name.clone()));

        let Some((id, name)) = created else {
            tracing::debug!("ignored blank folder name");
            return;
        };

        tracing::info!(folder = %id, parent = %parent, "folder created");
        self.model.ui.upload_error = None;
        self.refresh_location();
        if let Some(idx) = self.model.visible_entries().iter().position(|e| e.id() == id) {
            self.model.navigation.selected = Some(idx);
        }
        self.model.show_toast(format!("Folder \"{}\" created!", name));
        self.fire_confetti();
    }

    pub(crate) fn open_upload_dialog(&mut self) {
        if self.model.ui.is_uploading() {
            self.model.show_toast("Hold on, still uploading!".to_string());
            return;
        }
        self.model.ui.search_mode = false;
        self.model.ui.input_dialog = Some(InputDialog::Upload {
            pattern: String::new(),
        });
    }

    /// Collect, validate and dispatch a batch into the current folder
    ///
    /// Validation failures only set the uploader's inline error.
    pub(crate) fn submit_upload(&mut self, pattern: &str) {
        let files = match intake::collect_files(pattern) {
            Ok(files) => files,
            Err(e) => {
                tracing::debug!(error = %e, "upload intake failed");
                self.model.ui.upload_error = Some(e.to_string());
                return;
            }
        };

        let proposed = files.len();
        let files = match logic::upload::validate_batch(&files, &self.upload_policy) {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::debug!(error = %e, files = proposed, "upload batch rejected");
                self.model.ui.upload_error = Some(e.to_string());
                return;
            }
        };
        if files.len() < proposed {
            tracing::debug!(skipped = proposed - files.len(), "skipped files of a type not accepted");
        }

        self.model.ui.upload_error = None;
        self.next_batch_id += 1;
        let count = files.len();
        let request = UploadRequest {
            batch_id: self.next_batch_id,
            folder_id: self.model.navigation.current_folder.clone(),
            files,
        };

        if self.upload_tx.send(request).is_err() {
            tracing::warn!("upload service is not running");
            self.model.ui.upload_error = Some("Upload service stopped".to_string());
            return;
        }

        self.model.ui.upload_phase = UploadPhase::Uploading {
            count,
            started_at: Instant::now(),
        };
    }

    /// Apply every finished batch without blocking
    pub(crate) fn drain_upload_responses(&mut self) {
        while let Ok(response) = self.upload_rx.try_recv() {
            self.handle_upload_response(response);
        }
    }

    pub(crate) fn handle_upload_response(&mut self, response: UploadResponse) {
        match response.result {
            Ok(materials) => {
                let count = materials.len();
                tracing::info!(batch = response.batch_id, folder = %response.folder_id, count, "upload added");
                self.model.library.add_materials(materials);
                self.model.ui.upload_phase = UploadPhase::Complete {
                    count,
                    finished_at: Instant::now(),
                };
                self.model.ui.upload_error = None;
                if response.folder_id != self.model.navigation.current_folder {
                    let label = self.folder_label(&response.folder_id);
                    let noun = if count == 1 { "file" } else { "files" };
                    self.model.show_toast(format!("Added {} {} to {}", count, noun, label));
                }
                self.refresh_location();
                self.fire_confetti();
            }
            Err(e) => {
                tracing::warn!(batch = response.batch_id, error = %e, "upload failed");
                self.model.ui.upload_phase = UploadPhase::Idle;
                self.model.ui.upload_error = Some(e.to_string());
            }
        }
    }

    /// Start carrying the selected card
    pub(crate) fn pick_up_selected(&mut self) {
        let Some(entry) = self.model.selected_entry() else {
            return;
        };
        let item = DragItem {
            kind: entry.kind(),
            id: entry.id().to_string(),
            name: entry.name().to_string(),
        };

        tracing::debug!(item = %item.id, "picked up");
        self.model
            .show_toast(format!("Carrying {}. Enter on a folder or p to drop here", item.name));
        self.model.navigation.drag = Some(item);
    }

    /// Drop the carried item onto the selected folder card
    pub(crate) fn drop_on_selected(&mut self) {
        let target = match self.model.selected_entry() {
            Some(Entry::Folder(folder)) => folder.id.clone(),
            Some(Entry::File(_)) => {
                self.model.show_toast("Drop onto a folder card".to_string());
                return;
            }
            None => return,
        };
        self.drop_into(&target);
    }

    /// Drop the carried item into the folder being viewed
    pub(crate) fn drop_here(&mut self) {
        let target = self.model.navigation.current_folder.clone();
        self.drop_into(&target);
    }

    pub(crate) fn cancel_drag(&mut self) {
        if self.model.navigation.drag.take().is_some() {
            tracing::debug!("drag cancelled");
        }
    }

    /// Display name for a folder id; the root reads "Home"
    fn folder_label(&self, folder_id: &str) -> String {
        if folder_id == ROOT_FOLDER_ID {
            return "Home".to_string();
        }
        self.model
            .library
            .folder(folder_id)
            .map(|f| f.name.clone())
            .unwrap_or_default()
    }

    fn drop_into(&mut self, target_id: &str) {
        let Some(item) = self.model.navigation.drag.take() else {
            return;
        };

        match self.model.library.reparent(item.kind, &item.id, target_id) {
            Ok(()) => {
                let target_name = self.folder_label(target_id);
                tracing::info!(item = %item.id, target = target_id, "moved");
                self.model.ui.upload_error = None;
                self.refresh_location();
                self.model
                    .show_toast(format!("Moved {} into {}", item.name, target_name));
            }
            Err(e) => {
                tracing::debug!(item = %item.id, target = target_id, error = %e, "move rejected");
                self.model.show_toast(format!("Error: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::testing::{select, selected_name, test_app};
    use chrono::Utc;
    use lepeva::logic::errors::UploadError;
    use lepeva::logic::upload::synthesize_materials;
    use lepeva::model::types::{DragItem, ItemKind, ProposedFile, UploadPhase, ROOT_FOLDER_ID};
    use lepeva::services::UploadResponse;
    use std::fs;

    fn picture(name: &str) -> ProposedFile {
        ProposedFile {
            name: name.to_string(),
            mime_type: "image/png".to_string(),
            size: 512,
        }
    }

    fn toast(app: &crate::App) -> Option<&str> {
        app.model.ui.toast_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    #[test]
    fn test_rejected_upload_shows_inline_error() {
        let (mut app, mut ends) = test_app();
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("notes.txt"), b"hello").expect("write");

        app.submit_upload(&format!("{}/*", dir.path().display()));

        assert_eq!(
            app.model.ui.upload_error.as_deref(),
            Some("Oops! Some files aren't allowed.")
        );
        assert_eq!(app.model.ui.upload_phase, UploadPhase::Idle);
        assert!(ends.requests.try_recv().is_err());
    }

    #[test]
    fn test_upload_sends_only_accepted_files() {
        let (mut app, mut ends) = test_app();
        app.set_current_folder("folder-5");
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("lion.png"), vec![0u8; 128]).expect("write");
        fs::write(dir.path().join("notes.txt"), b"hello").expect("write");

        app.submit_upload(&format!("{}/*", dir.path().display()));

        let request = ends.requests.try_recv().expect("batch sent");
        assert_eq!(request.folder_id, "folder-5");
        let names: Vec<&str> = request.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["lion.png"]);
        assert!(matches!(
            app.model.ui.upload_phase,
            UploadPhase::Uploading { count: 1, .. }
        ));
        assert!(app.model.ui.upload_error.is_none());
    }

    #[test]
    fn test_creating_a_folder_clears_upload_error() {
        let (mut app, _ends) = test_app();
        app.model.ui.upload_error = Some("Oops! Some files aren't allowed.".to_string());

        app.submit_create_folder("Birds");

        assert!(app.model.ui.upload_error.is_none());
        assert_eq!(selected_name(&app).as_deref(), Some("Birds"));
        assert_eq!(toast(&app), Some("Folder \"Birds\" created!"));
    }

    #[test]
    fn test_blank_folder_name_keeps_upload_error() {
        let (mut app, _ends) = test_app();
        app.model.ui.upload_error = Some("No files matched that path.".to_string());

        app.submit_create_folder("   ");

        assert!(app.model.ui.upload_error.is_some());
        assert_eq!(app.model.library.folders().len(), 5);
    }

    #[test]
    fn test_finished_batch_lands_in_current_folder() {
        let (mut app, ends) = test_app();
        app.model.ui.upload_error = Some("stale".to_string());
        let materials = synthesize_materials(&[picture("Sun.png")], ROOT_FOLDER_ID, Utc::now());
        ends.responses
            .send(UploadResponse {
                batch_id: 1,
                folder_id: ROOT_FOLDER_ID.to_string(),
                result: Ok(materials),
            })
            .expect("app listening");

        app.drain_upload_responses();

        assert!(matches!(
            app.model.ui.upload_phase,
            UploadPhase::Complete { count: 1, .. }
        ));
        assert!(app.model.ui.upload_error.is_none());
        assert!(app.model.visible_entries().iter().any(|e| e.name() == "Sun.png"));
        assert!(toast(&app).is_none());
    }

    #[test]
    fn test_batch_for_another_folder_names_it() {
        let (mut app, _ends) = test_app();
        let materials = synthesize_materials(
            &[picture("Zebra.png"), picture("Giraffe.png")],
            "folder-5",
            Utc::now(),
        );

        app.handle_upload_response(UploadResponse {
            batch_id: 2,
            folder_id: "folder-5".to_string(),
            result: Ok(materials),
        });

        assert_eq!(toast(&app), Some("Added 2 files to Wild Animals"));
        assert_eq!(app.model.library.materials_in("folder-5").len(), 4);
    }

    #[test]
    fn test_failed_batch_returns_to_idle() {
        let (mut app, _ends) = test_app();
        app.model.ui.upload_phase = UploadPhase::Uploading {
            count: 1,
            started_at: std::time::Instant::now(),
        };

        app.handle_upload_response(UploadResponse {
            batch_id: 3,
            folder_id: ROOT_FOLDER_ID.to_string(),
            result: Err(UploadError::NoFiles),
        });

        assert_eq!(app.model.ui.upload_phase, UploadPhase::Idle);
        assert_eq!(
            app.model.ui.upload_error.as_deref(),
            Some(UploadError::NoFiles.to_string().as_str())
        );
        assert_eq!(app.model.library.materials().len(), 8);
    }

    #[test]
    fn test_failed_drop_ends_the_drag() {
        let (mut app, _ends) = test_app();
        select(&mut app, "Animals");
        app.pick_up_selected();
        app.set_current_folder("folder-1");
        select(&mut app, "Wild Animals");
        let before = app.model.library.folders().to_vec();

        app.drop_on_selected();

        assert!(!app.model.navigation.is_dragging());
        assert!(toast(&app).is_some_and(|msg| msg.starts_with("Error:")));
        assert_eq!(app.model.library.folders(), before.as_slice());
    }

    #[test]
    fn test_drop_onto_file_card_keeps_carrying() {
        let (mut app, _ends) = test_app();
        select(&mut app, "Colors");
        app.pick_up_selected();
        select(&mut app, "ABC Phonics.mp3");

        app.drop_on_selected();

        assert!(app.model.navigation.is_dragging());
        assert_eq!(toast(&app), Some("Drop onto a folder card"));
    }

    #[test]
    fn test_move_updates_view_and_paths() {
        let (mut app, _ends) = test_app();
        app.set_current_folder("folder-1");
        app.model.ui.upload_error = Some("stale".to_string());
        select(&mut app, "Wild Animals");
        app.pick_up_selected();
        select(&mut app, "Farm Animals");

        app.drop_on_selected();

        assert!(app.model.ui.upload_error.is_none());
        assert_eq!(toast(&app), Some("Moved Wild Animals into Farm Animals"));
        let names: Vec<&str> = app.model.visible_entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Farm Animals"]);
        assert_eq!(app.model.navigation.selected, Some(0));
        assert_eq!(app.model.navigation.path, app.model.library.path_to("folder-1"));

        app.open_selected();
        select(&mut app, "Wild Animals");
        app.open_selected();
        let crumbs: Vec<&str> = app.model.navigation.path.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(crumbs, vec!["Animals", "Farm Animals", "Wild Animals"]);
    }

    #[test]
    fn test_drop_here_into_home() {
        let (mut app, _ends) = test_app();
        app.set_current_folder("folder-4");
        app.model.navigation.drag = Some(DragItem {
            kind: ItemKind::File,
            id: "material-1".to_string(),
            name: "Cat picture.jpg".to_string(),
        });
        app.go_home();

        app.drop_here();

        assert_eq!(toast(&app), Some("Moved Cat picture.jpg into Home"));
        assert!(app.model.visible_entries().iter().any(|e| e.name() == "Cat picture.jpg"));
    }
}
