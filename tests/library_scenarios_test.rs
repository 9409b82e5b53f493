//! End-to-end scenarios over the materials library
//!
//! Drives the library model the way the dashboard does: navigate into a
//! folder, move things around, create folders, and check that refused
//! operations leave the collections untouched.

use chrono::Utc;
use lepeva::logic::errors::{MoveError, UploadError};
use lepeva::logic::path::back_target;
use lepeva::logic::upload::{synthesize_materials, validate_batch, UploadPolicy};
use lepeva::model::mock::{generate_mock_folders, generate_mock_materials};
use lepeva::model::types::{ItemKind, ProposedFile, ROOT_FOLDER_ID};
use lepeva::model::{Library, Model};
use lepeva::Theme;

const MB: u64 = 1024 * 1024;

fn mock_library() -> Library {
    let now = Utc::now();
    Library::from_records(generate_mock_folders(now), generate_mock_materials(now))
}

fn mock_model() -> Model {
    let mut model = Model::new(false, Theme::Default);
    model.library = mock_library();
    model
}

fn enter(model: &mut Model, folder_id: &str) {
    let path = model.library.path_to(folder_id);
    model.navigation.set_location(folder_id, path);
}

fn names_in(library: &Library, folder_id: &str) -> (Vec<String>, Vec<String>) {
    let folders = library
        .child_folders(folder_id)
        .iter()
        .map(|f| f.name.clone())
        .collect();
    let files = library
        .materials_in(folder_id)
        .iter()
        .map(|m| m.name.clone())
        .collect();
    (folders, files)
}

/// Animals holds two folders and no files; back returns to the root
#[test]
fn test_open_animals_then_back() {
    let mut model = mock_model();
    enter(&mut model, "folder-1");

    let (folders, files) = names_in(&model.library, "folder-1");
    assert_eq!(folders, vec!["Farm Animals", "Wild Animals"]);
    assert!(files.is_empty());
    assert_eq!(model.navigation.current_folder_name(), Some("Animals"));

    let target = back_target(&model.navigation.path).expect("not at root");
    assert_eq!(target, ROOT_FOLDER_ID);
    enter(&mut model, &target);
    assert!(model.navigation.is_at_root());
    assert!(model.navigation.path.is_empty());
}

/// Back from a nested folder goes to its parent, not the root
#[test]
fn test_back_from_nested_folder() {
    let mut model = mock_model();
    enter(&mut model, "folder-5");

    let names: Vec<&str> = model.navigation.path.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Animals", "Wild Animals"]);
    assert_eq!(back_target(&model.navigation.path).as_deref(), Some("folder-1"));
}

/// Dropping Cat picture.jpg onto Colors moves it there
#[test]
fn test_drag_file_onto_colors() {
    let mut library = mock_library();
    library
        .reparent(ItemKind::File, "material-1", "folder-2")
        .expect("move succeeds");

    let (_, farm_files) = names_in(&library, "folder-4");
    assert_eq!(farm_files, vec!["Dog sounds.mp3"]);

    let (_, color_files) = names_in(&library, "folder-2");
    assert!(color_files.contains(&"Cat picture.jpg".to_string()));
    assert_eq!(library.materials().len(), 8);
}

/// Folders can be dropped back to the root
#[test]
fn test_drag_folder_to_root() {
    let mut library = mock_library();
    library
        .reparent(ItemKind::Folder, "folder-5", ROOT_FOLDER_ID)
        .expect("move succeeds");

    let (root_folders, _) = names_in(&library, ROOT_FOLDER_ID);
    assert!(root_folders.contains(&"Wild Animals".to_string()));
    assert!(library.path_to("folder-5").len() == 1);
}

#[test]
fn test_folder_cannot_contain_itself() {
    let mut library = mock_library();
    let before = library.folders().to_vec();

    assert_eq!(
        library.reparent(ItemKind::Folder, "folder-1", "folder-1"),
        Err(MoveError::SelfParent)
    );
    assert_eq!(
        library.reparent(ItemKind::Folder, "folder-1", "folder-5"),
        Err(MoveError::IntoDescendant)
    );
    assert_eq!(library.folders(), before.as_slice());
}

#[test]
fn test_blank_folder_name_is_ignored() {
    let mut library = mock_library();
    assert!(library.create_folder("   ", "folder-1", Utc::now()).is_none());
    assert_eq!(library.folders().len(), 5);
}

#[test]
fn test_created_folder_appears_in_current_folder() {
    let mut library = mock_library();
    let created = library
        .create_folder("  Birds ", "folder-1", Utc::now())
        .expect("name is not blank")
        .clone();

    assert_eq!(created.name, "Birds");
    assert!(created.id.starts_with("folder-new-"));
    let (folders, _) = names_in(&library, "folder-1");
    assert_eq!(folders, vec!["Farm Animals", "Wild Animals", "Birds"]);
}

/// A batch with one oversized file is refused as a whole
#[test]
fn test_oversized_upload_leaves_library_unchanged() {
    let library = mock_library();
    let policy = UploadPolicy {
        max_files: 10,
        max_size_mb: 10,
        accepted_types: vec!["image/*".to_string()],
    };
    let batch = vec![
        ProposedFile {
            name: "tiny.png".to_string(),
            mime_type: "image/png".to_string(),
            size: MB,
        },
        ProposedFile {
            name: "huge.png".to_string(),
            mime_type: "image/png".to_string(),
            size: 11 * MB,
        },
    ];

    assert_eq!(
        validate_batch(&batch, &policy),
        Err(UploadError::FileTooLarge { max_mb: 10 })
    );
    assert_eq!(library.materials().len(), 8);
}

#[test]
fn test_accepted_upload_lands_in_target_folder() {
    let mut library = mock_library();
    let batch = vec![ProposedFile {
        name: "Zebra.png".to_string(),
        mime_type: "image/png".to_string(),
        size: 2 * MB,
    }];

    let materials = synthesize_materials(&batch, "folder-5", Utc::now());
    library.add_materials(materials);

    let (_, files) = names_in(&library, "folder-5");
    assert_eq!(files, vec!["Lion Facts.docx", "Tiger video.mp4", "Zebra.png"]);
}

/// Search narrows the visible entries and keeps folders first
#[test]
fn test_search_filters_visible_entries() {
    let mut model = mock_model();
    enter(&mut model, "folder-1");
    model.ui.search_query = "wild".to_string();

    let names: Vec<&str> = model.visible_entries().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Wild Animals"]);
}

#[test]
fn test_too_many_files_leaves_library_unchanged() {
    let library = mock_library();
    let policy = UploadPolicy {
        max_files: 2,
        max_size_mb: 10,
        accepted_types: vec![],
    };
    let batch: Vec<ProposedFile> = (0..3)
        .map(|i| ProposedFile {
            name: format!("page-{}.png", i),
            mime_type: "image/png".to_string(),
            size: 10,
        })
        .collect();

    let err = validate_batch(&batch, &policy).unwrap_err();
    assert_eq!(err.to_string(), "You can only upload up to 2 files at once.");
    assert_eq!(library.materials().len(), 8);
}

/// Every folder ends its own path, and dropping the last crumb gives the parent's path
#[test]
fn test_path_ends_at_folder_and_prefix_is_parent_path() {
    let library = mock_library();
    for folder in library.folders() {
        let path = library.path_to(&folder.id);
        assert_eq!(path.last().map(|f| f.id.as_str()), Some(folder.id.as_str()));

        let parent_path = library.path_to(&folder.parent_id);
        assert_eq!(&path[..path.len() - 1], parent_path.as_slice());
    }
}

#[test]
fn test_root_listing() {
    let library = mock_library();
    let (folders, files) = names_in(&library, ROOT_FOLDER_ID);
    assert_eq!(folders, vec!["Animals", "Colors", "Numbers"]);
    assert_eq!(files, vec!["ABC Phonics.mp3", "Welcome Presentation.pptx"]);
}

/// Files of a type the uploader refuses are skipped and do not count toward the limit
#[test]
fn test_wrong_types_are_dropped_before_the_count() {
    let mut library = mock_library();
    let policy = UploadPolicy {
        max_files: 10,
        max_size_mb: 10,
        accepted_types: vec!["image/*".to_string()],
    };
    let mut batch: Vec<ProposedFile> = (0..9)
        .map(|i| ProposedFile {
            name: format!("card-{}.png", i),
            mime_type: "image/png".to_string(),
            size: MB,
        })
        .collect();
    for name in ["notes.txt", "todo.txt"] {
        batch.push(ProposedFile {
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            size: 20 * MB,
        });
    }

    let accepted = validate_batch(&batch, &policy).expect("pictures accepted");
    assert_eq!(accepted.len(), 9);

    library.add_materials(synthesize_materials(&accepted, "folder-2", Utc::now()));
    let (_, files) = names_in(&library, "folder-2");
    assert_eq!(files.len(), 10);
    assert!(!files.iter().any(|name| name.ends_with(".txt")));
}
