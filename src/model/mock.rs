//! Mock data loader
//!
//! Stands in for a future network data source. Timestamps are relative to
//! `now` so the dashboard always shows recent dates.

use chrono::{DateTime, Duration, Utc};

use super::types::{Folder, Material, ROOT_FOLDER_ID};

const MB: f64 = 1024.0 * 1024.0;

fn folder(id: &str, name: &str, parent_id: &str, created_at: DateTime<Utc>) -> Folder {
    Folder {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: parent_id.to_string(),
        created_at,
    }
}

fn material(
    id: &str,
    name: &str,
    mime_type: &str,
    size_mb: f64,
    last_modified: DateTime<Utc>,
    folder_id: &str,
) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        size: (size_mb * MB) as u64,
        last_modified,
        folder_id: folder_id.to_string(),
        url: None,
        session_id: None,
    }
}

pub fn generate_mock_folders(now: DateTime<Utc>) -> Vec<Folder> {
    vec![
        folder("folder-1", "Animals", ROOT_FOLDER_ID, now - Duration::days(7)),
        folder("folder-2", "Colors", ROOT_FOLDER_ID, now - Duration::days(5)),
        folder("folder-3", "Numbers", ROOT_FOLDER_ID, now - Duration::days(3)),
        folder("folder-4", "Farm Animals", "folder-1", now - Duration::days(2)),
        folder("folder-5", "Wild Animals", "folder-1", now - Duration::days(1)),
    ]
}

pub fn generate_mock_materials(now: DateTime<Utc>) -> Vec<Material> {
    vec![
        material("material-1", "Cat picture.jpg", "image/jpeg", 2.5, now - Duration::days(6), "folder-4"),
        material("material-2", "Dog sounds.mp3", "audio/mpeg", 3.2, now - Duration::days(5), "folder-4"),
        material("material-3", "Numbers 1-10.pdf", "application/pdf", 1.8, now - Duration::days(4), "folder-3"),
        material(
            "material-4",
            "Primary Colors.ppt",
            "application/vnd.ms-powerpoint",
            5.7,
            now - Duration::days(3),
            "folder-2",
        ),
        material(
            "material-5",
            "Lion Facts.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            1.1,
            now - Duration::days(2),
            "folder-5",
        ),
        material("material-6", "Tiger video.mp4", "video/mp4", 15.3, now - Duration::days(1), "folder-5"),
        material("material-7", "ABC Phonics.mp3", "audio/mpeg", 4.6, now - Duration::hours(12), ROOT_FOLDER_ID),
        material(
            "material-8",
            "Welcome Presentation.pptx",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            7.8,
            now - Duration::hours(6),
            ROOT_FOLDER_ID,
        ),
    ]
}
