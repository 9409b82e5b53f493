//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use chrono::{DateTime, Utc};
use std::time::Instant;

/// Sentinel parent id for top-level folders and files
pub const ROOT_FOLDER_ID: &str = "root";

/// A folder in the folder forest
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub parent_id: String, // Another folder's id or ROOT_FOLDER_ID
    pub created_at: DateTime<Utc>,
}

/// A lesson material (file)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub folder_id: String,
    // Placeholders for a future backend, never set by this crate
    pub url: Option<String>,
    pub session_id: Option<String>,
}

/// Kind of entry being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Folder,
    File,
}

/// The item currently picked up for drag-and-drop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragItem {
    pub kind: ItemKind,
    pub id: String,
    pub name: String, // For the status line while carrying
}

/// A file proposed for upload, before validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// A single cell of the contents grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry<'a> {
    Folder(&'a Folder),
    File(&'a Material),
}

impl<'a> Entry<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Entry::Folder(f) => &f.id,
            Entry::File(m) => &m.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Entry::Folder(f) => &f.name,
            Entry::File(m) => &m.name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Entry::Folder(_) => ItemKind::Folder,
            Entry::File(_) => ItemKind::File,
        }
    }
}

/// Uploader panel lifecycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading { count: usize, started_at: Instant },
    Complete { count: usize, finished_at: Instant },
}

/// Text input dialogs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputDialog {
    CreateFolder { name: String },
    Upload { pattern: String },
}

impl InputDialog {
    pub fn buffer_mut(&mut self) -> &mut String {
        match self {
            InputDialog::CreateFolder { name } => name,
            InputDialog::Upload { pattern } => pattern,
        }
    }

    pub fn buffer(&self) -> &str {
        match self {
            InputDialog::CreateFolder { name } => name,
            InputDialog::Upload { pattern } => pattern,
        }
    }
}

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}
