//! Library Model
//!
//! The authoritative folder and material collections. Readers get borrowed
//! views; every structural change goes through `create_folder`, `reparent`
//! or `add_materials`.

use chrono::{DateTime, Utc};

use super::types::{Folder, ItemKind, Material};
use crate::logic;
use crate::logic::errors::MoveError;

#[derive(Clone, Debug, Default)]
pub struct Library {
    folders: Vec<Folder>,
    materials: Vec<Material>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from existing records (mock loader, tests)
    pub fn from_records(folders: Vec<Folder>, materials: Vec<Material>) -> Self {
        Self { folders, materials }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn child_folders(&self, parent_id: &str) -> Vec<&Folder> {
        logic::filter::child_folders(&self.folders, parent_id)
    }

    pub fn materials_in(&self, folder_id: &str) -> Vec<&Material> {
        logic::filter::materials_in(&self.materials, folder_id)
    }

    /// Breadcrumb path from the top-level ancestor down to `folder_id`
    pub fn path_to(&self, folder_id: &str) -> Vec<Folder> {
        logic::path::build_folder_path(folder_id, &self.folders)
    }

    /// Create a folder under `parent_id`
    ///
    /// Returns the new folder, or `None` when the trimmed name is empty
    /// (silently ignored, nothing changes).
    pub fn create_folder(
        &mut self,
        name: &str,
        parent_id: &str,
        now: DateTime<Utc>,
    ) -> Option<&Folder> {
        let name = logic::folder::validate_folder_name(name)?;
        self.folders.push(Folder {
            id: logic::folder::new_folder_id(),
            name: name.to_string(),
            parent_id: parent_id.to_string(),
            created_at: now,
        });
        self.folders.last()
    }

    /// Move a folder or file under `target_id`
    ///
    /// On error the library is unchanged.
    pub fn reparent(&mut self, kind: ItemKind, id: &str, target_id: &str) -> Result<(), MoveError> {
        logic::folder::validate_move(kind, id, target_id, &self.folders, &self.materials)?;

        match kind {
            ItemKind::Folder => {
                if let Some(folder) = self.folders.iter_mut().find(|f| f.id == id) {
                    folder.parent_id = target_id.to_string();
                }
            }
            ItemKind::File => {
                if let Some(material) = self.materials.iter_mut().find(|m| m.id == id) {
                    material.folder_id = target_id.to_string();
                }
            }
        }
        Ok(())
    }

    /// Append already-validated materials
    pub fn add_materials(&mut self, materials: Vec<Material>) {
        self.materials.extend(materials);
    }
}
