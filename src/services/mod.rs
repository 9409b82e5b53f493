//! Background Services
//!
//! This module contains services that touch the outside world:
//! - intake: Local file collection for the upload dialog
//! - upload: Background upload worker

pub mod intake;
pub mod upload;

// Re-export commonly used types for convenience
pub use upload::{spawn_upload_service, SimulatedUploader, UploadRequest, UploadResponse, Uploader};
