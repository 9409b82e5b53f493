//! Upload pipeline: file intake from disk through the background service
//!
//! Mirrors what the dashboard does on submit: expand the pattern, validate
//! the batch, send it to the service and wait for the synthesized records.

use std::fs;
use std::sync::Arc;

use lepeva::logic::upload::{validate_batch, UploadPolicy};
use lepeva::services::intake::collect_files;
use lepeva::services::{spawn_upload_service, SimulatedUploader, UploadRequest};

fn policy() -> UploadPolicy {
    UploadPolicy {
        max_files: 2,
        max_size_mb: 1,
        accepted_types: vec!["image/*".to_string(), ".pdf".to_string()],
    }
}

#[tokio::test]
async fn test_files_on_disk_become_materials() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("lion.png"), vec![0u8; 2048]).expect("write");
    fs::write(dir.path().join("worksheet.pdf"), b"%PDF-1.4").expect("write");

    let pattern = format!("{}/*", dir.path().display());
    let files = collect_files(&pattern).expect("files found");
    assert_eq!(files.len(), 2);
    let files = validate_batch(&files, &policy()).expect("batch accepted");

    let (tx, mut rx) = spawn_upload_service(Arc::new(SimulatedUploader::new(0)));
    tx.send(UploadRequest {
        batch_id: 7,
        folder_id: "folder-5".to_string(),
        files,
    })
    .expect("service running");

    let response = rx.recv().await.expect("response");
    assert_eq!(response.batch_id, 7);
    let materials = response.result.expect("upload succeeds");
    assert_eq!(materials.len(), 2);
    assert!(materials.iter().all(|m| m.folder_id == "folder-5"));

    let lion = materials.iter().find(|m| m.name == "lion.png").expect("lion");
    assert_eq!(lion.mime_type, "image/png");
    assert_eq!(lion.size, 2048);
}

#[test]
fn test_disallowed_file_on_disk_is_refused() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("notes.txt"), b"hello").expect("write");

    let pattern = format!("{}/*.txt", dir.path().display());
    let files = collect_files(&pattern).expect("files found");
    let err = validate_batch(&files, &policy()).unwrap_err();
    assert_eq!(err.to_string(), "Oops! Some files aren't allowed.");
}

#[test]
fn test_pattern_matching_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pattern = format!("{}/*.png", dir.path().display());
    let err = collect_files(&pattern).unwrap_err();
    assert_eq!(err.to_string(), "No files matched that path.");
}
