//! Upload service
//!
//! Uploads run on a background task behind the `Uploader` trait. The app
//! sends `UploadRequest`s and drains `UploadResponse`s without blocking the
//! render loop.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

use crate::logic::errors::UploadError;
use crate::logic::upload::synthesize_materials;
use crate::model::types::{Material, ProposedFile};

/// Something that can store a validated batch and hand back its records
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(
        &self,
        folder_id: &str,
        files: Vec<ProposedFile>,
    ) -> Result<Vec<Material>, UploadError>;
}

/// Pretends to upload: waits, then synthesizes the records locally
#[derive(Debug, Clone)]
pub struct SimulatedUploader {
    delay: Duration,
}

impl SimulatedUploader {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl Uploader for SimulatedUploader {
    async fn upload(
        &self,
        folder_id: &str,
        files: Vec<ProposedFile>,
    ) -> Result<Vec<Material>, UploadError> {
        sleep(self.delay).await;
        Ok(synthesize_materials(&files, folder_id, Utc::now()))
    }
}

/// A batch accepted by intake, bound to the folder current at that time
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub batch_id: u64,
    pub folder_id: String,
    pub files: Vec<ProposedFile>,
}

/// Outcome of one batch
#[derive(Debug)]
pub struct UploadResponse {
    pub batch_id: u64,
    pub folder_id: String,
    pub result: Result<Vec<Material>, UploadError>,
}

/// Spawn the upload worker
///
/// Batches are processed one at a time in arrival order. The task ends when
/// the request sender is dropped.
pub fn spawn_upload_service(
    uploader: Arc<dyn Uploader>,
) -> (
    mpsc::UnboundedSender<UploadRequest>,
    mpsc::UnboundedReceiver<UploadResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<UploadRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<UploadResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            tracing::debug!(
                batch = request.batch_id,
                folder = %request.folder_id,
                files = request.files.len(),
                "upload started"
            );

            let result = uploader.upload(&request.folder_id, request.files).await;

            match &result {
                Ok(materials) => {
                    tracing::info!(batch = request.batch_id, count = materials.len(), "upload finished")
                }
                Err(e) => tracing::warn!(batch = request.batch_id, error = %e, "upload failed"),
            }

            let response = UploadResponse {
                batch_id: request.batch_id,
                folder_id: request.folder_id,
                result,
            };
            if response_tx.send(response).is_err() {
                // App is gone
                break;
            }
        }
        tracing::debug!("upload service stopped");
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<ProposedFile> {
        vec![
            ProposedFile {
                name: "Shapes.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                size: 2048,
            },
            ProposedFile {
                name: "Song.mp3".to_string(),
                mime_type: "audio/mpeg".to_string(),
                size: 4096,
            },
        ]
    }

    #[tokio::test]
    async fn test_simulated_uploader_tags_folder() {
        let uploader = SimulatedUploader::new(0);
        let materials = uploader.upload("folder-3", files()).await.unwrap();
        assert_eq!(materials.len(), 2);
        assert!(materials.iter().all(|m| m.folder_id == "folder-3"));
        assert_eq!(materials[0].name, "Shapes.pdf");
    }

    #[tokio::test]
    async fn test_service_round_trip() {
        let (tx, mut rx) = spawn_upload_service(Arc::new(SimulatedUploader::new(10)));
        tx.send(UploadRequest {
            batch_id: 7,
            folder_id: "root".to_string(),
            files: files(),
        })
        .unwrap();

        let response = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.batch_id, 7);
        assert_eq!(response.result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_service_keeps_order() {
        let (tx, mut rx) = spawn_upload_service(Arc::new(SimulatedUploader::new(5)));
        for batch_id in 1..=3 {
            tx.send(UploadRequest {
                batch_id,
                folder_id: "root".to_string(),
                files: files(),
            })
            .unwrap();
        }

        for expected in 1..=3 {
            let response = rx.recv().await.unwrap();
            assert_eq!(response.batch_id, expected);
        }
    }

    #[tokio::test]
    async fn test_service_stops_when_sender_dropped() {
        let (tx, mut rx) = spawn_upload_service(Arc::new(SimulatedUploader::new(0)));
        drop(tx);
        assert!(rx.recv().await.is_none());
    }
}
