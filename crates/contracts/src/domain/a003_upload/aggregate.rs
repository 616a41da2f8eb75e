use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value for the `accept` attribute of the file picker
pub const ACCEPT_ATTR: &str = "image/*,application/pdf";

const PDF_MEDIA_TYPE: &str = "application/pdf";
const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Any `image/*` type or exactly `application/pdf`.
///
/// Compared case-sensitively against the type the browser reports.
pub fn is_accepted_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX) || media_type == PDF_MEDIA_TYPE
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload an image or PDF file.")]
    UnsupportedType { media_type: String },
}

/// A file offered by the picker or a drop, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCandidate {
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size_bytes,
        }
    }
}

/// A candidate that passed the media type check.
///
/// Only obtainable through `TryFrom<FileCandidate>`, so holding one proves
/// the file is an image or a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile(FileCandidate);

impl SelectedFile {
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn media_type(&self) -> &str {
        &self.0.media_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.0.size_bytes
    }

    pub fn size_label(&self) -> String {
        format_size(self.0.size_bytes)
    }
}

impl TryFrom<FileCandidate> for SelectedFile {
    type Error = UploadError;

    fn try_from(candidate: FileCandidate) -> Result<Self, Self::Error> {
        if is_accepted_media_type(&candidate.media_type) {
            Ok(Self(candidate))
        } else {
            Err(UploadError::UnsupportedType {
                media_type: candidate.media_type,
            })
        }
    }
}

/// Human readable size, one decimal above bytes ("512 B", "2.4 MB")
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for &next in &UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_media_types() {
        for t in ["image/png", "image/jpeg", "image/svg+xml", "image/", "application/pdf"] {
            assert!(is_accepted_media_type(t), "{} should be accepted", t);
        }
    }

    #[test]
    fn test_rejected_media_types() {
        for t in [
            "text/plain",
            "application/pdfx",
            "application/x-pdf",
            "APPLICATION/PDF",
            "Image/png",
            "video/mp4",
            "",
        ] {
            assert!(!is_accepted_media_type(t), "{} should be rejected", t);
        }
    }

    #[test]
    fn test_selected_file_requires_accepted_type() {
        let ok = SelectedFile::try_from(FileCandidate::new("report.pdf", "application/pdf", 10));
        assert_eq!(ok.map(|f| f.name().to_string()), Ok("report.pdf".to_string()));

        let err = SelectedFile::try_from(FileCandidate::new("notes.txt", "text/plain", 10));
        assert_eq!(
            err,
            Err(UploadError::UnsupportedType {
                media_type: "text/plain".to_string()
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = UploadError::UnsupportedType {
            media_type: "text/plain".to_string(),
        };
        assert_eq!(err.to_string(), "Please upload an image or PDF file.");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2_516_582), "2.4 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }
}
