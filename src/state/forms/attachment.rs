//! Image attachments selected for registration

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors raised while selecting an image at the UI boundary
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("{path} is not an image file")]
    UnsupportedType { path: String },
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A binary image chosen by the user
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub source_path: String,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Read an image from disk. Only paths with an image extension are accepted.
    pub async fn load(path: &str) -> Result<Self, AttachmentError> {
        // Check the type before touching the filesystem
        image_mime_type(path).ok_or_else(|| AttachmentError::UnsupportedType {
            path: path.to_string(),
        })?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| AttachmentError::Io {
                path: path.to_string(),
                source,
            })?;
        Self::from_bytes(path, bytes)
    }

    /// Build an attachment from bytes already in memory
    pub fn from_bytes(path: &str, bytes: Vec<u8>) -> Result<Self, AttachmentError> {
        let mime_type = image_mime_type(path).ok_or_else(|| AttachmentError::UnsupportedType {
            path: path.to_string(),
        })?;
        let file_name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        Ok(Self {
            source_path: path.to_string(),
            file_name,
            mime_type,
            bytes,
        })
    }
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Map a file extension to an `image/*` MIME type
pub fn image_mime_type(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
