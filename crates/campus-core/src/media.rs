//! Multipart form parsing, image validation and on-disk media storage.

#![allow(async_fn_in_trait)]

use std::collections::HashMap;
use std::path::PathBuf;

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use bytes::Bytes;
use uuid::Uuid;

/// An uploaded file taken from a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Image formats accepted for recipe images and profile pictures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }
}

/// Why an upload was rejected as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("the file is empty")]
    Empty,
    #[error("only png, jpeg, gif and webp images are accepted")]
    UnsupportedType,
    #[error("the file content does not match its extension")]
    ContentMismatch,
}

impl Upload {
    /// Validate the upload as an image by extension and magic bytes.
    pub fn image_format(&self) -> Result<ImageFormat, ImageError> {
        if self.bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        let declared = self
            .file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| ImageFormat::from_extension(ext))
            .ok_or(ImageError::UnsupportedType)?;
        match ImageFormat::sniff(&self.bytes) {
            Some(actual) if actual == declared => Ok(actual),
            _ => Err(ImageError::ContentMismatch),
        }
    }
}

/// Text fields and non-empty file parts of a `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, Upload>,
}

impl MultipartForm {
    /// Drain the multipart stream. File inputs submitted without a file
    /// (empty file name and body) are skipped.
    pub async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        Upload {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }
        Ok(form)
    }

    /// Text value of `name`, or empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn take_file(&mut self, name: &str) -> Option<Upload> {
        self.files.remove(name)
    }
}

/// Storage for validated uploads. Returns the stored path relative to the media root.
pub trait MediaStore: Send + Sync {
    async fn save(
        &self,
        folder: &str,
        format: ImageFormat,
        upload: &Upload,
    ) -> std::io::Result<String>;

    /// Delete a stored file by the path `save` returned. A missing file is not an error.
    async fn remove(&self, path: &str) -> std::io::Result<()>;
}

/// Remove an upload whose record was never written, logging rather than failing.
pub async fn discard<M: MediaStore>(media: &M, path: Option<&str>) {
    let Some(path) = path else { return };
    if let Err(e) = media.remove(path).await {
        tracing::warn!(path, error = %e, "could not remove orphaned upload");
    }
}

/// Stores uploads under a media root directory with random file names.
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    pub root: PathBuf,
}

impl MediaStore for FsMediaStore {
    async fn save(
        &self,
        folder: &str,
        format: ImageFormat,
        upload: &Upload,
    ) -> std::io::Result<String> {
        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;
        let file_name = format!("{}.{}", Uuid::new_v4(), format.extension());
        tokio::fs::write(dir.join(&file_name), &upload.bytes).await?;
        tracing::debug!(folder, file_name = %file_name, size = upload.bytes.len(), "stored upload");
        Ok(format!("{folder}/{file_name}"))
    }

    async fn remove(&self, path: &str) -> std::io::Result<()> {
        match tokio::fs::remove_file(self.root.join(path)).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
