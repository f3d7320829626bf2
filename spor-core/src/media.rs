//! Image payloads picked by the user.
//!
//! A [`MediaSource`] yields zero or one image per call. An [`ImageSelection`]
//! holds whatever was picked last while an entry is being edited.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to read image '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Resolves once. `None` means the user picked nothing.
    async fn pick(&self) -> Result<Option<Vec<u8>>, MediaError>;
}

/// Reads an image from a file path. An empty file counts as no pick.
#[derive(Debug, Clone)]
pub struct FileMediaSource {
    path: PathBuf,
}

impl FileMediaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MediaSource for FileMediaSource {
    async fn pick(&self) -> Result<Option<Vec<u8>>, MediaError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| MediaError::Read {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "picked image");
        Ok(if bytes.is_empty() { None } else { Some(bytes) })
    }
}

/// In-progress image for an add or edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSelection {
    data: Option<Vec<u8>>,
}

impl ImageSelection {
    pub fn new(initial: Option<Vec<u8>>) -> Self {
        Self { data: initial }
    }

    /// Runs the source and keeps its result. A newer pick replaces an older
    /// one; a pick that yields nothing keeps the current image.
    pub async fn pick_from(&mut self, source: &dyn MediaSource) -> Result<bool, MediaError> {
        match source.pick().await? {
            Some(bytes) => {
                self.data = Some(bytes);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) {
        self.data = None;
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn into_data(self) -> Option<Vec<u8>> {
        self.data
    }
}
