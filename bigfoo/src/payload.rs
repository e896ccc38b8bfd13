//! Request payload loading
//!
//! The payload is read once, before the load test starts, and forwarded verbatim as the body of
//! every request. Its format is opaque: nothing here parses or validates it.
use crate::error::BigfooError;
use bytes::Bytes;
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct Payload {
    path: PathBuf,
    body: Bytes,
}

impl Payload {
    /// Read the entire file at `path` as text.
    ///
    /// A missing or unreadable file is returned as [`BigfooError::Payload`]; there is no retry.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, BigfooError> {
        let path = path.as_ref().to_path_buf();
        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| BigfooError::Payload {
                path: path.clone(),
                source,
            })?;

        if body.is_empty() {
            warn!("Payload {} is empty.", path.display());
        }
        info!("Loaded payload {} ({} bytes)", path.display(), body.len());

        Ok(Self {
            path,
            body: Bytes::from(body),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Shared handle to the body; cloning does not copy the payload.
    pub fn bytes(&self) -> Bytes {
        self.body.clone()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
