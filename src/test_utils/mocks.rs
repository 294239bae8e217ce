//! Fake capabilities for testing the pipeline without network or disk.

use crate::error::FetchError;
use crate::solaredge::client::{HttpClient, HttpResponse};
use crate::storage::ArtifactStore;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// An artifact store backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    artifacts: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an artifact.
    pub fn insert(&self, path: &Path, contents: &str) {
        self.artifacts
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.as_bytes().to_vec());
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.artifacts.lock().unwrap().get(path).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.lock().unwrap().is_empty()
    }
}

impl ArtifactStore for InMemoryStore {
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.artifacts
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

/// A store whose writes always fail.
pub struct FailingStore;

impl ArtifactStore for FailingStore {
    fn write(&self, _path: &Path, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

enum StubOutcome {
    Respond { status: u16, body: String },
    Timeout,
    Transport(String),
}

/// An HTTP client that answers every request with a canned outcome.
pub struct StubHttpClient {
    outcome: StubOutcome,
}

impl StubHttpClient {
    /// Answers with the given status and body.
    pub fn ok(status: u16, body: impl Into<String>) -> Self {
        Self {
            outcome: StubOutcome::Respond {
                status,
                body: body.into(),
            },
        }
    }

    pub fn timeout() -> Self {
        Self {
            outcome: StubOutcome::Timeout,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            outcome: StubOutcome::Transport(message.into()),
        }
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, url: Url) -> Result<HttpResponse, FetchError> {
        match &self.outcome {
            StubOutcome::Respond { status, body } => Ok(HttpResponse {
                url,
                status: StatusCode::from_u16(*status).unwrap(),
                body: body.as_bytes().to_vec(),
            }),
            StubOutcome::Timeout => Err(FetchError::Timeout {
                url: url.to_string(),
                timeout: Duration::from_secs(3),
            }),
            StubOutcome::Transport(message) => {
                Err(FetchError::transport(url.as_str(), message.clone()))
            }
        }
    }
}
