use crate::core::Storage;
use crate::utils::error::{DashboardError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read-only artifact directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    base_path: String,
}

impl LocalArtifactStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalArtifactStore {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        match fs::read(&full_path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DashboardError::MissingArtifact {
                path: full_path.display().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
