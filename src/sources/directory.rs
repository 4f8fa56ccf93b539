use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::fs;

use super::TextSource;
use crate::error::CatalogError;

/// Reads corpus files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl TextSource for DirectorySource {
    fn source_name(&self) -> &str {
        "directory"
    }

    async fn read_text(&self, identifier: &str) -> Result<String, CatalogError> {
        let path = self.root.join(identifier);
        debug!("Reading corpus file {}", path.display());

        fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::FileAccess {
                identifier: identifier.to_string(),
                source,
            })
    }
}
