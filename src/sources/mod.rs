mod directory;
mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;

use async_trait::async_trait;

use crate::error::CatalogError;

/// Supplies the raw text of a corpus file.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Short name used in log messages (e.g. "directory")
    fn source_name(&self) -> &str;

    /// Full text for `identifier`, or `CatalogError::FileAccess`.
    async fn read_text(&self, identifier: &str) -> Result<String, CatalogError>;
}
