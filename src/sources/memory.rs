use std::collections::HashMap;
use std::io;

use async_trait::async_trait;

use super::TextSource;
use crate::error::CatalogError;

/// Corpus texts held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(identifier, text);
        self
    }

    pub fn insert(&mut self, identifier: impl Into<String>, text: impl Into<String>) {
        self.files.insert(identifier.into(), text.into());
    }
}

#[async_trait]
impl TextSource for MemorySource {
    fn source_name(&self) -> &str {
        "memory"
    }

    async fn read_text(&self, identifier: &str) -> Result<String, CatalogError> {
        self.files
            .get(identifier)
            .cloned()
            .ok_or_else(|| CatalogError::FileAccess {
                identifier: identifier.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such corpus file"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_lookup() {
        let source = MemorySource::new().with_file("a.txt", "Pilav");

        assert_eq!(source.read_text("a.txt").await.unwrap(), "Pilav");
        assert!(matches!(
            source.read_text("b.txt").await,
            Err(CatalogError::FileAccess { .. })
        ));
    }
}
