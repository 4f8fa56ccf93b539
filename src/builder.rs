use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::load_catalog;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::Catalog;
use crate::sources::{DirectorySource, TextSource};

/// Where corpus files are read from
#[derive(Clone)]
pub enum CorpusSource {
    /// One file per cuisine in a directory on disk
    Directory(PathBuf),
    /// Any other text source (in-memory, remote, ...)
    Custom(Arc<dyn TextSource>),
}

impl std::fmt::Debug for CorpusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusSource::Directory(path) => f.debug_tuple("Directory").field(path).finish(),
            CorpusSource::Custom(source) => f.debug_tuple("Custom").field(&source.source_name()).finish(),
        }
    }
}

/// Builder for configuring and running a catalog load
#[derive(Debug, Default)]
pub struct CatalogLoaderBuilder {
    source: Option<CorpusSource>,
    config: CatalogConfig,
}

impl CatalogLoaderBuilder {
    /// Read corpus files from a directory
    ///
    /// # Example
    /// ```
    /// use recipe_atlas::CatalogLoader;
    ///
    /// let builder = CatalogLoader::builder()
    ///     .directory("attached_assets");
    /// ```
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(CorpusSource::Directory(path.into()));
        self
    }

    /// Read corpus files through a custom source
    ///
    /// # Example
    /// ```
    /// use recipe_atlas::{CatalogLoader, MemorySource};
    ///
    /// let source = MemorySource::new().with_file("turk_mutfagi.txt", "**YEMEK ADI:** Pilav");
    /// let builder = CatalogLoader::builder().source(source);
    /// ```
    pub fn source(mut self, source: impl TextSource + 'static) -> Self {
        self.source = Some(CorpusSource::Custom(Arc::new(source)));
        self
    }

    /// Use loaded configuration, reading from its corpus directory
    ///
    /// A source set afterwards replaces the configured directory.
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.source = Some(CorpusSource::Directory(config.corpus_dir.clone()));
        self.config = config;
        self
    }

    /// Read `file` for `cuisine` instead of its built-in file name
    pub fn file(mut self, cuisine: impl Into<String>, file: impl Into<String>) -> Self {
        self.config.files.insert(cuisine.into(), file.into());
        self
    }

    /// Run the load
    ///
    /// # Errors
    /// Returns `CatalogError::Builder` if no source was specified. Unreadable
    /// cuisine files are not errors; they simply contribute no recipes.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_atlas::CatalogLoader;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let catalog = CatalogLoader::builder()
    ///     .directory("attached_assets")
    ///     .load()
    ///     .await?;
    /// println!("{} recipes", catalog.recipes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(self) -> Result<Catalog, CatalogError> {
        let source: Arc<dyn TextSource> = match self.source {
            Some(CorpusSource::Directory(path)) => Arc::new(DirectorySource::new(path)),
            Some(CorpusSource::Custom(source)) => source,
            None => {
                return Err(CatalogError::Builder(
                    "No corpus source specified. Use .directory(), .source() or .config()"
                        .to_string(),
                ))
            }
        };

        Ok(load_catalog(source, &self.config).await)
    }
}

/// Main entry point for the builder API
pub struct CatalogLoader;

impl CatalogLoader {
    /// Creates a new builder for loading a catalog
    pub fn builder() -> CatalogLoaderBuilder {
        CatalogLoaderBuilder::default()
    }
}
