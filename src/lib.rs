pub mod builder;
pub mod catalog;
pub mod config;
pub mod cuisines;
pub mod error;
pub mod model;
pub mod parser;
pub mod sources;

pub use builder::{CatalogLoader, CatalogLoaderBuilder, CorpusSource};
pub use catalog::{load_catalog, parse_all};
pub use config::CatalogConfig;
pub use cuisines::{all_cuisines, cuisine_by_name, file_for_cuisine, DEFAULT_CUISINE};
pub use error::CatalogError;
pub use model::{Catalog, CuisineMetadata, Recipe};
pub use parser::{parse_file, RecipeTextParser};
pub use sources::{DirectorySource, MemorySource, TextSource};
