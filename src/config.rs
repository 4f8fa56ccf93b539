use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::cuisines::{file_for_cuisine, DEFAULT_CUISINE};

/// Corpus loading configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Directory holding one corpus file per cuisine
    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: PathBuf,
    /// Cuisine assigned by the single-file parser when none is forced
    #[serde(default = "default_cuisine")]
    pub default_cuisine: String,
    /// Cuisine name to corpus file, overriding the built-in file names
    #[serde(default)]
    pub files: HashMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            default_cuisine: default_cuisine(),
            files: HashMap::new(),
        }
    }
}

// Default value functions
fn default_corpus_dir() -> PathBuf {
    PathBuf::from("attached_assets")
}

fn default_cuisine() -> String {
    DEFAULT_CUISINE.to_string()
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ATLAS__ prefix
    /// 2. recipe_atlas.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ATLAS__CORPUS_DIR
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Corpus file for a cuisine, honoring overrides.
    ///
    /// Override keys are matched case-insensitively since environment
    /// variables arrive lowercased.
    pub fn file_for(&self, cuisine: &str) -> Option<String> {
        self.files
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(cuisine))
            .map(|(_, file)| file.clone())
            .or_else(|| file_for_cuisine(cuisine).map(str::to_string))
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: RECIPE_ATLAS__FILES__GREEK=yunan.txt
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_atlas").required(false))
        // Use double underscore for nested: RECIPE_ATLAS__FILES__GREEK
        .add_source(
            Environment::with_prefix("RECIPE_ATLAS")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        let config = CatalogConfig::default();
        assert_eq!(config.corpus_dir, PathBuf::from("attached_assets"));
        assert_eq!(config.default_cuisine, "Turkish");
        assert!(config.files.is_empty());
    }

    #[test]
    fn test_file_for_uses_builtin_names() {
        let config = CatalogConfig::default();
        assert_eq!(config.file_for("Turkish").as_deref(), Some("turk_mutfagi.txt"));
        assert_eq!(config.file_for("Atlantis"), None);
    }

    #[test]
    fn test_file_for_prefers_overrides() {
        let mut config = CatalogConfig::default();
        config
            .files
            .insert("greek".to_string(), "yunan_2024.txt".to_string());

        assert_eq!(config.file_for("Greek").as_deref(), Some("yunan_2024.txt"));
        assert_eq!(config.file_for("Thai").as_deref(), Some("tayland_mutfagi.txt"));
    }

    #[test]
    fn test_load_config_from_environment() {
        env::set_var("RECIPE_ATLAS__CORPUS_DIR", "/srv/corpus");
        env::set_var("RECIPE_ATLAS__FILES__GREEK", "yunan.txt");

        let config = load_config().unwrap();

        env::remove_var("RECIPE_ATLAS__CORPUS_DIR");
        env::remove_var("RECIPE_ATLAS__FILES__GREEK");

        assert_eq!(config.corpus_dir, PathBuf::from("/srv/corpus"));
        assert_eq!(config.default_cuisine, "Turkish");
        assert_eq!(config.file_for("Greek").as_deref(), Some("yunan.txt"));
    }
}
