use std::sync::Arc;

use log::{error, info, warn};

use crate::config::CatalogConfig;
use crate::cuisines::{all_cuisines, CUISINES};
use crate::error::CatalogError;
use crate::model::Catalog;
use crate::parser::RecipeTextParser;
use crate::sources::TextSource;

/// Load every supported cuisine with the default file names.
pub async fn parse_all(source: Arc<dyn TextSource>) -> Catalog {
    load_catalog(source, &CatalogConfig::default()).await
}

/// Load every supported cuisine from `source`.
///
/// Each cuisine is read and parsed in its own task. A cuisine whose file
/// cannot be read (or whose task dies) contributes no recipes; the others
/// are unaffected. Recipes are returned in cuisine order, and the cuisine
/// metadata is always complete.
pub async fn load_catalog(source: Arc<dyn TextSource>, config: &CatalogConfig) -> Catalog {
    let parser = RecipeTextParser::with_default_cuisine(config.default_cuisine.clone());

    let tasks: Vec<_> = CUISINES
        .iter()
        .map(|entry| {
            let cuisine = entry.name;
            let file = config
                .file_for(cuisine)
                .unwrap_or_else(|| entry.file.to_string());
            let source = Arc::clone(&source);
            let parser = parser.clone();

            let handle = tokio::spawn(async move {
                let text = source.read_text(&file).await?;
                Ok::<_, CatalogError>(parser.parse_file(&text, Some(cuisine)))
            });
            (cuisine, handle)
        })
        .collect();

    let mut recipes = Vec::new();
    for (cuisine, handle) in tasks {
        match handle.await {
            Ok(Ok(parsed)) => {
                if parsed.is_empty() {
                    warn!("No recipes found for {} cuisine", cuisine);
                }
                recipes.extend(parsed);
            }
            Ok(Err(e)) => warn!(
                "Skipping {} cuisine from {} source: {}",
                cuisine,
                source.source_name(),
                e
            ),
            Err(e) => error!("Parsing task for {} cuisine failed: {}", cuisine, e),
        }
    }

    let cuisines = all_cuisines();
    info!(
        "Loaded {} recipes and {} cuisines",
        recipes.len(),
        cuisines.len()
    );

    Catalog { recipes, cuisines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MemorySource;
    use async_trait::async_trait;

    /// Serves one recipe per file but panics while reading `broken`.
    struct PanickingSource {
        broken: &'static str,
    }

    #[async_trait]
    impl TextSource for PanickingSource {
        fn source_name(&self) -> &str {
            "panicking"
        }

        async fn read_text(&self, identifier: &str) -> Result<String, CatalogError> {
            if identifier == self.broken {
                panic!("corrupt corpus file {identifier}");
            }
            Ok(format!("**YEMEK ADI:** {identifier}\n"))
        }
    }

    #[tokio::test]
    async fn test_empty_source_still_lists_cuisines() {
        let catalog = parse_all(Arc::new(MemorySource::new())).await;

        assert!(catalog.recipes.is_empty());
        assert_eq!(catalog.cuisines.len(), 10);
    }

    #[tokio::test]
    async fn test_recipes_follow_cuisine_order() {
        let source = MemorySource::new()
            .with_file("yunan_mutfagi.txt", "**YEMEK ADI:** Moussaka\n")
            .with_file("turk_mutfagi.txt", "**YEMEK ADI:** Adana Kebap\n")
            .with_file("italyan_mutfagi.txt", "**YEMEK ADI:** Margherita Pizza\n");

        let catalog = parse_all(Arc::new(source)).await;
        let tagged: Vec<_> = catalog
            .recipes
            .iter()
            .map(|r| (r.name.as_str(), r.cuisine.as_str()))
            .collect();

        assert_eq!(
            tagged,
            vec![
                ("Adana Kebap", "Turkish"),
                ("Margherita Pizza", "Italian"),
                ("Moussaka", "Greek"),
            ]
        );
    }

    #[tokio::test]
    async fn test_file_overrides_are_used() {
        let source = MemorySource::new().with_file("custom/thai.txt", "**YEMEK ADI:** Pad Thai\n");
        let mut config = CatalogConfig::default();
        config
            .files
            .insert("Thai".to_string(), "custom/thai.txt".to_string());

        let catalog = load_catalog(Arc::new(source), &config).await;

        assert_eq!(catalog.recipes.len(), 1);
        assert_eq!(catalog.recipes[0].cuisine, "Thai");
    }

    #[tokio::test]
    async fn test_panicking_task_skips_only_that_cuisine() {
        let source = PanickingSource {
            broken: "japon_mutfagi.txt",
        };

        let catalog = parse_all(Arc::new(source)).await;

        assert_eq!(catalog.recipes.len(), 9);
        assert!(catalog.recipes.iter().all(|r| r.cuisine != "Japanese"));
        assert_eq!(catalog.recipes[0].name, "turk_mutfagi.txt");
        assert_eq!(catalog.cuisines.len(), 10);
        assert!(catalog.cuisines.iter().any(|c| c.name == "Japanese"));
    }
}
