//! Recipe text parser for the cuisine corpus.
//!
//! A corpus file holds many recipes. Each one is either introduced by the
//! `**YEMEK ADI:**` header or fenced by long rule lines, and its body is a
//! sequence of bold Turkish field headers followed by free text, `-` bullets
//! or numbered steps.

mod derived;
mod fields;
pub(crate) mod images;
mod markers;
mod scanner;
mod splitter;

use log::{info, warn};

use crate::cuisines::DEFAULT_CUISINE;
use crate::model::Recipe;

pub use markers::SectionLabel;
pub use scanner::scan_section;
pub use splitter::split_sections;

/// Converts corpus text into recipe records.
#[derive(Debug, Clone)]
pub struct RecipeTextParser {
    default_cuisine: String,
}

impl Default for RecipeTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeTextParser {
    pub fn new() -> Self {
        Self::with_default_cuisine(DEFAULT_CUISINE)
    }

    /// Parser tagging recipes with `cuisine` when no cuisine is forced.
    pub fn with_default_cuisine(cuisine: impl Into<String>) -> Self {
        Self {
            default_cuisine: cuisine.into(),
        }
    }

    pub fn default_cuisine(&self) -> &str {
        &self.default_cuisine
    }

    /// Parse a whole corpus file.
    ///
    /// Sections that cannot be reduced to a recipe are logged and skipped,
    /// so the result may be empty but never fails.
    pub fn parse_file(&self, text: &str, forced_cuisine: Option<&str>) -> Vec<Recipe> {
        let cuisine = forced_cuisine.unwrap_or(&self.default_cuisine);
        let sections = split_sections(text);

        let recipes: Vec<Recipe> = sections
            .iter()
            .filter_map(|section| match scan_section(section, cuisine) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!("Skipping section in {} corpus: {}", cuisine, e);
                    None
                }
            })
            .collect();

        info!(
            "Parsed {} {} recipes from {} sections",
            recipes.len(),
            cuisine,
            sections.len()
        );
        recipes
    }
}

/// Parse a corpus file with the default parser.
pub fn parse_file(text: &str, forced_cuisine: Option<&str>) -> Vec<Recipe> {
    RecipeTextParser::new().parse_file(text, forced_cuisine)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECIPES: &str = "**YEMEK ADI:** Adana Kebap
**MALZEMELER:**
- 1 kg kıyma
**HAZIRLANIŞI:**
1. Yoğurun.

**YEMEK ADI:** Mercimek Çorbası
**MALZEMELER:**
- 1 su bardağı mercimek
";

    #[test]
    fn test_parse_file_uses_default_cuisine() {
        let recipes = parse_file(TWO_RECIPES, None);

        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(|r| r.cuisine == "Turkish"));
        assert_eq!(recipes[0].name, "Adana Kebap");
        assert_eq!(recipes[1].name, "Mercimek Çorbası");
    }

    #[test]
    fn test_forced_cuisine_wins() {
        let parser = RecipeTextParser::with_default_cuisine("Greek");
        assert_eq!(parser.default_cuisine(), "Greek");

        let recipes = parser.parse_file(TWO_RECIPES, None);
        assert!(recipes.iter().all(|r| r.cuisine == "Greek"));

        let recipes = parser.parse_file(TWO_RECIPES, Some("Italian"));
        assert!(recipes.iter().all(|r| r.cuisine == "Italian"));
    }

    #[test]
    fn test_nameless_sections_dropped() {
        let text = format!("{TWO_RECIPES}\n**YEMEK ADI:**\n**MALZEMELER:**\n**HAZIRLANIŞI:**\n");
        let recipes = parse_file(&text, None);

        assert_eq!(recipes.len(), 2);
    }

    #[test]
    fn test_byte_order_mark_adds_no_recipe() {
        let canonical = format!("\u{feff}{TWO_RECIPES}");
        let names: Vec<_> = parse_file(&canonical, None)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Adana Kebap", "Mercimek Çorbası"]);

        let heavy = "━".repeat(30);
        let banner = format!("\u{feff}{heavy}\n**KEBAPLAR**\n{heavy}\nAdana Kebap\n**MALZEMELER:**\n- kıyma\n");
        let names: Vec<_> = parse_file(&banner, None)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Adana Kebap"]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_file(TWO_RECIPES, None), parse_file(TWO_RECIPES, None));
    }
}
