use serde::{Deserialize, Serialize};

/// A normalized recipe record produced by the parser.
///
/// Keys serialize in camelCase so the records can be handed to the storage
/// layer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub cuisine: String,
    pub category: String,
    pub origin: String,
    pub flavor_profile: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub serving_suggestion: String,
    pub nutrition_info: String,
    pub cooking_time: String,
    pub servings: String,
    pub difficulty: String,
    pub image_url: String,
}

/// Static descriptive data for one cuisine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineMetadata {
    pub name: String,
    pub flag: String,
    pub description: String,
    pub featured: String,
    pub image_url: String,
}

/// Combined output of a batch load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    pub cuisines: Vec<CuisineMetadata>,
}

impl Catalog {
    /// Recipes tagged with `cuisine`, compared case-insensitively
    pub fn recipes_for<'a>(&'a self, cuisine: &'a str) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.cuisine.eq_ignore_ascii_case(cuisine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, cuisine: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            category: "Main Course".to_string(),
            origin: String::new(),
            flavor_profile: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tips: Vec::new(),
            serving_suggestion: String::new(),
            nutrition_info: String::new(),
            cooking_time: "30 min".to_string(),
            servings: "2-4".to_string(),
            difficulty: "Easy".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let json = serde_json::to_value(recipe("Adana Kebap", "Turkish")).unwrap();

        assert!(json.get("flavorProfile").is_some());
        assert!(json.get("servingSuggestion").is_some());
        assert!(json.get("nutritionInfo").is_some());
        assert!(json.get("cookingTime").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("flavor_profile").is_none());
    }

    #[test]
    fn test_recipes_for_ignores_case() {
        let catalog = Catalog {
            recipes: vec![
                recipe("Adana Kebap", "Turkish"),
                recipe("Risotto", "Italian"),
                recipe("Etli Güveç", "Turkish"),
            ],
            cuisines: Vec::new(),
        };

        let names: Vec<_> = catalog
            .recipes_for("turkish")
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Adana Kebap", "Etli Güveç"]);
    }
}
