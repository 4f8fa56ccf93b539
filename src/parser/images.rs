use std::collections::HashMap;
use std::sync::LazyLock;

const UNSPLASH_QUERY: &str =
    "ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop";

/// Photo used for recipes without a curated image.
const PLACEHOLDER_PHOTO: &str = "1574484284002-952d92456975";

/// Curated photo ids keyed by exact recipe name.
static RECIPE_PHOTOS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Turkish
        ("Adana Kebap", "1599487488170-d11ec9c172f0"),
        ("Urfa Kebap", "1529193591184-b1d58069ecdd"),
        ("İskender Kebap", "1574484284002-952d92456975"),
        ("Cağ Kebabı", "1595777342537-b0c5f2a1c6f2"),
        ("Beyti Kebap", "1574484284002-952d92456975"),
        ("Testi Kebabı", "1565299624946-b28f40a0ca4b"),
        ("Fıstıklı Kebap", "1574484284002-952d92456975"),
        ("Dana Şiş", "1599487488170-d11ec9c172f0"),
        ("Kuzu Şiş", "1574484284002-952d92456975"),
        ("Ali Nazik", "1574484284002-952d92456975"),
        ("Etli Güveç", "1572441709701-6c8c8d2c7e0a"),
        ("Dana Haşlama", "1574484284002-952d92456975"),
        ("Kuzu Tandır", "1574484284002-952d92456975"),
        ("Tas Kebabı", "1574484284002-952d92456975"),
        ("Hünkar Beğendi", "1574484284002-952d92456975"),
        // Italian
        ("Spaghetti Carbonara", "1551183053-bf91a1d81141"),
        ("Margherita Pizza", "1551183053-bf91a1d81141"),
        ("Risotto alla Milanese", "1551183053-bf91a1d81141"),
        // Japanese
        ("Sushi", "1579584425555-c3ce17fd4351"),
        ("Tonkotsu Ramen", "1579584425555-c3ce17fd4351"),
        ("Tempura", "1579584425555-c3ce17fd4351"),
        // Mexican
        ("Tacos al Pastor", "1565299624946-b28f40a0ca4b"),
        ("Pozole", "1565299624946-b28f40a0ca4b"),
        ("Guacamole", "1565299624946-b28f40a0ca4b"),
        // Spanish
        ("Paella Valenciana", "1534080564583-6be75777b70a"),
        ("Gazpacho", "1534080564583-6be75777b70a"),
        ("Tortilla Española", "1534080564583-6be75777b70a"),
        // Thai
        ("Pad Thai", "1559847844-5315695dadae"),
        ("Green Curry", "1559847844-5315695dadae"),
        ("Tom Yum", "1559847844-5315695dadae"),
        // Chinese
        ("Kung Pao Chicken", "1582878826629-29b7ad1cdc43"),
        ("Dumplings", "1582878826629-29b7ad1cdc43"),
        ("Fried Rice", "1582878826629-29b7ad1cdc43"),
        // French
        ("Coq au Vin", "1567620905732-2d1ec7ab7445"),
        ("Bouillabaisse", "1567620905732-2d1ec7ab7445"),
        ("Crème Brûlée", "1567620905732-2d1ec7ab7445"),
        // Indian
        ("Butter Chicken", "1574653339527-d91e31a5e6d8"),
        ("Biryani", "1574653339527-d91e31a5e6d8"),
        ("Tandoori Chicken", "1574653339527-d91e31a5e6d8"),
        // Greek
        ("Moussaka", "1544124499-58912cbddaad"),
        ("Souvlaki", "1544124499-58912cbddaad"),
        ("Greek Salad", "1544124499-58912cbddaad"),
    ])
});

/// Unsplash URL for a photo id at the given crop size.
pub fn unsplash_url(photo: &str, width: u32, height: u32) -> String {
    format!("https://images.unsplash.com/photo-{photo}?{UNSPLASH_QUERY}&w={width}&h={height}")
}

/// Image for a recipe name, falling back to the placeholder.
pub fn recipe_image(name: &str) -> String {
    let photo = RECIPE_PHOTOS.get(name).copied().unwrap_or(PLACEHOLDER_PHOTO);
    unsplash_url(photo, 400, 250)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_recipe_image() {
        let url = recipe_image("Urfa Kebap");
        assert!(url.contains("photo-1529193591184-b1d58069ecdd"));
        assert!(url.ends_with("&w=400&h=250"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let placeholder = recipe_image("Bilinmeyen Yemek");
        assert!(placeholder.contains(PLACEHOLDER_PHOTO));
        assert_eq!(recipe_image("urfa kebap"), placeholder);
        assert_eq!(recipe_image("Urfa Kebap "), placeholder);
    }
}
