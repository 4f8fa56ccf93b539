use crate::model::CuisineMetadata;
use crate::parser::images::unsplash_url;

/// A supported cuisine: its metadata and default corpus file.
pub struct CuisineEntry {
    pub name: &'static str,
    pub flag: &'static str,
    pub description: &'static str,
    pub featured: &'static str,
    photo: &'static str,
    /// Corpus file read for this cuisine unless configuration overrides it
    pub file: &'static str,
}

impl CuisineEntry {
    pub fn metadata(&self) -> CuisineMetadata {
        CuisineMetadata {
            name: self.name.to_string(),
            flag: self.flag.to_string(),
            description: self.description.to_string(),
            featured: self.featured.to_string(),
            image_url: unsplash_url(self.photo, 300, 200),
        }
    }
}

/// Recipes parsed without a forced cuisine are tagged with this one.
pub const DEFAULT_CUISINE: &str = "Turkish";

pub const CUISINES: &[CuisineEntry] = &[
    CuisineEntry {
        name: "Turkish",
        flag: "🇹🇷",
        description: "Rich flavors from the crossroads of Europe and Asia",
        featured: "Kebabs, Baklava, Dolma",
        photo: "1542834369-f10ebf06d3e0",
        file: "turk_mutfagi.txt",
    },
    CuisineEntry {
        name: "Italian",
        flag: "🇮🇹",
        description: "Mediterranean cuisine with pasta, pizza, and wine",
        featured: "Pasta, Pizza, Risotto",
        photo: "1551183053-bf91a1d81141",
        file: "italyan_mutfagi.txt",
    },
    CuisineEntry {
        name: "Japanese",
        flag: "🇯🇵",
        description: "Delicate flavors and artful presentation",
        featured: "Sushi, Ramen, Tempura",
        photo: "1579584425555-c3ce17fd4351",
        file: "japon_mutfagi.txt",
    },
    CuisineEntry {
        name: "Mexican",
        flag: "🇲🇽",
        description: "Bold spices and vibrant colors",
        featured: "Tacos, Pozole, Guacamole",
        photo: "1565299624946-b28f40a0ca4b",
        file: "meksika_mutfagi.txt",
    },
    CuisineEntry {
        name: "Spanish",
        flag: "🇪🇸",
        description: "Mediterranean and Atlantic influences",
        featured: "Paella, Tapas, Gazpacho",
        photo: "1534080564583-6be75777b70a",
        file: "ispanyol_mutfagi.txt",
    },
    CuisineEntry {
        name: "Thai",
        flag: "🇹🇭",
        description: "Sweet, sour, salty, and spicy harmony",
        featured: "Pad Thai, Green Curry, Tom Yum",
        photo: "1559847844-5315695dadae",
        file: "tayland_mutfagi.txt",
    },
    CuisineEntry {
        name: "Chinese",
        flag: "🇨🇳",
        description: "Diverse regional flavors and techniques",
        featured: "Kung Pao, Dumplings, Fried Rice",
        photo: "1582878826629-29b7ad1cdc43",
        file: "cin_mutfagi.txt",
    },
    CuisineEntry {
        name: "French",
        flag: "🇫🇷",
        description: "Elegant techniques and refined flavors",
        featured: "Coq au Vin, Bouillabaisse, Crème Brûlée",
        photo: "1567620905732-2d1ec7ab7445",
        file: "fransiz_mutfagi.txt",
    },
    CuisineEntry {
        name: "Indian",
        flag: "🇮🇳",
        description: "Complex spices and aromatic dishes",
        featured: "Curry, Biryani, Tandoori",
        photo: "1574653339527-d91e31a5e6d8",
        file: "hint_mutfagi.txt",
    },
    CuisineEntry {
        name: "Greek",
        flag: "🇬🇷",
        description: "Fresh ingredients and Mediterranean sunshine",
        featured: "Moussaka, Souvlaki, Greek Salad",
        photo: "1544124499-58912cbddaad",
        file: "yunan_mutfagi.txt",
    },
];

/// Metadata for all supported cuisines, in catalog order.
pub fn all_cuisines() -> Vec<CuisineMetadata> {
    CUISINES.iter().map(CuisineEntry::metadata).collect()
}

/// Look up a cuisine by name, ignoring case.
pub fn cuisine_by_name(name: &str) -> Option<&'static CuisineEntry> {
    CUISINES
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Default corpus file for a cuisine.
pub fn file_for_cuisine(name: &str) -> Option<&'static str> {
    cuisine_by_name(name).map(|entry| entry.file)
}
