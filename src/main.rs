use log::{debug, info};
use std::env;

use recipe_atlas::{CatalogConfig, CatalogLoader, RecipeTextParser};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CatalogConfig::load()?;
    debug!("{:#?}", config);

    // Usage: recipe-atlas [FILE [CUISINE]]
    let args: Vec<String> = env::args().collect();

    if let Some(path) = args.get(1) {
        let text = tokio::fs::read_to_string(path).await?;
        let parser = RecipeTextParser::with_default_cuisine(config.default_cuisine);
        let recipes = parser.parse_file(&text, args.get(2).map(String::as_str));

        info!("Parsed {} recipes from {}", recipes.len(), path);
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else {
        let catalog = CatalogLoader::builder().config(config).load().await?;
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    }

    Ok(())
}
