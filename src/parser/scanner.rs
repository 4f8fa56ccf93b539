use log::debug;

use super::derived;
use super::fields::RecipeFields;
use super::images::recipe_image;
use super::markers::{
    is_bold_header, is_end_rule, is_rule_line, name_header_value, SectionLabel,
};
use crate::error::CatalogError;
use crate::model::Recipe;

/// Whether the scanner wants more lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Continue,
    Stop,
}

/// Line-driven state machine collecting one recipe body.
///
/// The current label decides where buffered lines go once the next header
/// (or the end of the section) is reached.
struct SectionScanner<'a> {
    label: SectionLabel,
    buffer: Vec<&'a str>,
    fields: RecipeFields,
}

impl<'a> SectionScanner<'a> {
    fn new() -> Self {
        Self {
            label: SectionLabel::None,
            buffer: Vec::new(),
            fields: RecipeFields::default(),
        }
    }

    fn feed(&mut self, line: &'a str) -> Scan {
        if let Some(next) = SectionLabel::from_header(line) {
            self.flush();
            self.label = next;
        } else if is_end_rule(line) {
            return Scan::Stop;
        } else if !is_bold_header(line) && !is_rule_line(line) {
            self.buffer.push(line);
        }
        Scan::Continue
    }

    fn flush(&mut self) {
        self.fields.flush(self.label, &self.buffer);
        self.buffer.clear();
    }

    fn finish(mut self) -> RecipeFields {
        self.flush();
        self.fields
    }
}

/// Recipe name and the index of the first body line after it.
fn find_name<'a>(lines: &[&'a str]) -> Option<(&'a str, usize)> {
    for (i, line) in lines.iter().copied().enumerate() {
        match name_header_value(line) {
            Some("") => continue,
            Some(name) => return Some((name, i + 1)),
            None if is_bold_header(line) || is_rule_line(line) => continue,
            None => return Some((line, i + 1)),
        }
    }
    None
}

fn preview(section: &str) -> String {
    section.trim().chars().take(40).collect()
}

/// Reduce one raw section to a recipe tagged with `cuisine`.
pub fn scan_section(section: &str, cuisine: &str) -> Result<Recipe, CatalogError> {
    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (name, body_start) = find_name(&lines).ok_or_else(|| {
        CatalogError::SectionParse(format!("no recipe name in '{}'", preview(section)))
    })?;

    let mut scanner = SectionScanner::new();
    for &line in &lines[body_start..] {
        if scanner.feed(line) == Scan::Stop {
            break;
        }
    }
    let fields = scanner.finish();

    debug!(
        "Scanned '{}': {} ingredients, {} steps, {} tips",
        name,
        fields.ingredients.len(),
        fields.instructions.len(),
        fields.tips.len()
    );

    Ok(Recipe {
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        category: derived::category(section),
        cooking_time: derived::cooking_time(&fields.instructions),
        servings: derived::servings(&fields.ingredients),
        difficulty: derived::difficulty(&fields.instructions),
        image_url: recipe_image(name),
        origin: fields.origin,
        flavor_profile: fields.flavor_profile,
        ingredients: fields.ingredients,
        instructions: fields.instructions,
        tips: fields.tips,
        serving_suggestion: fields.serving_suggestion,
        nutrition_info: fields.nutrition_info,
    })
}
