use std::sync::LazyLock;

use regex::Regex;

use super::markers::SectionLabel;

static STEP_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").unwrap());

const BULLET: char = '-';

/// Typed fields collected from one section's body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecipeFields {
    pub origin: String,
    pub flavor_profile: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub serving_suggestion: String,
    pub nutrition_info: String,
}

impl RecipeFields {
    /// Store the buffered lines of `label` into its field.
    ///
    /// An empty buffer or a label without a field leaves everything untouched.
    /// A field that was already set is overwritten.
    pub fn flush(&mut self, label: SectionLabel, lines: &[&str]) {
        if lines.is_empty() {
            return;
        }

        match label {
            SectionLabel::Origin => self.origin = join_text(lines),
            SectionLabel::FlavorProfile => self.flavor_profile = join_text(lines),
            SectionLabel::ServingSuggestion => self.serving_suggestion = join_text(lines),
            SectionLabel::NutritionInfo => self.nutrition_info = join_text(lines),
            SectionLabel::Ingredients => self.ingredients = bullet_items(lines),
            SectionLabel::Tips => self.tips = bullet_items(lines),
            SectionLabel::Instructions => self.instructions = numbered_steps(lines),
            SectionLabel::Name | SectionLabel::None => {}
        }
    }
}

fn join_text(lines: &[&str]) -> String {
    lines.join(" ").trim().to_string()
}

/// Lines starting with `-`, bullet removed.
fn bullet_items(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| line.strip_prefix(BULLET))
        .map(|item| item.trim().to_string())
        .collect()
}

/// Lines starting with `<ASCII digits>.`, numeral removed.
fn numbered_steps(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            STEP_PREFIX_RE
                .find(line)
                .map(|prefix| line[prefix.end()..].to_string())
        })
        .collect()
}
