//! Fields computed from the parsed ingredients, instructions and section text.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

// ASCII digits only; `\d` would also accept other scripts' digits.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*(dk|dakika|saat|min|minute|hour)").unwrap());

static SERVINGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(kişi|porsiyon|people|person|portion|serving)").unwrap()
});

const DEFAULT_COOKING_TIME: &str = "30 min";

const LARGE_QUANTITIES: &[&str] = &["500 gr", "1 kg", "800 gr"];

const COMPLEX_KEYWORDS: &[&str] = &["marine", "yoğur", "dinlendir", "köz", "tandır", "fırın"];

/// Category rules, checked in order against the upper-cased section text.
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["KEBAP", "KEBAB"], "Kebabs"),
    (&["GÜVEÇ", "TENCERE"], "Stews"),
    (&["MAKARNA", "PASTA", "SPAGETTI", "SPAGHETTI"], "Pasta"),
];

const DEFAULT_CATEGORY: &str = "Main Course";

/// Total cooking time mentioned across instructions.
///
/// Only the first time mention of each step counts. Hours are converted to
/// minutes before summing. Oversized values saturate.
pub fn cooking_time(instructions: &[String]) -> String {
    let total: u64 = instructions
        .iter()
        .filter_map(|step| TIME_RE.captures(step))
        .map(|caps| {
            let value = caps[1].parse::<u64>().unwrap_or_else(|_| {
                debug!("Time value '{}' out of range, saturating", &caps[1]);
                u64::MAX
            });
            let unit = caps[2].to_lowercase();
            if unit == "saat" || unit == "hour" {
                value.saturating_mul(60)
            } else {
                value
            }
        })
        .fold(0, u64::saturating_add);

    format_minutes(total)
}

fn format_minutes(total: u64) -> String {
    if total == 0 {
        return DEFAULT_COOKING_TIME.to_string();
    }

    if total >= 60 {
        let hours = total / 60;
        let minutes = total % 60;
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    } else {
        format!("{total}m")
    }
}

/// Servings stated in the ingredients, or a range guessed from quantities.
pub fn servings(ingredients: &[String]) -> String {
    if let Some(count) = ingredients
        .iter()
        .find_map(|line| SERVINGS_RE.captures(line))
    {
        return count[1].to_string();
    }

    let large = ingredients
        .iter()
        .any(|line| LARGE_QUANTITIES.iter().any(|q| line.contains(q)));

    let range = if large { "4-6" } else { "2-4" };
    range.to_string()
}

pub fn difficulty(instructions: &[String]) -> String {
    let step_count = instructions.len();
    let has_complex_steps = instructions.iter().any(|step| {
        let step = step.to_lowercase();
        COMPLEX_KEYWORDS.iter().any(|keyword| step.contains(keyword))
    });

    let level = if step_count >= 8 || has_complex_steps {
        "Hard"
    } else if step_count >= 5 {
        "Medium"
    } else {
        "Easy"
    };
    level.to_string()
}

/// Category inferred from keywords anywhere in the raw section.
pub fn category(section: &str) -> String {
    let upper = section.to_uppercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| upper.contains(k)))
        .map_or(DEFAULT_CATEGORY, |(_, category)| *category)
        .to_string()
}
