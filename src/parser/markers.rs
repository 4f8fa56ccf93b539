//! Literal markers used by the cuisine corpus files.
//!
//! Headers are bold Turkish labels at the start of a line; anything after
//! the marker on the same line is ignored.

/// Canonical recipe-name header. Also the primary recipe delimiter.
pub const NAME_MARKER: &str = "**YEMEK ADI:**";

/// Prefix shared by every bold header line.
pub const BOLD_MARKER: &str = "**";

/// Thin rule glyph. A long run of it ends a recipe.
pub const THIN_RULE: char = '─';

/// Heavy rule glyph, used around category banners.
pub const HEAVY_RULE: char = '━';

/// Minimum run of rule glyphs that counts as a separator.
pub const MIN_RULE_LEN: usize = 20;

/// The structured field a body line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Name,
    Origin,
    FlavorProfile,
    Ingredients,
    Instructions,
    Tips,
    ServingSuggestion,
    NutritionInfo,
    None,
}

/// Field headers in the order they usually appear in a recipe.
///
/// The instructions and tips headers carry varying suffixes in the corpus
/// (`(Adım Adım):**` and the like), so only their stems are matched.
const FIELD_MARKERS: &[(&str, SectionLabel)] = &[
    ("**KÖKENİ VE KISA TARİHÇESİ:**", SectionLabel::Origin),
    ("**LEZZET PROFİLİ:**", SectionLabel::FlavorProfile),
    ("**MALZEMELER:**", SectionLabel::Ingredients),
    ("**HAZIRLANIŞI", SectionLabel::Instructions),
    ("**PÜF NOKTALARI", SectionLabel::Tips),
    ("**SERVİS ÖNERİSİ:**", SectionLabel::ServingSuggestion),
    ("**SAĞLIK VE BESİN BİLGİLERİ:**", SectionLabel::NutritionInfo),
];

impl SectionLabel {
    /// Label for a field header line, if `line` starts with one.
    pub fn from_header(line: &str) -> Option<Self> {
        FIELD_MARKERS
            .iter()
            .find(|(marker, _)| line.starts_with(marker))
            .map(|(_, label)| *label)
    }
}

/// Text following the name header, if `line` is one.
pub fn name_header_value(line: &str) -> Option<&str> {
    line.strip_prefix(NAME_MARKER).map(str::trim)
}

pub fn is_bold_header(line: &str) -> bool {
    line.starts_with(BOLD_MARKER)
}

/// Any line drawn with rule glyphs, regardless of length.
pub fn is_rule_line(line: &str) -> bool {
    line.starts_with([THIN_RULE, HEAVY_RULE])
}

/// A long thin rule: the end-of-recipe separator.
pub fn is_end_rule(line: &str) -> bool {
    line.chars().take_while(|c| *c == THIN_RULE).count() >= MIN_RULE_LEN
}
