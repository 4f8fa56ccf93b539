use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::markers::{BOLD_MARKER, NAME_MARKER};

const BYTE_ORDER_MARK: char = '\u{feff}';

// Either rule family, never mixed within one run.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"─{20,}|━{20,}").unwrap());

/// Split a cuisine file into raw recipe sections.
///
/// Files using the canonical name header are split on that header, which is
/// consumed. Other files are split on long rule lines, and fragments without
/// any bold header (trailing boilerplate) are dropped. Blank fragments are
/// always discarded. A leading byte-order mark is ignored.
pub fn split_sections(content: &str) -> Vec<&str> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

    let sections: Vec<&str> = if content.contains(NAME_MARKER) {
        content.split(NAME_MARKER).collect()
    } else {
        debug!("No name header found, splitting on separator rules");
        SEPARATOR_RE
            .split(content)
            .filter(|fragment| fragment.contains(BOLD_MARKER))
            .collect()
    };

    sections
        .into_iter()
        .filter(|section| !section.trim().is_empty())
        .collect()
}
