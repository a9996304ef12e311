//! Header text normalization.
//!
//! PRD headings carry decorative pictographs (`🎯 Overview`, `🔴 P0 – ...`) that must
//! not take part in matching. Normalization strips a fixed, versioned table of those
//! characters and trims what is left. The normalized form is only ever used for
//! comparison; output always keeps the raw heading text.

/// Bumped whenever [`DECORATIONS`] changes, since that changes matching behaviour.
pub const DECORATION_TABLE_VERSION: u32 = 1;

/// Characters stripped from header text before matching.
pub const DECORATIONS: &[char] = &[
    '🎯', // target
    '📁', '📂', '🗂', '📦', '🗃', // folders and boxes
    '📋', '📄', '📝', // clipboard and pages
    '🔴', '🟠', '🟡', '🟢', '🔵', '🟣', '⚪', '⚫', // priority circles
    '📎', // paperclip
    '📊', '📈', // charts
    '🛠', '🔧', '⚙', // tools
    '🚀', '🎨', '🔗', '🧭', '✅',
    '\u{FE0F}', // emoji presentation selector
    '\u{200D}', // zero width joiner
];

#[must_use]
/// Strip decorative characters and surrounding whitespace from heading text.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !DECORATIONS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[must_use]
/// Case-insensitive containment of `needle` in `haystack`, both normalized first.
///
/// An empty needle is contained in everything.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    let haystack = normalize(haystack).to_lowercase();
    let needle = normalize(needle).to_lowercase();
    haystack.contains(&needle)
}

#[must_use]
/// Case-insensitive equality after normalization.
pub fn eq_normalized(a: &str, b: &str) -> bool {
    normalize(a).to_lowercase() == normalize(b).to_lowercase()
}

#[cfg(test)]
#[path = "tests/normalize.rs"]
mod tests;
