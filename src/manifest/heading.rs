//! # Heading Normalizer
//!
//! Turns the text of a Brewfile comment into a short category label for the
//! left pane. Brewfile headings tend to be long and descriptive
//! (`# Developer Tools - Formulae and Editors`), the pane is narrow.
//!
//! ## Rules (applied in order)
//!
//! | Input shape | Result |
//! |-------------|--------|
//! | `X - Y`, `Y` has at most two words | `Y` |
//! | `X - Y`, `Y` has three or more words | `X` |
//! | `X / Y` | `X` |
//! | `X & Y` | `X` |
//! | `Casks` | `Applications` |
//!
//! The split on ` - ` uses the last occurrence; the ` / ` and ` & ` cuts use
//! the first. The result is trimmed and may be empty.

const SPECIFIC_SEPARATOR: &str = " - ";
const QUALIFIER_SEPARATORS: [&str; 2] = [" / ", " & "];
const MAX_SPECIFIC_WORDS: usize = 2;

/// Map raw heading text (comment marker already stripped) to a display name.
pub fn normalize(comment: &str) -> String {
    let mut name = comment;

    if let Some(idx) = name.rfind(SPECIFIC_SEPARATOR) {
        let suffix = &name[idx + SPECIFIC_SEPARATOR.len()..];
        name = if suffix.split_whitespace().count() <= MAX_SPECIFIC_WORDS {
            suffix
        } else {
            &name[..idx]
        };
    }

    for separator in QUALIFIER_SEPARATORS {
        if let Some(idx) = name.find(separator) {
            name = &name[..idx];
        }
    }

    let name = name.trim();
    if name == "Casks" {
        return "Applications".to_string();
    }
    name.to_string()
}
