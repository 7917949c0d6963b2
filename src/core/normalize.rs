// src/core/normalize.rs
//! Search keys for a scraped word.
//!
//! `lword` is the plain lowercase form. `word_mask` additionally folds
//! Russian/Belarusian look-alike letters and apostrophe variants together, so
//! a query typed with either alphabet lands on the same key:
//!
//! ```text
//! "Ведзь" -> lword "ведзь", mask "вёдзь"
//! "объём" -> lword "объём", mask "об‘ём"
//! ```
//!
//! The mask is a grouping key, not an identity: distinct words may share it.

/// Substitutions applied to the lowercased word, in this order.
/// Keys are distinct single characters and no value is also a key, so the
/// table is closed: masking a mask changes nothing.
pub const MASK_PAIRS: [(char, char); 5] = [
    ('и', 'і'),
    ('е', 'ё'),
    ('щ', 'ў'),
    ('ъ', '‘'),
    ('\'', '‘'),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub lword: String,
    /// Lowercase first character; `None` only for an empty word.
    pub first_char: Option<char>,
    pub word_mask: String,
}

pub fn normalize(word: &str) -> Normalized {
    let lword = word.to_lowercase();
    let word_mask = mask_lowercased(&lword);
    Normalized {
        lword,
        first_char: first_char(word),
        word_mask,
    }
}

/// Lowercase + fold variant letters.
pub fn word_mask(word: &str) -> String {
    mask_lowercased(&word.to_lowercase())
}

/// First character of `word`, lowercased. Multi-char lowercase expansions
/// (e.g. `İ`) keep only their first char so the column stays one character wide.
pub fn first_char(word: &str) -> Option<char> {
    let c = word.chars().next()?;
    c.to_lowercase().next()
}

// Single pass over the chars. Equivalent to replacing each key in table order
// because keys never overlap and values never re-enter the table.
fn mask_lowercased(lword: &str) -> String {
    lword
        .chars()
        .map(|c| {
            MASK_PAIRS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |&(_, to)| to)
        })
        .collect()
}
