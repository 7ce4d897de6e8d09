//! Character classes and the character-pair cost rule.
//!
//! Whitespace, hyphens and punctuation are "non-characters": any two of them
//! align with each other at match cost without being counted as a match, so
//! `"main st"` and `"main-st"` differ only in a pair that the statistics
//! ignore.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::ops::EditOp;

/// U+2212 MINUS SIGN, a math symbol that is written as a hyphen.
const MINUS_SIGN: char = '\u{2212}';

/// Whether `category` is one of the seven punctuation categories.
pub fn is_punctuation(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Dash punctuation, plus the minus sign.
pub fn is_hyphen(c: char) -> bool {
    c == MINUS_SIGN || get_general_category(c) == GeneralCategory::DashPunctuation
}

pub fn is_non_character(c: char) -> bool {
    c.is_whitespace() || is_hyphen(c) || is_punctuation(get_general_category(c))
}

/// Classify the diagonal transition between column char `c1` and row char `c2`.
///
/// Transpositions need the neighbouring characters and are decided by the
/// aligner; see [`is_swap`].
pub fn pair_op(c1: char, c2: char) -> EditOp {
    if c1 == c2 {
        EditOp::Match
    } else if is_non_character(c1) && is_non_character(c2) {
        EditOp::Equivalent
    } else {
        EditOp::Mismatch
    }
}

/// Whether `c1 c1_next` against `c2 c2_next` is an adjacent swap of two
/// ordinary characters.
pub fn is_swap(c1: char, c1_next: char, c2: char, c2_next: char) -> bool {
    c1 != c2
        && c1_next == c2
        && c2_next == c1
        && !is_non_character(c1)
        && !is_non_character(c2)
}
