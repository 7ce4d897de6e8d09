//! `oa-align`: affine-gap alignment operation counts for fuzzy text matching.
//!
//! Computes how the minimum-cost alignment of two Unicode sequences is
//! composed: matches, mismatches, adjacent transpositions, gap opens and gap
//! extensions. Gaps follow an affine cost model, so one long run of
//! insertions is cheaper than many scattered ones. Whitespace, hyphens and
//! punctuation align with each other for free.
//!
//! # Architecture
//!
//! ```text
//! UTF-8 bytes ─ decode ─┐
//!                       ├→ AffineGapAligner (rolling Gotoh rows) → AlignmentOps
//! &[char] ──────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use oa_align::{align_counts_text, AlignmentOps};
//!
//! let ops = align_counts_text(Some("a b".as_bytes()), Some("a-b".as_bytes()));
//! assert_eq!(ops, AlignmentOps::matches(2));
//! ```

pub mod align;
pub mod chars;
pub mod error;
pub mod ops;
pub mod options;

pub use align::{
    AffineGapAligner, align_counts, align_counts_text, align_counts_text_with, align_counts_with,
    decode, try_align_counts, try_align_counts_text,
};
pub use error::{AlignError, AlignResult, InputPosition};
pub use ops::{Alignment, AlignmentOps, EditOp};
pub use options::{AlignmentOptions, Cost};
