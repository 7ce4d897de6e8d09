//! Alignment entry points.
//!
//! Two adapters sit above the [`AffineGapAligner`]:
//!
//! 1. code points: `&[char]` in, operation counts out
//! 2. raw text: UTF-8 bytes are decoded first, then delegated to (1)
//!
//! Each comes in two flavours. The `try_*` functions report failures as
//! [`AlignError`]. The plain functions return [`AlignmentOps::NONE`] on any
//! failure, which is indistinguishable from aligning two empty inputs; use
//! them only where that ambiguity does not matter.

pub mod affine;
mod workspace;

pub use affine::AffineGapAligner;

use tracing::debug;

use crate::error::{AlignError, AlignResult, InputPosition};
use crate::ops::AlignmentOps;
use crate::options::AlignmentOptions;

/// Operation counts for `a` against `b` under `options`.
///
/// # Errors
///
/// Returns [`AlignError::Allocation`] if the scratch rows cannot be reserved.
pub fn try_align_counts(
    a: &[char],
    b: &[char],
    options: &AlignmentOptions,
) -> AlignResult<AlignmentOps> {
    Ok(AffineGapAligner::new(*options).align(a, b)?.ops)
}

/// Operation counts for `a` against `b` with the default costs.
pub fn align_counts(a: &[char], b: &[char]) -> AlignmentOps {
    align_counts_with(a, b, &AlignmentOptions::default())
}

/// Operation counts for `a` against `b`, or [`AlignmentOps::NONE`] on failure.
pub fn align_counts_with(a: &[char], b: &[char], options: &AlignmentOptions) -> AlignmentOps {
    or_none(try_align_counts(a, b, options))
}

/// Decode UTF-8 text into code points.
///
/// # Errors
///
/// Returns [`AlignError::Decode`] for malformed input and
/// [`AlignError::Allocation`] if the code-point buffer cannot be reserved.
pub fn decode(bytes: &[u8]) -> AlignResult<Vec<char>> {
    decode_at(bytes, InputPosition::First)
}

/// Operation counts for two UTF-8 texts. `None` stands for an absent input.
///
/// # Errors
///
/// Returns [`AlignError::MissingInput`] or [`AlignError::Decode`] naming the
/// offending argument, or [`AlignError::Allocation`].
pub fn try_align_counts_text(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    options: &AlignmentOptions,
) -> AlignResult<AlignmentOps> {
    let a = a.ok_or(AlignError::MissingInput {
        position: InputPosition::First,
    })?;
    let b = b.ok_or(AlignError::MissingInput {
        position: InputPosition::Second,
    })?;

    let a = decode_at(a, InputPosition::First)?;
    let b = decode_at(b, InputPosition::Second)?;

    try_align_counts(&a, &b, options)
}

/// Operation counts for two UTF-8 texts with the default costs.
pub fn align_counts_text(a: Option<&[u8]>, b: Option<&[u8]>) -> AlignmentOps {
    align_counts_text_with(a, b, &AlignmentOptions::default())
}

/// Operation counts for two UTF-8 texts, or [`AlignmentOps::NONE`] if either
/// is absent, malformed, or cannot be aligned.
pub fn align_counts_text_with(
    a: Option<&[u8]>,
    b: Option<&[u8]>,
    options: &AlignmentOptions,
) -> AlignmentOps {
    or_none(try_align_counts_text(a, b, options))
}

fn decode_at(bytes: &[u8], position: InputPosition) -> AlignResult<Vec<char>> {
    let text =
        std::str::from_utf8(bytes).map_err(|source| AlignError::Decode { position, source })?;

    let len = text.chars().count();
    let mut chars = Vec::new();
    chars
        .try_reserve_exact(len)
        .map_err(|source| AlignError::Allocation { cells: len, source })?;
    chars.extend(text.chars());
    Ok(chars)
}

fn or_none(result: AlignResult<AlignmentOps>) -> AlignmentOps {
    result.unwrap_or_else(|err| {
        debug!(error = %err, "alignment failed, returning empty summary");
        AlignmentOps::NONE
    })
}
