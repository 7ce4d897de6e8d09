//! Cost configuration for the affine-gap aligner.
//!
//! Every weight is a non-negative integer. Larger values penalize the
//! corresponding operation more heavily relative to the others. A gap of
//! length `k` costs `gap_open_cost + k * gap_extend_cost`.

use serde::{Deserialize, Serialize};

use crate::error::AlignResult;
use crate::ops::EditOp;

/// Cost weight and accumulated alignment cost.
pub type Cost = u64;

/// The five cost weights of one alignment call.
///
/// # Example
///
/// ```
/// use oa_align::AlignmentOptions;
///
/// let options = AlignmentOptions::from_json(r#"{ "mismatch_cost": 8 }"#).expect("valid options");
/// assert_eq!(options.mismatch_cost, 8);
/// assert_eq!(options.gap_open_cost, AlignmentOptions::default().gap_open_cost);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentOptions {
    /// Cost of aligning two equal (or two interchangeable) characters.
    pub match_cost: Cost,
    /// Cost of substituting one character for a different one.
    pub mismatch_cost: Cost,
    /// Cost of an adjacent two-character swap, scored as one operation.
    pub transpose_cost: Cost,
    /// Extra cost paid once per gap run.
    pub gap_open_cost: Cost,
    /// Cost paid for every character inside a gap run.
    pub gap_extend_cost: Cost,
}

impl AlignmentOptions {
    /// Affine-gap preset used when the caller supplies no costs.
    pub const AFFINE_GAP: Self = Self {
        match_cost: 0,
        mismatch_cost: 6,
        transpose_cost: 4,
        gap_open_cost: 3,
        gap_extend_cost: 2,
    };

    pub const fn new(
        match_cost: Cost,
        mismatch_cost: Cost,
        transpose_cost: Cost,
        gap_open_cost: Cost,
        gap_extend_cost: Cost,
    ) -> Self {
        Self {
            match_cost,
            mismatch_cost,
            transpose_cost,
            gap_open_cost,
            gap_extend_cost,
        }
    }

    /// Unit edit costs: every substitution, transposition and gapped
    /// character costs 1, gaps are free to open.
    pub const fn unit() -> Self {
        Self::new(0, 1, 1, 0, 1)
    }

    /// Parse options from a JSON object. Missing fields take their value
    /// from [`AlignmentOptions::AFFINE_GAP`].
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::Options`](crate::AlignError::Options) if the
    /// document is malformed or a weight is not a non-negative integer.
    pub fn from_json(json: &str) -> AlignResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Cost of a single transition. Opening a gap includes its first
    /// extension. Saturates at [`Cost::MAX`].
    pub const fn op_cost(&self, op: EditOp) -> Cost {
        match op {
            EditOp::Match | EditOp::Equivalent => self.match_cost,
            EditOp::Mismatch => self.mismatch_cost,
            EditOp::Transpose => self.transpose_cost,
            EditOp::GapOpen => self.gap_open_cost.saturating_add(self.gap_extend_cost),
            EditOp::GapExtend => self.gap_extend_cost,
        }
    }

    /// Cost of a gap run of `len` characters, saturating at [`Cost::MAX`].
    pub const fn gap_cost(&self, len: usize) -> Cost {
        if len == 0 {
            return 0;
        }
        self.gap_open_cost
            .saturating_add((len as Cost).saturating_mul(self.gap_extend_cost))
    }
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self::AFFINE_GAP
    }
}
