//! Operation-count summaries.

use serde::{Deserialize, Serialize};

use crate::options::{AlignmentOptions, Cost};

/// A single transition of the alignment recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Equal characters.
    Match,
    /// Two different non-characters (whitespace, hyphens, punctuation).
    /// Costs `match_cost` but is not counted.
    Equivalent,
    Mismatch,
    /// Adjacent two-character swap.
    Transpose,
    /// First character of a gap run. Also counts one extension.
    GapOpen,
    GapExtend,
}

/// Composition of the minimum-cost alignment between two sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentOps {
    pub matches: usize,
    pub mismatches: usize,
    pub transpositions: usize,
    pub gap_opens: usize,
    pub gap_extensions: usize,
}

impl AlignmentOps {
    /// The neutral all-zero summary.
    pub const NONE: Self = Self {
        matches: 0,
        mismatches: 0,
        transpositions: 0,
        gap_opens: 0,
        gap_extensions: 0,
    };

    /// Summary with `n` matches and nothing else.
    pub const fn matches(n: usize) -> Self {
        Self {
            matches: n,
            ..Self::NONE
        }
    }

    /// Summary of a single gap run of `len` characters.
    pub const fn gap(len: usize) -> Self {
        Self {
            gap_opens: 1,
            gap_extensions: len,
            ..Self::NONE
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Count `op` into the summary.
    pub fn record(&mut self, op: EditOp) {
        match op {
            EditOp::Match => self.matches += 1,
            EditOp::Equivalent => {}
            EditOp::Mismatch => self.mismatches += 1,
            EditOp::Transpose => self.transpositions += 1,
            EditOp::GapOpen => {
                self.gap_opens += 1;
                self.gap_extensions += 1;
            }
            EditOp::GapExtend => self.gap_extensions += 1,
        }
    }

    /// Copy of `self` with `op` counted.
    #[must_use]
    pub fn with(mut self, op: EditOp) -> Self {
        self.record(op);
        self
    }

    /// Cost-weighted sum of the counters.
    ///
    /// Uncounted [`EditOp::Equivalent`] pairs are not included, so this equals
    /// the alignment cost whenever `match_cost` is zero or the inputs have no
    /// differing non-character pairs.
    pub fn cost(&self, options: &AlignmentOptions) -> Cost {
        [
            (self.matches, options.match_cost),
            (self.mismatches, options.mismatch_cost),
            (self.transpositions, options.transpose_cost),
            (self.gap_opens, options.gap_open_cost),
            (self.gap_extensions, options.gap_extend_cost),
        ]
        .into_iter()
        .fold(0, |total: Cost, (count, weight)| {
            total.saturating_add((count as Cost).saturating_mul(weight))
        })
    }

    /// Number of non-match operations (mismatches, transpositions and gapped
    /// characters).
    pub fn edits(&self) -> usize {
        self.mismatches + self.transpositions + self.gap_extensions
    }
}

/// Result of one alignment: the minimum cost and the summary of the path
/// that achieves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub cost: Cost,
    pub ops: AlignmentOps,
}
