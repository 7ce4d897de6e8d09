//! Affine-gap alignment with adjacent transpositions.
//!
//! Gotoh's recurrence in the linear-space formulation of Myers and Miller,
//! scanning one row of the shorter sequence at a time across the longer one.
//! Each cell tracks three predecessors:
//!
//! - deletion: a gap in the row sequence, extended down a column
//! - insertion: a gap in the column sequence, extended along the row
//! - diagonal: match, mismatch, interchangeable non-characters, or a
//!   transposition landing from two rows and two columns back
//!
//! They are compared in that order and a later candidate replaces the current
//! best only if it is strictly cheaper. Within a gap direction, extending wins
//! ties against opening. A transposition landing on a cell replaces the
//! substitution there unless it is strictly dearer.
//!
//! Costs saturate at [`Cost::MAX`], so huge weights never wrap around.
//!
//! Every cell carries the operation counts of the path that produced it, so
//! the reported summary always belongs to the reported cost.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::align::workspace::{Cell, Workspace};
use crate::chars::{is_swap, pair_op};
use crate::error::AlignResult;
use crate::ops::{Alignment, AlignmentOps, EditOp};
use crate::options::{AlignmentOptions, Cost};

/// Minimum-cost aligner over code-point sequences.
///
/// # Example
///
/// ```
/// use oa_align::AffineGapAligner;
///
/// let a: Vec<char> = "ab".chars().collect();
/// let b: Vec<char> = "ba".chars().collect();
/// let alignment = AffineGapAligner::default().align(&a, &b).expect("should align");
/// assert_eq!(alignment.ops.transpositions, 1);
/// assert_eq!(alignment.cost, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffineGapAligner {
    options: AlignmentOptions,
}

impl AffineGapAligner {
    pub fn new(options: AlignmentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AlignmentOptions {
        &self.options
    }

    /// Align `a` against `b`.
    ///
    /// The result is independent of argument order.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::Allocation`](crate::AlignError::Allocation) if the
    /// scratch rows cannot be reserved.
    pub fn align(&self, a: &[char], b: &[char]) -> AlignResult<Alignment> {
        let (cols, rows) = orient(a, b);

        if cols == rows {
            trace!(len = cols.len(), "identical inputs");
            return Ok(Alignment {
                cost: (cols.len() as Cost).saturating_mul(self.options.match_cost),
                ops: AlignmentOps::matches(cols.len()),
            });
        }

        let alignment = self.align_rows(cols, rows)?;
        debug!(
            rows = rows.len(),
            cols = cols.len(),
            cost = alignment.cost,
            "aligned"
        );
        Ok(alignment)
    }

    fn align_rows(&self, cols: &[char], rows: &[char]) -> AlignResult<Alignment> {
        let options = &self.options;
        let mut ws = Workspace::with_columns(cols.len())?;

        trace!(rows = rows.len(), cols = cols.len(), "computing recurrence");

        for j in 1..=cols.len() {
            ws.best[j] = Cell::new(options.gap_cost(j), AlignmentOps::gap(j));
        }

        for (i, &c2) in rows.iter().enumerate() {
            let row = i + 1;
            let next_c2 = rows.get(row).copied();

            // Best cell of the previous row, one column back.
            let mut diag = ws.best[0];
            ws.best[0] = Cell::new(options.gap_cost(row), AlignmentOps::gap(row));
            let mut left = ws.best[0];
            let mut ins: Option<Cell> = None;

            for (k, &c1) in cols.iter().enumerate() {
                let j = k + 1;
                let up = ws.best[j];

                let insert = self.gap(ins, left);
                ins = Some(insert);

                let delete = self.gap(ws.del[j], up);
                ws.del[j] = Some(delete);

                let op = pair_op(c1, c2);
                let mut diagonal = diag.then(op, options.op_cost(op));
                if let Some(swap) = ws.swap[j].filter(|swap| swap.cost <= diagonal.cost) {
                    diagonal = swap;
                }

                let mut best = delete;
                if insert.cost < best.cost {
                    best = insert;
                }
                if diagonal.cost < best.cost {
                    best = diagonal;
                }

                // A swap starting here consumes two characters of each
                // sequence and lands one row down, one column right.
                let swaps = matches!(
                    (cols.get(j), next_c2),
                    (Some(&c1_next), Some(c2_next)) if is_swap(c1, c1_next, c2, c2_next)
                );
                if swaps {
                    ws.next_swap[j + 1] =
                        Some(diag.then(EditOp::Transpose, options.op_cost(EditOp::Transpose)));
                }

                diag = up;
                ws.best[j] = best;
                left = best;
            }

            ws.advance_row();
        }

        let Cell { cost, ops } = ws.best[cols.len()];
        Ok(Alignment { cost, ops })
    }

    /// Extend the running gap `open_run` or open a new one after `from`,
    /// whichever is cheaper. Extension wins ties.
    fn gap(&self, open_run: Option<Cell>, from: Cell) -> Cell {
        let opened = from.then(EditOp::GapOpen, self.options.op_cost(EditOp::GapOpen));
        match open_run {
            Some(run) if run.cost.saturating_add(self.options.gap_extend_cost) <= opened.cost => {
                run.then(EditOp::GapExtend, self.options.gap_extend_cost)
            }
            _ => opened,
        }
    }
}

/// Order the inputs as `(cols, rows)`: the longer sequence on the columns, and
/// for equal lengths the lexicographically smaller one.
fn orient<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    match a.len().cmp(&b.len()).then_with(|| b.cmp(a)) {
        Ordering::Less => (b, a),
        Ordering::Equal | Ordering::Greater => (a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn align(a: &str, b: &str) -> Alignment {
        AffineGapAligner::default()
            .align(&chars(a), &chars(b))
            .expect("should align")
    }

    #[test]
    fn test_orient_longer_on_columns() {
        let (a, b) = (chars("abc"), chars("xy"));
        assert_eq!(orient(&a, &b), (a.as_slice(), b.as_slice()));
        assert_eq!(orient(&b, &a), (a.as_slice(), b.as_slice()));
    }

    #[test]
    fn test_orient_equal_lengths_is_canonical() {
        let (a, b) = (chars("abd"), chars("abc"));
        assert_eq!(orient(&a, &b), orient(&b, &a));
        assert_eq!(orient(&a, &b).0, b.as_slice());
    }

    #[test]
    fn test_identical() {
        let alignment = align("hello", "hello");
        assert_eq!(alignment.ops, AlignmentOps::matches(5));
        assert_eq!(alignment.cost, 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(align("", ""), Alignment::default());
    }

    #[test]
    fn test_pure_gap() {
        let alignment = align("", "abc");
        assert_eq!(alignment.ops, AlignmentOps::gap(3));
        assert_eq!(alignment.cost, 3 + 3 * 2);
    }

    #[test]
    fn test_single_mismatch() {
        let alignment = align("abc", "abd");
        assert_eq!(
            alignment.ops,
            AlignmentOps {
                matches: 2,
                mismatches: 1,
                ..AlignmentOps::NONE
            }
        );
        assert_eq!(alignment.cost, 6);
    }

    #[test]
    fn test_single_deletion() {
        let alignment = align("abcd", "abd");
        assert_eq!(
            alignment.ops,
            AlignmentOps {
                matches: 3,
                gap_opens: 1,
                gap_extensions: 1,
                ..AlignmentOps::NONE
            }
        );
        assert_eq!(alignment.cost, 5);
    }

    #[test]
    fn test_transposition() {
        let alignment = align("ab", "ba");
        assert_eq!(
            alignment.ops,
            AlignmentOps {
                transpositions: 1,
                ..AlignmentOps::NONE
            }
        );
        assert_eq!(alignment.cost, 4);
    }

    #[test]
    fn test_transposition_inside_word() {
        let alignment = align("receive", "recieve");
        assert_eq!(
            alignment.ops,
            AlignmentOps {
                matches: 5,
                transpositions: 1,
                ..AlignmentOps::NONE
            }
        );
    }

    #[test]
    fn test_transposition_wins_tie_with_substitutions() {
        let aligner = AffineGapAligner::new(AlignmentOptions {
            transpose_cost: 12,
            gap_open_cost: 10,
            ..AlignmentOptions::default()
        });
        let alignment = aligner
            .align(&chars("ab"), &chars("ba"))
            .expect("should align");
        assert_eq!(alignment.cost, 12);
        assert_eq!(alignment.ops.transpositions, 1);
        assert_eq!(alignment.ops.mismatches, 0);
    }

    #[test]
    fn test_huge_weights_saturate() {
        let aligner = AffineGapAligner::new(AlignmentOptions {
            mismatch_cost: Cost::MAX,
            ..AlignmentOptions::default()
        });
        let alignment = aligner
            .align(&chars("ab"), &chars("cd"))
            .expect("should align");
        assert_eq!(alignment.cost, 14);
        assert_eq!(alignment.ops.gap_opens, 2);
        assert_eq!(alignment.ops.gap_extensions, 4);
        assert_eq!(alignment.ops.mismatches, 0);

        let aligner = AffineGapAligner::new(AlignmentOptions {
            gap_open_cost: Cost::MAX,
            ..AlignmentOptions::default()
        });
        let alignment = aligner
            .align(&chars("ab"), &chars("c"))
            .expect("should align");
        assert_eq!(alignment.cost, Cost::MAX);
    }

    #[test]
    fn test_expensive_transposition_falls_back() {
        let aligner = AffineGapAligner::new(AlignmentOptions {
            transpose_cost: 20,
            ..AlignmentOptions::default()
        });
        let alignment = aligner
            .align(&chars("ab"), &chars("ba"))
            .expect("should align");
        assert_eq!(alignment.ops.transpositions, 0);
        assert_eq!(alignment.cost, 10);
    }

    #[test]
    fn test_non_characters_align_for_free() {
        let alignment = align("a b", "a-b");
        assert_eq!(alignment.ops, AlignmentOps::matches(2));
        assert_eq!(alignment.cost, 0);
    }

    #[test]
    fn test_non_character_run_with_gap() {
        let alignment = align("a  b", "a-b");
        assert_eq!(
            alignment.ops,
            AlignmentOps {
                matches: 2,
                gap_opens: 1,
                gap_extensions: 1,
                ..AlignmentOps::NONE
            }
        );
        assert_eq!(alignment.cost, 5);
    }

    #[test]
    fn test_argument_order_irrelevant() {
        for (a, b) in [("abcd", "acbd"), ("main st", "main street"), ("kitten", "sitting")] {
            assert_eq!(align(a, b), align(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_unit_costs_give_edit_distance() {
        let aligner = AffineGapAligner::new(AlignmentOptions::unit());
        let cost = |a: &str, b: &str| {
            aligner
                .align(&chars(a), &chars(b))
                .expect("should align")
                .cost
        };
        assert_eq!(cost("kitten", "sitting"), 3);
        assert_eq!(cost("sunday", "saturday"), 3);
        assert_eq!(cost("flaw", "lawn"), 2);
        assert_eq!(cost("ca", "ac"), 1);
    }
}
