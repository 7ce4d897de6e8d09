//! Linear-space scratch buffers for one alignment call.
//!
//! The recurrence keeps one row of best cells, one row of deletion cells and
//! two rows of pending transpositions, all of length `cols + 1`. Buffers are
//! reserved up front with `try_reserve_exact` so an oversized input surfaces as
//! [`AlignError::Allocation`] instead of aborting, and they are dropped on
//! every return path.

use crate::error::{AlignError, AlignResult};
use crate::ops::{AlignmentOps, EditOp};
use crate::options::Cost;

/// DP cell state: accumulated cost and the summary of the path reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub cost: Cost,
    pub ops: AlignmentOps,
}

impl Cell {
    pub const ORIGIN: Self = Self {
        cost: 0,
        ops: AlignmentOps::NONE,
    };

    pub fn new(cost: Cost, ops: AlignmentOps) -> Self {
        Self { cost, ops }
    }

    /// Follow a transition of the given cost, saturating at [`Cost::MAX`].
    #[must_use]
    pub fn then(self, op: EditOp, cost: Cost) -> Self {
        Self {
            cost: self.cost.saturating_add(cost),
            ops: self.ops.with(op),
        }
    }
}

/// Reusable rows for the rolling recurrence.
pub(crate) struct Workspace {
    /// Best cell per column, for the row being computed.
    pub best: Vec<Cell>,
    /// Best cell ending in a deletion per column, once a row has been
    /// computed.
    pub del: Vec<Option<Cell>>,
    /// Transpositions landing in the current row.
    pub swap: Vec<Option<Cell>>,
    /// Transpositions detected in the current row, landing in the next one.
    pub next_swap: Vec<Option<Cell>>,
}

impl Workspace {
    /// Reserve rows for `cols` columns.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::Allocation`] if any buffer cannot be reserved.
    pub fn with_columns(cols: usize) -> AlignResult<Self> {
        let len = cols + 1;
        Ok(Self {
            best: filled(len, Cell::ORIGIN)?,
            del: filled(len, None)?,
            swap: filled(len, None)?,
            next_swap: filled(len, None)?,
        })
    }

    /// Promote the transpositions detected in this row to the next row.
    pub fn advance_row(&mut self) {
        std::mem::swap(&mut self.swap, &mut self.next_swap);
        self.next_swap.fill(None);
    }
}

fn filled<T: Clone>(len: usize, value: T) -> AlignResult<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| AlignError::Allocation { cells: len, source })?;
    buf.resize(len, value);
    Ok(buf)
}
