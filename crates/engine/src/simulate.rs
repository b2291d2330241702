//! Hard-drop simulation: place a shape at a column, let gravity act, clear
//! full rows, and report the outcome on a fresh board.

use cascade_core::{Board, Rotation, ShapeKind};
use serde::{Deserialize, Serialize};

use crate::collision::drop_row;

/// Result of dropping one shape: the new board, the number of rows cleared,
/// and the pivot row the shape came to rest on (before clears shifted rows).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DropOutcome {
    pub board: Board,
    pub lines_cleared: u8,
    pub landing_row: i8,
}

/// Simulate an instantaneous hard drop of `shape` with its pivot at `col`.
/// Returns `None` for invalid placements (outside the walls, overlapping
/// before descent, or resting above the top row); invalid placements are
/// never scored. The input board is untouched.
pub fn simulate_drop(
    board: &Board,
    shape: ShapeKind,
    rotation: Rotation,
    col: i8,
) -> Option<DropOutcome> {
    let landing_row = drop_row(board, shape, rotation, col)?;

    let mut next = board.clone();
    for (dx, dy) in shape.cells(rotation) {
        let x = (col + dx) as usize;
        let y = (landing_row + dy) as usize;
        next.set(x, y, Some(shape));
    }

    let lines_cleared = next.clear_lines();
    Some(DropOutcome {
        board: next,
        lines_cleared,
        landing_row,
    })
}
