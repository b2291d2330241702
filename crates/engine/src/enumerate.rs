//! Legal-placement enumeration for one shape on one board.

use cascade_core::{Board, Placement, Rotation, ShapeKind};

use crate::simulate::{simulate_drop, DropOutcome};

/// A legal placement paired with its simulated outcome.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub placement: Placement,
    pub outcome: DropOutcome,
}

/// Every legal (rotation, column) drop for `shape`, in a fixed order:
/// rotations North, East, South, West; columns ascending. Invalid
/// placements are skipped silently. The order is part of the contract -
/// tie-breaking in the search depends on it being reproducible.
pub fn enumerate_drops(board: &Board, shape: ShapeKind) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for rotation in Rotation::ALL {
        for col in 0..Board::WIDTH as i8 {
            if let Some(outcome) = simulate_drop(board, shape, rotation, col) {
                candidates.push(Candidate {
                    placement: Placement::new(shape, rotation, col),
                    outcome,
                });
            }
        }
    }
    candidates
}
