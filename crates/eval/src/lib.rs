//! cascade-eval - stack heuristics for board evaluation.
//!
//! Scores are lower-is-better: height, holes, and bumpiness are penalties,
//! cleared lines a reward.

use cascade_core::{Board, BoardHeights};

/// Non-negative feature weights. All penalties add to the score; the line
/// reward subtracts from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    pub aggregate_height: i32,
    pub max_height: i32,
    pub bumpiness: i32,
    pub holes: i32,
    pub lines_cleared: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            aggregate_height: 5,
            max_height: 5,
            bumpiness: 1,
            holes: 10,
            lines_cleared: 20,
        }
    }
}

impl EvalWeights {
    /// Ignore every feature - useful for exercising tie-break rules.
    pub fn zero() -> Self {
        Self {
            aggregate_height: 0,
            max_height: 0,
            bumpiness: 0,
            holes: 0,
            lines_cleared: 0,
        }
    }
}

/// Weighted score of a board snapshot. Lower is better.
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    let heights = BoardHeights::new(board);

    let mut score = 0i32;
    score += heights.aggregate_height() as i32 * weights.aggregate_height;
    score += heights.max_height() as i32 * weights.max_height;
    score += heights.bumpiness() as i32 * weights.bumpiness;
    score += count_holes(board) as i32 * weights.holes;
    score
}

/// Score including the reward for rows cleared while reaching this board.
/// The clear count comes from the drop simulation; it cannot be recomputed
/// from the snapshot alone.
pub fn evaluate_with_clear(board: &Board, lines: u8, weights: &EvalWeights) -> i32 {
    evaluate(board, weights) - lines as i32 * weights.lines_cleared
}

/// Empty cells with at least one occupied cell above them in the same column.
pub fn count_holes(board: &Board) -> u32 {
    let mut holes = 0u32;
    for x in 0..Board::WIDTH {
        let mut found_block = false;
        for y in 0..Board::HEIGHT {
            if board.is_occupied(x, y) {
                found_block = true;
            } else if found_block {
                holes += 1;
            }
        }
    }
    holes
}
