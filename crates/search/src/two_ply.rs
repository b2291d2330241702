//! Best-placement search: enumerate every legal drop of the current shape,
//! score each resulting board with the lookahead queue, keep the minimum.

use cascade_core::{Board, ShapeKind};
use cascade_engine::enumerate_drops;
use cascade_eval::{evaluate, EvalWeights};
use rayon::prelude::*;

use crate::{BestMove, SearchError};

/// Score assigned to a branch whose next shape has no legal placement.
/// Large enough to lose against any reachable board score, so a topped-out
/// continuation is still chosen over nothing when every branch tops out.
pub const TOPOUT_PENALTY: i32 = 1_000_000;

/// Placement searcher. `depth` is the number of pieces considered,
/// including the current one; 2 is the classic current + next lookahead.
#[derive(Clone, Debug)]
pub struct Searcher {
    pub depth: usize,
    pub weights: EvalWeights,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            depth: 2,
            weights: EvalWeights::default(),
        }
    }
}

impl Searcher {
    pub fn new(depth: usize) -> Self {
        Self {
            depth: depth.max(1),
            weights: EvalWeights::default(),
        }
    }

    /// Two-ply entry point: pick the placement for `current` whose best
    /// achievable continuation with `next` scores lowest.
    ///
    /// `Err(NoLegalMove)` only when `current` cannot be placed at all; a
    /// topped-out *second* ply degrades to [`TOPOUT_PENALTY`] instead, so a
    /// result always exists while the first ply does.
    pub fn find_best_move(
        &self,
        board: &Board,
        current: ShapeKind,
        next: ShapeKind,
    ) -> Result<BestMove, SearchError> {
        self.find_best_plan(board, current, &[next])
    }

    /// Arbitrary-depth generalization: `queue` holds the upcoming shapes in
    /// order. Only the first `depth - 1` of them are looked at.
    pub fn find_best_plan(
        &self,
        board: &Board,
        current: ShapeKind,
        queue: &[ShapeKind],
    ) -> Result<BestMove, SearchError> {
        let lookahead = &queue[..queue.len().min(self.depth.saturating_sub(1))];

        let candidates = enumerate_drops(board, current);

        // Each candidate owns its board copy, so scoring is free of shared
        // state. The (score, col, rotation) key totally orders candidates;
        // the merge result is identical whatever order workers finish in.
        candidates
            .into_par_iter()
            .map(|candidate| {
                let score = self.plan_score(
                    &candidate.outcome.board,
                    candidate.outcome.lines_cleared as i32,
                    lookahead,
                );
                (score, candidate.placement)
            })
            .min_by_key(|&(score, placement)| (score, placement.col, placement.rotation.index()))
            .map(|(score, placement)| BestMove { placement, score })
            .ok_or(SearchError::NoLegalMove)
    }

    /// Best achievable leaf score from `board` given the remaining queue.
    /// `cleared` accumulates line clears along the branch so that an early
    /// clear keeps its reward at the leaf.
    fn plan_score(&self, board: &Board, cleared: i32, queue: &[ShapeKind]) -> i32 {
        let Some((&shape, rest)) = queue.split_first() else {
            return evaluate(board, &self.weights) - cleared * self.weights.lines_cleared;
        };

        let candidates = enumerate_drops(board, shape);
        if candidates.is_empty() {
            return TOPOUT_PENALTY;
        }

        candidates
            .iter()
            .map(|candidate| {
                self.plan_score(
                    &candidate.outcome.board,
                    cleared + candidate.outcome.lines_cleared as i32,
                    rest,
                )
            })
            .min()
            .unwrap_or(TOPOUT_PENALTY)
    }
}
