//! cascade-search - placement search with fixed-depth lookahead.

mod two_ply;

pub use two_ply::{Searcher, TOPOUT_PENALTY};

use cascade_core::Placement;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The chosen placement for the current piece plus its diagnostic score
/// (lower is better). Consumed by the movement driver that steers the
/// falling piece toward the target column and rotation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BestMove {
    pub placement: Placement,
    pub score: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum SearchError {
    /// The current piece has no legal placement anywhere - the stack has
    /// topped out. Callers treat this as game over, not as a retryable
    /// failure.
    #[error("no legal placement exists for the current piece")]
    NoLegalMove,
}
