//! cascade-engine - gravity simulation and placement enumeration.
//!
//! Pure functions over board snapshots; the caller's board is never mutated.

pub mod collision;
pub mod enumerate;
pub mod simulate;

pub use collision::{collides, drop_row, fits_horizontally};
pub use enumerate::{enumerate_drops, Candidate};
pub use simulate::{simulate_drop, DropOutcome};
