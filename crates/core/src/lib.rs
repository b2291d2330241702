//! cascade-core - board, shape, and placement types for the move engine.

pub mod board;
pub mod heights;
pub mod placement;
pub mod shape;

pub use board::{Board, Cell};
pub use heights::BoardHeights;
pub use placement::Placement;
pub use shape::{Rotation, ShapeKind};
