//! Candidate placement type produced by enumeration and returned by search.

use crate::{Rotation, ShapeKind};
use serde::{Deserialize, Serialize};

/// A target (rotation, column) for a falling shape. The landing row is not
/// part of a placement; gravity determines it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub shape: ShapeKind,
    pub rotation: Rotation,
    pub col: i8,
}

impl Placement {
    pub fn new(shape: ShapeKind, rotation: Rotation, col: i8) -> Self {
        Self {
            shape,
            rotation,
            col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_new() {
        let p = Placement::new(ShapeKind::T, Rotation::East, 4);
        assert_eq!(p.shape, ShapeKind::T);
        assert_eq!(p.rotation, Rotation::East);
        assert_eq!(p.col, 4);
    }
}
