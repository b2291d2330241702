//! Shape kinds and rotation-state cell offsets.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Stable ordinal, used for deterministic tie-breaking.
    pub fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Cell offsets for this shape at the given rotation.
    /// Returns 4 (x, y) offsets relative to the pivot; y grows downward.
    /// Each table is the North shape advanced by quarter turns
    /// (x, y) -> (-y, x).
    pub fn cells(self, rot: Rotation) -> [(i8, i8); 4] {
        let idx = rot.index() as usize;
        match self {
            ShapeKind::I => [
                [(-1, 0), (0, 0), (1, 0), (2, 0)],
                [(0, -1), (0, 0), (0, 1), (0, 2)],
                [(1, 0), (0, 0), (-1, 0), (-2, 0)],
                [(0, 1), (0, 0), (0, -1), (0, -2)],
            ][idx],
            ShapeKind::O => [
                [(0, 0), (1, 0), (0, 1), (1, 1)],
                [(0, 0), (0, 1), (-1, 0), (-1, 1)],
                [(0, 0), (-1, 0), (0, -1), (-1, -1)],
                [(0, 0), (0, -1), (1, 0), (1, -1)],
            ][idx],
            ShapeKind::T => [
                [(-1, 0), (0, 0), (1, 0), (0, 1)],
                [(0, -1), (0, 0), (0, 1), (-1, 0)],
                [(1, 0), (0, 0), (-1, 0), (0, -1)],
                [(0, 1), (0, 0), (0, -1), (1, 0)],
            ][idx],
            ShapeKind::S => [
                [(0, 0), (1, 0), (-1, 1), (0, 1)],
                [(0, 0), (0, 1), (-1, -1), (-1, 0)],
                [(0, 0), (-1, 0), (1, -1), (0, -1)],
                [(0, 0), (0, -1), (1, 1), (1, 0)],
            ][idx],
            ShapeKind::Z => [
                [(-1, 0), (0, 0), (0, 1), (1, 1)],
                [(0, -1), (0, 0), (-1, 0), (-1, 1)],
                [(1, 0), (0, 0), (0, -1), (-1, -1)],
                [(0, 1), (0, 0), (1, 0), (1, -1)],
            ][idx],
            ShapeKind::J => [
                [(0, -1), (0, 0), (-1, 1), (0, 1)],
                [(1, 0), (0, 0), (-1, -1), (-1, 0)],
                [(0, 1), (0, 0), (1, -1), (0, -1)],
                [(-1, 0), (0, 0), (1, 1), (1, 0)],
            ][idx],
            ShapeKind::L => [
                [(0, -1), (0, 0), (0, 1), (1, 1)],
                [(1, 0), (0, 0), (-1, 0), (-1, 1)],
                [(0, 1), (0, 0), (0, -1), (-1, -1)],
                [(-1, 0), (0, 0), (1, 0), (1, -1)],
            ][idx],
        }
    }

    /// Spawn column (pivot starts near the middle of the board).
    pub fn spawn_col(self) -> i8 {
        4
    }
}
