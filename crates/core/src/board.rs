//! board representation - row-major grid of tagged cells
//! row 0 is the top, row HEIGHT-1 the bottom; gravity increases the row index

use serde::{Deserialize, Serialize};

use crate::ShapeKind;

/// A single board cell: empty, or occupied by a piece of the given kind.
pub type Cell = Option<ShapeKind>;

/// 10x20 playfield. Cells keep the identity of the shape that filled them,
/// which is all the renderer needs to color them.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 10]; 20],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; 10]; 20],
        }
    }
}

impl Board {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[y][x].is_some()
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.cells[y].iter().all(|cell| cell.is_some())
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.cells[y].iter().all(|cell| cell.is_none())
    }

    /// Remove every full row, shifting the rows above it down by one and
    /// leaving an empty row at the top. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u8 {
        let mut cleared = 0u8;
        let mut y = Self::HEIGHT - 1;
        loop {
            if self.is_row_full(y) {
                for yy in (1..=y).rev() {
                    self.cells[yy] = self.cells[yy - 1];
                }
                self.cells[0] = [None; Self::WIDTH];
                cleared += 1;
                // the row that slid into y may itself be full - recheck it
            } else if y == 0 {
                break;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                write!(f, "{}", if self.is_occupied(x, y) { "[]" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
