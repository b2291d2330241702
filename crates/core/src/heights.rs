//! Board with precomputed column heights for fast evaluation

use crate::Board;

/// Board wrapper with cached column heights.
/// A column's height is the number of cells from the bottom row up to and
/// including its topmost occupied cell, 0 when the column is empty.
#[derive(Clone, Debug)]
pub struct BoardHeights {
    heights: [u8; Board::WIDTH],
}

impl BoardHeights {
    /// Scan the board once, top to bottom per column.
    pub fn new(board: &Board) -> Self {
        let mut heights = [0u8; Board::WIDTH];
        for (x, height) in heights.iter_mut().enumerate() {
            *height = Self::compute_height(board, x);
        }
        Self { heights }
    }

    fn compute_height(board: &Board, x: usize) -> u8 {
        for y in 0..Board::HEIGHT {
            if board.is_occupied(x, y) {
                return (Board::HEIGHT - y) as u8;
            }
        }
        0
    }

    /// O(1) height lookup
    #[inline(always)]
    pub fn height(&self, x: usize) -> u8 {
        self.heights[x]
    }

    /// O(1) max height across all columns
    #[inline(always)]
    pub fn max_height(&self) -> u8 {
        *self.heights.iter().max().unwrap_or(&0)
    }

    /// Sum of all column heights.
    pub fn aggregate_height(&self) -> u32 {
        self.heights.iter().map(|&h| h as u32).sum()
    }

    /// Sum of absolute height differences between adjacent columns.
    pub fn bumpiness(&self) -> u32 {
        let mut sum = 0u32;
        for x in 0..Board::WIDTH - 1 {
            let diff = (self.heights[x] as i32 - self.heights[x + 1] as i32).abs();
            sum += diff as u32;
        }
        sum
    }

    /// Get heights array reference
    #[inline(always)]
    pub fn heights(&self) -> &[u8; Board::WIDTH] {
        &self.heights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeKind;

    #[test]
    fn test_empty_board_heights() {
        let board = Board::new();
        let bh = BoardHeights::new(&board);
        for x in 0..Board::WIDTH {
            assert_eq!(bh.height(x), 0);
        }
        assert_eq!(bh.max_height(), 0);
        assert_eq!(bh.aggregate_height(), 0);
        assert_eq!(bh.bumpiness(), 0);
    }

    #[test]
    fn test_single_cell_height() {
        let mut board = Board::new();
        board.set(5, 16, Some(ShapeKind::T)); // 4 cells above the bottom edge
        let bh = BoardHeights::new(&board);
        assert_eq!(bh.height(5), 4);
        assert_eq!(bh.max_height(), 4);
    }

    #[test]
    fn test_height_ignores_holes_below() {
        let mut board = Board::new();
        board.set(2, 17, Some(ShapeKind::S));
        // rows 18 and 19 in column 2 stay empty - height is still from the top cell
        let bh = BoardHeights::new(&board);
        assert_eq!(bh.height(2), 3);
    }

    #[test]
    fn test_bumpiness() {
        let mut board = Board::new();
        // column heights: [1, 3, 1, 3, 1, 3, 1, 3, 1, 3]
        for x in (1..Board::WIDTH).step_by(2) {
            board.set(x, 19, Some(ShapeKind::I));
            board.set(x, 18, Some(ShapeKind::I));
            board.set(x, 17, Some(ShapeKind::I));
        }
        for x in (0..Board::WIDTH).step_by(2) {
            board.set(x, 19, Some(ShapeKind::I));
        }
        let bh = BoardHeights::new(&board);
        assert_eq!(bh.bumpiness(), 18);
        assert_eq!(bh.aggregate_height(), 20);
    }
}
