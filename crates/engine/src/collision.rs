//! collision detection - walls, floor, occupied cells

use cascade_core::{Board, Rotation, ShapeKind};

/// Does the rotation fit inside the side walls when the pivot sits at `col`?
/// Independent of the row, so enumeration can reject a column outright.
pub fn fits_horizontally(shape: ShapeKind, rotation: Rotation, col: i8) -> bool {
    shape.cells(rotation).iter().all(|&(dx, _)| {
        let x = col + dx;
        x >= 0 && x < Board::WIDTH as i8
    })
}

/// Does the shape collide with a wall, the floor, or an occupied cell when
/// its pivot sits at (col, row)? Cells above the top row are ignored, so a
/// piece may overhang the board while descending.
pub fn collides(board: &Board, shape: ShapeKind, rotation: Rotation, col: i8, row: i8) -> bool {
    for (dx, dy) in shape.cells(rotation) {
        let x = col + dx;
        let y = row + dy;

        if x < 0 || x >= Board::WIDTH as i8 {
            return true;
        }
        if y >= Board::HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            continue;
        }
        if board.is_occupied(x as usize, y as usize) {
            return true;
        }
    }
    false
}

/// Hard-drop landing row for the pivot, or `None` when the placement is
/// invalid: the column does not fit between the walls, the piece overlaps
/// occupied cells before any descent, or resting would leave a cell above
/// the top row.
pub fn drop_row(board: &Board, shape: ShapeKind, rotation: Rotation, col: i8) -> Option<i8> {
    if !fits_horizontally(shape, rotation, col) {
        return None;
    }
    if collides(board, shape, rotation, col, 0) {
        return None;
    }

    let mut row = 0i8;
    while !collides(board, shape, rotation, col, row + 1) {
        row += 1;
    }

    // the rest position must keep every cell on the board
    let inside = shape.cells(rotation).iter().all(|&(_, dy)| row + dy >= 0);
    inside.then_some(row)
}
