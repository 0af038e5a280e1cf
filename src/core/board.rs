//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a
//! piece kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..9 (left to right), y in 0..19 (top to
//! bottom). Rows above the visible grid (y < 0) hold no data: they never
//! block and are never written.

use crate::core::shapes::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell. Ignored outside the grid, including y < 0:
    /// a piece may still straddle the top edge when it locks.
    pub fn place(&mut self, x: i8, y: i8, cell: Cell) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Collision query for a single cell.
    ///
    /// Out-of-range columns and the floor block; rows above the visible
    /// grid do not, so freshly spawned pieces may overlap y < 0.
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)].is_some()
    }

    /// Whether a shape placed with its top-left at (x, y) collides with a
    /// wall, the floor, or settled cells.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .filled_cells()
            .any(|(dx, dy)| self.blocks(x + dx, y + dy))
    }

    /// Commit a shape's occupied cells onto the board.
    /// Cells above the grid are dropped, never committed.
    pub fn fill(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.filled_cells() {
            self.place(x + dx, y + dy, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row at once, shifting the rows above down and
    /// inserting empty rows at the top. Returns the number of rows cleared.
    ///
    /// Two-pointer bottom-to-top compaction over the flat array; the row
    /// count never changes and no row in the result is full.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Rows that opened up at the top become empty.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Count occupied cells in a row (for tests and views).
    pub fn row_occupancy(&self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn place_and_get() {
        let mut board = Board::new();
        board.place(0, 0, Some(PieceKind::I));
        board.place(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 1), Some(None));
    }

    #[test]
    fn place_above_grid_is_dropped() {
        let mut board = Board::new();
        board.place(4, -1, Some(PieceKind::O));
        board.place(4, -2, Some(PieceKind::O));
        assert_eq!(board.row_occupancy(0), 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn blocks_semantics() {
        let mut board = Board::new();

        // Walls and floor block.
        assert!(board.blocks(-1, 5));
        assert!(board.blocks(10, 5));
        assert!(board.blocks(0, 20));

        // Above the grid does not.
        assert!(!board.blocks(0, -1));
        assert!(!board.blocks(9, -4));

        // Settled cells block.
        assert!(!board.blocks(3, 10));
        board.place(3, 10, Some(PieceKind::S));
        assert!(board.blocks(3, 10));
    }

    #[test]
    fn clear_single_full_row() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.place(x, 19, Some(PieceKind::I));
        }
        board.place(0, 18, Some(PieceKind::J));

        assert_eq!(board.clear_full_rows(), 1);
        // The partial row above shifted down.
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
        assert_eq!(board.row_occupancy(19), 1);
        assert_eq!(board.row_occupancy(18), 0);
    }

    #[test]
    fn clears_all_full_rows_simultaneously() {
        let mut board = Board::new();
        // Rows 16 and 18 full, row 17 partial.
        for x in 0..BOARD_WIDTH as i8 {
            board.place(x, 16, Some(PieceKind::Z));
            board.place(x, 18, Some(PieceKind::Z));
        }
        board.place(2, 17, Some(PieceKind::L));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::L)));
        for y in 0..19 {
            assert_eq!(board.row_occupancy(y), 0, "row {y} should be empty");
        }
    }

    #[test]
    fn clear_is_idempotent_once_no_rows_are_full() {
        let mut board = Board::new();
        for y in 15..20 {
            for x in 0..BOARD_WIDTH as i8 {
                board.place(x, y, Some(PieceKind::I));
            }
        }
        board.place(0, 14, Some(PieceKind::T));

        assert_eq!(board.clear_full_rows(), 5);
        assert_eq!(board.clear_full_rows(), 0);
        for y in 0..BOARD_HEIGHT as usize {
            assert!(!board.is_row_full(y));
        }
    }
}
