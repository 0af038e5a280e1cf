//! Shape library - the seven tetromino occupancy patterns and their colors.
//!
//! Shapes are small boolean matrices, rotated by transpose-and-reverse.
//! There is no kick table: a rotation that collides is simply rejected by
//! the session.

use crate::types::{PieceKind, Rgb};

/// Largest side of any base pattern (the I bar).
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix of a piece in its current orientation.
///
/// Backed by a fixed 4x4 grid with an explicit width/height, so rotation
/// never allocates. `cells[row][col]` is indexed y-first, matching board
/// coordinates where (0,0) is the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    fn from_pattern(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let height = rows.len() as u8;
        let width = rows[0].len() as u8;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), width as usize);
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the pattern occupies (x, y), with y being the row.
    /// Out-of-pattern coordinates read as empty.
    pub fn filled(&self, x: i8, y: i8) -> bool {
        if x < 0 || y < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return false;
        }
        self.cells[y as usize][x as usize]
    }

    /// Iterate the (dx, dy) offsets of all occupied cells.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (w, h) = (self.width as i8, self.height as i8);
        (0..h).flat_map(move |y| {
            (0..w).filter_map(move |x| self.cells[y as usize][x as usize].then_some((x, y)))
        })
    }

    /// 90-degree clockwise rotation: `rotated[x][h - 1 - y] = cells[y][x]`.
    /// Width and height swap; the occupied cell count is preserved.
    pub fn rotate_cw(&self) -> Shape {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in self.cells.iter().take(h).enumerate() {
            for (x, &v) in row.iter().take(w).enumerate() {
                cells[x][h - 1 - y] = v;
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Base occupancy pattern for a piece kind (spawn orientation).
///
/// Pure constant table; the returned shape is a copy the caller owns.
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_pattern(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_pattern(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_pattern(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_pattern(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_pattern(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_pattern(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_pattern(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Fixed display color for a piece kind.
pub fn color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xff, 0xff),
        PieceKind::O => Rgb::new(0xff, 0xff, 0x00),
        PieceKind::T => Rgb::new(0xff, 0x00, 0xff),
        PieceKind::S => Rgb::new(0x00, 0xff, 0x00),
        PieceKind::Z => Rgb::new(0xff, 0x00, 0x00),
        PieceKind::J => Rgb::new(0x00, 0x00, 0xff),
        PieceKind::L => Rgb::new(0xff, 0xa5, 0x00),
    }
}
