//! Brick grid layout and per-cell status
//!
//! The grid is built once from a boolean pattern mask: marked cells get a
//! fixed pixel center (the whole grid horizontally centered, offset down
//! from the top of the arena), unmarked cells carry no geometry. Only the
//! alive flags change during play; `reset` never recomputes geometry.

use glam::Vec2;

use crate::consts::*;

/// The one level this game ships: a 6x8 heart.
pub const HEART_PATTERN: [[u8; 8]; 6] = [
    [0, 1, 1, 0, 0, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

/// One grid slot. Pattern zeroes stay `Empty` for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Empty,
    Brick { alive: bool, center: Vec2 },
}

/// Row-major grid of brick cells with an incrementally maintained alive count.
#[derive(Debug, Clone)]
pub struct BrickGrid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    total_bricks: u32,
    alive_bricks: u32,
}

impl BrickGrid {
    /// Lay out a pattern mask inside the arena.
    ///
    /// Cells are squares of `cell_size` separated by `padding`; the grid is
    /// horizontally centered and its top edge sits at
    /// `offset_fraction * arena_height`.
    ///
    /// Panics if the pattern contains no bricks (an all-zero mask would make
    /// the first tick an instant win).
    pub fn from_pattern<const C: usize>(
        pattern: &[[u8; C]],
        cell_size: f32,
        padding: f32,
        arena_width: f32,
        arena_height: f32,
        offset_fraction: f32,
    ) -> Self {
        let rows = pattern.len();
        let cols = C;

        let pitch = cell_size + padding;
        let grid_width = cols as f32 * cell_size + (cols as f32 - 1.0) * padding;
        let start_x = (arena_width - grid_width) / 2.0;
        let start_y = arena_height * offset_fraction;
        let half = cell_size / 2.0;

        let mut cells = Vec::with_capacity(rows * cols);
        let mut total_bricks = 0u32;
        for (r, row) in pattern.iter().enumerate() {
            for (c, &mask) in row.iter().enumerate() {
                if mask == 1 {
                    let center = Vec2::new(
                        start_x + c as f32 * pitch + half,
                        start_y + r as f32 * pitch + half,
                    );
                    cells.push(Cell::Brick { alive: true, center });
                    total_bricks += 1;
                } else {
                    cells.push(Cell::Empty);
                }
            }
        }

        assert!(total_bricks > 0, "brick pattern must contain at least one brick");

        Self {
            cells,
            rows,
            cols,
            total_bricks,
            alive_bricks: total_bricks,
        }
    }

    /// The heart layout at the game's fixed arena dimensions.
    pub fn heart() -> Self {
        Self::from_pattern(
            &HEART_PATTERN,
            BRICK_SIZE,
            BRICK_PADDING,
            ARENA_WIDTH,
            ARENA_HEIGHT,
            BRICK_OFFSET_FRACTION,
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Number of 1-cells in the source pattern; fixed for the grid's lifetime.
    pub fn total_bricks(&self) -> u32 {
        self.total_bricks
    }

    /// Bricks not yet destroyed. Monotonically non-increasing until `reset`.
    pub fn alive_bricks(&self) -> u32 {
        self.alive_bricks
    }

    /// Mark a brick destroyed. Destroying an empty or already-dead cell is a
    /// programming error.
    pub fn destroy(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row * self.cols + col];
        match cell {
            Cell::Brick { alive, .. } if *alive => {
                *alive = false;
                self.alive_bricks -= 1;
            }
            _ => debug_assert!(false, "destroy() on a cell with no live brick"),
        }
    }

    /// Revive every brick. Geometry is untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Brick { alive, .. } = cell {
                *alive = true;
            }
        }
        self.alive_bricks = self.total_bricks;
    }

    /// Centers of bricks still standing, in row-major order.
    pub fn alive_centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.cells.iter().filter_map(|cell| match cell {
            Cell::Brick { alive: true, center } => Some(*center),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_pattern_brick_count() {
        let grid = BrickGrid::heart();
        assert_eq!(grid.total_bricks(), 32);
        assert_eq!(grid.alive_bricks(), 32);
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 8);
    }

    #[test]
    fn test_unmarked_cells_have_no_geometry() {
        let grid = BrickGrid::heart();
        // Top-left corner of the heart mask is a 0.
        assert_eq!(grid.cell(0, 0), Cell::Empty);
        assert!(matches!(grid.cell(0, 1), Cell::Brick { alive: true, .. }));
    }

    #[test]
    fn test_grid_is_horizontally_centered() {
        let grid = BrickGrid::heart();
        let Cell::Brick { center: left, .. } = grid.cell(1, 0) else {
            panic!("expected a brick at row 1, col 0");
        };
        let Cell::Brick { center: right, .. } = grid.cell(1, 7) else {
            panic!("expected a brick at row 1, col 7");
        };
        // Full row: its midpoint is the arena midline.
        assert!(((left.x + right.x) / 2.0 - ARENA_WIDTH / 2.0).abs() < 1e-3);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn test_vertical_offset() {
        let grid = BrickGrid::heart();
        let Cell::Brick { center, .. } = grid.cell(0, 1) else {
            panic!("expected a brick at row 0, col 1");
        };
        // First row of cells starts at 15% of arena height.
        assert!((center.y - (ARENA_HEIGHT * BRICK_OFFSET_FRACTION + BRICK_SIZE / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn test_destroy_and_reset_keep_geometry() {
        let mut grid = BrickGrid::heart();
        let Cell::Brick { center: before, .. } = grid.cell(2, 3) else {
            panic!("expected a brick at row 2, col 3");
        };

        grid.destroy(2, 3);
        assert_eq!(grid.alive_bricks(), 31);
        assert!(matches!(grid.cell(2, 3), Cell::Brick { alive: false, .. }));

        grid.reset();
        assert_eq!(grid.alive_bricks(), 32);
        let Cell::Brick { alive, center: after } = grid.cell(2, 3) else {
            panic!("expected a brick at row 2, col 3");
        };
        assert!(alive);
        assert_eq!(before, after);
    }

    #[test]
    fn test_alive_centers_tracks_destruction() {
        let mut grid = BrickGrid::heart();
        assert_eq!(grid.alive_centers().count(), 32);
        grid.destroy(0, 1);
        grid.destroy(0, 2);
        assert_eq!(grid.alive_centers().count(), 30);
    }

    #[test]
    #[should_panic(expected = "at least one brick")]
    fn test_empty_pattern_is_rejected() {
        let pattern: [[u8; 3]; 2] = [[0, 0, 0], [0, 0, 0]];
        let _ = BrickGrid::from_pattern(&pattern, 30.0, 2.0, 480.0, 320.0, 0.15);
    }
}
