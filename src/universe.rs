//! Declares the grid that a generation run paints.  The grid is a flat, row-major buffer of colors with a fixed width
//! and height; a run overwrites every cell at once and there is no way to update part of it.

use crate::util::{get_index, Color};

/// Width and height of the original visualizer's canvas.
pub const DEFAULT_GRID_WIDTH: usize = 120;
pub const DEFAULT_GRID_HEIGHT: usize = 120;
/// Largest width or height a grid can have.  Larger requests are clamped down to it.
pub const MAX_GRID_DIMENSION: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConf {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConf {
    fn default() -> GridConf {
        GridConf {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

impl GridConf {
    /// Builds a configuration from signed dimensions.  Anything at or below zero becomes zero, which is a valid
    /// "nothing to draw" grid rather than an error.  Anything above `MAX_GRID_DIMENSION` becomes that maximum.
    pub fn new(width: i64, height: i64) -> GridConf {
        GridConf {
            width: usize::try_from(width).unwrap_or(0),
            height: usize::try_from(height).unwrap_or(0),
        }
        .bounded()
    }

    /// This configuration with each side clamped to `MAX_GRID_DIMENSION`.
    pub fn bounded(self) -> GridConf {
        GridConf {
            width: self.width.min(MAX_GRID_DIMENSION),
            height: self.height.min(MAX_GRID_DIMENSION),
        }
    }

    /// Number of cells, or zero if either dimension is zero.
    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Wraps a fully populated buffer.  `cells` must hold exactly `width * height` colors in row-major order.
    pub(crate) fn from_cells(conf: GridConf, cells: Vec<Color>) -> Grid {
        debug_assert_eq!(cells.len(), conf.cell_count());
        if conf.is_empty() {
            return Grid::empty();
        }

        Grid {
            width: conf.width,
            height: conf.height,
            cells,
        }
    }

    pub fn empty() -> Grid {
        Grid::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.cells.get(get_index(x, y, self.width)).copied()
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Iterates over the rows of the grid from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // `chunks` panics on a zero chunk size; an empty grid simply has no rows
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        assert_eq!(GridConf::new(-5, 10), GridConf { width: 0, height: 10 });
        assert!(GridConf::new(-5, 10).is_empty());
        assert!(GridConf::new(10, 0).is_empty());
        assert_eq!(GridConf::new(3, 4).cell_count(), 12);
    }

    #[test]
    fn oversized_dimensions_clamp_to_the_maximum() {
        let conf = GridConf::new(i64::MAX, 2);
        assert_eq!(conf, GridConf { width: MAX_GRID_DIMENSION, height: 2 });
        assert_eq!(conf.cell_count(), MAX_GRID_DIMENSION * 2);
        assert_eq!(GridConf::new(5000, 5000).cell_count(), MAX_GRID_DIMENSION * MAX_GRID_DIMENSION);

        let raw = GridConf { width: usize::MAX, height: 3 };
        assert_eq!(raw.bounded(), GridConf { width: MAX_GRID_DIMENSION, height: 3 });
    }

    #[test]
    fn default_matches_original_canvas() {
        let conf = GridConf::default();
        assert_eq!((conf.width, conf.height), (120, 120));
    }

    #[test]
    fn get_is_row_major() {
        let conf = GridConf { width: 3, height: 2 };
        let cells: Vec<Color> = (0..6u8).map(|i| Color::new(i, i, i)).collect();
        let grid = Grid::from_cells(conf, cells);

        assert_eq!(grid.get(0, 0), Some(Color::new(0, 0, 0)));
        assert_eq!(grid.get(2, 0), Some(Color::new(2, 2, 2)));
        assert_eq!(grid.get(0, 1), Some(Color::new(3, 3, 3)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let grid = Grid::from_cells(GridConf { width: 0, height: 7 }, Vec::new());
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.get(0, 0), None);
    }
}
