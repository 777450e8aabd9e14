use crate::{Coords, GridInt};

/// Playing field bounds: cells are `[0, width) x [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: GridInt,
    pub height: GridInt,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        Grid { width, height }
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 >= 0 && pos.0 < self.width && pos.1 >= 0 && pos.1 < self.height
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Coords> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let grid = Grid::new(4, 3);
        assert!(grid.contains((0, 0)));
        assert!(grid.contains((3, 2)));
        assert!(!grid.contains((4, 0)));
        assert!(!grid.contains((0, 3)));
        assert!(!grid.contains((-1, 1)));
    }

    #[test]
    fn cells_cover_the_grid() {
        let grid = Grid::new(4, 3);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[5], (1, 1));
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }
}
