use super::{Cell, LifeError, Template};
use rand::Rng;
use rayon::prelude::*;

/// Grid holds the 2D cell array of the universe.
/// Evolution never mutates in place: each generation is a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest accepted dimension; `x + dx + width` must not overflow `isize`
    pub const MAX_DIMENSION: usize = isize::MAX as usize / 2;

    /// Create a new grid with all cells initially dead.
    /// Fails with `InvalidDimension` for a zero or oversized dimension,
    /// or when the cell buffer cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let invalid = || LifeError::InvalidDimension { cols: width, rows: height };
        let in_range = |n: usize| (1..=Self::MAX_DIMENSION).contains(&n);
        if !in_range(width) || !in_range(height) {
            return Err(invalid());
        }

        let len = width.checked_mul(height).ok_or_else(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, Cell::Dead);

        Ok(Self { width, height, cells })
    }

    /// Get grid dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors using toroidal wrapping.
    /// The dimension is added before the modulus so coordinate 0 minus 1 wraps to the far edge.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as isize;
        let h = self.height as isize;
        let (x, y) = (x as isize, y as isize);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| {
                let nx = ((x + dx + w) % w) as usize;
                let ny = ((y + dy + h) % h) as usize;
                self.cells[self.get_index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.count_live_neighbors(x, y))
    }

    /// Next generation, computed serially into a new grid
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Next generation, one rayon task per row.
    /// Every task only reads `self`, so the result matches `evolve`.
    pub fn evolve_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| (0..self.width).map(move |x| self.next_cell(x, y)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize grid: each cell alive with probability 1/4
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_ratio(1, 4) { Cell::Alive } else { Cell::Dead };
        });
    }

    /// Offset that centers a template of the given size, floored.
    /// Negative when the template is larger than the grid.
    pub fn centered_offset(&self, template: &Template) -> (isize, isize) {
        let dx = self.width as isize - template.width() as isize;
        let dy = self.height as isize - template.height() as isize;
        (dx.div_euclid(2), dy.div_euclid(2))
    }

    /// Clear the grid and stamp the template centered on it.
    /// Template cells landing outside the grid are clipped.
    /// Returns the offset of the template's top-left corner.
    pub fn stamp_centered(&mut self, template: &Template) -> (isize, isize) {
        let (ox, oy) = self.centered_offset(template);
        self.clear();

        for (tx, ty, cell) in template.iter_cells() {
            let x = ox + tx as isize;
            let y = oy + ty as isize;
            if x >= 0 && y >= 0 {
                self.set(x as usize, y as usize, cell);
            }
        }
        (ox, oy)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { cols: 0, rows: 5 })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(LifeError::InvalidDimension { cols: 5, rows: 0 })
        ));
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::InvalidDimension { cols: usize::MAX, rows: 2 })
        ));
        assert!(matches!(
            Grid::new(2, Grid::MAX_DIMENSION + 1),
            Err(LifeError::InvalidDimension { .. })
        ));
        let big = 1usize << (usize::BITS / 2);
        assert!(matches!(
            Grid::new(big, big),
            Err(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.get(3, 2), Some(Cell::Dead));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_wraparound_matches_interior_count() {
        // Pair straddling the left/right seam
        let seam = grid_with(8, 8, &[(0, 0), (7, 0)]);
        // Same pair away from any edge
        let interior = grid_with(8, 8, &[(4, 4), (3, 4)]);

        assert_eq!(seam.count_live_neighbors(0, 0), 1);
        assert_eq!(seam.count_live_neighbors(7, 0), 1);
        assert_eq!(
            seam.count_live_neighbors(0, 0),
            interior.count_live_neighbors(4, 4)
        );
    }

    #[test]
    fn test_wraparound_corners() {
        let grid = grid_with(5, 5, &[(4, 4), (0, 4), (4, 0)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_single_cell_in_tiny_grid_sees_itself() {
        // In a 1x1 torus all eight neighbors are the cell itself
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 8);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.evolve().population(), 0);
        assert_eq!(grid.evolve_parallel().population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        for (x, y) in alive_cells(&grid) {
            assert_eq!(grid.count_live_neighbors(x, y), 3);
        }
        assert_eq!(grid.evolve(), grid);
    }

    #[test]
    fn test_blinker_period_two() {
        let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let once = grid.evolve();
        assert_eq!(alive_cells(&once), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(once.evolve(), grid);
    }

    #[test]
    fn test_parallel_matches_serial() {
        use rand::{SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(64, 40).unwrap();
        grid.randomize(&mut rng);

        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..10 {
            serial = serial.evolve();
            parallel = parallel.evolve_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_stamp_centered_offset() {
        let mut grid = Grid::new(25, 25).unwrap();
        let offset = grid.stamp_centered(&presets::GLIDER);
        assert_eq!(offset, (11, 11));
        assert_eq!(
            alive_cells(&grid),
            vec![(12, 11), (13, 12), (11, 13), (12, 13), (13, 13)]
        );
    }

    #[test]
    fn test_stamp_centered_floors_odd_difference() {
        let mut grid = Grid::new(10, 7).unwrap();
        assert_eq!(grid.stamp_centered(&presets::GLIDER), (3, 2));
        assert_eq!(grid.get(4, 2), Some(Cell::Alive));
    }

    #[test]
    fn test_stamp_clears_previous_contents() {
        let mut grid = grid_with(10, 10, &[(0, 0), (9, 9)]);
        grid.stamp_centered(&presets::BLOCK);
        assert_eq!(alive_cells(&grid), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn test_oversize_template_is_clipped() {
        let mut grid = Grid::new(5, 5).unwrap();
        let offset = grid.stamp_centered(&presets::PULSAR);
        assert_eq!(offset, (-4, -4));
        // Template columns/rows 4..9 land on the grid
        for (x, y, cell) in grid.iter_cells() {
            let bit = presets::PULSAR.rows[y + 4][x + 4];
            assert_eq!(cell, Cell::from_bit(bit));
        }
    }

    #[test]
    fn test_randomize_density() {
        use rand::{SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(2024);
        let mut grid = Grid::new(1000, 1000).unwrap();
        grid.randomize(&mut rng);
        let fraction = grid.population() as f64 / 1_000_000.0;
        assert!((fraction - 0.25).abs() < 0.005, "fraction = {fraction}");
    }

    #[test]
    fn test_rows_cover_grid() {
        let grid = grid_with(3, 2, &[(2, 1)]);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Cell::Dead, Cell::Dead, Cell::Alive]);
    }
}
