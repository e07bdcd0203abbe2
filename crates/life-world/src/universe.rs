//! Toroidal cell universe and the Game-of-Life transition rule.

use crate::patterns::Pattern;
use crate::snapshot::UniverseSnapshot;
use crate::view::CellView;
use life_core::{Cell, Error, InitialPattern, Position, Result, UniverseConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A fixed-size toroidal grid of cells.
///
/// Cells are stored row-major: `index(row, col) = row * width + col`. The
/// next generation is computed into a second buffer of the same size and the
/// two are swapped, so every cell of a step sees only the previous state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "UniverseSnapshot", try_from = "UniverseSnapshot")]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    generation: u64,
}

impl Universe {
    /// Create a universe seeded with the alternating pattern: the cell at
    /// flat index `i` is alive iff `i % 2 == 0 || i % 7 == 0`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = cell_count(width, height)?;
        let universe = Self::from_cells(width, height, alternating_cells(size), 0);
        debug!(width, height, live = universe.live_count(), "Created universe");
        Ok(universe)
    }

    /// Create a universe with every cell dead
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        let size = cell_count(width, height)?;
        Ok(Self::from_cells(width, height, vec![Cell::Dead; size], 0))
    }

    /// Create a universe from configuration
    pub fn from_config(config: &UniverseConfig) -> Result<Self> {
        match config.initial {
            InitialPattern::Empty => Self::blank(config.width, config.height),
            InitialPattern::Alternating => Self::new(config.width, config.height),
            InitialPattern::Random { probability, seed } => {
                let mut universe = Self::blank(config.width, config.height)?;
                universe.randomize_seeded(probability, seed);
                Ok(universe)
            }
        }
    }

    /// Assemble a universe from a buffer whose length is already validated
    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>, generation: u64) -> Self {
        let scratch = vec![Cell::Dead; cells.len()];
        Self {
            width,
            height,
            cells,
            scratch,
            generation,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of generations stepped since creation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrow the live cell buffer without copying
    pub fn cells(&self) -> CellView<'_> {
        CellView::new(self.width, self.height, &self.cells)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn get_index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get_index(row, col))
    }

    /// Bounds-checked read of a single cell
    pub fn get(&self, row: u32, col: u32) -> Result<Cell> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.cells[idx])
    }

    /// Bounds-checked write of a single cell
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) -> Result<()> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a single cell between dead and alive
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<()> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = self.cells[idx].toggled();
        Ok(())
    }

    /// Mark every listed cell alive.
    ///
    /// All coordinates are checked before anything is written, so an
    /// out-of-range entry leaves the universe untouched.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<()> {
        let indices = cells
            .iter()
            .map(|&(row, col)| self.check_bounds(row, col))
            .collect::<Result<Vec<_>>>()?;
        for idx in indices {
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Force the pattern's cells alive around `(row, col)`, wrapping at the edges
    pub fn stamp(&mut self, pattern: &Pattern, row: i64, col: i64) {
        let anchor = Position::new(row, col);
        for &(d_row, d_col) in pattern.offsets() {
            let (r, c) = anchor.add(d_row, d_col).wrap(self.width, self.height);
            let idx = self.get_index(r, c);
            self.cells[idx] = Cell::Alive;
        }
        trace!(pattern = pattern.name(), row, col, "Stamped pattern");
    }

    /// Set each cell alive independently with `probability`.
    ///
    /// Probabilities at or below zero (and NaN) give an empty universe,
    /// probabilities at or above one a full one.
    pub fn randomize<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.gen::<f64>() < probability);
        }
        debug!(probability, live = self.live_count(), "Randomized universe");
    }

    /// [`randomize`](Self::randomize) with a ChaCha8 stream seeded from `seed`
    pub fn randomize_seeded(&mut self, probability: f64, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.randomize(probability, &mut rng);
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        debug!("Cleared universe");
    }

    /// Sum of the eight wrapped neighbours of `(row, col)`.
    ///
    /// On a universe narrower or shorter than three cells several offsets
    /// land on the same cell and each offset is counted.
    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let north = if row == 0 { self.height - 1 } else { row - 1 };
        let south = if row == self.height - 1 { 0 } else { row + 1 };
        let west = if col == 0 { self.width - 1 } else { col - 1 };
        let east = if col == self.width - 1 { 0 } else { col + 1 };

        [
            (north, west),
            (north, col),
            (north, east),
            (row, west),
            (row, east),
            (south, west),
            (south, col),
            (south, east),
        ]
        .iter()
        .map(|&(r, c)| self.cells[self.get_index(r, c)].code())
        .sum()
    }

    /// Advance one synchronous generation
    pub fn step(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.get_index(row, col);
                let next = next_state(self.cells[idx], self.live_neighbor_count(row, col));
                self.scratch[idx] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "Stepped universe");
    }

    /// Advance `n` generations
    pub fn step_n(&mut self, n: u32) {
        for _ in 0..n {
            self.step();
        }
    }
}

impl Default for Universe {
    fn default() -> Self {
        let config = UniverseConfig::default();
        let size = config.width as usize * config.height as usize;
        Self::from_cells(config.width, config.height, alternating_cells(size), 0)
    }
}

/// Standard B3/S23 rule
pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2..=3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

fn alternating_cells(size: usize) -> Vec<Cell> {
    (0..size).map(|i| Cell::from(i % 2 == 0 || i % 7 == 0)).collect()
}

/// Validated `width * height`
pub(crate) fn cell_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimensions { width, height })
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells().rows() {
            for cell in line {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn alive_cells(universe: &Universe) -> Vec<(u32, u32)> {
        let mut alive = Vec::new();
        for row in 0..universe.height() {
            for col in 0..universe.width() {
                if universe.get(row, col).unwrap().is_alive() {
                    alive.push((row, col));
                }
            }
        }
        alive
    }

    #[test]
    fn test_universe_creation() {
        let universe = Universe::new(10, 8).unwrap();
        assert_eq!(universe.width(), 10);
        assert_eq!(universe.height(), 8);
        assert_eq!(universe.cells().len(), 80);
        assert_eq!(universe.generation(), 0);

        // Alternating seed: indices 0, 2, 4, ... plus multiples of 7
        let view = universe.cells();
        assert_eq!(view.as_slice()[0], Cell::Alive);
        assert_eq!(view.as_slice()[1], Cell::Dead);
        assert_eq!(view.as_slice()[7], Cell::Alive);
        assert_eq!(view.as_slice()[9], Cell::Dead);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Universe::new(0, 5).unwrap_err(),
            Error::InvalidDimensions { width: 0, height: 5 }
        );
        assert!(Universe::new(5, 0).is_err());
        assert!(Universe::blank(0, 0).is_err());
    }

    #[test]
    fn test_default_universe() {
        let universe = Universe::default();
        assert_eq!(universe.width(), 64);
        assert_eq!(universe.height(), 64);
        assert_eq!(
            universe.cells().as_slice(),
            Universe::new(64, 64).unwrap().cells().as_slice()
        );
    }

    #[test]
    fn test_from_config() {
        let config = UniverseConfig {
            width: 12,
            height: 9,
            initial: InitialPattern::Empty,
        };
        let universe = Universe::from_config(&config).unwrap();
        assert_eq!(universe.live_count(), 0);

        let config = UniverseConfig {
            initial: InitialPattern::Random {
                probability: 0.5,
                seed: 42,
            },
            ..config
        };
        let a = Universe::from_config(&config).unwrap();
        let b = Universe::from_config(&config).unwrap();
        assert_eq!(a.cells().as_slice(), b.cells().as_slice());
        assert!(a.live_count() > 0);
    }

    #[test]
    fn test_toggle_cell() {
        let mut universe = Universe::blank(5, 5).unwrap();
        universe.toggle_cell(2, 3).unwrap();
        assert_eq!(universe.get(2, 3).unwrap(), Cell::Alive);
        assert_eq!(universe.live_count(), 1);

        universe.toggle_cell(2, 3).unwrap();
        assert_eq!(universe.live_count(), 0);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut universe = Universe::new(6, 4).unwrap();
        let before = universe.cells().as_bytes().to_vec();

        assert_eq!(
            universe.toggle_cell(4, 0).unwrap_err(),
            Error::OutOfRange {
                row: 4,
                col: 0,
                width: 6,
                height: 4
            }
        );
        assert!(universe.toggle_cell(0, 6).is_err());
        assert_eq!(universe.cells().as_bytes(), &before[..]);
    }

    #[test]
    fn test_set_cells_is_all_or_nothing() {
        let mut universe = Universe::blank(4, 4).unwrap();
        assert!(universe.set_cells(&[(0, 0), (4, 1)]).is_err());
        assert_eq!(universe.live_count(), 0);

        universe.set_cells(&[(0, 0), (3, 3)]).unwrap();
        assert_eq!(alive_cells(&universe), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn test_clear() {
        let mut universe = Universe::new(7, 7).unwrap();
        assert!(universe.live_count() > 0);
        universe.clear();
        assert!(universe.cells().iter().all(|&cell| cell == Cell::Dead));
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(next_state(Cell::Alive, 1), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 4), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 8), Cell::Dead);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut universe = Universe::blank(5, 5).unwrap();
        universe.set_cells(&[(2, 1), (2, 2), (2, 3)]).unwrap();

        universe.step();
        assert_eq!(alive_cells(&universe), vec![(1, 2), (2, 2), (3, 2)]);

        universe.step();
        assert_eq!(alive_cells(&universe), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(universe.generation(), 2);
    }

    #[test]
    fn test_step_is_synchronous() {
        // Updating in place row by row would let (1, 2) die before (2, 2) and
        // (3, 2) look at it; the blinker would then decay instead of rotating.
        let mut universe = Universe::blank(6, 6).unwrap();
        universe.set_cells(&[(1, 2), (2, 2), (3, 2)]).unwrap();
        universe.step();
        assert_eq!(alive_cells(&universe), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_diagonal_wraparound() {
        let mut universe = Universe::blank(5, 4).unwrap();
        universe.set_cells(&[(0, 0), (3, 4)]).unwrap();
        assert_eq!(universe.live_neighbor_count(0, 0), 1);
        assert_eq!(universe.live_neighbor_count(3, 4), 1);

        // A third corner neighbour of (0, 4) gives it exactly three
        universe.set_cells(&[(3, 0)]).unwrap();
        assert_eq!(universe.live_neighbor_count(0, 4), 3);
        universe.step();
        assert_eq!(universe.get(0, 4).unwrap(), Cell::Alive);
    }

    #[test]
    fn test_edge_block_is_still_life() {
        // A block split across all four corners
        let mut universe = Universe::blank(6, 6).unwrap();
        universe.stamp(&patterns::block(), -1, -1);
        assert_eq!(alive_cells(&universe), vec![(0, 0), (0, 5), (5, 0), (5, 5)]);

        universe.step();
        assert_eq!(alive_cells(&universe), vec![(0, 0), (0, 5), (5, 0), (5, 5)]);
    }

    #[test]
    fn test_stamp_glider() {
        let mut universe = Universe::blank(8, 8).unwrap();
        universe.stamp(&patterns::glider(), 3, 2);
        assert_eq!(
            alive_cells(&universe),
            vec![(3, 3), (4, 4), (5, 2), (5, 3), (5, 4)]
        );
    }

    #[test]
    fn test_stamp_keeps_existing_cells() {
        let mut universe = Universe::blank(8, 8).unwrap();
        universe.set_cells(&[(4, 3), (0, 0)]).unwrap();
        universe.stamp(&patterns::glider(), 3, 2);
        // (4, 3) lies inside the glider's box but not on the glider
        assert_eq!(universe.get(4, 3).unwrap(), Cell::Alive);
        assert_eq!(universe.get(0, 0).unwrap(), Cell::Alive);
        assert_eq!(universe.live_count(), 7);
    }

    #[test]
    fn test_randomize_boundaries() {
        let mut universe = Universe::new(9, 9).unwrap();
        universe.randomize_seeded(0.0, 1);
        assert_eq!(universe.live_count(), 0);

        universe.randomize_seeded(1.0, 1);
        assert_eq!(universe.live_count(), 81);

        universe.randomize_seeded(f64::NAN, 1);
        assert_eq!(universe.live_count(), 0);
    }

    #[test]
    fn test_randomize_with_injected_rng() {
        let mut a = Universe::blank(16, 16).unwrap();
        let mut b = Universe::blank(16, 16).unwrap();
        a.randomize(0.3, &mut ChaCha8Rng::seed_from_u64(9));
        b.randomize(0.3, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a.cells().as_slice(), b.cells().as_slice());
    }

    #[test]
    fn test_display() {
        let mut universe = Universe::blank(3, 2).unwrap();
        universe.set_cells(&[(0, 1), (1, 2)]).unwrap();
        assert_eq!(universe.to_string(), "◻◼◻\n◻◻◼\n");
    }

    #[test]
    fn test_single_cell_universe() {
        // Every offset lands on the only cell: 8 live neighbours, so it dies
        let mut universe = Universe::blank(1, 1).unwrap();
        universe.toggle_cell(0, 0).unwrap();
        assert_eq!(universe.live_neighbor_count(0, 0), 8);
        universe.step();
        assert_eq!(universe.live_count(), 0);
    }
}
