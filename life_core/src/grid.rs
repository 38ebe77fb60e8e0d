// grid.rs - Grid values and the generation rule for Conway's Game of Life

use std::fmt;

use rand::Rng;
use rand::distributions::{Bernoulli, Distribution};

use crate::config::check_probability;
use crate::error::LifeError;

/// Moore neighborhood: the 8 cells touching a cell by side or corner.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];

/// Conway's rule for one cell.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// One generation: a fixed `rows x cols` matrix of alive/dead cells, stored
/// row-major. Operations that change cells return a new `Grid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Grid where every cell is independently alive with `live_probability`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<Self, LifeError> {
        check_probability(live_probability)?;
        let coin = Bernoulli::new(live_probability)
            .map_err(|_| LifeError::InvalidProbability(live_probability))?;
        let cells = (0..rows * cols).map(|_| coin.sample(rng)).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Builds a grid from nested rows. Every row must have the width of the first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(LifeError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell state, or `None` off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Copy of this grid with the cell at (row, col) inverted.
    pub fn toggled(&self, row: usize, col: usize) -> Result<Self, LifeError> {
        let index = self.index(row, col)?;
        let mut next = self.clone();
        next.cells[index] = !next.cells[index];
        Ok(next)
    }

    /// Copy of this grid with every listed cell set alive.
    pub fn with_cells(&self, live: &[(usize, usize)]) -> Result<Self, LifeError> {
        let mut next = self.clone();
        for &(row, col) in live {
            let index = self.index(row, col)?;
            next.cells[index] = true;
        }
        Ok(next)
    }

    /// Live cells among the 8 neighbors. Neighbors off the grid count as
    /// dead; the grid does not wrap.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = row.checked_add_signed(dr)?;
                let nc = col.checked_add_signed(dc)?;
                self.get(nr, nc)
            })
            .filter(|&alive| alive)
            .count() as u8
    }

    /// Next generation, computed entirely from `self` into a fresh grid.
    pub fn advance(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                next_state(self.cells[row * self.cols + col], self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(index, _)| (index / self.cols, index % self.cols))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for &alive in &self.cells[row * self.cols..(row + 1) * self.cols] {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
