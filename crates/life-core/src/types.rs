//! Core type definitions for the universe.

use bytemuck::NoUninit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell.
///
/// The discriminants are part of the public contract: a renderer reading the
/// raw buffer sees `0` for a dead cell and `1` for a live one.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, NoUninit, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Flip between dead and alive
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Decode a raw cell code, returning `None` for anything but 0 or 1
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Dead => '◻',
            Cell::Alive => '◼',
        };
        write!(f, "{}", symbol)
    }
}

/// Signed 2D position on the torus, addressed as (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub fn add(&self, d_row: i64, d_col: i64) -> Self {
        Self {
            row: self.row.wrapping_add(d_row),
            col: self.col.wrapping_add(d_col),
        }
    }

    /// Apply toroidal wrapping for given universe dimensions.
    ///
    /// Returns unsigned `(row, col)` with `row < height` and `col < width`.
    pub fn wrap(&self, width: u32, height: u32) -> (u32, u32) {
        let row = self.row.rem_euclid(i64::from(height));
        let col = self.col.rem_euclid(i64::from(width));
        (row as u32, col as u32)
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}
