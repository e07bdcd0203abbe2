//! Serializable snapshots of a universe.

use crate::universe::{cell_count, Universe};
use life_core::{Cell, Error, Result};
use serde::{Deserialize, Serialize};

/// Wire form of a [`Universe`]: dimensions, generation and raw cell codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseSnapshot {
    pub width: u32,
    pub height: u32,
    pub generation: u64,
    pub cells: Vec<u8>,
}

impl From<Universe> for UniverseSnapshot {
    fn from(universe: Universe) -> Self {
        Self {
            width: universe.width(),
            height: universe.height(),
            generation: universe.generation(),
            cells: universe.cells().as_bytes().to_vec(),
        }
    }
}

impl TryFrom<UniverseSnapshot> for Universe {
    type Error = Error;

    fn try_from(snapshot: UniverseSnapshot) -> Result<Self> {
        let size = cell_count(snapshot.width, snapshot.height)?;
        if snapshot.cells.len() != size {
            return Err(Error::InvalidState(format!(
                "Snapshot holds {} cells, expected {} for {}x{}",
                snapshot.cells.len(),
                size,
                snapshot.width,
                snapshot.height
            )));
        }

        let cells = snapshot
            .cells
            .iter()
            .enumerate()
            .map(|(idx, &code)| {
                Cell::from_code(code).ok_or_else(|| {
                    Error::InvalidState(format!("Invalid cell code {} at index {}", code, idx))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Universe::from_cells(
            snapshot.width,
            snapshot.height,
            cells,
            snapshot.generation,
        ))
    }
}

impl Universe {
    /// Serialize the universe to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize and validate a universe from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
