//! Neighborhood topologies for neighbor enumeration

use serde::{Deserialize, Serialize};

/// The eight surrounding offsets, row-major order.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The four orthogonal offsets.
const VON_NEUMANN_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Which cells count as neighbors when stepping a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// The 8 surrounding cells, including diagonals
    Moore,
    /// The 4 orthogonally adjacent cells
    VonNeumann,
}

impl Default for Neighborhood {
    fn default() -> Self {
        Neighborhood::Moore
    }
}

impl Neighborhood {
    /// The fixed, stably ordered offset list for this topology.
    ///
    /// Order is immaterial to the result since neighbor counting is a sum.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::VonNeumann => &VON_NEUMANN_OFFSETS,
        }
    }

    /// Absolute neighbor coordinates for a cell.
    ///
    /// Entries may lie outside the grid; `Grid::is_alive` resolves those
    /// to dead.
    pub fn neighbors_of(
        self,
        row: usize,
        column: usize,
    ) -> impl Iterator<Item = (isize, isize)> {
        self.offsets()
            .iter()
            .map(move |&(dr, dc)| (row as isize + dr, column as isize + dc))
    }

    /// The maximum live-neighbor count a cell can see under this topology
    pub fn max_neighbors(self) -> u8 {
        match self {
            Neighborhood::Moore => 8,
            Neighborhood::VonNeumann => 4,
        }
    }
}
