//! Grid point ordering.
//!
//! A grid is a fixed `nx` x `ny` lattice of positions. Lattice index
//! `(i, j)` grows with x (east/right) and y (north/up). The scanning mode
//! only decides the order in which those positions appear in the data
//! section, so every mapping here is a permutation of `0..nx * ny`.

use serde::{Deserialize, Serialize};

/// Scan mode flags for grid data ordering.
///
/// Based on GRIB2 scanning mode (Flag Table 3.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanMode {
    /// +i direction: false = +x (east), true = -x (west)
    pub i_negative: bool,
    /// +j direction: false = -y (south), true = +y (north)
    pub j_positive: bool,
    /// Adjacent points: false = i direction, true = j direction
    pub j_consecutive: bool,
    /// Row scan direction alternates
    pub alternating_rows: bool,
}

impl ScanMode {
    pub const I_NEGATIVE: u8 = 0x80;
    pub const J_POSITIVE: u8 = 0x40;
    pub const J_CONSECUTIVE: u8 = 0x20;
    pub const ALTERNATING_ROWS: u8 = 0x10;

    /// Most common mode: data starts at top-left, rows go west to east,
    /// columns go north to south.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Create from GRIB2 flag byte.
    pub fn from_grib2_flag(flag: u8) -> Self {
        Self {
            i_negative: (flag & Self::I_NEGATIVE) != 0,
            j_positive: (flag & Self::J_POSITIVE) != 0,
            j_consecutive: (flag & Self::J_CONSECUTIVE) != 0,
            alternating_rows: (flag & Self::ALTERNATING_ROWS) != 0,
        }
    }

    /// Encode back to the GRIB2 flag byte. The four low bits are always zero.
    pub fn to_grib2_flag(&self) -> u8 {
        let mut flag = 0;
        if self.i_negative {
            flag |= Self::I_NEGATIVE;
        }
        if self.j_positive {
            flag |= Self::J_POSITIVE;
        }
        if self.j_consecutive {
            flag |= Self::J_CONSECUTIVE;
        }
        if self.alternating_rows {
            flag |= Self::ALTERNATING_ROWS;
        }
        flag
    }

    /// Map indices along the scan axes to lattice indices (and back; the
    /// mapping is its own inverse).
    pub fn adjust_indices(&self, i: usize, j: usize, nx: usize, ny: usize) -> (usize, usize) {
        let i_adj = if self.i_negative { nx - 1 - i } else { i };
        let j_adj = if self.j_positive { j } else { ny - 1 - j };
        (i_adj, j_adj)
    }

    /// Lattice position of the `k`-th value in the data section.
    ///
    /// `k` must be below `nx * ny`.
    pub fn grid_index(&self, k: usize, nx: usize, ny: usize) -> (usize, usize) {
        let fast = if self.j_consecutive { ny } else { nx };
        let outer = k / fast;
        let mut inner = k % fast;
        if self.alternating_rows && outer % 2 == 1 {
            inner = fast - 1 - inner;
        }

        let (i, j) = if self.j_consecutive {
            (outer, inner)
        } else {
            (inner, outer)
        };
        self.adjust_indices(i, j, nx, ny)
    }

    /// Calculate the data section index of lattice position `(i, j)`.
    pub fn flat_index(&self, i: usize, j: usize, nx: usize, ny: usize) -> usize {
        let (i_scan, j_scan) = self.adjust_indices(i, j, nx, ny);
        let (outer, mut inner, fast) = if self.j_consecutive {
            // Column-major order
            (i_scan, j_scan, ny)
        } else {
            // Row-major order (most common)
            (j_scan, i_scan, nx)
        };
        if self.alternating_rows && outer % 2 == 1 {
            inner = fast - 1 - inner;
        }
        outer * fast + inner
    }
}
