//! Lazy enumeration of grid point coordinates in data order.
//!
//! A [`GridPoints`] iterator yields one [`Coordinate`] per value in the data
//! section, in the order the scanning mode lays them out, so it can be
//! zipped directly with unpacked values. It owns its lattice and cursor:
//! asking a template for its points again starts a fresh, independent
//! iteration with identical output.

use grid_common::{Coordinate, LongitudeConvention, ScanMode};
use projection::PolarStereographic;
use std::iter::FusedIterator;

/// Maps lattice indices to geographic positions.
///
/// Lattice index `(i, j)` grows east along x and north along y,
/// independent of the scanning mode.
pub trait GridLattice {
    /// Geographic position `(lat, lon)` in degrees of lattice index `(i, j)`.
    fn lattice_to_geo(&self, i: usize, j: usize) -> (f64, f64);
}

impl GridLattice for PolarStereographic {
    fn lattice_to_geo(&self, i: usize, j: usize) -> (f64, f64) {
        self.grid_to_geo(i as f64, j as f64)
    }
}

/// Iterator over the coordinates of a grid, in data section order.
#[derive(Debug, Clone)]
pub struct GridPoints<L> {
    lattice: L,
    scan_mode: ScanMode,
    nx: usize,
    ny: usize,
    longitude: LongitudeConvention,
    front: usize,
    back: usize,
}

impl<L: GridLattice> GridPoints<L> {
    pub fn new(
        lattice: L,
        scan_mode: ScanMode,
        nx: usize,
        ny: usize,
        longitude: LongitudeConvention,
    ) -> Self {
        Self {
            lattice,
            scan_mode,
            nx,
            ny,
            longitude,
            front: 0,
            back: nx * ny,
        }
    }

    /// The lattice the coordinates are generated from.
    pub fn lattice(&self) -> &L {
        &self.lattice
    }

    fn coordinate_at(&self, k: usize) -> Coordinate {
        let (i, j) = self.scan_mode.grid_index(k, self.nx, self.ny);
        let (lat, lon) = self.lattice.lattice_to_geo(i, j);
        Coordinate::new(lat, self.longitude.normalize(lon))
    }
}

impl<L: GridLattice> Iterator for GridPoints<L> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.front >= self.back {
            return None;
        }
        let coord = self.coordinate_at(self.front);
        self.front += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Coordinate> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<L: GridLattice> DoubleEndedIterator for GridPoints<L> {
    fn next_back(&mut self) -> Option<Coordinate> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.coordinate_at(self.back))
    }
}

impl<L: GridLattice> ExactSizeIterator for GridPoints<L> {}

impl<L: GridLattice> FusedIterator for GridPoints<L> {}
