//! Volume module - dense 3D occupancy field
//!
//! A volume marks which unit cells of the play box are filled.
//! Uses a flat array for cache locality and cheap whole-volume copies.
//! Coordinates: (x, y, z) with x in 0..WIDTH, y in 0..BUFFER_HEIGHT (0 = floor),
//! z in 0..DEPTH. Flat index is `x + WIDTH * (y + BUFFER_HEIGHT * z)`.

use std::fmt;

use crate::types::{BUFFER_HEIGHT, CELL_COUNT, DEPTH, WIDTH};

/// A cell coordinate inside the play box
pub type Coord = (usize, usize, usize);

/// Boolean occupancy volume - WIDTH x BUFFER_HEIGHT x DEPTH
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Volume {
    cells: [bool; CELL_COUNT],
}

impl Volume {
    /// Create a new empty volume
    pub const fn new() -> Self {
        Self {
            cells: [false; CELL_COUNT],
        }
    }

    /// Create a volume with the given cells occupied
    ///
    /// # Panics
    ///
    /// Panics if any coordinate lies outside the play box.
    pub fn from_cells(cells: &[Coord]) -> Self {
        let mut volume = Self::new();
        for &(x, y, z) in cells {
            assert!(
                volume.set(x, y, z, true),
                "cell ({}, {}, {}) is outside the play box",
                x,
                y,
                z
            );
        }
        volume
    }

    /// Calculate flat index from (x, y, z) coordinates
    #[inline(always)]
    fn index(x: usize, y: usize, z: usize) -> Option<usize> {
        if x >= WIDTH || y >= BUFFER_HEIGHT || z >= DEPTH {
            return None;
        }
        Some(x + WIDTH * (y + BUFFER_HEIGHT * z))
    }

    #[inline(always)]
    fn coord(idx: usize) -> Coord {
        let x = idx % WIDTH;
        let y = (idx / WIDTH) % BUFFER_HEIGHT;
        let z = idx / (WIDTH * BUFFER_HEIGHT);
        (x, y, z)
    }

    /// Get cell at (x, y, z)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<bool> {
        Self::index(x, y, z).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y, z)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, z: usize, occupied: bool) -> bool {
        match Self::index(x, y, z) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if (x, y, z) is inside the box and filled
    pub fn is_occupied(&self, x: usize, y: usize, z: usize) -> bool {
        matches!(self.get(x, y, z), Some(true))
    }

    /// True if no cell is occupied
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over occupied cells in flat-index order
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(idx, _)| Self::coord(idx))
    }

    /// Check if every (x, z) cell in layer `y` is filled
    pub fn is_layer_full(&self, y: usize) -> bool {
        if y >= BUFFER_HEIGHT {
            return false;
        }
        self.layer_count(y) == WIDTH * DEPTH
    }

    /// Check if any cell in layer `y` is filled
    pub fn layer_has_any(&self, y: usize) -> bool {
        if y >= BUFFER_HEIGHT {
            return false;
        }
        (0..DEPTH).any(|z| (0..WIDTH).any(|x| self.is_occupied(x, y, z)))
    }

    /// Number of filled cells in layer `y`
    pub fn layer_count(&self, y: usize) -> usize {
        if y >= BUFFER_HEIGHT {
            return 0;
        }
        (0..DEPTH)
            .flat_map(|z| (0..WIDTH).map(move |x| (x, z)))
            .filter(|&(x, z)| self.is_occupied(x, y, z))
            .count()
    }

    /// Check if any cell with the given x is filled
    pub(crate) fn x_plane_has_any(&self, x: usize) -> bool {
        (0..DEPTH).any(|z| (0..BUFFER_HEIGHT).any(|y| self.is_occupied(x, y, z)))
    }

    /// Check if any cell with the given z is filled
    pub(crate) fn z_plane_has_any(&self, z: usize) -> bool {
        (0..BUFFER_HEIGHT).any(|y| (0..WIDTH).any(|x| self.is_occupied(x, y, z)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire volume
    pub fn clear(&mut self) {
        self.cells = [false; CELL_COUNT];
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.occupied()).finish()
    }
}
