//! Pieces module - shape catalog and random spawning
//!
//! Pieces are pre-formed clusters that are only ever translated, never
//! rotated. The catalog has 11 templates; ids 1-2, 3-4 and 5-6 repeat the
//! same three bar shapes so those come up twice as often as the rest.

use rand::Rng;

use crate::types::{DEPTH, SPAWN_Y, WIDTH};
use crate::volume::Volume;

/// Offset of a single cell relative to the piece origin (dx, dy, dz)
pub type CellOffset = (usize, usize, usize);

/// One entry of the spawn catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceTemplate {
    pub cells: &'static [CellOffset],
}

impl PieceTemplate {
    /// Cells covered along x
    pub fn extent_x(&self) -> usize {
        self.cells.iter().map(|&(dx, _, _)| dx + 1).max().unwrap_or(1)
    }

    /// Cells covered along z
    pub fn extent_z(&self) -> usize {
        self.cells.iter().map(|&(_, _, dz)| dz + 1).max().unwrap_or(1)
    }

    /// Number of valid x origins (origin drawn from 0..this)
    pub fn origin_range_x(&self) -> usize {
        WIDTH - self.extent_x() + 1
    }

    /// Number of valid z origins (origin drawn from 0..this)
    pub fn origin_range_z(&self) -> usize {
        DEPTH - self.extent_z() + 1
    }
}

const SINGLE: &[CellOffset] = &[(0, 0, 0)];
const BAR_X: &[CellOffset] = &[(0, 0, 0), (1, 0, 0)];
const BAR_Z: &[CellOffset] = &[(0, 0, 0), (0, 0, 1)];
const BAR_Y: &[CellOffset] = &[(0, 0, 0), (0, 1, 0)];
const ELL: &[CellOffset] = &[(0, 0, 0), (0, 0, 1), (1, 0, 0)];
const ELL_FLIPPED: &[CellOffset] = &[(0, 0, 0), (0, 0, 1), (1, 0, 1)];
const ESS: &[CellOffset] = &[(1, 0, 0), (0, 0, 1), (1, 0, 1)];
const ESS_FLIPPED: &[CellOffset] = &[(1, 0, 0), (0, 0, 0), (1, 0, 1)];

/// Spawn catalog, indexed by template id
pub const TEMPLATES: [PieceTemplate; 11] = [
    PieceTemplate { cells: SINGLE },
    PieceTemplate { cells: BAR_X },
    PieceTemplate { cells: BAR_X },
    PieceTemplate { cells: BAR_Z },
    PieceTemplate { cells: BAR_Z },
    PieceTemplate { cells: BAR_Y },
    PieceTemplate { cells: BAR_Y },
    PieceTemplate { cells: ELL },
    PieceTemplate { cells: ELL_FLIPPED },
    PieceTemplate { cells: ESS },
    PieceTemplate { cells: ESS_FLIPPED },
];

/// Number of templates in the catalog
pub const TEMPLATE_COUNT: usize = TEMPLATES.len();

/// Look up a template by id
///
/// # Panics
///
/// Panics if `id >= TEMPLATE_COUNT`.
pub fn template(id: usize) -> &'static PieceTemplate {
    assert!(id < TEMPLATE_COUNT, "template id {} out of range", id);
    &TEMPLATES[id]
}

/// Build the falling-piece volume for a template at a lateral origin
///
/// # Panics
///
/// Panics if the template id is unknown or the origin would push the piece
/// outside the box.
pub fn place(id: usize, origin_x: usize, origin_z: usize) -> Volume {
    let tpl = template(id);
    assert!(
        origin_x < tpl.origin_range_x() && origin_z < tpl.origin_range_z(),
        "origin ({}, {}) does not fit template {}",
        origin_x,
        origin_z,
        id
    );

    let mut volume = Volume::new();
    for &(dx, dy, dz) in tpl.cells {
        volume.set(origin_x + dx, SPAWN_Y + dy, origin_z + dz, true);
    }
    volume
}

/// A freshly generated piece and the draws that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedPiece {
    pub template_id: usize,
    pub origin_x: usize,
    pub origin_z: usize,
    pub volume: Volume,
}

/// Draw a random template and origin and place it in the spawn rows
pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> SpawnedPiece {
    let template_id = rng.random_range(0..TEMPLATE_COUNT);
    let tpl = template(template_id);
    let origin_x = rng.random_range(0..tpl.origin_range_x());
    let origin_z = rng.random_range(0..tpl.origin_range_z());

    SpawnedPiece {
        template_id,
        origin_x,
        origin_z,
        volume: place(template_id, origin_x, origin_z),
    }
}
