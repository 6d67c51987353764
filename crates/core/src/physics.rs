//! Physics module - pure functions over occupancy volumes
//!
//! Collision, gravity, floor contact, lateral translation, layer clearing and
//! the loss check. Every function takes its inputs by reference and returns a
//! fresh volume; nothing here mutates an argument.

use arrayvec::ArrayVec;

use crate::types::{Axis, Sign, BUFFER_HEIGHT, DEPTH, VISIBLE_HEIGHT, WIDTH};
use crate::volume::Volume;

/// True if some cell is occupied in both volumes
pub fn collides(a: &Volume, b: &Volume) -> bool {
    a.cells().iter().zip(b.cells()).any(|(&p, &q)| p && q)
}

/// True if any cell on the floor layer (y = 0) is occupied
///
/// A piece touching the floor always locks, whether or not anything has
/// landed beneath it.
pub fn has_floor_contact(volume: &Volume) -> bool {
    volume.layer_has_any(0)
}

/// Elementwise OR of two volumes
pub fn union(a: &Volume, b: &Volume) -> Volume {
    let mut out = *a;
    for (x, y, z) in b.occupied() {
        out.set(x, y, z, true);
    }
    out
}

/// Move every cell down by one layer; the top layer becomes empty
pub fn shift_down(volume: &Volume) -> Volume {
    collapse_layer(volume, 0)
}

/// Remove layer `y` and drop every layer above it by one
///
/// Layers below `y` are untouched and the topmost layer is cleared.
pub fn collapse_layer(volume: &Volume, y: usize) -> Volume {
    let mut out = *volume;
    for row in y..BUFFER_HEIGHT.saturating_sub(1) {
        for z in 0..DEPTH {
            for x in 0..WIDTH {
                out.set(x, row, z, volume.is_occupied(x, row + 1, z));
            }
        }
    }
    if y < BUFFER_HEIGHT {
        for z in 0..DEPTH {
            for x in 0..WIDTH {
                out.set(x, BUFFER_HEIGHT - 1, z, false);
            }
        }
    }
    out
}

/// Translate every occupied cell one unit along `axis`
///
/// Returns None if any cell already touches the wall on the destination side;
/// the volume is never wrapped or partially shifted.
pub fn translate_lateral(volume: &Volume, axis: Axis, sign: Sign) -> Option<Volume> {
    let edge = match sign {
        Sign::Negative => 0,
        Sign::Positive => axis.extent() - 1,
    };
    let blocked = match axis {
        Axis::X => volume.x_plane_has_any(edge),
        Axis::Z => volume.z_plane_has_any(edge),
    };
    if blocked {
        return None;
    }

    let step = |v: usize| match sign {
        Sign::Negative => v - 1,
        Sign::Positive => v + 1,
    };

    let mut out = Volume::new();
    for (x, y, z) in volume.occupied() {
        let moved = match axis {
            Axis::X => out.set(step(x), y, z, true),
            Axis::Z => out.set(x, y, step(z), true),
        };
        debug_assert!(moved, "edge guard let a cell leave the box");
    }
    Some(out)
}

/// Result of a layer-clearing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerClear {
    pub volume: Volume,
    /// y index of each clear, in the order they happened
    pub layers: ArrayVec<usize, BUFFER_HEIGHT>,
}

impl LayerClear {
    /// Number of layers removed (one point each)
    pub fn count(&self) -> u32 {
        self.layers.len() as u32
    }
}

/// Remove every full layer in the visible stack
///
/// Scans y upward from the floor. A full layer is collapsed and the same y is
/// examined again, since the layer above has just dropped into it. Buffer rows
/// are never eligible.
pub fn clear_full_layers(volume: &Volume) -> LayerClear {
    let mut out = *volume;
    let mut layers = ArrayVec::new();

    let mut y = 0;
    while y < VISIBLE_HEIGHT {
        if out.is_layer_full(y) {
            out = collapse_layer(&out, y);
            // Each clear removes a whole layer of cells, so at most BUFFER_HEIGHT fit.
            layers.push(y);
        } else {
            y += 1;
        }
    }

    LayerClear {
        volume: out,
        layers,
    }
}

/// True if the stack has reached the top visible layer or the buffer rows
pub fn check_for_loss(landed: &Volume) -> bool {
    (VISIBLE_HEIGHT - 1..BUFFER_HEIGHT).any(|y| landed.layer_has_any(y))
}
