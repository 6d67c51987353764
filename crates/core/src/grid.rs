//! Grid module - the simulation's mutable state
//!
//! Plain aggregate of the landed and falling volumes, the score and the
//! lifecycle state. Rules live in `physics` and `game_state`; this type only
//! holds the data.

use crate::physics;
use crate::types::Lifecycle;
use crate::volume::Volume;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    landed: Volume,
    falling: Volume,
    score: u32,
    lifecycle: Lifecycle,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn landed(&self) -> &Volume {
        &self.landed
    }

    pub fn falling(&self) -> &Volume {
        &self.falling
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub(crate) fn set_landed(&mut self, volume: Volume) {
        self.landed = volume;
    }

    pub(crate) fn set_falling(&mut self, volume: Volume) {
        self.falling = volume;
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        self.lifecycle = lifecycle;
    }

    /// Empty both volumes, keeping score and lifecycle
    pub(crate) fn clear_volumes(&mut self) {
        self.landed.clear();
        self.falling.clear();
    }

    /// Empty both volumes and zero the score
    pub(crate) fn reset(&mut self) {
        self.clear_volumes();
        self.score = 0;
    }

    /// Landed and falling cells merged, as a renderer sees them
    pub fn render_volume(&self) -> Volume {
        physics::union(&self.landed, &self.falling)
    }

    /// Build a grid from explicit parts (scenario setup in tests and tools)
    pub fn from_parts(landed: Volume, falling: Volume, score: u32, lifecycle: Lifecycle) -> Self {
        Self {
            landed,
            falling,
            score,
            lifecycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_everything_but_lifecycle() {
        let mut grid = Grid::from_parts(
            Volume::from_cells(&[(0, 0, 0)]),
            Volume::from_cells(&[(1, 6, 1)]),
            7,
            Lifecycle::GameOver,
        );
        grid.reset();
        assert!(grid.landed().is_empty());
        assert!(grid.falling().is_empty());
        assert_eq!(grid.score(), 0);
        assert_eq!(grid.lifecycle(), Lifecycle::GameOver);
    }

    #[test]
    fn test_render_volume_merges() {
        let grid = Grid::from_parts(
            Volume::from_cells(&[(0, 0, 0)]),
            Volume::from_cells(&[(1, 6, 1)]),
            0,
            Lifecycle::Running,
        );
        assert_eq!(
            grid.render_volume(),
            Volume::from_cells(&[(0, 0, 0), (1, 6, 1)])
        );
    }
}
