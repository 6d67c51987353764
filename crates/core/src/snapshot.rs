use crate::grid::Grid;
use crate::types::Lifecycle;
use crate::volume::Volume;

/// Immutable view handed to renderers after every operation
///
/// `volume` is the union of landed and falling cells; it is a copy, so the
/// caller can hold on to it while the simulation keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RenderSnapshot {
    pub volume: Volume,
    pub score: u32,
    pub lifecycle: Lifecycle,
}

impl RenderSnapshot {
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn game_over(&self) -> bool {
        self.lifecycle == Lifecycle::GameOver
    }
}

impl From<&Grid> for RenderSnapshot {
    fn from(grid: &Grid) -> Self {
        Self {
            volume: grid.render_volume(),
            score: grid.score(),
            lifecycle: grid.lifecycle(),
        }
    }
}
