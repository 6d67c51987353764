//! Game state module - the simulation state machine
//!
//! Ties the grid, physics and piece generator together. The host calls
//! [`GameState::tick`] on its gravity cadence and [`GameState::apply_move`]
//! for player input; every operation returns a [`RenderSnapshot`].
//!
//! Tick protocol:
//! 1. Shift the falling piece down one layer as a candidate.
//! 2. If the candidate overlaps landed cells, or the piece already touches the
//!    floor, lock the piece where it is, clear full layers, then either end the
//!    game (loss) or spawn the next piece.
//! 3. Otherwise commit the candidate.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::grid::Grid;
use crate::physics;
use crate::pieces;
use crate::rng::SimpleRng;
use crate::snapshot::RenderSnapshot;
use crate::types::{Direction, GameAction, Lifecycle, BUFFER_HEIGHT};
use crate::volume::Volume;

/// What the most recent tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickEvent {
    /// The falling piece moved down one layer
    Descended,
    /// The piece locked and a new one spawned
    Locked { cleared: u32 },
    /// The piece locked and the stack reached the loss height
    GameOver { cleared: u32, final_score: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    rng: R,
    last_event: Option<TickEvent>,
    /// y index of each layer removed by the last lock, in clearing order
    cleared_layers: ArrayVec<usize, BUFFER_HEIGHT>,
    /// Pieces spawned since the last start/restart
    pieces_spawned: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::from_grid(Grid::new(), rng)
    }

    /// Resume from an existing grid (scenario setup)
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            rng,
            last_event: None,
            cleared_layers: ArrayVec::new(),
            pieces_spawned: 0,
        }
    }

    /// Start the game and spawn the first piece
    ///
    /// Only valid before the first game; afterwards use [`Self::restart`].
    pub fn start(&mut self) -> RenderSnapshot {
        if self.grid.lifecycle() != Lifecycle::NotStarted {
            return self.snapshot();
        }
        self.begin()
    }

    /// Throw away the current game and begin a new one
    pub fn restart(&mut self) -> RenderSnapshot {
        self.begin()
    }

    fn begin(&mut self) -> RenderSnapshot {
        self.grid.reset();
        self.grid.set_lifecycle(Lifecycle::Running);
        self.last_event = None;
        self.cleared_layers.clear();
        self.pieces_spawned = 0;
        self.spawn_piece();
        self.snapshot()
    }

    /// Advance gravity by one layer
    ///
    /// Ignored unless the game is running.
    pub fn tick(&mut self) -> RenderSnapshot {
        if !self.is_running() {
            return self.snapshot();
        }

        let falling = *self.grid.falling();
        let candidate = physics::shift_down(&falling);

        let blocked = physics::collides(self.grid.landed(), &candidate);
        if blocked || physics::has_floor_contact(&falling) {
            self.lock_piece(&falling);
        } else {
            self.grid.set_falling(candidate);
            self.cleared_layers.clear();
            self.last_event = Some(TickEvent::Descended);
        }

        self.snapshot()
    }

    fn lock_piece(&mut self, falling: &Volume) {
        let merged = physics::union(self.grid.landed(), falling);
        let cleared = physics::clear_full_layers(&merged);
        let count = cleared.count();
        self.grid.set_landed(cleared.volume);
        self.grid.add_score(count);
        self.cleared_layers = cleared.layers;

        if physics::check_for_loss(self.grid.landed()) {
            self.grid.clear_volumes();
            self.grid.set_lifecycle(Lifecycle::GameOver);
            self.last_event = Some(TickEvent::GameOver {
                cleared: count,
                final_score: self.grid.score(),
            });
            return;
        }

        self.spawn_piece();
        self.last_event = Some(TickEvent::Locked { cleared: count });
    }

    fn spawn_piece(&mut self) {
        let piece = pieces::spawn(&mut self.rng);
        self.grid.set_falling(piece.volume);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
    }

    /// Try to translate the falling piece; returns true if it moved
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }

        let falling = self.grid.falling();
        match physics::translate_lateral(falling, direction.axis(), direction.sign()) {
            Some(candidate) if !physics::collides(self.grid.landed(), &candidate) => {
                self.grid.set_falling(candidate);
                true
            }
            _ => false,
        }
    }

    /// Translate the falling piece if the wall and landed cells allow it
    pub fn apply_move(&mut self, direction: Direction) -> RenderSnapshot {
        self.try_move(direction);
        self.snapshot()
    }

    /// Dispatch an input-layer action
    pub fn apply_action(&mut self, action: GameAction) -> RenderSnapshot {
        match action {
            GameAction::Start => self.start(),
            GameAction::Restart => self.restart(),
            GameAction::MoveLeft => self.apply_move(Direction::Left),
            GameAction::MoveRight => self.apply_move(Direction::Right),
            GameAction::MoveForward => self.apply_move(Direction::Forward),
            GameAction::MoveBackward => self.apply_move(Direction::Backward),
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from(&self.grid)
    }

    pub fn is_running(&self) -> bool {
        self.grid.lifecycle() == Lifecycle::Running
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.grid.lifecycle()
    }

    pub fn score(&self) -> u32 {
        self.grid.score()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn landed(&self) -> &Volume {
        self.grid.landed()
    }

    pub fn falling(&self) -> &Volume {
        self.grid.falling()
    }

    pub fn last_event(&self) -> Option<TickEvent> {
        self.last_event
    }

    /// Layers removed by the most recent tick (empty unless it locked a piece)
    pub fn cleared_layers(&self) -> &[usize] {
        &self.cleared_layers
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BUFFER_HEIGHT, DEPTH, SPAWN_Y, VISIBLE_HEIGHT, WIDTH};

    fn running(landed: Volume, falling: Volume) -> GameState {
        GameState::from_grid(
            Grid::from_parts(landed, falling, 0, Lifecycle::Running),
            SimpleRng::new(3),
        )
    }

    #[test]
    fn test_start_spawns_in_buffer_rows() {
        let mut game = GameState::new(12345);
        assert_eq!(game.lifecycle(), Lifecycle::NotStarted);

        let snap = game.start();
        assert!(snap.is_running());
        assert_eq!(snap.score, 0);
        assert!(game.landed().is_empty());
        assert!(!game.falling().is_empty());
        for (_, y, _) in game.falling().occupied() {
            assert!(y >= SPAWN_Y && y < BUFFER_HEIGHT);
        }
        assert_eq!(snap.volume, *game.falling());
        assert_eq!(game.pieces_spawned(), 1);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut game = GameState::new(5);
        game.start();
        game.tick();
        let before = game.snapshot();
        assert_eq!(game.start(), before);
    }

    #[test]
    fn test_tick_and_move_ignored_before_start() {
        let mut game = GameState::new(5);
        let snap = game.tick();
        assert_eq!(snap.lifecycle, Lifecycle::NotStarted);
        assert!(snap.volume.is_empty());
        assert!(!game.try_move(Direction::Left));
        assert_eq!(game.last_event(), None);
    }

    #[test]
    fn test_piece_descends_one_layer() {
        let mut game = running(Volume::new(), Volume::from_cells(&[(1, 6, 1)]));
        game.tick();
        assert_eq!(*game.falling(), Volume::from_cells(&[(1, 5, 1)]));
        assert_eq!(game.last_event(), Some(TickEvent::Descended));
    }

    #[test]
    fn test_floor_contact_locks_in_place() {
        let mut game = running(Volume::new(), Volume::from_cells(&[(2, 0, 3)]));
        game.tick();
        assert_eq!(*game.landed(), Volume::from_cells(&[(2, 0, 3)]));
        assert_eq!(game.last_event(), Some(TickEvent::Locked { cleared: 0 }));
        assert!(game.is_running());
        assert!(!physics::collides(game.landed(), game.falling()));
    }

    #[test]
    fn test_lock_completes_layer_and_scores() {
        let mut landed = Volume::new();
        for z in 0..DEPTH {
            for x in 0..WIDTH {
                if (x, z) != (3, 3) {
                    landed.set(x, 0, z, true);
                }
            }
        }
        landed.set(0, 1, 0, true);

        let mut game = running(landed, Volume::from_cells(&[(3, 0, 3)]));
        let snap = game.tick();

        assert_eq!(snap.score, 1);
        assert_eq!(*game.landed(), Volume::from_cells(&[(0, 0, 0)]));
        assert_eq!(game.last_event(), Some(TickEvent::Locked { cleared: 1 }));
        assert_eq!(game.cleared_layers(), &[0]);

        // The next descent forgets the clear.
        game.tick();
        assert_eq!(game.last_event(), Some(TickEvent::Descended));
        assert!(game.cleared_layers().is_empty());
    }

    #[test]
    fn test_game_over_volumes_stay_empty() {
        let mut game = GameState::new(21);
        game.start();
        while game.is_running() {
            game.tick();
        }
        let spawned = game.pieces_spawned();

        game.tick();
        game.start();
        for action in [
            GameAction::Start,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveForward,
            GameAction::MoveBackward,
        ] {
            let snap = game.apply_action(action);
            assert!(snap.game_over());
            assert!(snap.volume.is_empty());
        }
        assert!(game.falling().is_empty());
        assert!(game.landed().is_empty());
        assert_eq!(game.pieces_spawned(), spawned);
    }

    #[test]
    fn test_lock_at_loss_height_ends_game() {
        let mut game = running(
            Volume::from_cells(&[(1, 4, 1)]),
            Volume::from_cells(&[(1, VISIBLE_HEIGHT - 1, 1)]),
        );
        game.grid.add_score(3);

        let snap = game.tick();
        assert!(snap.game_over());
        assert!(snap.volume.is_empty());
        assert_eq!(snap.score, 3);
        assert_eq!(
            game.last_event(),
            Some(TickEvent::GameOver {
                cleared: 0,
                final_score: 3
            })
        );

        // Terminal until restart.
        assert_eq!(game.tick(), snap);
        assert_eq!(game.apply_move(Direction::Right), snap);

        let restarted = game.restart();
        assert!(restarted.is_running());
        assert_eq!(restarted.score, 0);
        assert!(game.landed().is_empty());
    }

    #[test]
    fn test_move_blocked_by_landed_cell() {
        let mut game = running(
            Volume::from_cells(&[(2, 3, 1)]),
            Volume::from_cells(&[(1, 3, 1)]),
        );
        assert!(!game.try_move(Direction::Right));
        assert!(game.try_move(Direction::Backward));
        assert_eq!(*game.falling(), Volume::from_cells(&[(1, 3, 2)]));
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut game = GameState::new(9);
        assert!(game.apply_action(GameAction::Start).is_running());

        let placed = Volume::from_cells(&[(1, 6, 1)]);
        game.grid.set_falling(placed);
        game.apply_action(GameAction::MoveForward);
        assert_eq!(*game.falling(), Volume::from_cells(&[(1, 6, 0)]));
        game.apply_action(GameAction::MoveLeft);
        assert_eq!(*game.falling(), Volume::from_cells(&[(0, 6, 0)]));
    }
}
