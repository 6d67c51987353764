//! Game state tests - whole-game behaviour through the public API

use cubetris::core::{physics, GameState, Grid, SimpleRng, TickEvent, Volume};
use cubetris::types::{Direction, GameAction, Lifecycle, BUFFER_HEIGHT, VISIBLE_HEIGHT, WIDTH};

fn running_with(falling: Volume, landed: Volume) -> GameState {
    GameState::from_grid(
        Grid::from_parts(landed, falling, 0, Lifecycle::Running),
        SimpleRng::new(1),
    )
}

#[test]
fn test_move_into_wall_is_ignored() {
    let falling = Volume::from_cells(&[(0, 6, 2), (0, 7, 2)]);
    let mut game = running_with(falling, Volume::new());

    let snap = game.apply_move(Direction::Left);
    assert_eq!(*game.falling(), falling);
    assert_eq!(snap.volume, falling);

    game.apply_move(Direction::Right);
    assert_eq!(*game.falling(), Volume::from_cells(&[(1, 6, 2), (1, 7, 2)]));
}

#[test]
fn test_piece_stacks_on_landed_cell() {
    let landed = Volume::from_cells(&[(1, 0, 1)]);
    let mut game = running_with(Volume::from_cells(&[(1, 3, 1)]), landed);

    game.tick();
    game.tick();
    assert_eq!(*game.falling(), Volume::from_cells(&[(1, 1, 1)]));
    assert_eq!(game.last_event(), Some(TickEvent::Descended));

    game.tick();
    assert_eq!(*game.landed(), Volume::from_cells(&[(1, 0, 1), (1, 1, 1)]));
    assert_eq!(game.last_event(), Some(TickEvent::Locked { cleared: 0 }));
}

#[test]
fn test_render_volume_is_union_of_parts() {
    let mut game = GameState::new(31);
    game.start();
    for _ in 0..40 {
        let snap = game.tick();
        if !snap.is_running() {
            break;
        }
        assert!(!physics::collides(game.landed(), game.falling()));
        assert_eq!(snap.volume, physics::union(game.landed(), game.falling()));
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let script = [
        GameAction::MoveLeft,
        GameAction::MoveBackward,
        GameAction::MoveRight,
        GameAction::MoveForward,
    ];

    let play = |seed: u32| {
        let mut game = GameState::new(seed);
        let mut frames = vec![game.start()];
        for i in 0..300 {
            frames.push(game.apply_action(script[i % script.len()]));
            frames.push(game.tick());
        }
        frames
    };

    assert_eq!(play(8080), play(8080));
}

#[test]
fn test_idle_game_eventually_ends() {
    let mut game = GameState::new(4242);
    game.start();

    let mut ticks = 0;
    while game.is_running() {
        game.tick();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }

    let snap = game.snapshot();
    assert!(snap.game_over());
    assert!(snap.volume.is_empty());
    assert!(matches!(
        game.last_event(),
        Some(TickEvent::GameOver { final_score, .. }) if final_score == snap.score
    ));
}

#[test]
fn test_no_landed_cell_survives_above_visible_stack() {
    let mut game = GameState::new(77);
    game.start();
    for i in 0..2_000 {
        if i % 3 == 0 {
            let dir = Direction::ALL[i % Direction::ALL.len()];
            game.apply_move(dir);
        }
        game.tick();
        if !game.is_running() {
            game.restart();
            continue;
        }
        for (_, y, _) in game.landed().occupied() {
            assert!(y < VISIBLE_HEIGHT - 1, "landed cell at y={}", y);
        }
    }
}

#[test]
fn test_restart_after_game_over() {
    let mut game = GameState::new(3);
    game.start();
    while game.is_running() {
        game.tick();
    }

    let ignored = game.apply_action(GameAction::Start);
    assert_eq!(ignored.lifecycle, Lifecycle::GameOver);

    let snap = game.apply_action(GameAction::Restart);
    assert!(snap.is_running());
    assert_eq!(snap.score, 0);
    assert!(game.landed().is_empty());
    assert_eq!(game.pieces_spawned(), 1);
    for (_, y, _) in game.falling().occupied() {
        assert!(y >= VISIBLE_HEIGHT && y < BUFFER_HEIGHT);
    }
}

#[test]
fn test_two_layer_clear_scores_two() {
    let mut landed = Volume::new();
    for y in 0..2 {
        for z in 0..4 {
            for x in 0..WIDTH {
                if (x, z) != (2, 2) {
                    landed.set(x, y, z, true);
                }
            }
        }
    }
    landed.set(0, 2, 0, true);
    let mut game = running_with(Volume::from_cells(&[(2, 3, 2), (2, 4, 2)]), landed);

    // Three drops bring the bar down to the floor of the notch.
    for _ in 0..3 {
        game.tick();
    }
    assert_eq!(*game.falling(), Volume::from_cells(&[(2, 0, 2), (2, 1, 2)]));

    let snap = game.tick();
    assert_eq!(snap.score, 2);
    assert_eq!(game.last_event(), Some(TickEvent::Locked { cleared: 2 }));
    assert_eq!(game.cleared_layers(), &[0, 0]);
    assert_eq!(*game.landed(), Volume::from_cells(&[(0, 0, 0)]));
}
