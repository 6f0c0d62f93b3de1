//! Game over, high score bookkeeping and world reset.

use crate::config::{INITIAL_LANES, LOOKAHEAD_LANES};
use crate::game_state::{
    GameOverCause, GameOverEvent, GameState, HighscoreBeaten, RestartRequested, Scoreboard,
    StartGame,
};
use crate::lane_world::{LanePosition, OnLane, Vehicle};
use crate::lanes::{Heading, VehicleClass};
use crate::player::{BlockedDirections, Player};
use crate::test_harness::TestGame;

fn set_scores(game: &mut TestGame, score: u32, highscore: u32) {
    *game.resource_mut::<Scoreboard>() = Scoreboard { score, highscore };
}

fn finish_transition(game: &mut TestGame) {
    // GameOver is entered on the first update and left on the second.
    game.update();
    game.update();
}

#[test]
fn test_restart_ends_run_without_new_highscore() {
    let mut game = TestGame::new().start();
    set_scores(&mut game, 3, 10);

    game.send(RestartRequested);
    game.tick(1);

    assert_eq!(
        game.drain_events::<GameOverEvent>(),
        vec![GameOverEvent(GameOverCause::Restarted)]
    );
    assert!(game.drain_events::<HighscoreBeaten>().is_empty());

    finish_transition(&mut game);
    assert_eq!(game.state(), GameState::Menu);
    assert_eq!(game.scoreboard(), Scoreboard { score: 0, highscore: 10 });
}

#[test]
fn test_beating_highscore_is_announced_and_kept() {
    let mut game = TestGame::new().start();
    set_scores(&mut game, 5, 2);

    game.send(RestartRequested);
    game.tick(1);

    assert_eq!(game.drain_events::<HighscoreBeaten>(), vec![HighscoreBeaten(5)]);

    finish_transition(&mut game);
    assert_eq!(game.scoreboard(), Scoreboard { score: 0, highscore: 5 });
}

#[test]
fn test_game_over_is_resolved_once_per_run() {
    let mut game = TestGame::new().start();
    set_scores(&mut game, 4, 1);
    let player = game.player();
    let lane = game.lane_under_player().expect("player row is live");
    game.world_mut().spawn((
        Vehicle {
            class: VehicleClass::Truck,
            heading: Heading::Left,
            speed_factor: VehicleClass::Truck.speed_factor(),
        },
        LanePosition {
            x: player.x as f32,
            z: player.z,
        },
        OnLane(lane),
    ));

    // The state only changes on the next app update, so several ticks see
    // the collision.
    game.tick(3);

    assert_eq!(game.drain_events::<HighscoreBeaten>(), vec![HighscoreBeaten(4)]);
    assert_eq!(game.scoreboard().highscore, 4);
}

#[test]
fn test_reset_rebuilds_a_fresh_world() {
    let mut game = TestGame::new().start();
    let old_lanes: Vec<_> = game.lanes().handles().map(|h| h.entity).collect();
    *game.resource_mut::<Player>() = Player { x: 3, z: -2 };
    game.resource_mut::<BlockedDirections>().front = true;

    game.send(RestartRequested);
    game.tick(1);
    finish_transition(&mut game);

    let expected = INITIAL_LANES + LOOKAHEAD_LANES;
    assert_eq!(game.lanes().len(), expected);
    assert_eq!(game.lanes().next_index(), expected as u64);
    assert_eq!(game.lane_entity_count(), expected);
    assert_eq!(game.player(), Player::default());
    assert_eq!(game.blocked(), BlockedDirections::default());

    let world = game.world_mut();
    for entity in old_lanes {
        assert!(!world.entities().contains(entity), "stale lane {entity:?}");
    }

    let live: std::collections::HashSet<_> = game.lanes().handles().map(|h| h.entity).collect();
    assert!(game.referenced_lanes().is_subset(&live));
}

#[test]
fn test_new_run_can_start_after_reset() {
    let mut game = TestGame::new().start();
    game.send(RestartRequested);
    game.tick(1);
    finish_transition(&mut game);
    assert_eq!(game.state(), GameState::Menu);

    game.send(StartGame);
    game.update();
    game.update();
    assert_eq!(game.state(), GameState::Playing);
}
