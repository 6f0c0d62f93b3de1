//! Run lifecycle: menu, playing, game over.
//!
//! [`GameState`] is defined in the `simulation` crate so the `save` crate and
//! the app can react to it without circular dependencies. Gameplay systems
//! are gated on [`GameState::Playing`] through
//! [`GameplaySet`](crate::gameplay_sets::GameplaySet).

use bevy::prelude::*;

use crate::gameplay_sets::GameplaySet;
use crate::lane_world::{bootstrap_lanes, despawn_all_lanes, LaneConfig, LaneWorld, OnLane};
use crate::player::{BlockedDirections, Player};
use crate::sim_rng::SimRng;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; the world is built but frozen.
    #[default]
    Menu,
    Playing,
    /// Entered for one frame while the run is scored and the world rebuilt.
    GameOver,
}

/// Current run score and the best score seen so far.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub highscore: u32,
}

impl Scoreboard {
    /// Fold the finished run into the high score. Returns the new high score
    /// when the run beat it.
    pub fn record_final(&mut self) -> Option<u32> {
        if self.score > self.highscore {
            self.highscore = self.score;
            Some(self.score)
        } else {
            None
        }
    }
}

/// Tap on the title screen.
#[derive(Event, Debug, Clone, Copy)]
pub struct StartGame;

/// The restart button was pressed during a run.
#[derive(Event, Debug, Clone, Copy)]
pub struct RestartRequested;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    HitByVehicle,
    Restarted,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent(pub GameOverCause);

/// A finished run set a new high score; persistence listens for this.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighscoreBeaten(pub u32);

pub fn start_game(mut starts: EventReader<StartGame>, mut next: ResMut<NextState<GameState>>) {
    if starts.read().last().is_some() {
        info!("Starting run");
        next.set(GameState::Playing);
    }
}

pub fn forward_restart(
    mut restarts: EventReader<RestartRequested>,
    mut game_over: EventWriter<GameOverEvent>,
) {
    if restarts.read().last().is_some() {
        game_over.send(GameOverEvent(GameOverCause::Restarted));
    }
}

pub fn resolve_game_over(
    mut events: EventReader<GameOverEvent>,
    mut scoreboard: ResMut<Scoreboard>,
    mut beaten: EventWriter<HighscoreBeaten>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(GameOverEvent(cause)) = events.read().last().copied() else {
        return;
    };
    // Several fixed ticks can run before the transition is applied.
    if matches!(*next, NextState::Pending(GameState::GameOver)) {
        return;
    }

    info!("Game over ({:?}) with score {}", cause, scoreboard.score);
    if let Some(highscore) = scoreboard.record_final() {
        info!("New high score: {}", highscore);
        beaten.send(HighscoreBeaten(highscore));
    }
    next.set(GameState::GameOver);
}

/// Tear down the finished run and build a fresh world behind the menu.
#[allow(clippy::too_many_arguments)]
pub fn reset_run(
    mut commands: Commands,
    mut lanes: ResMut<LaneWorld>,
    config: Res<LaneConfig>,
    mut rng: ResMut<SimRng>,
    objects: Query<(Entity, &OnLane)>,
    mut player: ResMut<Player>,
    mut blocked: ResMut<BlockedDirections>,
    mut scoreboard: ResMut<Scoreboard>,
    mut next: ResMut<NextState<GameState>>,
) {
    despawn_all_lanes(&mut commands, &mut lanes, &objects);
    *player = Player::default();
    *blocked = BlockedDirections::default();
    scoreboard.score = 0;
    bootstrap_lanes(&mut commands, &mut lanes, &config, &mut rng);
    next.set(GameState::Menu);
}

pub struct GameStatePlugin;

impl Plugin for GameStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<Scoreboard>()
            .add_event::<StartGame>()
            .add_event::<RestartRequested>()
            .add_event::<GameOverEvent>()
            .add_event::<HighscoreBeaten>()
            .add_systems(Update, start_game.run_if(in_state(GameState::Menu)))
            .add_systems(
                FixedUpdate,
                (forward_restart, resolve_game_over)
                    .chain()
                    .in_set(GameplaySet::Outcome),
            )
            .add_systems(OnEnter(GameState::GameOver), reset_run);
    }
}
