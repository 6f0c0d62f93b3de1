//! Headless player for the binary: starts runs from the menu, hops at a
//! fixed cadence and quits after a frame budget.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use simulation::game_state::{GameOverEvent, GameState, Scoreboard, StartGame};
use simulation::player::{BlockedDirections, HopDirection, HopRequest};

/// Frames between two hop requests.
const HOP_INTERVAL: u32 = 12;

/// One in this many hops goes sideways.
const SIDESTEP_ODDS: u32 = 4;

#[derive(Resource)]
pub struct Autopilot {
    frame: u32,
    frame_limit: u32,
    runs: u32,
    // Separate from SimRng so the lane stream does not depend on input.
    rng: ChaCha8Rng,
}

impl Autopilot {
    pub fn new(seed: u64, frame_limit: u32) -> Self {
        Self {
            frame: 0,
            frame_limit,
            runs: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Forward when possible, otherwise an open side, otherwise nothing.
    fn choose(&mut self, blocked: &BlockedDirections) -> Option<HopDirection> {
        let open: Vec<HopDirection> = HopDirection::ALL
            .into_iter()
            .filter(|d| !blocked.is_blocked(*d))
            .collect();
        let forward_open = open.contains(&HopDirection::Forward);
        let sidestep = self.rng.gen_range(0..SIDESTEP_ODDS) == 0;

        if forward_open && !sidestep {
            return Some(HopDirection::Forward);
        }
        let sides: Vec<HopDirection> = open
            .into_iter()
            .filter(|d| *d != HopDirection::Forward)
            .collect();
        if sides.is_empty() {
            return forward_open.then_some(HopDirection::Forward);
        }
        Some(sides[self.rng.gen_range(0..sides.len())])
    }
}

fn drive_autopilot(
    mut pilot: ResMut<Autopilot>,
    state: Res<State<GameState>>,
    blocked: Res<BlockedDirections>,
    scoreboard: Res<Scoreboard>,
    mut starts: EventWriter<StartGame>,
    mut hops: EventWriter<HopRequest>,
    mut exit: EventWriter<AppExit>,
) {
    pilot.frame += 1;
    if pilot.frame >= pilot.frame_limit {
        info!(
            "Autopilot finished after {} frames: {} runs, score {}, high score {}",
            pilot.frame, pilot.runs, scoreboard.score, scoreboard.highscore
        );
        exit.send(AppExit::Success);
        return;
    }

    match state.get() {
        GameState::Menu => {
            starts.send(StartGame);
        }
        GameState::Playing if pilot.frame % HOP_INTERVAL == 0 => {
            if let Some(direction) = pilot.choose(&blocked) {
                hops.send(HopRequest(direction));
            }
        }
        _ => {}
    }
}

fn count_run(mut pilot: ResMut<Autopilot>) {
    pilot.runs += 1;
}

fn log_game_over(mut events: EventReader<GameOverEvent>, scoreboard: Res<Scoreboard>) {
    for GameOverEvent(cause) in events.read() {
        info!("Run over ({cause:?}), high score {}", scoreboard.highscore);
    }
}

pub struct AutopilotPlugin {
    pub seed: u64,
    pub frame_limit: u32,
}

impl Plugin for AutopilotPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Autopilot::new(self.seed, self.frame_limit))
            .add_systems(OnEnter(GameState::Playing), count_run)
            .add_systems(Update, (drive_autopilot, log_game_over));
    }
}
