//! Deterministic gameplay ordering via `SystemSet` phases.
//!
//! Every gameplay system in `FixedUpdate` lives in one of these sets, so the
//! order in which a tick consumes input, moves traffic, detects contacts and
//! resolves their outcome is explicit rather than implied by registration
//! order.
//!
//! ```text
//! Input  →  Motion  →  Contacts  →  Outcome
//! ```
//!
//! * **Input** – Hop requests: gating, player movement, lane streaming.
//! * **Motion** – Vehicles driving along their lanes.
//! * **Contacts** – Contact detection and blocked-direction updates.
//! * **Outcome** – Game-over resolution and scoring.
//!
//! The whole chain only runs while [`GameState::Playing`] is active.

use bevy::prelude::*;

use crate::game_state::GameState;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Input,
    Motion,
    Contacts,
    Outcome,
}

pub struct GameplaySetsPlugin;

impl Plugin for GameplaySetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                GameplaySet::Input,
                GameplaySet::Motion,
                GameplaySet::Contacts,
                GameplaySet::Outcome,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
