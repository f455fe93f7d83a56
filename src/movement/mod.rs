//! Movement domain: motion core, physics port, and plugin wiring.

mod bootstrap;
mod components;
mod config;
mod controller;
mod dash;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod port;
mod smoothing;
mod systems;


pub use components::{
    CharacterParts, CrouchDisableCollider, DashTrail, Facing, GameLayer, Ground, Player,
};
pub use config::{ConfigError, INTENT_TO_VELOCITY, MAX_MOVEMENT_SMOOTHING, MotionConfig};
pub use controller::MotionController;
pub use dash::{DashPhase, DashState, DashTick};
pub use events::{CrouchChangedEvent, DashPhaseEvent, LandedEvent, MotionEvent};
pub use port::PhysicsPort;
pub use smoothing::smooth_damp;

pub(crate) use config::non_negative;
pub(crate) use port::AvianBody;
pub(crate) use systems::publish_motion_events;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    advance_dash, sense_contacts, show_dash_trail, sync_facing, update_dash_trail,
};

/// Ordering of the fixed-tick motion pipeline. Contact sensing always
/// completes before anything reads `grounded`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionSet {
    Sense,
    /// Intent is applied here by the controls domain.
    Move,
    Dash,
    Publish,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<LandedEvent>()
            .add_message::<CrouchChangedEvent>()
            .add_message::<DashPhaseEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    MotionSet::Sense,
                    MotionSet::Move,
                    MotionSet::Dash,
                    MotionSet::Publish,
                )
                    .chain(),
            )
            .add_systems(PostStartup, spawn_player)
            .add_systems(FixedUpdate, sense_contacts.in_set(MotionSet::Sense))
            .add_systems(FixedUpdate, advance_dash.in_set(MotionSet::Dash))
            .add_systems(FixedUpdate, publish_motion_events.in_set(MotionSet::Publish))
            .add_systems(
                Update,
                (sync_facing, (update_dash_trail, show_dash_trail).chain()),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
