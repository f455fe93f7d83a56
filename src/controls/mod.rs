//! Controls domain: input adapter, animation parameters, and plugin wiring.

mod adapter;
mod animator;
mod systems;

#[cfg(test)]
mod tests;

pub use adapter::{DEFAULT_RUN_SPEED, DashRequest, InputAdapter, InputSnapshot};
pub use animator::{Animator, AnimatorParam, params};

use bevy::prelude::*;

use crate::controls::systems::{
    drive_motion, flush_animator_triggers, react_to_crouch, react_to_landing, read_input,
    sample_controls,
};
use crate::movement::{MotionSet, publish_motion_events};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .add_systems(FixedUpdate, drive_motion.in_set(MotionSet::Move))
            .add_systems(
                Update,
                (
                    read_input,
                    sample_controls,
                    // Dashes start here, so publish their notifications this frame
                    publish_motion_events,
                    (react_to_landing, react_to_crouch),
                    flush_animator_triggers,
                )
                    .chain(),
            );
    }
}
