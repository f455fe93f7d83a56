//! Core domain: camera, simulation clock, and character selection.

mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{DEFAULT_CHARACTER_ID, SelectedCharacter};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Fixed simulation rate. Motion and physics both step on this clock.
pub const FIXED_HZ: f64 = 64.0;

/// World gravity in pixels per second squared.
pub const GRAVITY: f32 = 1800.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .init_resource::<SelectedCharacter>()
            .add_systems(Startup, setup_camera);
    }
}
