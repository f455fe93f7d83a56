//! Debug domain: debug systems for input and the info overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controls::{Animator, InputAdapter, params};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{MotionController, Player};

/// Toggle the info overlay with F3
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        let visible = debug_state.toggle_info();
        info!("[DEBUG] Motion info {}", if visible { "ON" } else { "OFF" });
    }
}

/// Update the debug info overlay with current motion state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<
        (
            &Position,
            &LinearVelocity,
            &MotionController,
            &InputAdapter,
            &Animator,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((position, velocity, controller, adapter, animator)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nGrounded: {}\nCrouching: {}\nFacing: {:?}\nDash: {:?} {:.2}s (ready: {})\nRequest: {:?}\nSpeed: {:.0}",
            position.x,
            position.y,
            velocity.x,
            velocity.y,
            controller.is_grounded(),
            controller.is_crouching(),
            controller.facing(),
            controller.dash_phase(),
            controller.dash_state().phase_elapsed().as_secs_f32(),
            controller.can_dash(),
            adapter.dash_request(),
            animator.float(params::SPEED),
        );
    }
}
