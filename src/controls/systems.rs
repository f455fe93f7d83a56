//! Controls domain: input sampling and intent forwarding systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::controls::{Animator, InputAdapter, InputSnapshot};
use crate::movement::{
    AvianBody, CharacterParts, CrouchChangedEvent, LandedEvent, MotionController, MotionEvent,
    Player,
};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputSnapshot>) {
    // Horizontal axis, unsmoothed
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let crouch_keys = [KeyCode::KeyS, KeyCode::ArrowDown, KeyCode::ControlLeft];

    input.horizontal = x;
    input.jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.crouch_pressed = keyboard.any_just_pressed(crouch_keys);
    input.crouch_released =
        keyboard.any_just_released(crouch_keys) && !keyboard.any_pressed(crouch_keys);
    input.dash_pressed =
        keyboard.just_pressed(KeyCode::KeyX) || keyboard.just_pressed(KeyCode::ShiftLeft);
}

pub(crate) fn sample_controls(
    input: Res<InputSnapshot>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Position,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
            &CharacterParts,
            &mut MotionController,
            &mut InputAdapter,
            &mut Animator,
        ),
        With<Player>,
    >,
) {
    for (
        entity,
        position,
        mut velocity,
        mut gravity_scale,
        mass,
        parts,
        mut controller,
        mut adapter,
        mut animator,
    ) in &mut query
    {
        let mut body = AvianBody::new(
            &spatial_query,
            entity,
            parts,
            position,
            &mut velocity,
            &mut gravity_scale,
            mass,
        );
        adapter.frame_update(&input, &mut controller, &mut body, &mut animator);
    }
}

pub(crate) fn drive_motion(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Position,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
            &CharacterParts,
            &mut MotionController,
            &mut InputAdapter,
        ),
        With<Player>,
    >,
) {
    let fixed_dt = time.delta_secs();

    for (
        entity,
        position,
        mut velocity,
        mut gravity_scale,
        mass,
        parts,
        mut controller,
        mut adapter,
    ) in &mut query
    {
        let mut body = AvianBody::new(
            &spatial_query,
            entity,
            parts,
            position,
            &mut velocity,
            &mut gravity_scale,
            mass,
        );
        adapter.fixed_update(&mut controller, &mut body, fixed_dt);
    }
}

pub(crate) fn react_to_landing(
    mut events: MessageReader<LandedEvent>,
    mut query: Query<(&InputAdapter, &mut Animator)>,
) {
    for event in events.read() {
        if let Ok((adapter, mut animator)) = query.get_mut(event.entity) {
            adapter.handle_motion_event(&MotionEvent::Landed, &mut animator);
        }
    }
}

pub(crate) fn react_to_crouch(
    mut events: MessageReader<CrouchChangedEvent>,
    mut query: Query<(&InputAdapter, &mut Animator)>,
) {
    for event in events.read() {
        if let Ok((adapter, mut animator)) = query.get_mut(event.entity) {
            adapter.handle_motion_event(
                &MotionEvent::CrouchChanged(event.crouching),
                &mut animator,
            );
        }
    }
}

/// Stand-in for an animation graph: log and clear one-shot cues each frame.
pub(crate) fn flush_animator_triggers(mut query: Query<(Entity, &mut Animator)>) {
    for (entity, mut animator) in &mut query {
        for name in animator.consume_triggers() {
            debug!("Animator {:?}: trigger '{}'", entity, name);
        }
    }
}
