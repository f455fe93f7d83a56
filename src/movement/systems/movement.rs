//! Movement domain: dash timers and publication of motion notifications.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::port::AvianBody;
use crate::movement::{
    CharacterParts, CrouchChangedEvent, DashPhase, DashPhaseEvent, DashTrail, Facing,
    LandedEvent, MotionController, MotionEvent, Player,
};

pub(crate) fn advance_dash(
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
        ),
        With<Player>,
    >,
) {
    let delta = time.delta();

    for (entity, position, mut velocity, mut gravity_scale, mass, parts, mut controller) in
        &mut query
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
        controller.advance_dash(&mut body, delta);
    }
}

/// Drain every controller's queued notifications into messages and switch
/// the optional crouch collider.
pub(crate) fn publish_motion_events(
    mut commands: Commands,
    mut controllers: Query<(Entity, &CharacterParts, &mut MotionController)>,
    mut landed: MessageWriter<LandedEvent>,
    mut crouch_changed: MessageWriter<CrouchChangedEvent>,
    mut dash_phase: MessageWriter<DashPhaseEvent>,
) {
    for (entity, parts, mut controller) in &mut controllers {
        for event in controller.drain_events() {
            match event {
                MotionEvent::Landed => {
                    landed.write(LandedEvent { entity });
                }
                MotionEvent::CrouchChanged(crouching) => {
                    if let Some(collider) = parts.crouch_collider {
                        if crouching {
                            commands.entity(collider).insert(ColliderDisabled);
                        } else {
                            commands.entity(collider).remove::<ColliderDisabled>();
                        }
                    }
                    crouch_changed.write(CrouchChangedEvent { entity, crouching });
                }
                MotionEvent::DashPhaseChanged(phase) => {
                    dash_phase.write(DashPhaseEvent { entity, phase });
                }
            }
        }
    }
}

/// The trail emits for exactly the dashing phase.
pub(crate) fn update_dash_trail(
    mut events: MessageReader<DashPhaseEvent>,
    characters: Query<&CharacterParts>,
    mut trails: Query<&mut DashTrail>,
) {
    for event in events.read() {
        let Some(trail) = characters.get(event.entity).ok().and_then(|parts| parts.trail) else {
            continue;
        };
        if let Ok(mut trail) = trails.get_mut(trail) {
            trail.emitting = event.phase == DashPhase::Dashing;
        }
    }
}

pub(crate) fn sync_facing(
    controllers: Query<(&MotionController, &CharacterParts), With<Player>>,
    mut sprites: Query<&mut Sprite>,
) {
    for (controller, parts) in &controllers {
        if let Ok(mut sprite) = sprites.get_mut(parts.sprite) {
            let flip = controller.facing() == Facing::Left;
            if sprite.flip_x != flip {
                sprite.flip_x = flip;
            }
        }
    }
}

pub(crate) fn show_dash_trail(
    mut trails: Query<(&DashTrail, &mut Visibility), Changed<DashTrail>>,
) {
    for (trail, mut visibility) in &mut trails {
        *visibility = if trail.emitting {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
