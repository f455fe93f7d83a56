//! Movement domain: ground contact sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::port::AvianBody;
use crate::movement::{CharacterParts, MotionController, Player};

pub(crate) fn sense_contacts(
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
    for (entity, position, mut velocity, mut gravity_scale, mass, parts, mut controller) in
        &mut query
    {
        let body = AvianBody::new(
            &spatial_query,
            entity,
            parts,
            position,
            &mut velocity,
            &mut gravity_scale,
            mass,
        );
        controller.sense_contacts(&body);
    }
}
