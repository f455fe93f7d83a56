//! Movement domain: the narrow physics surface the motion core talks to.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::CharacterParts;

/// Synchronous, tick-aligned access to one character's rigid body and the
/// world around it.
pub trait PhysicsPort {
    /// World position of the body origin.
    fn position(&self) -> Vec2;

    /// Number of colliders on `layers` overlapping the circle, not counting
    /// the character's own colliders.
    fn overlap_circle(&self, center: Vec2, radius: f32, layers: LayerMask) -> usize;

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Instantaneous change of momentum; adds `impulse / mass` to velocity.
    fn apply_impulse(&mut self, impulse: Vec2);

    fn gravity_scale(&self) -> f32;

    fn set_gravity_scale(&mut self, scale: f32);
}

/// PhysicsPort backed by avian2d components of a single character.
pub(crate) struct AvianBody<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    own_colliders: Vec<Entity>,
    position: Vec2,
    velocity: &'a mut LinearVelocity,
    gravity_scale: &'a mut GravityScale,
    inverse_mass: f32,
}

impl<'a, 'w, 's> AvianBody<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        entity: Entity,
        parts: &CharacterParts,
        position: &Position,
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        mass: &ComputedMass,
    ) -> Self {
        Self {
            spatial_query,
            own_colliders: parts.own_colliders(entity).collect(),
            position: position.0,
            velocity,
            gravity_scale,
            inverse_mass: mass.inverse(),
        }
    }
}

impl PhysicsPort for AvianBody<'_, '_, '_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn overlap_circle(&self, center: Vec2, radius: f32, layers: LayerMask) -> usize {
        let filter = SpatialQueryFilter::from_mask(layers)
            .with_excluded_entities(self.own_colliders.iter().copied());

        self.spatial_query
            .shape_intersections(&Collider::circle(radius), center, 0.0, &filter)
            .len()
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }
}
