//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, low ceilings)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for the upper-body collider that is switched off while crouching
#[derive(Component, Debug)]
pub struct CrouchDisableCollider;

/// Trail effect shown while a dash is in progress
#[derive(Component, Debug, Default)]
pub struct DashTrail {
    pub emitting: bool,
}

/// Child entities a character drives besides its own rigid body.
/// Both optional parts may be absent; their behaviour is skipped then.
#[derive(Component, Debug)]
pub struct CharacterParts {
    pub sprite: Entity,
    pub crouch_collider: Option<Entity>,
    pub trail: Option<Entity>,
}

impl CharacterParts {
    /// Entities whose colliders must never count as ground for this character.
    pub fn own_colliders(&self, body: Entity) -> impl Iterator<Item = Entity> + '_ {
        std::iter::once(body).chain(self.crouch_collider)
    }
}
