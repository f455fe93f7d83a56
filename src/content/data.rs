//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::controls::DEFAULT_RUN_SPEED;
use crate::core::DEFAULT_CHARACTER_ID;
use crate::movement::{GameLayer, MotionConfig};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Characters (characters.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    pub run_speed: f32,
    pub motion: MotionDef,
}

impl Default for CharacterDef {
    fn default() -> Self {
        Self {
            id: DEFAULT_CHARACTER_ID.to_string(),
            name: "Runner".to_string(),
            run_speed: DEFAULT_RUN_SPEED,
            motion: MotionDef::default(),
        }
    }
}

/// Serialized form of MotionConfig.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotionDef {
    pub jump_force: f32,
    pub crouch_speed: f32,
    pub movement_smoothing: f32,
    pub air_control: bool,
    pub dash_power: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    pub grounded_radius: f32,
    pub ceiling_radius: f32,
    pub ground_check_offset: (f32, f32),
    pub ceiling_check_offset: (f32, f32),
    pub ground_layers: Vec<GameLayer>,
}

impl Default for MotionDef {
    fn default() -> Self {
        let config = MotionConfig::default();
        Self {
            jump_force: config.jump_force,
            crouch_speed: config.crouch_speed,
            movement_smoothing: config.movement_smoothing,
            air_control: config.air_control,
            dash_power: config.dash_power,
            dash_time: config.dash_time,
            dash_cooldown: config.dash_cooldown,
            grounded_radius: config.grounded_radius,
            ceiling_radius: config.ceiling_radius,
            ground_check_offset: config.ground_check_offset.into(),
            ceiling_check_offset: config.ceiling_check_offset.into(),
            ground_layers: vec![GameLayer::Ground],
        }
    }
}

impl MotionDef {
    pub fn to_config(&self) -> MotionConfig {
        let ground_layers = self
            .ground_layers
            .iter()
            .fold(0, |bits, layer| bits | layer.to_bits());

        MotionConfig {
            jump_force: self.jump_force,
            crouch_speed: self.crouch_speed,
            movement_smoothing: self.movement_smoothing,
            air_control: self.air_control,
            dash_power: self.dash_power,
            dash_time: self.dash_time,
            dash_cooldown: self.dash_cooldown,
            grounded_radius: self.grounded_radius,
            ceiling_radius: self.ceiling_radius,
            ground_check_offset: Vec2::from(self.ground_check_offset),
            ceiling_check_offset: Vec2::from(self.ceiling_check_offset),
            ground_layers: LayerMask(ground_layers),
        }
    }
}
