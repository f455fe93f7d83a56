//! Movement domain: per-character motion tuning and its validation.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::time::Duration;

use crate::movement::GameLayer;

/// Converts horizontal intent units into velocity units.
pub const INTENT_TO_VELOCITY: f32 = 10.0;

/// Largest accepted `movement_smoothing`, in seconds.
pub const MAX_MOVEMENT_SMOOTHING: f32 = 0.3;

/// Immutable tuning for one character's MotionController.
///
/// Distances are in world units (pixels), durations in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    /// Upward impulse applied on jump.
    pub jump_force: f32,
    /// Fraction of horizontal intent kept while crouching (0.0-1.0).
    pub crouch_speed: f32,
    /// Time for velocity to settle on its target (0.0-0.3).
    pub movement_smoothing: f32,
    /// Whether horizontal intent steers the body while airborne.
    pub air_control: bool,
    /// Horizontal speed of a dash.
    pub dash_power: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    pub grounded_radius: f32,
    pub ceiling_radius: f32,
    /// Ground probe position relative to the body origin (facing right).
    pub ground_check_offset: Vec2,
    /// Ceiling probe position relative to the body origin (facing right).
    pub ceiling_check_offset: Vec2,
    /// Layers that count as ground for both probes.
    pub ground_layers: LayerMask,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            jump_force: 650.0,
            crouch_speed: 0.36,
            movement_smoothing: 0.05,
            air_control: false,
            dash_power: 900.0,
            dash_time: 0.2,
            dash_cooldown: 1.0,
            grounded_radius: 6.0,
            ceiling_radius: 6.0,
            ground_check_offset: Vec2::new(0.0, -12.0),
            ceiling_check_offset: Vec2::new(0.0, 36.0),
            ground_layers: LayerMask::from(GameLayer::Ground),
        }
    }
}

impl MotionConfig {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("jump_force", self.jump_force)?;
        in_range(
            "crouch_speed",
            self.crouch_speed,
            (0.0, 1.0),
            "a fraction in [0, 1]",
        )?;
        in_range(
            "movement_smoothing",
            self.movement_smoothing,
            (0.0, MAX_MOVEMENT_SMOOTHING),
            "seconds in [0, 0.3]",
        )?;
        non_negative("dash_power", self.dash_power)?;
        duration_secs("dash_time", self.dash_time)?;
        duration_secs("dash_cooldown", self.dash_cooldown)?;
        non_negative("grounded_radius", self.grounded_radius)?;
        non_negative("ceiling_radius", self.ceiling_radius)?;
        finite_offset("ground_check_offset", self.ground_check_offset)?;
        finite_offset("ceiling_check_offset", self.ceiling_check_offset)?;

        if self.ground_layers == LayerMask::NONE {
            return Err(ConfigError {
                field: "ground_layers",
                value: "[]".to_string(),
                expected: "at least one layer",
            });
        }

        Ok(())
    }

    /// Zero when `dash_time` is one `validate` rejects.
    pub fn dash_duration(&self) -> Duration {
        duration_secs("dash_time", self.dash_time).unwrap_or_default()
    }

    /// Zero when `dash_cooldown` is one `validate` rejects.
    pub fn dash_cooldown_duration(&self) -> Duration {
        duration_secs("dash_cooldown", self.dash_cooldown).unwrap_or_default()
    }
}

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} = {}: expected {}",
            self.field, self.value, self.expected
        )
    }
}

pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError {
            field,
            value: value.to_string(),
            expected: "a finite value >= 0",
        })
    }
}

fn duration_secs(field: &'static str, value: f32) -> Result<Duration, ConfigError> {
    non_negative(field, value)?;
    Duration::try_from_secs_f32(value).map_err(|_| ConfigError {
        field,
        value: value.to_string(),
        expected: "a representable number of seconds",
    })
}

fn in_range(
    field: &'static str,
    value: f32,
    (min, max): (f32, f32),
    expected: &'static str,
) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError {
            field,
            value: value.to_string(),
            expected,
        })
    }
}

fn finite_offset(field: &'static str, offset: Vec2) -> Result<(), ConfigError> {
    if offset.is_finite() {
        Ok(())
    } else {
        Err(ConfigError {
            field,
            value: format!("({}, {})", offset.x, offset.y),
            expected: "finite coordinates",
        })
    }
}
