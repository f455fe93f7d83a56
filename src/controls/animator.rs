//! Controls domain: named animation parameters handed to the animation layer.

use bevy::prelude::*;
use std::collections::HashMap;

/// Parameter names shared with the animation layer.
pub mod params {
    pub const SPEED: &str = "Speed";
    pub const IS_JUMPING: &str = "IsJumping";
    pub const IS_CROUCHING: &str = "IsCrouching";
    pub const DASH: &str = "Dash";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorParam {
    Float(f32),
    Bool(bool),
    /// One-shot cue; stays set until consumed.
    Trigger(bool),
}

/// Fire-and-forget parameter store read by whatever drives sprite animation.
#[derive(Component, Debug, Default)]
pub struct Animator {
    params: HashMap<String, AnimatorParam>,
}

impl Animator {
    pub fn set_float(&mut self, name: &str, value: f32) {
        self.params
            .insert(name.to_string(), AnimatorParam::Float(value));
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.params
            .insert(name.to_string(), AnimatorParam::Bool(value));
    }

    pub fn set_trigger(&mut self, name: &str) {
        self.params
            .insert(name.to_string(), AnimatorParam::Trigger(true));
    }

    pub fn float(&self, name: &str) -> f32 {
        match self.params.get(name) {
            Some(AnimatorParam::Float(value)) => *value,
            _ => 0.0,
        }
    }

    pub fn bool(&self, name: &str) -> bool {
        matches!(self.params.get(name), Some(AnimatorParam::Bool(true)))
    }

    pub fn is_triggered(&self, name: &str) -> bool {
        matches!(self.params.get(name), Some(AnimatorParam::Trigger(true)))
    }

    /// Reset every set trigger, returning the names that were set.
    pub fn consume_triggers(&mut self) -> Vec<String> {
        let mut fired = Vec::new();
        for (name, param) in &mut self.params {
            if let AnimatorParam::Trigger(set @ true) = param {
                *set = false;
                fired.push(name.clone());
            }
        }
        fired.sort();
        fired
    }
}
