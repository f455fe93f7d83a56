//! Movement domain: the per-character motion core.
//!
//! A MotionController turns intent into velocity changes on a body it reaches
//! only through [`PhysicsPort`]. Each fixed tick runs, in order:
//! [`MotionController::sense_contacts`], [`MotionController::move_character`],
//! [`MotionController::advance_dash`]. Dashes start from
//! [`MotionController::dash`] at any time.

use bevy::prelude::*;
use std::time::Duration;

use crate::movement::config::{ConfigError, INTENT_TO_VELOCITY, MotionConfig};
use crate::movement::dash::{DashPhase, DashState};
use crate::movement::events::MotionEvent;
use crate::movement::port::PhysicsPort;
use crate::movement::smoothing::smooth_damp;
use crate::movement::Facing;

#[derive(Component, Debug)]
pub struct MotionController {
    config: MotionConfig,
    grounded: bool,
    crouching: bool,
    facing: Facing,
    /// Rate of change carried by the horizontal smoothing between ticks.
    smoothing_velocity: f32,
    dash: DashState,
    pending_events: Vec<MotionEvent>,
}

impl Default for MotionController {
    fn default() -> Self {
        Self::from_valid_config(MotionConfig::default())
    }
}

impl MotionController {
    pub fn new(config: MotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: MotionConfig) -> Self {
        let dash = DashState::new(config.dash_duration(), config.dash_cooldown_duration());
        Self {
            config,
            grounded: false,
            crouching: false,
            facing: Facing::Right,
            smoothing_velocity: 0.0,
            dash,
            pending_events: Vec::new(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn dash_phase(&self) -> DashPhase {
        self.dash.phase()
    }

    pub fn can_dash(&self) -> bool {
        self.dash.can_dash()
    }

    pub fn dash_state(&self) -> &DashState {
        &self.dash
    }

    /// Take the notifications raised since the last drain, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, MotionEvent> {
        self.pending_events.drain(..)
    }

    /// Recompute grounded from the ground probe. Raises Landed on the
    /// airborne-to-grounded edge. Runs during dashes as well.
    pub fn sense_contacts(&mut self, body: &impl PhysicsPort) {
        let was_grounded = self.grounded;

        let probe = self.probe_point(body.position(), self.config.ground_check_offset);
        self.grounded = body.overlap_circle(
            probe,
            self.config.grounded_radius,
            self.config.ground_layers,
        ) > 0;

        if self.grounded && !was_grounded {
            debug!("Landed at ({:.1}, {:.1})", probe.x, probe.y);
            self.pending_events.push(MotionEvent::Landed);
        } else if !self.grounded && was_grounded {
            debug!("Left ground");
        }
    }

    /// Apply one fixed tick of intent.
    ///
    /// `intent` is horizontal intent in intent units, `dt` the fixed tick
    /// length in seconds. While a dash is in its dashing phase only crouch
    /// bookkeeping runs; velocity, facing and jumping belong to the dash.
    pub fn move_character(
        &mut self,
        body: &mut impl PhysicsPort,
        mut intent: f32,
        mut crouch: bool,
        jump: bool,
        dt: f32,
    ) {
        let dashing = self.dash.phase() == DashPhase::Dashing;

        if !crouch && self.ceiling_blocked(body) {
            crouch = true;
        }

        if self.grounded || self.config.air_control {
            if crouch {
                if !self.crouching {
                    self.crouching = true;
                    debug!("Crouch started");
                    self.pending_events.push(MotionEvent::CrouchChanged(true));
                }
                intent *= self.config.crouch_speed;
            } else if self.crouching {
                self.crouching = false;
                debug!("Crouch ended");
                self.pending_events.push(MotionEvent::CrouchChanged(false));
            }

            if !dashing {
                let mut velocity = body.velocity();
                velocity.x = smooth_damp(
                    velocity.x,
                    intent * INTENT_TO_VELOCITY,
                    &mut self.smoothing_velocity,
                    self.config.movement_smoothing,
                    dt,
                );
                body.set_velocity(velocity);

                let turning = match self.facing {
                    Facing::Right => intent < 0.0,
                    Facing::Left => intent > 0.0,
                };
                if turning {
                    self.facing = self.facing.flipped();
                }
            }
        }

        if !dashing && self.grounded && jump {
            // Cleared here so a second jump cannot fire before the next probe
            self.grounded = false;
            body.apply_impulse(Vec2::new(0.0, self.config.jump_force));
            debug!("Jump: impulse={}", self.config.jump_force);
        }
    }

    /// Start a dash in the facing direction. Returns false, changing nothing,
    /// while a previous dash or its cooldown is still running.
    pub fn dash(&mut self, body: &mut impl PhysicsPort) -> bool {
        if !self.dash.begin(body.gravity_scale()) {
            return false;
        }

        body.set_gravity_scale(0.0);
        body.set_velocity(Vec2::new(self.facing.sign() * self.config.dash_power, 0.0));
        debug!("Dash started: facing={:?}", self.facing);
        self.pending_events
            .push(MotionEvent::DashPhaseChanged(DashPhase::Dashing));
        true
    }

    /// Advance the dash timers by `delta` of elapsed time.
    pub fn advance_dash(&mut self, body: &mut impl PhysicsPort, delta: Duration) {
        let tick = self.dash.tick(delta);

        if let Some(gravity_scale) = tick.restore_gravity {
            body.set_gravity_scale(gravity_scale);
            debug!("Dash ended, gravity scale restored to {}", gravity_scale);
            self.pending_events
                .push(MotionEvent::DashPhaseChanged(DashPhase::Cooldown));
        }

        if tick.ready {
            debug!("Dash ready");
            self.pending_events
                .push(MotionEvent::DashPhaseChanged(DashPhase::Idle));
        }
    }

    fn ceiling_blocked(&self, body: &impl PhysicsPort) -> bool {
        let probe = self.probe_point(body.position(), self.config.ceiling_check_offset);
        body.overlap_circle(probe, self.config.ceiling_radius, self.config.ground_layers) > 0
    }

    /// Probe offsets are authored facing right and mirror with the body.
    fn probe_point(&self, origin: Vec2, offset: Vec2) -> Vec2 {
        origin + Vec2::new(offset.x * self.facing.sign(), offset.y)
    }
}
