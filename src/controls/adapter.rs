//! Controls domain: turns sampled input into motion intent.

use bevy::prelude::*;

use crate::controls::animator::{Animator, params};
use crate::movement::{
    ConfigError, DashPhase, MotionController, MotionEvent, PhysicsPort, non_negative,
};

/// Run speed used when a character does not configure one.
pub const DEFAULT_RUN_SPEED: f32 = 1600.0;

/// Input state sampled for the current frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Raw horizontal axis in [-1, 1]
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub crouch_pressed: bool,
    pub crouch_released: bool,
    pub dash_pressed: bool,
}

/// Progress of a dash request started from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashRequest {
    #[default]
    Idle,
    /// Waiting for the controller's dash to return to idle.
    InFlight,
}

/// Per-character bridge between input and a MotionController.
///
/// Frame updates cache intent; fixed ticks hand it to the controller once.
#[derive(Component, Debug)]
pub struct InputAdapter {
    run_speed: f32,
    horizontal_move: f32,
    jump: bool,
    crouch: bool,
    dash_request: DashRequest,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self {
            run_speed: DEFAULT_RUN_SPEED,
            horizontal_move: 0.0,
            jump: false,
            crouch: false,
            dash_request: DashRequest::Idle,
        }
    }
}

impl InputAdapter {
    pub fn new(run_speed: f32) -> Result<Self, ConfigError> {
        non_negative("run_speed", run_speed)?;
        Ok(Self {
            run_speed,
            ..default()
        })
    }

    pub fn run_speed(&self) -> f32 {
        self.run_speed
    }

    pub fn horizontal_move(&self) -> f32 {
        self.horizontal_move
    }

    pub fn jump_pending(&self) -> bool {
        self.jump
    }

    pub fn crouch_held(&self) -> bool {
        self.crouch
    }

    pub fn dash_request(&self) -> DashRequest {
        self.dash_request
    }

    /// Per-frame step: cache intent, cue animation, and start a dash on a
    /// fresh press when no earlier request is still in flight.
    pub fn frame_update(
        &mut self,
        input: &InputSnapshot,
        controller: &mut MotionController,
        body: &mut impl PhysicsPort,
        animator: &mut Animator,
    ) {
        self.horizontal_move = input.horizontal * self.run_speed;
        animator.set_float(params::SPEED, self.horizontal_move.abs());

        if input.jump_pressed {
            self.jump = true;
            animator.set_bool(params::IS_JUMPING, true);
        }

        if input.crouch_pressed {
            self.crouch = true;
        } else if input.crouch_released {
            self.crouch = false;
        }

        if self.dash_request == DashRequest::InFlight
            && controller.dash_phase() == DashPhase::Idle
        {
            self.dash_request = DashRequest::Idle;
        }

        if input.dash_pressed && self.dash_request == DashRequest::Idle {
            self.dash_request = DashRequest::InFlight;
            animator.set_trigger(params::DASH);
            if !controller.dash(body) {
                debug!("Dash request refused by controller");
            }
        }
    }

    /// Per-fixed-tick step. The pending jump is consumed whether or not the
    /// controller accepted it.
    pub fn fixed_update(
        &mut self,
        controller: &mut MotionController,
        body: &mut impl PhysicsPort,
        fixed_dt: f32,
    ) {
        controller.move_character(
            body,
            self.horizontal_move * fixed_dt,
            self.crouch,
            self.jump,
            fixed_dt,
        );
        self.jump = false;
    }

    pub fn handle_motion_event(&self, event: &MotionEvent, animator: &mut Animator) {
        match event {
            MotionEvent::Landed => animator.set_bool(params::IS_JUMPING, false),
            MotionEvent::CrouchChanged(crouching) => {
                animator.set_bool(params::IS_CROUCHING, *crouching)
            }
            MotionEvent::DashPhaseChanged(_) => {}
        }
    }
}
