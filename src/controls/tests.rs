//! Controls domain: tests for intent caching, dash requests, and reactions.

use bevy::prelude::Vec2;

use super::{Animator, DashRequest, InputAdapter, InputSnapshot, params};
use crate::movement::tests::FakeBody;
use crate::movement::{DashPhase, MotionConfig, MotionController, MotionEvent};

const DT: f32 = 1.0 / 64.0;

struct Rig {
    adapter: InputAdapter,
    controller: MotionController,
    body: FakeBody,
    animator: Animator,
}

impl Rig {
    fn grounded() -> Self {
        let body = FakeBody::grounded();
        let config = MotionConfig {
            movement_smoothing: 0.0,
            dash_time: 0.2,
            dash_cooldown: 1.0,
            ..Default::default()
        };
        let mut controller = MotionController::new(config).unwrap();
        controller.sense_contacts(&body);
        controller.drain_events().for_each(drop);
        Self {
            adapter: InputAdapter::new(40.0).unwrap(),
            controller,
            body,
            animator: Animator::default(),
        }
    }

    fn frame(&mut self, input: InputSnapshot) {
        self.adapter.frame_update(
            &input,
            &mut self.controller,
            &mut self.body,
            &mut self.animator,
        );
    }

    fn fixed_tick(&mut self) {
        self.controller.sense_contacts(&self.body);
        self.adapter
            .fixed_update(&mut self.controller, &mut self.body, DT);
        self.controller
            .advance_dash(&mut self.body, std::time::Duration::from_secs_f32(DT));
        let events: Vec<MotionEvent> = self.controller.drain_events().collect();
        for event in &events {
            self.adapter.handle_motion_event(event, &mut self.animator);
        }
    }
}

fn press_dash() -> InputSnapshot {
    InputSnapshot {
        dash_pressed: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn test_negative_run_speed_is_rejected() {
    let err = InputAdapter::new(-1.0).unwrap_err();
    assert_eq!(err.field, "run_speed");
    assert!(InputAdapter::new(0.0).is_ok());
}

// -----------------------------------------------------------------------------
// Frame sampling
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_intent_scales_by_run_speed_and_drives_speed_param() {
    let mut rig = Rig::grounded();
    rig.frame(InputSnapshot {
        horizontal: -0.5,
        ..Default::default()
    });

    assert_eq!(rig.adapter.horizontal_move(), -20.0);
    assert_eq!(rig.animator.float(params::SPEED), 20.0);
}

#[test]
fn test_fixed_tick_forwards_intent_times_fixed_dt() {
    let mut rig = Rig::grounded();
    rig.frame(InputSnapshot {
        horizontal: 1.0,
        ..Default::default()
    });
    rig.fixed_tick();

    // 40 * DT intent units, times 10 to velocity, with no smoothing
    let expected = 40.0 * DT * 10.0;
    assert!((rig.body.velocity.x - expected).abs() < 1e-4);
}

#[test]
fn test_jump_is_one_shot_per_press() {
    let mut rig = Rig::grounded();
    rig.frame(InputSnapshot {
        jump_pressed: true,
        ..Default::default()
    });
    assert!(rig.adapter.jump_pending());
    assert!(rig.animator.bool(params::IS_JUMPING));

    rig.fixed_tick();
    assert!(!rig.adapter.jump_pending());
    let after_jump = rig.body.velocity.y;
    assert!(after_jump > 0.0);

    // Still grounded in the fake, but no fresh press means no new impulse
    rig.frame(InputSnapshot::default());
    rig.fixed_tick();
    assert_eq!(rig.body.velocity.y, after_jump);
}

#[test]
fn test_pending_jump_cleared_even_when_refused() {
    let mut rig = Rig::grounded();
    rig.body.ground_hits = 0;

    rig.frame(InputSnapshot {
        jump_pressed: true,
        ..Default::default()
    });
    rig.fixed_tick();

    assert!(!rig.adapter.jump_pending());
    assert_eq!(rig.body.velocity, Vec2::ZERO);
}

#[test]
fn test_crouch_is_level_held_between_edges() {
    let mut rig = Rig::grounded();
    rig.frame(InputSnapshot {
        crouch_pressed: true,
        ..Default::default()
    });
    assert!(rig.adapter.crouch_held());

    for _ in 0..3 {
        rig.frame(InputSnapshot::default());
        rig.fixed_tick();
    }
    assert!(rig.adapter.crouch_held());
    assert!(rig.controller.is_crouching());
    assert!(rig.animator.bool(params::IS_CROUCHING));

    rig.frame(InputSnapshot {
        crouch_released: true,
        ..Default::default()
    });
    rig.fixed_tick();
    assert!(!rig.adapter.crouch_held());
    assert!(!rig.animator.bool(params::IS_CROUCHING));
}

#[test]
fn test_landing_clears_jumping_flag() {
    let mut rig = Rig::grounded();
    rig.frame(InputSnapshot {
        jump_pressed: true,
        ..Default::default()
    });
    rig.body.ground_hits = 0;
    rig.fixed_tick();
    assert!(rig.animator.bool(params::IS_JUMPING));

    rig.body.ground_hits = 1;
    rig.frame(InputSnapshot::default());
    rig.fixed_tick();
    assert!(!rig.animator.bool(params::IS_JUMPING));
}

// -----------------------------------------------------------------------------
// Dash requests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_press_starts_request_and_cues_animation() {
    let mut rig = Rig::grounded();
    rig.frame(press_dash());

    assert_eq!(rig.adapter.dash_request(), DashRequest::InFlight);
    assert_eq!(rig.controller.dash_phase(), DashPhase::Dashing);
    assert!(rig.animator.is_triggered(params::DASH));
    assert_eq!(rig.animator.consume_triggers(), vec![params::DASH.to_string()]);
    assert!(!rig.animator.is_triggered(params::DASH));
}

#[test]
fn test_dash_request_waits_for_controller_to_return_to_idle() {
    let mut rig = Rig::grounded();
    rig.frame(press_dash());
    rig.animator.consume_triggers();

    // Presses during dash and cooldown neither re-cue nor re-dash
    for _ in 0..10 {
        rig.fixed_tick();
        rig.frame(press_dash());
        assert!(!rig.animator.is_triggered(params::DASH));
        assert_eq!(rig.adapter.dash_request(), DashRequest::InFlight);
    }

    // Run out dash and cooldown (1.2s) with no presses
    for _ in 0..80 {
        rig.fixed_tick();
        rig.frame(InputSnapshot::default());
    }
    assert!(rig.controller.can_dash());
    assert_eq!(rig.adapter.dash_request(), DashRequest::Idle);

    rig.frame(press_dash());
    assert!(rig.animator.is_triggered(params::DASH));
    assert_eq!(rig.controller.dash_phase(), DashPhase::Dashing);
}

#[test]
fn test_dash_overrides_intent_until_it_ends() {
    let mut rig = Rig::grounded();
    let dash_power = rig.controller.config().dash_power;

    rig.frame(InputSnapshot {
        horizontal: -1.0,
        dash_pressed: true,
        ..Default::default()
    });
    // Facing is still right when the dash starts this frame
    assert_eq!(rig.body.velocity, Vec2::new(dash_power, 0.0));

    rig.fixed_tick();
    assert_eq!(rig.body.velocity, Vec2::new(dash_power, 0.0));
    assert_eq!(rig.body.gravity_scale, 0.0);

    // 0.2s is 12.8 ticks at 64Hz
    for _ in 0..13 {
        rig.fixed_tick();
    }
    assert_eq!(rig.controller.dash_phase(), DashPhase::Cooldown);
    assert_eq!(rig.body.gravity_scale, 1.0);

    rig.fixed_tick();
    assert!(rig.body.velocity.x < 0.0);
}
