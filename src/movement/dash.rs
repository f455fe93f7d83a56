//! Movement domain: timed dash phases with cooldown.

use bevy::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    Dashing,
    Cooldown,
}

/// What changed while advancing the dash timers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashTick {
    /// Gravity scale to put back, present when the dashing phase ended.
    pub restore_gravity: Option<f32>,
    /// The cooldown finished and a new dash may start.
    pub ready: bool,
}

/// Dash state machine: Idle -> Dashing -> Cooldown -> Idle.
///
/// Phases are timed on accumulated frame time, so the outcome only depends on
/// how much time passed, not on how it was split into ticks. Time left over
/// when a phase ends counts toward the next one.
#[derive(Debug, Clone)]
pub struct DashState {
    phase: DashPhase,
    can_dash: bool,
    timer: Timer,
    saved_gravity_scale: f32,
    dash_time: Duration,
    cooldown: Duration,
}

impl DashState {
    pub fn new(dash_time: Duration, cooldown: Duration) -> Self {
        Self {
            phase: DashPhase::Idle,
            can_dash: true,
            timer: Timer::new(dash_time, TimerMode::Once),
            saved_gravity_scale: 1.0,
            dash_time,
            cooldown,
        }
    }

    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn can_dash(&self) -> bool {
        self.can_dash
    }

    /// Time spent in the current phase; zero while idle.
    pub fn phase_elapsed(&self) -> Duration {
        match self.phase {
            DashPhase::Idle => Duration::ZERO,
            _ => self.timer.elapsed(),
        }
    }

    /// Enter the dashing phase, remembering the gravity scale to restore.
    /// Returns false and changes nothing unless the state is idle.
    pub fn begin(&mut self, gravity_scale: f32) -> bool {
        if !self.can_dash {
            return false;
        }

        self.can_dash = false;
        self.phase = DashPhase::Dashing;
        self.saved_gravity_scale = gravity_scale;
        self.timer = Timer::new(self.dash_time, TimerMode::Once);
        true
    }

    pub fn tick(&mut self, delta: Duration) -> DashTick {
        let mut result = DashTick::default();
        let mut budget = delta;

        while self.phase != DashPhase::Idle {
            let left = self.timer.remaining();
            if budget < left {
                self.timer.tick(budget);
                break;
            }
            budget -= left;

            if self.phase == DashPhase::Dashing {
                self.phase = DashPhase::Cooldown;
                self.timer = Timer::new(self.cooldown, TimerMode::Once);
                result.restore_gravity = Some(self.saved_gravity_scale);
            } else {
                self.phase = DashPhase::Idle;
                self.can_dash = true;
                result.ready = true;
            }
        }

        result
    }
}
