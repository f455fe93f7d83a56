//! Movement domain: notifications raised by the motion core.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::DashPhase;

/// Edge notifications queued by a MotionController during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    /// Grounded went from false to true.
    Landed,
    CrouchChanged(bool),
    DashPhaseChanged(DashPhase),
}

/// Event fired when a character touches ground after being airborne
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

/// Event fired when a character starts or stops crouching
#[derive(Debug)]
pub struct CrouchChangedEvent {
    pub entity: Entity,
    pub crouching: bool,
}

impl Message for CrouchChangedEvent {}

/// Event fired when a character's dash enters a new phase
#[derive(Debug)]
pub struct DashPhaseEvent {
    pub entity: Entity,
    pub phase: DashPhase,
}

impl Message for DashPhaseEvent {}
