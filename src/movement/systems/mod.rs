//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod movement;

pub(crate) use collisions::sense_contacts;
pub(crate) use movement::{
    advance_dash, publish_motion_events, show_dash_trail, sync_facing, update_dash_trail,
};
