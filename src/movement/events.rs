//! Movement domain: messages other systems send to locomotion bodies.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// External impulse added to a body's velocity, e.g. an enemy hit.
#[derive(Debug, Clone, Copy)]
pub struct KnockbackEvent {
    pub target: Entity,
    pub direction: Vec2,
    pub power: f32,
}

impl Message for KnockbackEvent {}
