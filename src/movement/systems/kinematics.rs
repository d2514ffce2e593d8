//! Movement domain: per-tick kinematic bookkeeping systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{Facing, KinematicState, KnockbackEvent, MovementActions, MovementTuning};

/// Record the gravity scale each body was spawned with, once.
pub(crate) fn capture_default_gravity(
    mut query: Query<(Entity, &mut KinematicState, &GravityScale)>,
) {
    for (entity, mut state, gravity_scale) in &mut query {
        if state.has_captured_gravity_scale() {
            continue;
        }

        let scale = gravity_scale.0;
        state.capture_default_gravity_scale(scale);
        debug!(
            "Captured default gravity scale: entity={:?}, scale={}",
            entity, scale
        );
    }
}

pub(crate) fn apply_knockback(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut events: MessageReader<KnockbackEvent>,
    mut query: Query<(&mut KinematicState, &mut LinearVelocity, &mut GravityScale)>,
) {
    for event in events.read() {
        let Ok((mut state, mut velocity, mut gravity_scale)) = query.get_mut(event.target) else {
            warn!("Knockback target {:?} has no locomotion body", event.target);
            continue;
        };

        let mut actions = MovementActions::new(
            &mut state,
            &mut velocity.0,
            &mut gravity_scale.0,
            &tuning,
            time.delta_secs(),
        );
        actions.knockback(event.direction, event.power);

        debug!(
            "Knockback: entity={:?}, direction={}, power={}, velocity={}",
            event.target, event.direction, event.power, velocity.0
        );
    }
}

pub(crate) fn clamp_vertical_velocity(
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<KinematicState>>,
) {
    for mut velocity in &mut query {
        velocity.y = tuning.clamp_vertical_speed(velocity.y);
    }
}

/// Mirror the sprite to match the body's facing.
pub(crate) fn sync_sprite_facing(mut query: Query<(&KinematicState, &mut Sprite)>) {
    for (state, mut sprite) in &mut query {
        let flip_x = state.facing() == Facing::Left;
        if sprite.flip_x != flip_x {
            sprite.flip_x = flip_x;
        }
    }
}
