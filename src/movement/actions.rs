//! Movement domain: motion primitives over a body's velocity and gravity.

use bevy::prelude::*;

use crate::movement::{KinematicState, MovementTuning};

/// Horizontal speed under which braking leaves the body alone.
pub const BRAKE_DEAD_ZONE: f32 = 0.005;

/// Action API handed to whoever drives a body for one tick.
///
/// Borrows the body's kinematic state together with the physics-owned
/// velocity and gravity scale, so every primitive mutates the same values
/// avian integrates afterwards.
pub struct MovementActions<'a> {
    pub state: &'a mut KinematicState,
    pub velocity: &'a mut Vec2,
    pub gravity_scale: &'a mut f32,
    pub tuning: &'a MovementTuning,
    pub dt: f32,
}

impl<'a> MovementActions<'a> {
    pub fn new(
        state: &'a mut KinematicState,
        velocity: &'a mut Vec2,
        gravity_scale: &'a mut f32,
        tuning: &'a MovementTuning,
        dt: f32,
    ) -> Self {
        Self {
            state,
            velocity,
            gravity_scale,
            tuning,
            dt,
        }
    }

    /// Accelerate toward the right, never past the top running speed.
    pub fn run_right(&mut self) {
        let step = self.tuning.acceleration * self.dt;
        self.velocity.x = (self.velocity.x + step).min(self.tuning.top_running_speed);
    }

    /// Accelerate toward the left, never past the top running speed.
    pub fn run_left(&mut self) {
        let step = self.tuning.acceleration * self.dt;
        self.velocity.x = (self.velocity.x - step).max(-self.tuning.top_running_speed);
    }

    /// Decelerate toward a standstill, snapping to zero instead of reversing.
    pub fn brake(&mut self) {
        let vx = self.velocity.x;
        if vx.abs() <= BRAKE_DEAD_ZONE {
            return;
        }

        let direction = vx.signum();
        let braked = vx - direction * self.tuning.deceleration * self.dt;

        // signum(0.0) is 1.0, so an exact zero has to be caught explicitly.
        self.velocity.x = if braked == 0.0
            || braked.signum() != direction
            || braked.abs() <= BRAKE_DEAD_ZONE
        {
            0.0
        } else {
            braked
        };
    }

    /// Set vertical speed to the jump speed. Gating is the caller's job.
    pub fn jump(&mut self) {
        self.velocity.y = self.tuning.jump_height;
        self.state.mark_jumped();
    }

    /// Turn around. Orientation only, velocity is untouched.
    pub fn flip(&mut self) {
        self.state.flip_facing();
    }

    /// Push the body along `direction` on top of its current motion.
    pub fn knockback(&mut self, direction: Vec2, power: f32) {
        *self.velocity += direction.normalize_or_zero() * power;
    }

    /// Terminal velocity in both directions.
    pub fn clamp_vertical_velocity(&mut self) {
        self.velocity.y = self.tuning.clamp_vertical_speed(self.velocity.y);
    }

    pub fn set_gravity_multiplier(&mut self, multiplier: f32) {
        *self.gravity_scale = self.state.default_gravity_scale() * multiplier;
    }

    pub fn reset_gravity_scale(&mut self) {
        *self.gravity_scale = self.state.default_gravity_scale();
    }

    pub fn start_moving_towards(&mut self, direction: Vec2) {
        not_implemented("start_moving_towards", direction);
    }

    pub fn stop_moving(&mut self) {
        not_implemented("stop_moving", Vec2::ZERO);
    }
}

// Freeform (non-grounded) movement has no implementation yet. Development
// builds panic so a caller relying on it is caught immediately.
fn not_implemented(action: &str, direction: Vec2) {
    if cfg!(debug_assertions) {
        unimplemented!("movement action `{action}` (direction {direction})");
    }
    error!("Movement action `{}` is not implemented", action);
}
