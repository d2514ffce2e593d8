//! Movement domain: tuning resources.

use bevy::prelude::*;

/// Speeds are in world units per second, accelerations in units per second squared.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub acceleration: f32,
    pub top_running_speed: f32,
    pub deceleration: f32,
    /// Vertical speed set on jump, not an impulse.
    pub jump_height: f32,
    /// Most negative vertical speed allowed (terminal velocity).
    pub top_falling_speed: f32,
    pub top_rising_speed: f32,
    /// How far below the collider the ground probe reaches.
    pub detection_ray_length: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            acceleration: 90.0,
            top_running_speed: 12.0,
            deceleration: 120.0,
            jump_height: 12.0,
            top_falling_speed: -48.0,
            top_rising_speed: 60.0,
            detection_ray_length: 0.1,
        }
    }
}

impl MovementTuning {
    /// Time to reach top running speed from rest.
    pub fn time_to_top_speed(&self) -> f32 {
        self.top_running_speed / self.acceleration
    }

    /// Vertical speed limited to the terminal velocities.
    pub fn clamp_vertical_speed(&self, vertical_velocity: f32) -> f32 {
        vertical_velocity.clamp(self.top_falling_speed, self.top_rising_speed)
    }

    /// Time to stop from top running speed with no input.
    pub fn time_to_stop(&self) -> f32 {
        self.top_running_speed / self.deceleration
    }
}
