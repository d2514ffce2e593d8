//! Controller domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControllerTuning {
    /// Vertical speed below which a jump is considered past its apex.
    pub jump_apex_speed_threshold: f32,
    pub fast_fall_gravity_multiplier: f32,
    /// Seconds after leaving ground during which a jump still counts as grounded.
    pub coyote_time: f32,
    /// Seconds an early jump press stays valid before landing.
    pub jump_buffer: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            jump_apex_speed_threshold: 4.0,
            fast_fall_gravity_multiplier: 3.0,
            coyote_time: 0.1,
            jump_buffer: 0.1,
        }
    }
}

impl ControllerTuning {
    /// Both windows include their boundary tick.
    pub fn has_jump_buffer(&self, now: f32, last_jump_pressed_at: Option<f32>) -> bool {
        last_jump_pressed_at.is_some_and(|pressed| now - pressed <= self.jump_buffer)
    }

    pub fn has_coyote_time(&self, now: f32, last_time_grounded: Option<f32>) -> bool {
        last_time_grounded.is_some_and(|grounded| now - grounded <= self.coyote_time)
    }
}

/// Input snapshot for the current tick.
///
/// Axes and the held flag are rewritten every tick. The jump press timestamp
/// survives until a newer press replaces it or a jump consumes it.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct LocomotionInput {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump_held: bool,
    pub last_jump_pressed_at: Option<f32>,
}
