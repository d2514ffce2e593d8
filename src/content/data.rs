//! Data definitions for the locomotion RON file.
//!
//! These structs mirror assets/data/locomotion.ron and are converted into the
//! runtime tuning resources once loaded and validated.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::controller::ControllerTuning;
use crate::movement::MovementTuning;

/// Schema version this build understands.
pub const LOCOMOTION_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Top-level file (locomotion.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocomotionDefaults {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub controller: ControllerDef,
    pub player: PlayerDef,
}

impl Default for LocomotionDefaults {
    fn default() -> Self {
        Self {
            schema_version: LOCOMOTION_SCHEMA_VERSION,
            movement: MovementDef::from(&MovementTuning::default()),
            controller: ControllerDef::from(&ControllerTuning::default()),
            player: PlayerDef::default(),
        }
    }
}

// ============================================================================
// Grounded movement
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovementDef {
    pub acceleration: f32,
    pub top_running_speed: f32,
    pub deceleration: f32,
    pub jump_height: f32,
    pub top_falling_speed: f32,
    pub top_rising_speed: f32,
    pub detection_ray_length: f32,
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            acceleration: def.acceleration,
            top_running_speed: def.top_running_speed,
            deceleration: def.deceleration,
            jump_height: def.jump_height,
            top_falling_speed: def.top_falling_speed,
            top_rising_speed: def.top_rising_speed,
            detection_ray_length: def.detection_ray_length,
        }
    }
}

impl From<&MovementTuning> for MovementDef {
    fn from(tuning: &MovementTuning) -> Self {
        Self {
            acceleration: tuning.acceleration,
            top_running_speed: tuning.top_running_speed,
            deceleration: tuning.deceleration,
            jump_height: tuning.jump_height,
            top_falling_speed: tuning.top_falling_speed,
            top_rising_speed: tuning.top_rising_speed,
            detection_ray_length: tuning.detection_ray_length,
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerDef {
    pub jump_apex_speed_threshold: f32,
    pub fast_fall_gravity_multiplier: f32,
    pub coyote_time: f32,
    pub jump_buffer: f32,
}

impl From<&ControllerDef> for ControllerTuning {
    fn from(def: &ControllerDef) -> Self {
        Self {
            jump_apex_speed_threshold: def.jump_apex_speed_threshold,
            fast_fall_gravity_multiplier: def.fast_fall_gravity_multiplier,
            coyote_time: def.coyote_time,
            jump_buffer: def.jump_buffer,
        }
    }
}

impl From<&ControllerTuning> for ControllerDef {
    fn from(tuning: &ControllerTuning) -> Self {
        Self {
            jump_apex_speed_threshold: tuning.jump_apex_speed_threshold,
            fast_fall_gravity_multiplier: tuning.fast_fall_gravity_multiplier,
            coyote_time: tuning.coyote_time,
            jump_buffer: tuning.jump_buffer,
        }
    }
}

// ============================================================================
// Player body
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerDef {
    pub width: f32,
    pub height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Gravity scale the body spawns with; fast-fall multiplies this value.
    pub gravity_scale: f32,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            width: 0.9,
            height: 1.8,
            spawn_x: 0.0,
            spawn_y: 0.0,
            gravity_scale: 3.0,
        }
    }
}
