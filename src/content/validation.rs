//! Validation for loaded locomotion defaults.

use super::data::{LOCOMOTION_SCHEMA_VERSION, LocomotionDefaults};
use crate::movement::PROBE_SKIN_WIDTH;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a numeric condition
macro_rules! check {
    ($errors:expr, $cond:expr, $section:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate every tuning value.
/// Returns a list of validation errors, empty if the defaults are usable.
pub fn validate_defaults(defaults: &LocomotionDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        defaults.schema_version == LOCOMOTION_SCHEMA_VERSION,
        "locomotion",
        "schema_version",
        "expected {}, found {}",
        LOCOMOTION_SCHEMA_VERSION,
        defaults.schema_version
    );

    // Movement
    let m = &defaults.movement;
    check!(
        errors,
        m.acceleration > 0.0,
        "movement",
        "acceleration",
        "must be positive, found {}",
        m.acceleration
    );
    check!(
        errors,
        m.deceleration > 0.0,
        "movement",
        "deceleration",
        "must be positive, found {}",
        m.deceleration
    );
    check!(
        errors,
        m.top_running_speed > 0.0,
        "movement",
        "top_running_speed",
        "must be positive, found {}",
        m.top_running_speed
    );
    check!(
        errors,
        m.top_falling_speed <= 0.0,
        "movement",
        "top_falling_speed",
        "must not be positive, found {}",
        m.top_falling_speed
    );
    check!(
        errors,
        m.top_rising_speed >= 0.0,
        "movement",
        "top_rising_speed",
        "must not be negative, found {}",
        m.top_rising_speed
    );
    check!(
        errors,
        m.jump_height > 0.0 && m.jump_height <= m.top_rising_speed,
        "movement",
        "jump_height",
        "must be in (0, top_rising_speed = {}], found {}",
        m.top_rising_speed,
        m.jump_height
    );
    check!(
        errors,
        m.detection_ray_length.is_finite() && m.detection_ray_length >= 0.0,
        "movement",
        "detection_ray_length",
        "must be finite and not negative, found {}",
        m.detection_ray_length
    );

    // Controller
    let c = &defaults.controller;
    check!(
        errors,
        c.coyote_time >= 0.0,
        "controller",
        "coyote_time",
        "must not be negative, found {}",
        c.coyote_time
    );
    check!(
        errors,
        c.jump_buffer >= 0.0,
        "controller",
        "jump_buffer",
        "must not be negative, found {}",
        c.jump_buffer
    );
    check!(
        errors,
        c.fast_fall_gravity_multiplier >= 1.0,
        "controller",
        "fast_fall_gravity_multiplier",
        "must be at least 1, found {}",
        c.fast_fall_gravity_multiplier
    );
    check!(
        errors,
        c.jump_apex_speed_threshold.is_finite(),
        "controller",
        "jump_apex_speed_threshold",
        "must be finite, found {}",
        c.jump_apex_speed_threshold
    );

    // Player
    let p = &defaults.player;
    check!(
        errors,
        p.width > PROBE_SKIN_WIDTH && p.height > 0.0,
        "player",
        "width/height",
        "width must exceed the probe skin {} and height be positive, found {}x{}",
        PROBE_SKIN_WIDTH,
        p.width,
        p.height
    );
    check!(
        errors,
        p.gravity_scale.is_finite(),
        "player",
        "gravity_scale",
        "must be finite, found {}",
        p.gravity_scale
    );

    errors
}
