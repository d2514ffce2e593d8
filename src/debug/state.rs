//! Debug domain: state for locomotion debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the ground probe rays are drawn
    pub show_ground_rays: bool,
    /// Knockback strength used by the test hotkey
    pub knockback_power: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_ground_rays: true,
            knockback_power: 15.0,
        }
    }
}
