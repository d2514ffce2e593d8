//! Debug tooling for tuning locomotion by feel.
//!
//! Features:
//! - Ground probe rays from the collider's bottom corners (F1 toggles),
//!   green when grounded, red when falling, yellow when rising
//! - Hot reload of assets/data/locomotion.ron (F5)
//! - Knockback test impulse away from the facing direction (B)

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_ground_rays, handle_debug_hotkeys, reload_locomotion_content};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, reload_locomotion_content))
            .add_systems(
                Update,
                draw_ground_rays.run_if(|state: Res<DebugState>| state.show_ground_rays),
            );
    }
}
