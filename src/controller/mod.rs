//! Controller domain: input-driven locomotion decisions.

mod locomotion;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::{ControllerTuning, LocomotionInput};

use bevy::prelude::*;

use crate::controller::systems::{drive_player, read_input};
use crate::movement::LocomotionSet;

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .init_resource::<LocomotionInput>()
            .add_systems(Update, read_input.in_set(LocomotionSet::Input))
            .add_systems(Update, drive_player.in_set(LocomotionSet::Drive));
    }
}
