//! Movement domain: ground sensing, kinematic state, and motion primitives.

mod actions;
mod bootstrap;
mod components;
mod dev;
mod events;
mod resources;
mod systems;

pub use actions::{BRAKE_DEAD_ZONE, MovementActions};
pub use components::{
    Facing, GROUNDED_VELOCITY_EPSILON, GameLayer, Ground, KinematicState, Player, Wall,
};
pub use events::KnockbackEvent;
pub use resources::MovementTuning;
pub use systems::{PROBE_SKIN_WIDTH, ProbeBox};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_knockback, capture_default_gravity, check_falling, check_grounded,
    clamp_vertical_velocity, sync_sprite_facing,
};

/// Per-tick locomotion phases, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// External velocity changes (knockback)
    Impulses,
    /// Ground probe and grounded/falling refresh
    Sense,
    /// Input snapshot
    Input,
    /// Controller decisions through the action API
    Drive,
    /// Terminal velocity and presentation
    Clamp,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<KnockbackEvent>()
            .configure_sets(
                Update,
                (
                    LocomotionSet::Impulses,
                    LocomotionSet::Sense,
                    LocomotionSet::Input,
                    LocomotionSet::Drive,
                    LocomotionSet::Clamp,
                )
                    .chain(),
            )
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, apply_knockback.in_set(LocomotionSet::Impulses))
            .add_systems(
                Update,
                (capture_default_gravity, check_grounded, check_falling)
                    .chain()
                    .in_set(LocomotionSet::Sense),
            )
            .add_systems(
                Update,
                (clamp_vertical_velocity, sync_sprite_facing)
                    .chain()
                    .in_set(LocomotionSet::Clamp),
            );
    }
}
