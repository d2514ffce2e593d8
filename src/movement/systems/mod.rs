//! Movement domain: system modules for sensing and kinematic updates.

pub(crate) mod collisions;
pub(crate) mod kinematics;

pub use collisions::{PROBE_SKIN_WIDTH, ProbeBox};
pub(crate) use collisions::{check_falling, check_grounded};
pub(crate) use kinematics::{
    apply_knockback, capture_default_gravity, clamp_vertical_velocity, sync_sprite_facing,
};
