//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Vertical speed under which a body touching ground counts as resting on it.
pub const GROUNDED_VELOCITY_EPSILON: f32 = 0.02;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Grounding and jump bookkeeping for a body driven by the locomotion systems.
///
/// Velocity and the live gravity scale stay on the avian components
/// (`LinearVelocity`, `GravityScale`); this component only carries what the
/// physics engine does not know about.
///
/// Every grounded tick clears `has_jumped_since_left_ground` and stamps
/// `last_time_grounded` with the current game time.
#[derive(Component, Debug, Default)]
#[require(GravityScale, LinearVelocity)]
pub struct KinematicState {
    grounded: bool,
    falling: bool,
    has_jumped_since_left_ground: bool,
    last_time_grounded: Option<f32>,
    facing: Facing,
    /// `None` until the body's gravity scale has been captured after spawn.
    default_gravity_scale: Option<f32>,
}

impl KinematicState {
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_falling(&self) -> bool {
        self.falling
    }

    pub fn has_jumped_since_left_ground(&self) -> bool {
        self.has_jumped_since_left_ground
    }

    pub fn last_time_grounded(&self) -> Option<f32> {
        self.last_time_grounded
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Gravity scale the body was spawned with. Falls back to 1.0 before capture.
    pub fn default_gravity_scale(&self) -> f32 {
        self.default_gravity_scale.unwrap_or(1.0)
    }

    pub(crate) fn has_captured_gravity_scale(&self) -> bool {
        self.default_gravity_scale.is_some()
    }

    pub(crate) fn capture_default_gravity_scale(&mut self, scale: f32) {
        self.default_gravity_scale = Some(scale);
    }

    /// Refresh the grounded classification from this tick's probe result.
    ///
    /// A probe hit only counts while the body is not moving vertically, so
    /// brushing a wall or ceiling mid-jump never registers as landing.
    /// Returns true when the body landed this tick.
    pub fn update_grounded(&mut self, ground_hit: bool, vertical_velocity: f32, now: f32) -> bool {
        let was_grounded = self.grounded;
        self.grounded = ground_hit && vertical_velocity.abs() < GROUNDED_VELOCITY_EPSILON;

        if self.grounded {
            self.has_jumped_since_left_ground = false;
            self.last_time_grounded = Some(now);
        }

        self.grounded && !was_grounded
    }

    /// Falling is derived fresh every tick from vertical velocity and grounding.
    pub fn update_falling(&mut self, vertical_velocity: f32) {
        self.falling = vertical_velocity <= GROUNDED_VELOCITY_EPSILON && !self.grounded;
    }

    pub(crate) fn mark_jumped(&mut self) {
        self.has_jumped_since_left_ground = true;
    }

    pub(crate) fn flip_facing(&mut self) {
        self.facing = self.facing.flipped();
    }
}
