//! Movement domain: ground detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, KinematicState, MovementTuning};

/// Width trimmed off the probe box so walls beside the body are not hit.
pub const PROBE_SKIN_WIDTH: f32 = 0.02;

/// Box the ground probe sweeps downward, derived from the collider bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBox {
    pub center: Vec2,
    pub size: Vec2,
}

impl ProbeBox {
    pub fn from_bounds(min: Vec2, max: Vec2) -> Self {
        let size = max - min;
        Self {
            center: (min + max) * 0.5,
            size: Vec2::new(size.x - PROBE_SKIN_WIDTH, size.y),
        }
    }

    /// Returns false for inputs a shape cast cannot handle.
    pub fn is_castable(&self, distance: f32) -> bool {
        distance.is_finite()
            && distance >= 0.0
            && self.center.is_finite()
            && self.size.is_finite()
            && self.size.x > 0.0
            && self.size.y > 0.0
    }
}

pub(crate) fn check_grounded(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(
        Entity,
        &Collider,
        &Position,
        &Rotation,
        &LinearVelocity,
        &mut KinematicState,
    )>,
) {
    let now = time.elapsed_secs();

    for (entity, collider, position, rotation, velocity, mut state) in &mut query {
        let aabb = collider.aabb(position.0, *rotation);
        let probe = ProbeBox::from_bounds(aabb.min, aabb.max);

        let ground_hit = if probe.is_castable(tuning.detection_ray_length) {
            // Only ground surfaces count, and never the body itself
            let ground_filter =
                SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]);

            spatial_query
                .cast_shape(
                    &Collider::rectangle(probe.size.x, probe.size.y),
                    probe.center,
                    0.0,
                    Dir2::NEG_Y,
                    &ShapeCastConfig::from_max_distance(tuning.detection_ray_length),
                    &ground_filter,
                )
                .is_some()
        } else {
            warn_once!(
                "Skipping ground probe for {:?}: degenerate probe {:?} with distance {}",
                entity,
                probe,
                tuning.detection_ray_length
            );
            false
        };

        let was_grounded = state.is_grounded();
        if state.update_grounded(ground_hit, velocity.y, now) {
            debug!("Landed: entity={:?}, t={:.3}", entity, now);
        } else if was_grounded && !state.is_grounded() {
            debug!(
                "Left ground: entity={:?}, t={:.3}, has_jumped={}",
                entity,
                now,
                state.has_jumped_since_left_ground()
            );
        }
    }
}

pub(crate) fn check_falling(mut query: Query<(&LinearVelocity, &mut KinematicState)>) {
    for (velocity, mut state) in &mut query {
        state.update_falling(velocity.y);
    }
}
