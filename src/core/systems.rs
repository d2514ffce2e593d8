//! Core domain: camera setup.

use bevy::prelude::*;

/// On-screen pixels per world unit.
pub const PIXELS_PER_UNIT: f32 = 32.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
