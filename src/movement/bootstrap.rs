//! Movement domain: player bootstrap from loaded locomotion data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LocomotionDefaults;
use crate::movement::{GameLayer, KinematicState, MovementTuning, Player};

/// Spawn the player body described by the loaded defaults.
pub(crate) fn spawn_player(
    mut commands: Commands,
    defaults: Res<LocomotionDefaults>,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let player = &defaults.player;

    info!(
        "Spawning player: size=({}, {}), spawn=({}, {}), gravity_scale={}, top_speed={} (reached in {:.2}s, stops in {:.2}s)",
        player.width,
        player.height,
        player.spawn_x,
        player.spawn_y,
        player.gravity_scale,
        tuning.top_running_speed,
        tuning.time_to_top_speed(),
        tuning.time_to_stop()
    );

    commands.spawn((
        // Identity & Movement
        (Player, KinematicState::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(player.width, player.height)),
            ..default()
        },
        Transform::from_xyz(player.spawn_x, player.spawn_y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(player.width, player.height),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(player.gravity_scale),
            // Run and brake own horizontal speed, contact friction would fight them
            Friction::new(0.0).with_combine_rule(CoefficientCombine::Min),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
