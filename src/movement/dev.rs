//! Movement domain: test room used to exercise locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // (size, position) for every ground surface
    let ground_pieces = [
        (Vec2::new(36.0, 1.0), Vec2::new(0.0, -6.0), ground_color),
        (Vec2::new(5.0, 0.5), Vec2::new(-9.0, -2.5), platform_color),
        (Vec2::new(5.0, 0.5), Vec2::new(8.0, 0.0), platform_color),
        (Vec2::new(4.0, 0.5), Vec2::new(0.0, 3.0), platform_color),
    ];

    for (size, position, color) in ground_pieces {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(0.0),
            ground_layers,
        ));
    }

    // Side walls plus a pillar for testing that wall contact never grounds the player
    let walls = [
        (Vec2::new(1.0, 16.0), Vec2::new(-18.5, 1.5)),
        (Vec2::new(1.0, 16.0), Vec2::new(18.5, 1.5)),
        (Vec2::new(1.0, 5.0), Vec2::new(-3.0, -3.0)),
    ];

    for (size, position) in walls {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(0.0),
            wall_layers,
        ));
    }

    info!(
        "Spawned test room: {} ground pieces, {} walls",
        ground_pieces.len(),
        walls.len()
    );
}
