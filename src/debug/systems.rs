//! Debug domain: debug systems for input and runtime tweaks.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{ContentPaths, apply_defaults, load_and_validate};
use crate::debug::state::DebugState;
use crate::movement::{KinematicState, KnockbackEvent, MovementTuning, Player};

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    player_query: Query<(Entity, &KinematicState), With<Player>>,
    mut knockback_events: MessageWriter<KnockbackEvent>,
) {
    // F1: Toggle ground probe rays
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_ground_rays = !debug_state.show_ground_rays;
        info!("[DEBUG] Ground rays: {}", debug_state.show_ground_rays);
    }

    // B: Knock the player up and away from where it faces
    if keyboard.just_pressed(KeyCode::KeyB) {
        for (entity, state) in &player_query {
            let direction = Vec2::new(-state.facing().sign(), 1.0);
            knockback_events.write(KnockbackEvent {
                target: entity,
                direction,
                power: debug_state.knockback_power,
            });
            info!("[DEBUG] Knockback {:?} toward {}", entity, direction);
        }
    }
}

/// F5: re-read the locomotion file and swap in its tuning when it validates
pub(crate) fn reload_locomotion_content(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    paths: Res<ContentPaths>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    match load_and_validate(&paths.locomotion) {
        Ok(defaults) => {
            info!(
                "[DEBUG] Reloaded locomotion tuning from {}",
                paths.locomotion.display()
            );
            apply_defaults(&mut commands, defaults);
        }
        Err(errors) => {
            for error in &errors {
                warn!("[DEBUG] Reload rejected: {}", error);
            }
        }
    }
}

pub(crate) const GROUNDED_RAY_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
pub(crate) const FALLING_RAY_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
pub(crate) const RISING_RAY_COLOR: Color = Color::srgb(0.9, 0.8, 0.2);

/// Ray color for a body: grounded, falling, or rising.
pub(crate) fn ground_ray_color(state: &KinematicState) -> Color {
    if state.is_grounded() {
        GROUNDED_RAY_COLOR
    } else if state.is_falling() {
        FALLING_RAY_COLOR
    } else {
        RISING_RAY_COLOR
    }
}

/// Draw the two downward rays from the collider's bottom corners.
pub(crate) fn draw_ground_rays(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    query: Query<(&Collider, &Position, &Rotation, &KinematicState)>,
) {
    for (collider, position, rotation, state) in &query {
        let aabb = collider.aabb(position.0, *rotation);
        let center = (aabb.min + aabb.max) * 0.5;
        let half_extents = (aabb.max - aabb.min) * 0.5;
        let ray = Vec2::new(0.0, -(half_extents.y + tuning.detection_ray_length));

        let color = ground_ray_color(state);

        gizmos.ray_2d(center + Vec2::new(half_extents.x, 0.0), ray, color);
        gizmos.ray_2d(center - Vec2::new(half_extents.x, 0.0), ray, color);
    }
}
