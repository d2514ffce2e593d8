//! Controller domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::controller::LocomotionInput;

/// Digital axis from a pair of opposing key sets, in {-1, 0, 1}.
fn key_axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut axis = 0.0;
    if keyboard.any_pressed(negative) {
        axis -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        axis += 1.0;
    }
    axis
}

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<LocomotionInput>,
) {
    let gamepad = gamepads.iter().next();

    // Keyboard wins when pressed, otherwise the raw stick value is used
    let mut horizontal = key_axis(
        &keyboard,
        [KeyCode::KeyA, KeyCode::ArrowLeft],
        [KeyCode::KeyD, KeyCode::ArrowRight],
    );
    let mut vertical = key_axis(
        &keyboard,
        [KeyCode::KeyS, KeyCode::ArrowDown],
        [KeyCode::KeyW, KeyCode::ArrowUp],
    );
    if let Some(gamepad) = gamepad {
        if horizontal == 0.0 {
            horizontal = gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0);
        }
        if vertical == 0.0 {
            vertical = gamepad.get(GamepadAxis::LeftStickY).unwrap_or(0.0);
        }
    }

    input.horizontal = horizontal.clamp(-1.0, 1.0);
    input.vertical = vertical.clamp(-1.0, 1.0);

    let jump_keys = [KeyCode::Space, KeyCode::KeyK];
    let jump_just_pressed = keyboard.any_just_pressed(jump_keys)
        || gamepad.is_some_and(|g| g.just_pressed(GamepadButton::South));
    input.jump_held = keyboard.any_pressed(jump_keys)
        || gamepad.is_some_and(|g| g.pressed(GamepadButton::South));

    if jump_just_pressed {
        input.last_jump_pressed_at = Some(time.elapsed_secs());
        debug!("Jump pressed: t={:.3}", time.elapsed_secs());
    }
}
