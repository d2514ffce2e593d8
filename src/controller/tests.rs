//! Controller domain: tests for jump forgiveness, running, flipping and fast-fall.

use bevy::prelude::*;

use super::locomotion::{TickOutcome, drive, try_fast_falling};
use super::systems::read_input;
use super::{ControllerTuning, LocomotionInput};
use crate::movement::{Facing, KinematicState, MovementActions, MovementTuning};

const DT: f32 = 1.0 / 60.0;

/// One body plus the sensing a physics world would feed it each tick.
struct Sim {
    state: KinematicState,
    velocity: Vec2,
    gravity_scale: f32,
    movement: MovementTuning,
    controller: ControllerTuning,
    input: LocomotionInput,
}

impl Sim {
    fn new() -> Self {
        let mut state = KinematicState::default();
        state.capture_default_gravity_scale(2.0);
        Self {
            state,
            velocity: Vec2::ZERO,
            gravity_scale: 2.0,
            movement: MovementTuning::default(),
            controller: ControllerTuning::default(),
            input: LocomotionInput::default(),
        }
    }

    /// Sense, drive and clamp, in the same order as the app schedule.
    fn tick(&mut self, now: f32, ground_hit: bool) -> TickOutcome {
        self.state.update_grounded(ground_hit, self.velocity.y, now);
        self.state.update_falling(self.velocity.y);

        let mut actions = MovementActions::new(
            &mut self.state,
            &mut self.velocity,
            &mut self.gravity_scale,
            &self.movement,
            DT,
        );
        let outcome = drive(&mut self.input, &self.controller, &mut actions, now);
        actions.clamp_vertical_velocity();
        outcome
    }

    fn press_jump(&mut self, now: f32) {
        self.input.last_jump_pressed_at = Some(now);
        self.input.jump_held = true;
    }

    /// Stand on ground at `t0`, then walk off a ledge at the next tick.
    fn leave_ledge(&mut self, t0: f32) {
        self.tick(t0, true);
        assert!(self.state.is_grounded());
        self.velocity.y = -1.0;
        self.tick(t0 + DT, false);
        assert!(!self.state.is_grounded());
    }
}

// -----------------------------------------------------------------------------
// Jump gating tests
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_press_jumps() {
    let mut sim = Sim::new();
    sim.tick(1.0, true);

    sim.press_jump(1.05);
    let outcome = sim.tick(1.05, true);

    assert!(outcome.jumped);
    assert_eq!(sim.velocity, Vec2::new(0.0, 12.0));
    assert!(sim.state.has_jumped_since_left_ground());
    assert!(sim.input.last_jump_pressed_at.is_none());
}

#[test]
fn test_no_press_no_jump() {
    let mut sim = Sim::new();
    for i in 0..10 {
        assert!(!sim.tick(i as f32 * DT, true).jumped);
    }
    assert_eq!(sim.velocity.y, 0.0);
}

#[test]
fn test_coyote_time_allows_late_jump() {
    let mut sim = Sim::new();
    sim.leave_ledge(1.0);

    sim.press_jump(1.09);
    assert!(sim.tick(1.09, false).jumped);
    assert_eq!(sim.velocity.y, sim.movement.jump_height);
}

#[test]
fn test_coyote_time_expires() {
    let mut sim = Sim::new();
    sim.leave_ledge(1.0);

    sim.press_jump(1.11);
    assert!(!sim.tick(1.11, false).jumped);
    assert_eq!(sim.velocity.y, -1.0);
}

#[test]
fn test_forgiveness_windows_include_boundary() {
    let tuning = ControllerTuning {
        coyote_time: 0.25,
        jump_buffer: 0.25,
        ..default()
    };

    assert!(tuning.has_coyote_time(0.75, Some(0.5)));
    assert!(tuning.has_jump_buffer(0.75, Some(0.5)));
    assert!(!tuning.has_coyote_time(0.75, None));
    assert!(!tuning.has_jump_buffer(0.75, None));
}

#[test]
fn test_jump_buffer_triggers_on_landing() {
    let mut sim = Sim::new();
    sim.velocity.y = -5.0;
    sim.tick(2.0, false);

    // Pressed in the air, well outside coyote time
    sim.press_jump(2.0);
    assert!(!sim.tick(2.0, false).jumped);

    sim.velocity.y = 0.0;
    assert!(sim.tick(2.09, true).jumped);
    assert_eq!(sim.velocity.y, sim.movement.jump_height);
}

#[test]
fn test_jump_buffer_expires_before_landing() {
    let mut sim = Sim::new();
    sim.velocity.y = -5.0;
    sim.press_jump(2.0);
    assert!(!sim.tick(2.0, false).jumped);

    sim.velocity.y = 0.0;
    assert!(!sim.tick(2.11, true).jumped);
    assert!(sim.state.is_grounded());
    assert_eq!(sim.velocity.y, 0.0);
}

#[test]
fn test_one_jump_per_ground_contact() {
    let mut sim = Sim::new();
    sim.tick(0.0, true);

    sim.press_jump(0.0);
    assert!(sim.tick(0.0, true).jumped);

    // Mashing jump while rising, still inside coyote time, does nothing
    let mut jumps = 0;
    for i in 1..6 {
        let now = i as f32 * DT;
        sim.press_jump(now);
        sim.velocity.y = 8.0;
        if sim.tick(now, false).jumped {
            jumps += 1;
        }
    }
    assert_eq!(jumps, 0);
}

#[test]
fn test_jump_after_landing_again() {
    let mut sim = Sim::new();
    sim.tick(0.0, true);
    sim.press_jump(0.0);
    assert!(sim.tick(0.0, true).jumped);

    sim.velocity.y = -3.0;
    sim.tick(0.5, false);

    // The earlier press was consumed, landing alone does not jump
    sim.velocity.y = 0.0;
    assert!(!sim.tick(0.55, true).jumped);

    sim.press_jump(0.6);
    assert!(sim.tick(0.6, true).jumped);
}

// -----------------------------------------------------------------------------
// Running and flipping tests
// -----------------------------------------------------------------------------

#[test]
fn test_input_selects_run_or_brake() {
    let mut sim = Sim::new();

    sim.input.horizontal = 0.01;
    sim.tick(0.0, true);
    assert!(sim.velocity.x > 0.0);

    sim.input.horizontal = 0.0;
    for i in 1..30 {
        sim.tick(i as f32 * DT, true);
    }
    assert_eq!(sim.velocity.x, 0.0);

    sim.input.horizontal = -1.0;
    sim.tick(1.0, true);
    assert!(sim.velocity.x < 0.0);
}

#[test]
fn test_direction_change_flips_once() {
    let mut sim = Sim::new();
    assert_eq!(sim.state.facing(), Facing::Right);

    sim.input.horizontal = 1.0;
    assert!(!sim.tick(0.0, true).flipped);

    let mut flips = 0;
    for (i, horizontal) in [-1.0, -0.3, -1.0, -0.7].into_iter().enumerate() {
        sim.input.horizontal = horizontal;
        if sim.tick((i + 1) as f32 * DT, true).flipped {
            flips += 1;
        }
    }

    assert_eq!(flips, 1);
    assert_eq!(sim.state.facing(), Facing::Left);
}

#[test]
fn test_no_input_keeps_facing() {
    let mut sim = Sim::new();
    sim.input.horizontal = -1.0;
    sim.tick(0.0, true);
    assert_eq!(sim.state.facing(), Facing::Left);

    sim.input.horizontal = 0.0;
    assert!(!sim.tick(DT, true).flipped);
    assert_eq!(sim.state.facing(), Facing::Left);
}

// -----------------------------------------------------------------------------
// Fast-fall tests
// -----------------------------------------------------------------------------

fn fast_fall_with(vy: f32, grounded: bool, jump_held: bool) -> (bool, f32) {
    let mut sim = Sim::new();
    sim.state.update_grounded(grounded, 0.0, 0.0);
    sim.velocity.y = vy;
    sim.input.jump_held = jump_held;

    let mut actions = MovementActions::new(
        &mut sim.state,
        &mut sim.velocity,
        &mut sim.gravity_scale,
        &sim.movement,
        DT,
    );
    let fast_falling = try_fast_falling(&sim.input, &sim.controller, &mut actions);
    (fast_falling, sim.gravity_scale)
}

#[test]
fn test_rising_with_jump_held_keeps_default_gravity() {
    assert_eq!(fast_fall_with(5.0, false, true), (false, 2.0));
}

#[test]
fn test_early_release_applies_fast_fall() {
    assert_eq!(fast_fall_with(5.0, false, false), (true, 6.0));
}

#[test]
fn test_past_apex_applies_fast_fall_even_when_held() {
    assert_eq!(fast_fall_with(4.0, false, true), (true, 6.0));
    assert_eq!(fast_fall_with(-10.0, false, true), (true, 6.0));
}

#[test]
fn test_grounded_resets_gravity() {
    assert_eq!(fast_fall_with(0.0, true, false), (false, 2.0));
}

#[test]
fn test_full_jump_arc_gravity() {
    let mut sim = Sim::new();
    sim.tick(0.0, true);
    sim.press_jump(0.0);
    let outcome = sim.tick(0.0, true);
    assert!(outcome.jumped);
    assert!(!outcome.fast_falling);
    assert_eq!(sim.gravity_scale, 2.0);

    // Releasing jump mid-rise truncates the arc
    sim.input.jump_held = false;
    sim.velocity.y = 9.0;
    assert!(sim.tick(DT, false).fast_falling);
    assert_eq!(sim.gravity_scale, 6.0);

    sim.velocity.y = 0.0;
    assert!(!sim.tick(2.0 * DT, true).fast_falling);
    assert_eq!(sim.gravity_scale, 2.0);
}

#[test]
fn test_vertical_speed_clamped_after_tick() {
    let mut sim = Sim::new();
    for (i, vy) in [-300.0, 75.0, -48.5, 61.0].into_iter().enumerate() {
        sim.velocity.y = vy;
        sim.tick(i as f32 * DT, false);
        assert!(sim.velocity.y >= sim.movement.top_falling_speed);
        assert!(sim.velocity.y <= sim.movement.top_rising_speed);
    }
}

// -----------------------------------------------------------------------------
// Input snapshot tests
// -----------------------------------------------------------------------------

#[test]
fn test_read_input_builds_snapshot() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<LocomotionInput>()
        .add_systems(Update, read_input);

    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::ArrowLeft);
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::Space);
    }
    app.update();

    let input = app.world().resource::<LocomotionInput>().clone();
    assert_eq!(input.horizontal, -1.0);
    assert_eq!(input.vertical, 1.0);
    assert!(input.jump_held);
    assert!(input.last_jump_pressed_at.is_some());

    // Opposing keys cancel out; the press timestamp survives a held button
    {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::KeyD);
        keyboard.clear_just_pressed(KeyCode::Space);
    }
    app.update();

    let next = app.world().resource::<LocomotionInput>();
    assert_eq!(next.horizontal, 0.0);
    assert!(next.jump_held);
    assert_eq!(next.last_jump_pressed_at, input.last_jump_pressed_at);
}
