//! Controller domain: per-tick locomotion decisions.
//!
//! Decisions run in a fixed order every tick: jump, run, flip, fast-fall.
//! Jump and fast-fall read the grounding refreshed earlier in the same tick;
//! flip reads this tick's horizontal input.

use crate::controller::{ControllerTuning, LocomotionInput};
use crate::movement::MovementActions;

/// What the controller did during one tick, for logging and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub jumped: bool,
    pub flipped: bool,
    pub fast_falling: bool,
}

/// Drive one body for one tick.
pub fn drive(
    input: &mut LocomotionInput,
    tuning: &ControllerTuning,
    actions: &mut MovementActions,
    now: f32,
) -> TickOutcome {
    let jumped = try_jumping(input, tuning, actions, now);
    try_running(input, actions);
    let flipped = try_flipping(input, actions);
    let fast_falling = try_fast_falling(input, tuning, actions);

    TickOutcome {
        jumped,
        flipped,
        fast_falling,
    }
}

/// Jump when a press is buffered, the body is grounded or within coyote time,
/// and it has not jumped since it last touched ground.
pub fn try_jumping(
    input: &mut LocomotionInput,
    tuning: &ControllerTuning,
    actions: &mut MovementActions,
    now: f32,
) -> bool {
    let state = &*actions.state;
    let has_jump_buffer = tuning.has_jump_buffer(now, input.last_jump_pressed_at);
    let has_coyote_time = tuning.has_coyote_time(now, state.last_time_grounded());
    let can_leave_ground = state.is_grounded() || has_coyote_time;

    if !(has_jump_buffer && can_leave_ground && !state.has_jumped_since_left_ground()) {
        return false;
    }

    actions.jump();
    input.last_jump_pressed_at = None;
    true
}

/// Any nonzero horizontal input picks a direction; zero brakes.
pub fn try_running(input: &LocomotionInput, actions: &mut MovementActions) {
    if input.horizontal > 0.0 {
        actions.run_right();
    } else if input.horizontal < 0.0 {
        actions.run_left();
    } else {
        actions.brake();
    }
}

/// Flip once whenever the input points away from the current facing.
pub fn try_flipping(input: &LocomotionInput, actions: &mut MovementActions) -> bool {
    if input.horizontal == 0.0 || input.horizontal.signum() == actions.state.facing().sign() {
        return false;
    }

    actions.flip();
    true
}

/// Heavier gravity past the apex, or while still rising after jump is released.
pub fn try_fast_falling(
    input: &LocomotionInput,
    tuning: &ControllerTuning,
    actions: &mut MovementActions,
) -> bool {
    let vy = actions.velocity.y;
    let airborne = !actions.state.is_grounded();
    let past_apex = vy <= tuning.jump_apex_speed_threshold;
    let ended_jump_early = vy > tuning.jump_apex_speed_threshold && !input.jump_held;

    if airborne && (past_apex || ended_jump_early) {
        actions.set_gravity_multiplier(tuning.fast_fall_gravity_multiplier);
        true
    } else {
        actions.reset_gravity_scale();
        false
    }
}
