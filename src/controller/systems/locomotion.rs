//! Controller domain: system driving player bodies from the input snapshot.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::locomotion::drive;
use crate::controller::{ControllerTuning, LocomotionInput};
use crate::movement::{KinematicState, MovementActions, MovementTuning, Player};

pub(crate) fn drive_player(
    time: Res<Time>,
    movement_tuning: Res<MovementTuning>,
    controller_tuning: Res<ControllerTuning>,
    mut input: ResMut<LocomotionInput>,
    mut query: Query<
        (
            Entity,
            &mut KinematicState,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (entity, mut state, mut velocity, mut gravity_scale) in &mut query {
        let mut actions = MovementActions::new(
            &mut state,
            &mut velocity.0,
            &mut gravity_scale.0,
            &movement_tuning,
            dt,
        );
        let outcome = drive(&mut input, &controller_tuning, &mut actions, now);

        if outcome.jumped {
            debug!("Jump: entity={:?}, t={:.3}", entity, now);
        }
        if outcome.flipped {
            debug!("Flip: entity={:?}, facing={:?}", entity, state.facing());
        }
    }
}
