//! Controller domain: system modules for input and locomotion decisions.

pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use input::read_input;
pub(crate) use locomotion::drive_player;
