//! Content domain: data-driven locomotion tuning loaded from RON.

mod data;
mod loader;
mod validation;

pub use data::LocomotionDefaults;
pub use loader::load_locomotion_defaults;
pub use validation::validate_defaults;

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::controller::ControllerTuning;
use crate::movement::MovementTuning;

/// Location of the locomotion data file.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub locomotion: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            locomotion: PathBuf::from("assets/data/locomotion.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(PreStartup, load_locomotion_content);
    }
}

/// Load and validate the locomotion file, reporting every problem found.
pub fn load_and_validate(path: &Path) -> Result<LocomotionDefaults, Vec<String>> {
    let defaults = load_locomotion_defaults(path).map_err(|e| vec![e.to_string()])?;

    let errors = validate_defaults(&defaults);
    if errors.is_empty() {
        Ok(defaults)
    } else {
        Err(errors.iter().map(ToString::to_string).collect())
    }
}

/// Insert the tuning resources derived from `defaults`.
pub(crate) fn apply_defaults(commands: &mut Commands, defaults: LocomotionDefaults) {
    commands.insert_resource(MovementTuning::from(&defaults.movement));
    commands.insert_resource(ControllerTuning::from(&defaults.controller));
    commands.insert_resource(defaults);
}

fn load_locomotion_content(mut commands: Commands, paths: Res<ContentPaths>) {
    let defaults = match load_and_validate(&paths.locomotion) {
        Ok(defaults) => {
            info!(
                "Loaded locomotion content from {}: {:?}",
                paths.locomotion.display(),
                defaults
            );
            defaults
        }
        Err(errors) => {
            for error in &errors {
                error!("Locomotion content error: {}", error);
            }
            warn!("Locomotion content unavailable, using built-in defaults");
            LocomotionDefaults::default()
        }
    };

    apply_defaults(&mut commands, defaults);
}
