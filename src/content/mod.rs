//! Content domain: data-driven character definitions loaded from RON.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CharacterDef, DataFile, MotionDef};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON data files.
const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load and validate content. Invalid content is logged and skipped so the
/// game falls back to built-in defaults.
fn load_content(mut commands: Commands) {
    let registry = match load_all_content(Path::new(DATA_DIR)) {
        Ok(registry) => registry,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Content failed to load, continuing with defaults");
            return;
        }
    };

    let errors = validate_content(&registry);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        warn!("Content failed validation, continuing with defaults");
        return;
    }

    info!("{}", registry.summary());
    commands.insert_resource(registry);
}
