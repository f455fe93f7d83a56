//! Core domain: shared resources.

use bevy::prelude::*;

/// Character spawned when nothing else was selected.
pub const DEFAULT_CHARACTER_ID: &str = "character_runner";

/// Resource tracking the currently selected character
#[derive(Resource, Debug, Default)]
pub struct SelectedCharacter {
    pub character_id: Option<String>,
}

impl SelectedCharacter {
    /// The selected id, or the default character when none was chosen.
    pub fn id(&self) -> &str {
        self.character_id.as_deref().unwrap_or(DEFAULT_CHARACTER_ID)
    }
}
