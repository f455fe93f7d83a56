//! ContentRegistry resource providing HashMap lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded game content.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Characters: {}",
            self.characters.len(),
        )
    }
}
