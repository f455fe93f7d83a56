//! Validation of loaded content values.

use super::registry::ContentRegistry;
use crate::controls::InputAdapter;
use crate::movement::ConfigError;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub error: ConfigError,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' has {}", self.source_type, self.source_id, self.error)
    }
}

/// Validate every definition in the registry.
/// Returns a list of validation errors, empty if all values are accepted.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, character) in &registry.characters {
        let checks = [
            character.motion.to_config().validate(),
            InputAdapter::new(character.run_speed).map(|_| ()),
        ];

        for error in checks.into_iter().filter_map(Result::err) {
            errors.push(ValidationError {
                source_type: "Character",
                source_id: id.clone(),
                error,
            });
        }
    }

    errors
}
