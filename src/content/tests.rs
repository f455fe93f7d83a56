use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::Vec2;

use super::loader::parse_data_file;
use super::*;
use crate::movement::GameLayer;

const RUNNER_RON: &str = r#"
(
    schema_version: 1,
    items: [
        (
            id: "character_test",
            name: "Test",
            run_speed: 900.0,
            motion: (
                jump_force: 500.0,
                crouch_speed: 0.5,
                movement_smoothing: 0.1,
                air_control: true,
                dash_power: 800.0,
                dash_time: 0.25,
                dash_cooldown: 0.75,
                grounded_radius: 4.0,
                ceiling_radius: 5.0,
                ground_check_offset: (2.0, -10.0),
                ceiling_check_offset: (0.0, 30.0),
                ground_layers: [Ground, Default],
            ),
        ),
    ],
)
"#;

fn registry_with(character: CharacterDef) -> ContentRegistry {
    let mut registry = ContentRegistry::default();
    registry
        .characters
        .insert(character.id.clone(), character);
    registry
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_character_file() {
    let items: Vec<CharacterDef> = parse_data_file(RUNNER_RON, "inline.ron").unwrap();
    assert_eq!(items.len(), 1);

    let character = &items[0];
    assert_eq!(character.id, "character_test");
    assert_eq!(character.run_speed, 900.0);
    assert!(character.motion.air_control);
    assert_eq!(
        character.motion.ground_layers,
        vec![GameLayer::Ground, GameLayer::Default]
    );
}

#[test]
fn parse_error_names_the_file() {
    let err = parse_data_file::<CharacterDef>("(schema_version: 1)", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn shipped_characters_load_and_validate() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let registry = match load_all_content(&base) {
        Ok(registry) => registry,
        Err(errors) => panic!("content failed to load: {:?}", errors),
    };

    assert!(registry.characters.contains_key(crate::core::DEFAULT_CHARACTER_ID));
    assert!(validate_content(&registry).is_empty());
}

#[test]
fn missing_directory_reports_io_error() {
    let errors = match load_all_content(Path::new("does/not/exist")) {
        Ok(_) => panic!("expected load failure"),
        Err(errors) => errors,
    };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.starts_with("IO error"));
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

#[test]
fn motion_def_converts_to_config() {
    let items: Vec<CharacterDef> = parse_data_file(RUNNER_RON, "inline.ron").unwrap();
    let config = items[0].motion.to_config();

    assert_eq!(config.dash_time, 0.25);
    assert_eq!(config.ground_check_offset, Vec2::new(2.0, -10.0));
    assert_eq!(config.ceiling_check_offset, Vec2::new(0.0, 30.0));
    assert_eq!(
        config.ground_layers,
        LayerMask(GameLayer::Ground.to_bits() | GameLayer::Default.to_bits())
    );
}

#[test]
fn default_motion_def_matches_default_config() {
    let config = MotionDef::default().to_config();
    let expected = crate::movement::MotionConfig::default();

    assert_eq!(config.jump_force, expected.jump_force);
    assert_eq!(config.dash_power, expected.dash_power);
    assert_eq!(config.ground_check_offset, expected.ground_check_offset);
    assert_eq!(config.ground_layers, expected.ground_layers);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn default_character_is_valid() {
    let registry = registry_with(CharacterDef::default());
    assert!(validate_content(&registry).is_empty());
}

#[test]
fn rejects_negative_run_speed() {
    let registry = registry_with(CharacterDef {
        run_speed: -1.0,
        ..CharacterDef::default()
    });

    let errors = validate_content(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error.field, "run_speed");
    assert_eq!(errors[0].source_id, crate::core::DEFAULT_CHARACTER_ID);
}

#[test]
fn reports_motion_and_run_speed_errors_together() {
    let mut character = CharacterDef {
        run_speed: -5.0,
        ..CharacterDef::default()
    };
    character.motion.crouch_speed = 1.5;

    let errors = validate_content(&registry_with(character));
    let fields: Vec<_> = errors.iter().map(|e| e.error.field).collect();
    assert_eq!(fields, vec!["crouch_speed", "run_speed"]);
}

#[test]
fn rejects_unrepresentable_dash_time() {
    let mut character = CharacterDef::default();
    character.motion.dash_time = 1e20;

    let errors = validate_content(&registry_with(character));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error.field, "dash_time");
}

#[test]
fn default_character_uses_default_id() {
    assert_eq!(CharacterDef::default().id, crate::core::DEFAULT_CHARACTER_ID);
}

#[test]
fn rejects_empty_ground_layers() {
    let mut character = CharacterDef::default();
    character.motion.ground_layers.clear();

    let errors = validate_content(&registry_with(character));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error.field, "ground_layers");
}
