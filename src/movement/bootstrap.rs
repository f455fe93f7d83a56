//! Movement domain: player bootstrap from character data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{CharacterDef, ContentRegistry};
use crate::controls::{Animator, InputAdapter};
use crate::core::SelectedCharacter;
use crate::movement::{
    CharacterParts, CrouchDisableCollider, DashTrail, GameLayer, MotionController, Player,
};

/// Spawn the selected character. Runs after content loading; falls back to
/// built-in tuning when the registry or the character entry is missing.
pub(crate) fn spawn_player(
    mut commands: Commands,
    selected_character: Res<SelectedCharacter>,
    registry: Option<Res<ContentRegistry>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let char_id = selected_character.id();

    let character = match registry.as_ref().and_then(|reg| reg.characters.get(char_id)) {
        Some(def) => def.clone(),
        None => {
            warn!(
                "Character '{}' not available, using default motion tuning",
                char_id
            );
            CharacterDef::default()
        }
    };

    let controller = match MotionController::new(character.motion.to_config()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Character '{}' has {}; using defaults", character.id, e);
            MotionController::default()
        }
    };

    let adapter = match InputAdapter::new(character.run_speed) {
        Ok(adapter) => adapter,
        Err(e) => {
            error!("Character '{}' has {}; using defaults", character.id, e);
            InputAdapter::default()
        }
    };

    info!(
        "Spawning player: char={}, run_speed={}, jump_force={}, dash_power={}, air_control={}",
        character.id,
        adapter.run_speed(),
        controller.config().jump_force,
        controller.config().dash_power,
        controller.config().air_control
    );

    let player = commands
        .spawn((
            // Identity & Motion
            (
                Player,
                Name::new(character.name.clone()),
                controller,
                adapter,
                Animator::default(),
            ),
            Transform::from_xyz(0.0, 100.0, 0.0),
            Visibility::default(),
            // Physics: feet circle on the root, upper body on a child
            (
                RigidBody::Dynamic,
                Collider::circle(12.0),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Mass(1.0),
                NoAutoMass,
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id();

    let sprite = commands
        .spawn((
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(Vec2::new(24.0, 48.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 12.0, 0.0),
            ChildOf(player),
        ))
        .id();

    let crouch_collider = commands
        .spawn((
            CrouchDisableCollider,
            Collider::rectangle(24.0, 24.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            Transform::from_xyz(0.0, 24.0, 0.0),
            ChildOf(player),
        ))
        .id();

    let trail = commands
        .spawn((
            DashTrail::default(),
            Sprite {
                color: Color::srgba(0.5, 0.8, 1.0, 0.4),
                custom_size: Some(Vec2::new(48.0, 40.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 12.0, -0.1),
            Visibility::Hidden,
            ChildOf(player),
        ))
        .id();

    commands.entity(player).insert(CharacterParts {
        sprite,
        crouch_collider: Some(crouch_collider),
        trail: Some(trail),
    });
}
