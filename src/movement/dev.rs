//! Movement domain: dev-only test room for trying motion tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

fn spawn_block(commands: &mut Commands, color: Color, size: Vec2, position: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Friction::new(0.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ceiling_color = Color::srgb(0.3, 0.3, 0.4);

    // Floor and side walls
    spawn_block(
        &mut commands,
        ground_color,
        Vec2::new(1200.0, 40.0),
        Vec2::new(0.0, -200.0),
    );
    spawn_block(
        &mut commands,
        ceiling_color,
        Vec2::new(40.0, 500.0),
        Vec2::new(-620.0, 50.0),
    );
    spawn_block(
        &mut commands,
        ceiling_color,
        Vec2::new(40.0, 500.0),
        Vec2::new(620.0, 50.0),
    );

    // Platforms to jump between
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(150.0, 20.0),
        Vec2::new(-250.0, -90.0),
    );
    spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(150.0, 20.0),
        Vec2::new(-60.0, 0.0),
    );

    // Low tunnel: 32 units of clearance, only passable while crouched
    spawn_block(
        &mut commands,
        ceiling_color,
        Vec2::new(240.0, 20.0),
        Vec2::new(360.0, -138.0),
    );
}
