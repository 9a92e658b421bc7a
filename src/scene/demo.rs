//! Spawns the built-in demo scene: a handful of named city blocks, each made
//! of simple box buildings, plus lighting and a ground plane.
//!
//! The hierarchy is deliberately layered the way imported model files tend to
//! be: named group nodes with several children, with unnamed holder nodes in
//! between, so ancestor resolution has something real to walk.

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::editor::picking::PickShape;
use crate::theme;

use super::Pickable;

/// (block name, block center, building footprints as (offset, size))
const CITY_BLOCKS: [(&str, Vec3, [(Vec3, Vec3); 3]); 3] = [
    (
        "Block_North",
        Vec3::new(-2.5, 0.0, -2.5),
        [
            (Vec3::new(-0.8, 0.0, 0.0), Vec3::new(0.8, 1.6, 0.8)),
            (Vec3::new(0.7, 0.0, -0.5), Vec3::new(0.6, 2.4, 0.6)),
            (Vec3::new(0.5, 0.0, 0.9), Vec3::new(0.9, 1.0, 0.7)),
        ],
    ),
    (
        "Block_East",
        Vec3::new(3.0, 0.0, 0.5),
        [
            (Vec3::new(0.0, 0.0, -0.9), Vec3::new(1.0, 1.2, 0.8)),
            (Vec3::new(-0.2, 0.0, 0.8), Vec3::new(0.7, 2.0, 0.7)),
            (Vec3::new(1.0, 0.0, 0.2), Vec3::new(0.5, 0.8, 0.5)),
        ],
    ),
    (
        "Block_South",
        Vec3::new(-1.0, 0.0, 3.0),
        [
            (Vec3::new(-0.7, 0.0, 0.3), Vec3::new(0.6, 1.4, 0.9)),
            (Vec3::new(0.6, 0.0, -0.4), Vec3::new(0.8, 1.8, 0.6)),
            (Vec3::new(0.8, 0.0, 0.8), Vec3::new(0.6, 1.1, 0.6)),
        ],
    ),
];

pub fn spawn_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_lights(&mut commands);
    spawn_ground(&mut commands, &mut meshes, &mut materials);

    let city = commands
        .spawn((Name::new("DemoCity"), Transform::default(), Visibility::default()))
        .id();

    let mut building_index = 0;
    for (block_name, block_center, footprints) in CITY_BLOCKS {
        let block = commands
            .spawn((
                Name::new(block_name),
                Transform::from_translation(block_center),
                Visibility::default(),
                ChildOf(city),
            ))
            .id();

        for (offset, size) in footprints {
            building_index += 1;

            // Unnamed holder between the block and its mesh, as importers
            // commonly produce.
            let holder = commands
                .spawn((
                    Transform::from_translation(offset),
                    Visibility::default(),
                    ChildOf(block),
                ))
                .id();

            let hue = (building_index as f32 * 47.0) % 360.0;
            let material = materials.add(StandardMaterial {
                base_color: Color::hsl(hue, 0.25, 0.55),
                perceptual_roughness: 0.9,
                ..default()
            });

            commands.spawn((
                Name::new(format!("Building_{building_index}")),
                Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
                MeshMaterial3d(material),
                Transform::from_xyz(0.0, size.y / 2.0, 0.0),
                Pickable,
                PickShape::Obb {
                    center: Vec3::ZERO,
                    half_extents: size / 2.0,
                },
                ChildOf(holder),
            ));
        }
    }

    info!("Demo scene spawned: {} buildings in {} blocks", building_index, CITY_BLOCKS.len());
}

fn spawn_lights(commands: &mut Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 250.0,
        ..default()
    });

    // Key light with shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Fill light from the opposite side, no shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 2_500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-5.0, 6.0, -6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(20.0, 20.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: theme::GROUND_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.001, 0.0),
        NotShadowCaster,
    ));
}
