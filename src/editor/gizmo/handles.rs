//! Construction of the widget's handle geometry.
//!
//! All handle transforms and pick shapes are expressed in the widget root's
//! space; the root's transform places and scales the whole widget in the
//! world. Handle materials are unlit with a depth bias so the widget reads
//! clearly over scene geometry.

use std::f32::consts::FRAC_PI_2;

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::common::{GizmoMode, HandleTag};
use crate::editor::picking::PickShape;
use crate::theme;

use super::{GizmoWidget, GizmoWidgetRoot};

/// Full reach of an axis arrow from the widget center
pub const AXIS_LENGTH: f32 = 1.5;
const AXIS_WIDTH: f32 = 0.06;
const ARROW_LENGTH: f32 = 0.2;
const PLANE_SIZE: f32 = 0.3;
const PLANE_OFFSET: f32 = 0.3;
const ARC_RADIUS: f32 = 0.8;
const ARC_TUBE: f32 = 0.03;
const SCALE_CUBE: f32 = 0.15;
const UNIFORM_CUBE: f32 = 0.18;
const CENTER_RADIUS: f32 = 0.08;

// Pick proxies are a little fatter than the rendered geometry so thin
// handles stay grabbable.
const AXIS_PICK_RADIUS: f32 = 0.1;
const RING_PICK_THICKNESS: f32 = 0.1;
const SCALE_PICK_RADIUS: f32 = 0.12;
const UNIFORM_PICK_RADIUS: f32 = 0.15;

/// Base color of a handle; the sync system reapplies it with the opacity the
/// current mode calls for.
#[derive(Component)]
pub struct HandleColor(pub Color);

fn handle_material(color: Color, double_sided: bool) -> StandardMaterial {
    let mut material = StandardMaterial {
        base_color: color,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        depth_bias: 500.0,
        ..default()
    };
    if double_sided {
        material.double_sided = true;
        material.cull_mode = None;
    }
    material
}

/// Spawn the widget root with all of its handles and register the
/// [`GizmoWidget`] resource. The widget starts hidden and detached.
pub fn setup_widget(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let root = commands
        .spawn((
            GizmoWidgetRoot,
            Name::new("TransformWidget"),
            Transform::default(),
            Visibility::Hidden,
        ))
        .id();

    let axes = [
        (
            HandleTag::AxisX,
            HandleTag::RotateX,
            HandleTag::ScaleX,
            theme::AXIS_X_COLOR,
            Vec3::X,
            Quat::from_rotation_z(-FRAC_PI_2),
            Quat::from_rotation_z(FRAC_PI_2),
        ),
        (
            HandleTag::AxisY,
            HandleTag::RotateY,
            HandleTag::ScaleY,
            theme::AXIS_Y_COLOR,
            Vec3::Y,
            Quat::IDENTITY,
            Quat::IDENTITY,
        ),
        (
            HandleTag::AxisZ,
            HandleTag::RotateZ,
            HandleTag::ScaleZ,
            theme::AXIS_Z_COLOR,
            Vec3::Z,
            Quat::from_rotation_x(FRAC_PI_2),
            Quat::from_rotation_x(FRAC_PI_2),
        ),
    ];

    let shaft_length = AXIS_LENGTH - ARROW_LENGTH;
    let shaft_mesh = meshes.add(Cylinder::new(AXIS_WIDTH / 2.0, shaft_length));
    let cone_mesh = meshes.add(Cone {
        radius: AXIS_WIDTH,
        height: ARROW_LENGTH,
    });
    let ring_mesh = meshes.add(Torus {
        minor_radius: ARC_TUBE,
        major_radius: ARC_RADIUS,
    });
    let scale_cube_mesh = meshes.add(Cuboid::new(SCALE_CUBE, SCALE_CUBE, SCALE_CUBE));

    for (axis_tag, rotate_tag, scale_tag, color, axis, to_axis, ring_rotation) in axes {
        // Arrow shaft; its capsule proxy covers the tip too
        commands.spawn((
            axis_tag,
            HandleColor(color),
            Mesh3d(shaft_mesh.clone()),
            MeshMaterial3d(materials.add(handle_material(color, false))),
            Transform {
                translation: axis * (shaft_length / 2.0),
                rotation: to_axis,
                ..default()
            },
            PickShape::Capsule {
                start: Vec3::ZERO,
                end: axis * AXIS_LENGTH,
                radius: AXIS_PICK_RADIUS,
            },
            NotShadowCaster,
            ChildOf(root),
        ));

        // Arrow tip
        commands.spawn((
            axis_tag,
            HandleColor(color),
            Mesh3d(cone_mesh.clone()),
            MeshMaterial3d(materials.add(handle_material(color, false))),
            Transform {
                translation: axis * (AXIS_LENGTH - ARROW_LENGTH / 2.0),
                rotation: to_axis,
                ..default()
            },
            NotShadowCaster,
            ChildOf(root),
        ));

        // Rotation ring
        commands.spawn((
            rotate_tag,
            HandleColor(color),
            Mesh3d(ring_mesh.clone()),
            MeshMaterial3d(materials.add(handle_material(color, true))),
            Transform::from_rotation(ring_rotation),
            PickShape::Ring {
                normal: axis,
                radius: ARC_RADIUS,
                thickness: RING_PICK_THICKNESS,
            },
            NotShadowCaster,
            ChildOf(root),
        ));

        // Per-axis scale cube at the arrow's reach
        commands.spawn((
            scale_tag,
            HandleColor(color),
            Mesh3d(scale_cube_mesh.clone()),
            MeshMaterial3d(materials.add(handle_material(color, false))),
            Transform::from_translation(axis * AXIS_LENGTH),
            PickShape::Sphere {
                center: axis * AXIS_LENGTH,
                radius: SCALE_PICK_RADIUS,
            },
            NotShadowCaster,
            ChildOf(root),
        ));
    }

    let planes = [
        (
            HandleTag::PlaneXy,
            theme::PLANE_XY_COLOR,
            Vec3::new(PLANE_OFFSET, PLANE_OFFSET, 0.0),
            Quat::from_rotation_x(FRAC_PI_2),
            Vec3::X,
            Vec3::Y,
        ),
        (
            HandleTag::PlaneXz,
            theme::PLANE_XZ_COLOR,
            Vec3::new(PLANE_OFFSET, 0.0, PLANE_OFFSET),
            Quat::IDENTITY,
            Vec3::X,
            Vec3::Z,
        ),
        (
            HandleTag::PlaneYz,
            theme::PLANE_YZ_COLOR,
            Vec3::new(0.0, PLANE_OFFSET, PLANE_OFFSET),
            Quat::from_rotation_z(-FRAC_PI_2),
            Vec3::Y,
            Vec3::Z,
        ),
    ];

    let plane_mesh = meshes.add(Plane3d::default().mesh().size(PLANE_SIZE, PLANE_SIZE));

    for (tag, color, position, rotation, u, v) in planes {
        commands.spawn((
            tag,
            HandleColor(color),
            Mesh3d(plane_mesh.clone()),
            MeshMaterial3d(materials.add(handle_material(color, true))),
            Transform {
                translation: position,
                rotation,
                ..default()
            },
            PickShape::Quad {
                origin: position,
                u: u * (PLANE_SIZE / 2.0),
                v: v * (PLANE_SIZE / 2.0),
            },
            NotShadowCaster,
            ChildOf(root),
        ));
    }

    // Center marker, draggable in translate mode
    commands.spawn((
        HandleTag::Center,
        HandleColor(theme::CENTER_COLOR),
        Mesh3d(meshes.add(Sphere::new(CENTER_RADIUS))),
        MeshMaterial3d(materials.add(handle_material(theme::CENTER_COLOR, false))),
        Transform::default(),
        PickShape::Sphere {
            center: Vec3::ZERO,
            radius: CENTER_RADIUS,
        },
        NotShadowCaster,
        ChildOf(root),
    ));

    // Uniform scale cube around the center marker. Its fatter pick proxy
    // intersects nearer than the center sphere, so it wins in scale mode.
    commands.spawn((
        HandleTag::ScaleUniform,
        HandleColor(theme::CENTER_COLOR),
        Mesh3d(meshes.add(Cuboid::new(UNIFORM_CUBE, UNIFORM_CUBE, UNIFORM_CUBE))),
        MeshMaterial3d(materials.add(handle_material(theme::CENTER_COLOR, false))),
        Transform::default(),
        PickShape::Sphere {
            center: Vec3::ZERO,
            radius: UNIFORM_PICK_RADIUS,
        },
        NotShadowCaster,
        ChildOf(root),
    ));

    commands.insert_resource(GizmoWidget {
        root,
        target: None,
        mode: GizmoMode::default(),
    });

    debug!("Transform widget spawned");
}
