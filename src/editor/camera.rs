//! Orbit camera: left-drag orbits, right-drag pans, scroll wheel zooms.
//!
//! The controller is suspended while a widget drag is active so the two
//! gestures never fight over the left button.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::config::EditorConfig;

use super::drag::DraggingChanged;

/// Marker for the single editor camera.
#[derive(Component)]
pub struct EditorCamera;

/// Spherical-coordinate state driving the camera transform.
#[derive(Resource)]
pub struct OrbitController {
    /// False while a widget drag owns the pointer
    pub enabled: bool,
    pub target: Vec3,
    pub distance: f32,
    /// Heading around +Y, radians
    pub yaw: f32,
    /// Elevation above the XZ plane, radians
    pub pitch: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        // Matches an initial eye position of roughly (5, 3, 7) looking at the origin
        Self {
            enabled: true,
            target: Vec3::ZERO,
            distance: 9.1,
            yaw: 0.62,
            pitch: 0.34,
        }
    }
}

impl OrbitController {
    /// Lowest allowed elevation, slightly below the horizon
    const MIN_PITCH: f32 = -std::f32::consts::FRAC_PI_6;
    /// Highest allowed elevation, just short of straight down the pole
    const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

    pub fn set_dragging(&mut self, active: bool) {
        self.enabled = !active;
    }

    pub fn eye_position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance;
        self.target + offset
    }

    fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(Self::MIN_PITCH, Self::MAX_PITCH);
    }
}

pub fn spawn_camera(mut commands: Commands, controller: Res<OrbitController>) {
    commands.spawn((
        EditorCamera,
        Camera3d::default(),
        Transform::from_translation(controller.eye_position())
            .looking_at(controller.target, Vec3::Y),
    ));
}

/// Suspend or resume the controller when a widget drag starts or ends.
pub fn sync_camera_suspension(
    mut events: MessageReader<DraggingChanged>,
    mut controller: ResMut<OrbitController>,
) {
    for event in events.read() {
        controller.set_dragging(event.active);
        debug!("Orbit controller enabled: {}", controller.enabled);
    }
}

pub fn camera_orbit(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: MessageReader<MouseMotion>,
    config: Res<EditorConfig>,
    mut controller: ResMut<OrbitController>,
) {
    if !controller.enabled || !buttons.pressed(MouseButton::Left) {
        motion.clear();
        return;
    }

    let mut delta = Vec2::ZERO;
    for event in motion.read() {
        delta += event.delta;
    }
    if delta == Vec2::ZERO {
        return;
    }

    let sensitivity = config.data.orbit_sensitivity;
    controller.yaw -= delta.x * sensitivity;
    controller.pitch += delta.y * sensitivity;
    controller.clamp_pitch();
}

pub fn camera_pan(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: MessageReader<MouseMotion>,
    config: Res<EditorConfig>,
    mut controller: ResMut<OrbitController>,
    camera_query: Query<&Transform, With<EditorCamera>>,
) {
    if !controller.enabled || !buttons.pressed(MouseButton::Right) {
        return;
    }

    let mut delta = Vec2::ZERO;
    for event in motion.read() {
        delta += event.delta;
    }
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    // Pan in the camera's own plane, scaled so apparent speed is distance
    // independent
    let scale = config.data.pan_sensitivity * controller.distance;
    let right = camera_transform.right();
    let up = camera_transform.up();
    controller.target += right * (-delta.x * scale) + up * (delta.y * scale);
}

pub fn camera_zoom(
    mut wheel: MessageReader<MouseWheel>,
    config: Res<EditorConfig>,
    mut controller: ResMut<OrbitController>,
) {
    if !controller.enabled {
        wheel.clear();
        return;
    }

    let mut scroll = 0.0;
    for event in wheel.read() {
        scroll += event.y;
    }
    if scroll == 0.0 {
        return;
    }

    controller.distance *= 1.0 - scroll * config.data.zoom_sensitivity;
    controller.distance = controller
        .distance
        .clamp(config.data.min_distance, config.data.max_distance);
}

/// Write the controller state back to the camera transform.
pub fn apply_orbit_camera(
    controller: Res<OrbitController>,
    mut camera_query: Query<&mut Transform, With<EditorCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = Transform::from_translation(controller.eye_position())
        .looking_at(controller.target, Vec3::Y);
}
