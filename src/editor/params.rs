//! Shared system parameters for viewport math.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::camera::EditorCamera;

/// Bundles the primary window and the editor camera for systems that need to
/// turn the cursor position into a world-space ray.
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Ray from the camera through the cursor, or None when the cursor is
    /// outside the window or the camera projection cannot produce one.
    pub fn cursor_ray(&self) -> Option<Ray3d> {
        let window = self.window.single().ok()?;
        let cursor = window.cursor_position()?;
        let (camera, camera_transform) = self.camera.single().ok()?;
        camera.viewport_to_world(camera_transform, cursor).ok()
    }
}
