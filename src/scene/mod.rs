//! Scene content: the demo city hierarchy, lighting, ground plane, and the
//! reference grid drawn on the ground.

mod demo;

use bevy::prelude::*;

use crate::theme;

pub use demo::spawn_demo_scene;

/// Marker for scene geometry that participates in click picking.
///
/// Helper geometry (ground plane, lights, the widget itself) never carries
/// this, so it can never be selected.
#[derive(Component)]
pub struct Pickable;

#[derive(Resource)]
pub struct GridSettings {
    pub visible: bool,
    /// World-space size of one grid cell
    pub cell_size: f32,
    /// Number of cells from the origin to each edge
    pub half_extent: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            cell_size: 1.0,
            half_extent: 10,
        }
    }
}

/// Draw the reference grid on the ground plane (XZ, at y = 0).
fn draw_grid(mut gizmos: Gizmos, settings: Res<GridSettings>) {
    if !settings.visible {
        return;
    }

    let extent = settings.half_extent as f32 * settings.cell_size;

    for i in -settings.half_extent..=settings.half_extent {
        let offset = i as f32 * settings.cell_size;
        gizmos.line(
            Vec3::new(offset, 0.0, -extent),
            Vec3::new(offset, 0.0, extent),
            theme::GRID_COLOR,
        );
        gizmos.line(
            Vec3::new(-extent, 0.0, offset),
            Vec3::new(extent, 0.0, offset),
            theme::GRID_COLOR,
        );
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridSettings>()
            .insert_resource(ClearColor(theme::CLEAR_COLOR))
            .add_systems(Startup, spawn_demo_scene)
            .add_systems(Update, draw_grid);
    }
}
