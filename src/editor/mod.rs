//! Editor interaction: picking, selection, the transform widget, the drag
//! state machine, the orbit camera, and keyboard shortcuts.
//!
//! Update runs in three ordered phases. Manipulation first, with the
//! widget's hit test strictly before the scene pick so a press on a handle
//! never falls through to selection. The camera second, so a drag that
//! started or ended this frame suspends or resumes orbiting in the same
//! frame. Widget upkeep last, once every transform it follows is final for
//! the frame; Bevy's own transform propagation then runs in `PostUpdate`
//! before rendering.

pub mod camera;
pub mod drag;
pub mod gizmo;
pub mod params;
pub mod picking;
pub mod selection;
pub mod shortcuts;

use bevy::prelude::*;

use gizmo::{TargetAttached, TargetDetached};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum EditorSet {
    /// Shortcuts, drag state machine, scene picking
    Manipulate,
    /// Orbit camera response, including drag suspension
    Camera,
    /// Widget follow/scale/visibility upkeep
    Sync,
}

fn log_widget_events(
    mut attached_events: MessageReader<TargetAttached>,
    mut detached_events: MessageReader<TargetDetached>,
) {
    for event in attached_events.read() {
        debug!("Widget attached to {:?}", event.target);
    }
    for _ in detached_events.read() {
        debug!("Widget detached");
    }
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<camera::OrbitController>()
            .init_resource::<drag::DragState>()
            .init_resource::<drag::ClickSuppression>()
            .init_resource::<selection::Selection>()
            .add_message::<drag::DraggingChanged>()
            .add_message::<selection::SelectionChanged>()
            .add_message::<gizmo::GizmoModeChanged>()
            .add_message::<gizmo::TargetAttached>()
            .add_message::<gizmo::TargetDetached>()
            .configure_sets(
                Update,
                (EditorSet::Manipulate, EditorSet::Camera, EditorSet::Sync).chain(),
            )
            .add_systems(
                Startup,
                (camera::spawn_camera, gizmo::handles::setup_widget),
            )
            .add_systems(
                Update,
                (
                    drag::tick_suppression,
                    shortcuts::handle_mode_shortcuts,
                    shortcuts::handle_deletion,
                    drag::begin_drag,
                    selection::pick::handle_scene_pick,
                    drag::update_drag,
                    drag::end_drag,
                    drag::abandon_drag_on_focus_loss,
                )
                    .chain()
                    .in_set(EditorSet::Manipulate),
            )
            .add_systems(
                Update,
                (
                    camera::sync_camera_suspension,
                    camera::camera_orbit,
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                )
                    .chain()
                    .in_set(EditorSet::Camera),
            )
            .add_systems(
                Update,
                (gizmo::sync::sync_widget, log_widget_events).in_set(EditorSet::Sync),
            );
    }
}
