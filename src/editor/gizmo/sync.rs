//! Per-frame widget upkeep: follow the target's world position, hold a
//! constant screen size, apply per-mode handle visibility, and detach
//! cleanly when the target entity disappears.

use bevy::prelude::*;

use crate::common::HandleTag;
use crate::constants::WIDGET_SCALE_DIVISOR;
use crate::editor::camera::OrbitController;
use crate::editor::selection::{highlight, Selection, SelectionChanged};

use super::handles::HandleColor;
use super::visibility::handle_display;
use super::{GizmoWidget, GizmoWidgetRoot, TargetDetached};

/// Target's world position from its freshly-mutated local transform and its
/// parent's (stable) world transform. Transform propagation has not run yet
/// this frame, so the target's own `GlobalTransform` may be a frame behind.
fn target_world_position(
    target: Entity,
    transforms: &Query<&Transform, Without<GizmoWidgetRoot>>,
    parents: &Query<&ChildOf>,
    globals: &Query<&GlobalTransform>,
) -> Option<Vec3> {
    let local = transforms.get(target).ok()?;
    match parents.get(target) {
        Ok(child_of) => {
            let parent_global = globals.get(child_of.parent()).ok()?;
            Some(parent_global.transform_point(local.translation))
        }
        Err(_) => Some(local.translation),
    }
}

pub fn sync_widget(
    mut widget: ResMut<GizmoWidget>,
    mut selection: ResMut<Selection>,
    controller: Res<OrbitController>,
    transforms: Query<&Transform, Without<GizmoWidgetRoot>>,
    parents: Query<&ChildOf>,
    globals: Query<&GlobalTransform>,
    mut root_query: Query<(&mut Transform, &mut Visibility), With<GizmoWidgetRoot>>,
    mut handle_query: Query<
        (&HandleTag, &mut Visibility, &MeshMaterial3d<StandardMaterial>, &HandleColor),
        Without<GizmoWidgetRoot>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut detached_events: MessageWriter<TargetDetached>,
    mut selection_events: MessageWriter<SelectionChanged>,
) {
    let Ok((mut root_transform, mut root_visibility)) = root_query.single_mut() else {
        return;
    };

    let Some(target) = widget.target else {
        *root_visibility = Visibility::Hidden;
        return;
    };

    let Some(world_position) = target_world_position(target, &transforms, &parents, &globals)
    else {
        // Target despawned out from under us (scene reload, external edit)
        warn!("Widget target vanished, detaching");
        widget.detach();
        detached_events.write(TargetDetached);
        if let Some(node) = selection.current.take() {
            highlight::discard(node.snapshot, &mut materials);
            selection_events.write(SelectionChanged { picked: None });
        }
        *root_visibility = Visibility::Hidden;
        return;
    };

    *root_visibility = Visibility::Visible;
    root_transform.translation = world_position;

    let distance = controller.eye_position().distance(world_position);
    root_transform.scale = Vec3::splat(distance / WIDGET_SCALE_DIVISOR);

    for (tag, mut handle_visibility, material_handle, color) in &mut handle_query {
        let display = handle_display(widget.mode, *tag);
        *handle_visibility = if display.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = color.0.with_alpha(display.opacity);
        }
    }
}
