//! The click-to-select pass over scene geometry.
//!
//! Runs after the widget's own hit test each frame; a click that armed a
//! drag never reaches the scene, and a click trailing a just-finished drag
//! is swallowed by the suppression window.

use bevy::prelude::*;

use crate::editor::drag::{ClickSuppression, DragState};
use crate::editor::gizmo::{GizmoWidget, TargetAttached, TargetDetached};
use crate::editor::params::CameraParams;
use crate::editor::picking::{self, PickShape};
use crate::scene::Pickable;

use super::{ancestor, highlight, Selection, SelectedNode, SelectionChanged};

pub fn handle_scene_pick(
    buttons: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    drag: Res<DragState>,
    suppression: Res<ClickSuppression>,
    pickables: Query<(Entity, &GlobalTransform, &PickShape), With<Pickable>>,
    names: Query<&Name>,
    parents: Query<&ChildOf>,
    children: Query<&Children>,
    mut material_query: Query<&mut MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut widget: ResMut<GizmoWidget>,
    mut selection: ResMut<Selection>,
    mut selection_events: MessageWriter<SelectionChanged>,
    mut attached_events: MessageWriter<TargetAttached>,
    mut detached_events: MessageWriter<TargetDetached>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if drag.is_armed() {
        // The widget consumed this press
        return;
    }
    if suppression.active() {
        debug!("Ignoring click inside the post-drag suppression window");
        return;
    }
    let Some(ray) = camera.cursor_ray() else {
        return;
    };

    let hits = picking::cast(
        ray,
        pickables
            .iter()
            .map(|(entity, transform, shape)| (entity, *transform, *shape)),
    );

    let Some(hit) = hits.first() else {
        // Empty click deselects
        if let Some(node) = selection.current.take() {
            highlight::restore(node.snapshot, &mut material_query, &mut materials);
            if widget.detach() {
                detached_events.write(TargetDetached);
            }
            selection_events.write(SelectionChanged { picked: None });
            info!("Selection cleared");
        }
        return;
    };

    if selection.picked() == Some(hit.entity) {
        return;
    }

    // Swap selection: undo the old highlight first
    if let Some(node) = selection.current.take() {
        highlight::restore(node.snapshot, &mut material_query, &mut materials);
        if widget.detach() {
            detached_events.write(TargetDetached);
        }
    }

    let target = ancestor::resolve_transformable_ancestor(hit.entity, &names, &parents, &children);
    let snapshot = highlight::apply(hit.entity, &children, &mut material_query, &mut materials);

    if widget.attach(Some(target)) {
        attached_events.write(TargetAttached { target });
    }
    selection.current = Some(SelectedNode {
        picked: hit.entity,
        target,
        snapshot,
    });
    selection_events.write(SelectionChanged {
        picked: Some(hit.entity),
    });

    let picked_name = names.get(hit.entity).map(Name::as_str).unwrap_or("<unnamed>");
    let target_name = names.get(target).map(Name::as_str).unwrap_or("<unnamed>");
    info!("Selected '{picked_name}', controlling '{target_name}'");
}
