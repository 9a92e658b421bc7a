//! Keyboard shortcuts: G/R/S switch the widget mode, Delete removes the
//! selected node's whole subtree.

use bevy::prelude::*;

use crate::common::GizmoMode;

use super::drag::{DragState, DraggingChanged};
use super::gizmo::{GizmoModeChanged, GizmoWidget, TargetDetached};
use super::selection::{highlight, Selection, SelectionChanged};

/// Mode keys only act while something is selected; with nothing attached
/// there is no widget to re-mode. An in-progress drag also blocks them: the
/// armed session owns the pointer, and swapping the handle set out from
/// under it would be disorienting.
pub fn handle_mode_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    selection: Res<Selection>,
    drag: Res<DragState>,
    mut widget: ResMut<GizmoWidget>,
    mut mode_events: MessageWriter<GizmoModeChanged>,
) {
    if selection.current.is_none() || drag.is_armed() {
        return;
    }

    let requested = if keys.just_pressed(KeyCode::KeyG) {
        Some(GizmoMode::Translate)
    } else if keys.just_pressed(KeyCode::KeyR) {
        Some(GizmoMode::Rotate)
    } else if keys.just_pressed(KeyCode::KeyS) {
        Some(GizmoMode::Scale)
    } else {
        None
    };

    if let Some(mode) = requested {
        if widget.mode != mode {
            widget.mode = mode;
            mode_events.write(GizmoModeChanged { mode });
            info!("Widget mode: {}", mode.display_name());
        }
    }
}

/// Delete despawns the selected target and everything under it, then clears
/// selection and attachment. Pressing Delete with nothing selected is a
/// no-op.
pub fn handle_deletion(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut widget: ResMut<GizmoWidget>,
    mut selection: ResMut<Selection>,
    mut drag: ResMut<DragState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    names: Query<&Name>,
    mut selection_events: MessageWriter<SelectionChanged>,
    mut detached_events: MessageWriter<TargetDetached>,
    mut dragging_events: MessageWriter<DraggingChanged>,
) {
    if !keys.just_pressed(KeyCode::Delete) {
        return;
    }
    let Some(node) = selection.current.take() else {
        return;
    };

    let name = names
        .get(node.target)
        .map(Name::as_str)
        .unwrap_or("<unnamed>")
        .to_owned();

    // The highlighted meshes die with the subtree; only the temporary
    // assets need cleaning up.
    highlight::discard(node.snapshot, &mut materials);
    commands.entity(node.target).despawn();

    if drag.disarm() {
        dragging_events.write(DraggingChanged { active: false });
    }
    if widget.detach() {
        detached_events.write(TargetDetached);
    }
    selection_events.write(SelectionChanged { picked: None });
    info!("Deleted '{name}'");
}
