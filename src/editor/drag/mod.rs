//! The drag state machine.
//!
//! A press on a pickable handle arms a drag and snapshots everything the
//! math needs; every pointer move recomputes the target's transform from
//! that snapshot; release (or losing window focus) disarms. While armed the
//! orbit camera is suspended via [`DraggingChanged`], and a short
//! suppression window after release keeps the trailing click-release from
//! being read as a deselecting scene click.

pub mod apply;
pub mod plane;

#[cfg(test)]
mod tests;

use std::time::Duration;

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::common::{GizmoMode, HandleTag};
use crate::constants::{CLICK_SUPPRESSION_SECS, FALLBACK_DRAG_SENSITIVITY};

use super::gizmo::visibility::handle_display;
use super::gizmo::GizmoWidget;
use super::params::CameraParams;
use super::picking::{self, PickShape};

/// Sent when a drag starts (`active: true`) or stops. The orbit camera
/// suspends itself while a drag is active.
#[derive(Message)]
pub struct DraggingChanged {
    pub active: bool,
}

#[derive(Resource, Default)]
pub struct DragState {
    pub phase: DragPhase,
}

#[derive(Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Armed(DragSession),
}

/// Everything captured at pointer-down that the per-frame math consumes.
#[derive(Clone, Debug)]
pub struct DragSession {
    pub tag: HandleTag,
    /// Widget mode at pointer-down. Moves dispatch on this snapshot, so the
    /// session's math stays fixed for its whole lifetime no matter what
    /// happens to the widget's live mode.
    pub mode: GizmoMode,
    /// Target's local transform at pointer-down
    pub start_transform: Transform,
    /// Widget world position at pointer-down; drag-plane origin
    pub widget_origin: Vec3,
    pub plane_normal: Dir3,
    /// First ray/plane intersection; all deltas are relative to it
    pub start_point: Vec3,
    /// True when the initial ray missed the plane; moves then use the
    /// screen-space fallback for the whole drag
    pub screen_fallback: bool,
    /// Raw pointer motion accumulated by the fallback path
    pub fallback_accum: Vec2,
}

impl DragSession {
    /// Target transform for the given plane intersection, routed through the
    /// session's own mode and always computed from the pointer-down snapshot.
    pub fn resolve(&self, point: Vec3) -> Transform {
        let delta = point - self.start_point;
        match self.mode {
            GizmoMode::Translate => {
                apply::apply_translation(self.tag, &self.start_transform, delta)
            }
            GizmoMode::Rotate => apply::apply_rotation(
                self.tag,
                &self.start_transform,
                self.start_point,
                point,
                self.widget_origin,
            ),
            GizmoMode::Scale => apply::apply_scale(
                self.tag,
                &self.start_transform,
                delta,
                self.start_point,
                point,
                self.widget_origin,
            ),
        }
    }
}

impl DragState {
    pub fn is_armed(&self) -> bool {
        matches!(self.phase, DragPhase::Armed(_))
    }

    /// Return to idle. Returns whether a drag was actually armed.
    pub fn disarm(&mut self) -> bool {
        let was_armed = self.is_armed();
        self.phase = DragPhase::Idle;
        was_armed
    }
}

/// Once armed via [`arm`](Self::arm), clicks are suppressed until the window
/// runs out.
#[derive(Resource)]
pub struct ClickSuppression {
    timer: Timer,
}

impl Default for ClickSuppression {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(CLICK_SUPPRESSION_SECS, TimerMode::Once);
        // Born expired; only an ended drag arms it
        timer.tick(Duration::from_secs_f32(CLICK_SUPPRESSION_SECS));
        Self { timer }
    }
}

impl ClickSuppression {
    pub fn arm(&mut self) {
        self.timer.reset();
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    pub fn active(&self) -> bool {
        !self.timer.is_finished()
    }
}

pub fn tick_suppression(time: Res<Time>, mut suppression: ResMut<ClickSuppression>) {
    suppression.tick(time.delta());
}

/// Pointer-down: hit-test the widget's pickable handles and arm a drag on
/// the nearest hit. Runs before the scene pick so a handle press never
/// falls through to selection.
pub fn begin_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    widget: Res<GizmoWidget>,
    handles: Query<(Entity, &HandleTag, &PickShape)>,
    globals: Query<&GlobalTransform>,
    target_transforms: Query<&Transform>,
    mut drag: ResMut<DragState>,
    mut dragging_events: MessageWriter<DraggingChanged>,
) {
    if !buttons.just_pressed(MouseButton::Left) || drag.is_armed() {
        return;
    }
    let Some(target) = widget.target else {
        return;
    };
    let Some(ray) = camera.cursor_ray() else {
        return;
    };
    let Ok(widget_global) = globals.get(widget.root) else {
        return;
    };

    let candidates = handles.iter().filter_map(|(entity, tag, shape)| {
        let display = handle_display(widget.mode, *tag);
        (display.visible && display.pickable).then_some((entity, *widget_global, *shape))
    });
    let hits = picking::cast(ray, candidates);
    let Some(hit) = hits.first() else {
        return;
    };
    let Ok((_, tag, _)) = handles.get(hit.entity) else {
        return;
    };
    let Ok(start_transform) = target_transforms.get(target) else {
        return;
    };

    let widget_origin = widget_global.translation();
    let plane_normal = plane::drag_plane_normal(*tag, ray.direction);

    let mut screen_fallback = false;
    let start_point = match ray.intersect_plane(widget_origin, InfinitePlane3d::new(plane_normal)) {
        Some(t) => ray.get_point(t),
        None => {
            debug!("Drag plane unreachable at pointer-down, using screen-space fallback");
            screen_fallback = true;
            widget_origin
        }
    };

    drag.phase = DragPhase::Armed(DragSession {
        tag: *tag,
        mode: widget.mode,
        start_transform: *start_transform,
        widget_origin,
        plane_normal,
        start_point,
        screen_fallback,
        fallback_accum: Vec2::ZERO,
    });
    dragging_events.write(DraggingChanged { active: true });
    debug!("Drag armed on {:?}", tag);
}

/// Pointer-move: recompute the target's transform from the session snapshot
/// and the current intersection. A frame whose ray misses the plane is
/// skipped; the target keeps its last applied transform.
pub fn update_drag(
    camera: CameraParams,
    widget: Res<GizmoWidget>,
    mut motion: MessageReader<MouseMotion>,
    mut drag: ResMut<DragState>,
    mut transforms: Query<&mut Transform>,
) {
    let DragPhase::Armed(session) = &mut drag.phase else {
        return;
    };
    let Some(target) = widget.target else {
        return;
    };
    let Ok(mut transform) = transforms.get_mut(target) else {
        return;
    };

    if session.screen_fallback {
        for event in motion.read() {
            session.fallback_accum += event.delta;
        }
        // Degraded path: translation only
        if session.mode == GizmoMode::Translate && session.tag.is_translation() {
            let delta = plane::fallback_translation_delta(session.tag, session.fallback_accum)
                * FALLBACK_DRAG_SENSITIVITY;
            *transform = apply::apply_translation(session.tag, &session.start_transform, delta);
        }
        return;
    }
    motion.clear();

    let Some(ray) = camera.cursor_ray() else {
        return;
    };
    let Some(t) =
        ray.intersect_plane(session.widget_origin, InfinitePlane3d::new(session.plane_normal))
    else {
        // A transient miss on a session that started with a valid
        // intersection; the target keeps the last applied transform until
        // the intersection resumes (see DESIGN.md on the fallback policy).
        return;
    };
    *transform = session.resolve(ray.get_point(t));
}

/// Pointer-up: disarm and open the click-suppression window so the release
/// click cannot immediately deselect.
pub fn end_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    mut drag: ResMut<DragState>,
    mut suppression: ResMut<ClickSuppression>,
    mut dragging_events: MessageWriter<DraggingChanged>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    if drag.disarm() {
        suppression.arm();
        dragging_events.write(DraggingChanged { active: false });
        debug!("Drag released");
    }
}

/// Losing window focus mid-drag abandons the drag in place: the target
/// keeps whatever transform the last move applied, selection and attachment
/// stay as they are, and the camera is resumed.
pub fn abandon_drag_on_focus_loss(
    mut focus_events: MessageReader<WindowFocused>,
    mut drag: ResMut<DragState>,
    mut dragging_events: MessageWriter<DraggingChanged>,
) {
    for event in focus_events.read() {
        if !event.focused && drag.disarm() {
            dragging_events.write(DraggingChanged { active: false });
            info!("Window focus lost, drag abandoned");
        }
    }
}
