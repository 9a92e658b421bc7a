//! Behavioral tests for the drag math and the drag state machine.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::{GizmoMode, HandleTag};
use crate::constants::{CLICK_SUPPRESSION_SECS, MIN_SCALE_FACTOR};

use super::apply::{apply_rotation, apply_scale, apply_translation};
use super::{ClickSuppression, DragPhase, DragSession, DragState};

fn start_transform() -> Transform {
    Transform {
        translation: Vec3::new(1.0, 2.0, 3.0),
        rotation: Quat::from_rotation_y(0.3),
        scale: Vec3::new(1.0, 2.0, 0.5),
    }
}

fn session(tag: HandleTag) -> DragSession {
    DragSession {
        tag,
        mode: GizmoMode::Translate,
        start_transform: start_transform(),
        widget_origin: Vec3::new(1.0, 2.0, 3.0),
        plane_normal: Dir3::Z,
        start_point: Vec3::new(2.0, 2.0, 3.0),
        screen_fallback: false,
        fallback_accum: Vec2::ZERO,
    }
}

#[test]
fn test_axis_drag_changes_only_its_component() {
    let start = start_transform();
    // A sloppy diagonal delta; only X may move
    let delta = Vec3::new(0.5, 10.0, 10.0);

    let result = apply_translation(HandleTag::AxisX, &start, delta);
    assert_eq!(result.translation, Vec3::new(1.5, 2.0, 3.0));
    assert_eq!(result.rotation, start.rotation);
    assert_eq!(result.scale, start.scale);
}

#[test]
fn test_plane_drag_changes_two_components() {
    let start = start_transform();
    let delta = Vec3::new(0.5, 7.0, 0.25);

    let result = apply_translation(HandleTag::PlaneXz, &start, delta);
    assert_eq!(result.translation, Vec3::new(1.5, 2.0, 3.25));
}

#[test]
fn test_center_drag_is_unconstrained() {
    let start = start_transform();
    let delta = Vec3::new(0.5, -1.0, 0.25);

    let result = apply_translation(HandleTag::Center, &start, delta);
    assert_eq!(result.translation, start.translation + delta);
}

#[test]
fn test_translation_is_start_relative() {
    let start = start_transform();
    // Replaying the same delta must not accumulate
    let once = apply_translation(HandleTag::AxisY, &start, Vec3::new(0.0, 1.0, 0.0));
    let twice = apply_translation(HandleTag::AxisY, &start, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(once.translation, twice.translation);
}

#[test]
fn test_uniform_scale_floor() {
    let start = start_transform();
    let origin = start.translation;
    let start_point = origin + Vec3::new(2.0, 0.0, 0.0);
    // Pointer nearly on the widget center: raw factor would be ~0.0005
    let near_center = origin + Vec3::new(0.001, 0.0, 0.0);

    let result = apply_scale(
        HandleTag::ScaleUniform,
        &start,
        near_center - start_point,
        start_point,
        near_center,
        origin,
    );
    assert_eq!(result.scale, start.scale * MIN_SCALE_FACTOR);
}

#[test]
fn test_uniform_scale_grows_with_distance() {
    let start = start_transform();
    let origin = start.translation;
    let start_point = origin + Vec3::new(1.0, 0.0, 0.0);
    let further = origin + Vec3::new(3.0, 0.0, 0.0);

    let result = apply_scale(
        HandleTag::ScaleUniform,
        &start,
        further - start_point,
        start_point,
        further,
        origin,
    );
    assert!((result.scale - start.scale * 3.0).length() < 1e-4);
}

#[test]
fn test_axis_scale_touches_one_component_and_respects_floor() {
    let start = start_transform();
    let origin = start.translation;

    // Motion along +Y grows the Y component only
    let grow = apply_scale(
        HandleTag::ScaleY,
        &start,
        Vec3::new(5.0, 0.5, 5.0),
        origin,
        origin,
        origin,
    );
    assert_eq!(grow.scale.x, start.scale.x);
    assert_eq!(grow.scale.z, start.scale.z);
    assert!((grow.scale.y - start.scale.y * 2.0).abs() < 1e-5);

    // Strong motion against the axis bottoms out at the floor
    let shrink = apply_scale(
        HandleTag::ScaleY,
        &start,
        Vec3::new(0.0, -10.0, 0.0),
        origin,
        origin,
        origin,
    );
    assert_eq!(shrink.scale.y, start.scale.y * MIN_SCALE_FACTOR);
}

#[test]
fn test_rotation_sweeps_signed_quarter_turn() {
    let start = Transform::default();
    let origin = Vec3::ZERO;
    let from = Vec3::new(1.0, 0.0, 0.0);
    let to = Vec3::new(0.0, 0.0, -1.0);

    // X to -Z is +90 degrees about Y by the right-hand rule
    let result = apply_rotation(HandleTag::RotateY, &start, from, to, origin);
    let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    assert!(result.rotation.angle_between(expected) < 1e-4);

    let reverse = apply_rotation(HandleTag::RotateY, &start, to, from, origin);
    let expected_reverse = Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2);
    assert!(reverse.rotation.angle_between(expected_reverse) < 1e-4);
}

#[test]
fn test_rotation_is_start_relative() {
    let start = start_transform();
    let origin = start.translation;
    let from = origin + Vec3::new(1.0, 0.0, 0.0);
    let to = origin + Vec3::new(0.0, 0.0, 1.0);

    // Re-applying the same intersection must not spin the target further
    let once = apply_rotation(HandleTag::RotateY, &start, from, to, origin);
    let twice = apply_rotation(HandleTag::RotateY, &start, from, to, origin);
    assert!(once.rotation.angle_between(twice.rotation) < 1e-6);
}

#[test]
fn test_rotation_degenerate_pointer_on_axis() {
    let start = start_transform();
    let origin = start.translation;
    // Both intersections sit on the rotation axis itself
    let on_axis = origin + Vec3::Y;

    let result = apply_rotation(HandleTag::RotateY, &start, on_axis, on_axis, origin);
    assert_eq!(result.rotation, start.rotation);
}

#[test]
fn test_non_rotation_tags_do_not_rotate() {
    let start = start_transform();
    let result = apply_rotation(
        HandleTag::Center,
        &start,
        Vec3::X,
        Vec3::Z,
        Vec3::ZERO,
    );
    assert_eq!(result.rotation, start.rotation);
}

#[test]
fn test_session_dispatches_on_its_own_mode() {
    // The session snapshots the mode at pointer-down; a translate session
    // keeps producing translations for its whole lifetime.
    let s = session(HandleTag::AxisX);
    let moved = s.resolve(s.start_point + Vec3::new(0.7, 5.0, 5.0));
    assert_eq!(moved.translation, Vec3::new(1.7, 2.0, 3.0));
    assert_eq!(moved.rotation, s.start_transform.rotation);
    assert_eq!(moved.scale, s.start_transform.scale);
}

#[test]
fn test_mode_change_mid_session_keeps_applied_motion() {
    // Rotate-mode dispatch of a translation tag returns the pointer-down
    // snapshot; routing moves through the session's snapshotted mode keeps
    // the applied motion even if the widget's live mode changes mid-drag.
    let s = session(HandleTag::AxisX);
    let point = s.start_point + Vec3::new(0.7, 0.0, 0.0);

    let first = s.resolve(point);
    assert_eq!(first.translation, Vec3::new(1.7, 2.0, 3.0));

    let mut switched = s.clone();
    switched.mode = GizmoMode::Rotate;
    let regressed = switched.resolve(point);
    assert_eq!(regressed.translation, s.start_transform.translation);

    let second = s.resolve(point);
    assert_eq!(second.translation, first.translation);
}

#[test]
fn test_suppression_window_timing() {
    let mut suppression = ClickSuppression::default();
    assert!(!suppression.active(), "fresh suppression must not block clicks");

    suppression.arm();
    assert!(suppression.active());

    suppression.tick(Duration::from_secs_f32(CLICK_SUPPRESSION_SECS / 2.0));
    assert!(suppression.active(), "still inside the window");

    suppression.tick(Duration::from_secs_f32(CLICK_SUPPRESSION_SECS));
    assert!(!suppression.active(), "window has elapsed");

    // Re-arming reopens the window
    suppression.arm();
    assert!(suppression.active());
}

#[test]
fn test_disarm_reports_whether_a_drag_was_active() {
    let mut drag = DragState::default();
    assert!(!drag.disarm());

    drag.phase = DragPhase::Armed(session(HandleTag::AxisX));
    assert!(drag.is_armed());
    assert!(drag.disarm());
    assert!(!drag.is_armed());
    assert!(!drag.disarm(), "second disarm is a no-op");
}

#[test]
fn test_abandoned_drag_keeps_partial_transform() {
    // A drag that applied one move and was then abandoned leaves the target
    // exactly where the move put it.
    let start = start_transform();
    let mut drag = DragState::default();
    drag.phase = DragPhase::Armed(session(HandleTag::AxisX));

    let applied = apply_translation(HandleTag::AxisX, &start, Vec3::new(0.7, 0.0, 0.0));

    assert!(drag.disarm());
    assert_eq!(applied.translation, Vec3::new(1.7, 2.0, 3.0));
    assert_eq!(applied.rotation, start.rotation);
}
