//! Pure drag math: from the session's starting transform and the current
//! plane intersection to a new local transform. Every function is
//! start-relative, so replaying the same pointer position always yields the
//! same transform and precision cannot drift over a long drag.

use bevy::prelude::*;

use crate::common::HandleTag;
use crate::constants::MIN_SCALE_FACTOR;

/// Translate along the handle's allowed components. The plane-intersection
/// delta is masked so an axis handle moves on exactly one component, a plane
/// handle on two, and the center handle on all three.
pub fn apply_translation(tag: HandleTag, start: &Transform, delta: Vec3) -> Transform {
    let mut result = *start;
    result.translation = start.translation + delta * tag.translation_mask();
    result
}

/// Scale relative to the starting scale.
///
/// The uniform handle compares the pointer's current distance from the
/// widget center against its starting distance. Per-axis handles grow with
/// motion along their axis and shrink against it. Factors are floored at
/// [`MIN_SCALE_FACTOR`] so a drag can never collapse or invert the target.
pub fn apply_scale(
    tag: HandleTag,
    start: &Transform,
    delta: Vec3,
    start_point: Vec3,
    current_point: Vec3,
    widget_origin: Vec3,
) -> Transform {
    let mut result = *start;
    match tag {
        HandleTag::ScaleUniform => {
            let start_distance = start_point.distance(widget_origin);
            if start_distance <= f32::EPSILON {
                return result;
            }
            let factor =
                (current_point.distance(widget_origin) / start_distance).max(MIN_SCALE_FACTOR);
            result.scale = start.scale * factor;
        }
        HandleTag::ScaleX | HandleTag::ScaleY | HandleTag::ScaleZ => {
            let Some(axis) = tag.axis() else {
                return result;
            };
            let along = delta.dot(axis);
            let factor = (1.0 + 2.0 * along).max(MIN_SCALE_FACTOR);
            match tag {
                HandleTag::ScaleX => result.scale.x = start.scale.x * factor,
                HandleTag::ScaleY => result.scale.y = start.scale.y * factor,
                _ => result.scale.z = start.scale.z * factor,
            }
        }
        _ => {}
    }
    result
}

/// Rotate about the ring's world axis by the angle swept between the drag's
/// starting intersection and the current one, both projected onto the
/// rotation plane. Composed with the starting rotation, never accumulated.
pub fn apply_rotation(
    tag: HandleTag,
    start: &Transform,
    start_point: Vec3,
    current_point: Vec3,
    widget_origin: Vec3,
) -> Transform {
    let (HandleTag::RotateX | HandleTag::RotateY | HandleTag::RotateZ) = tag else {
        return *start;
    };
    let Some(axis) = tag.axis() else {
        return *start;
    };

    let project = |point: Vec3| {
        let v = point - widget_origin;
        (v - axis * v.dot(axis)).normalize_or_zero()
    };
    let from = project(start_point);
    let to = project(current_point);
    if from == Vec3::ZERO || to == Vec3::ZERO {
        // Degenerate: the pointer is on the rotation axis
        return *start;
    }

    let mut angle = from.dot(to).clamp(-1.0, 1.0).acos();
    if from.cross(to).dot(axis) < 0.0 {
        angle = -angle;
    }

    let mut result = *start;
    result.rotation = start.rotation * Quat::from_axis_angle(axis, angle);
    result
}
