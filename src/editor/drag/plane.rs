//! Drag-plane selection and the screen-space fallback mapping.

use bevy::prelude::*;

use crate::common::HandleTag;

/// Normal of the infinite plane a drag is projected onto.
///
/// Single-axis translation uses a fixed world plane that contains the axis:
/// X drags on the XY plane, Y on the YZ plane, Z on the ZX plane. Everything
/// else drags on a camera-facing plane so pointer motion maps directly.
pub fn drag_plane_normal(tag: HandleTag, view_dir: Dir3) -> Dir3 {
    match tag {
        HandleTag::AxisX => Dir3::Z,
        HandleTag::AxisY => Dir3::X,
        HandleTag::AxisZ => Dir3::Y,
        _ => -view_dir,
    }
}

/// Map accumulated raw pointer motion (pixels, +y down) onto a world-space
/// translation direction for the degraded no-intersection path. Only
/// translation handles have a mapping; everything else returns zero.
pub fn fallback_translation_delta(tag: HandleTag, pointer: Vec2) -> Vec3 {
    match tag {
        HandleTag::AxisX => Vec3::new(pointer.x, 0.0, 0.0),
        HandleTag::AxisY => Vec3::new(0.0, -pointer.y, 0.0),
        HandleTag::AxisZ => Vec3::new(0.0, 0.0, pointer.x + pointer.y),
        HandleTag::Center | HandleTag::PlaneXy => Vec3::new(pointer.x, -pointer.y, 0.0),
        HandleTag::PlaneXz => Vec3::new(pointer.x, 0.0, pointer.y),
        HandleTag::PlaneYz => Vec3::new(0.0, -pointer.x, pointer.y),
        _ => Vec3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_translation_planes_contain_their_axis() {
        let view = Dir3::NEG_Z;
        for (tag, axis) in [
            (HandleTag::AxisX, Vec3::X),
            (HandleTag::AxisY, Vec3::Y),
            (HandleTag::AxisZ, Vec3::Z),
        ] {
            let normal = drag_plane_normal(tag, view);
            assert!(
                normal.dot(axis).abs() < 1e-6,
                "{tag:?} plane must contain its axis"
            );
        }
    }

    #[test]
    fn test_other_handles_face_the_camera() {
        let view = Dir3::new(Vec3::new(1.0, -2.0, 3.0)).unwrap();
        for tag in [
            HandleTag::PlaneXz,
            HandleTag::Center,
            HandleTag::RotateY,
            HandleTag::ScaleUniform,
        ] {
            assert_eq!(drag_plane_normal(tag, view), -view);
        }
    }

    #[test]
    fn test_fallback_is_translation_only() {
        let pointer = Vec2::new(3.0, 4.0);
        for tag in HandleTag::ALL {
            let delta = fallback_translation_delta(tag, pointer);
            if tag.is_translation() {
                assert_ne!(delta, Vec3::ZERO, "{tag:?} should map pointer motion");
            } else {
                assert_eq!(delta, Vec3::ZERO, "{tag:?} must not translate");
            }
        }
    }

    #[test]
    fn test_fallback_respects_axis_masks() {
        let pointer = Vec2::new(3.0, 4.0);
        for tag in [HandleTag::AxisX, HandleTag::AxisY, HandleTag::AxisZ] {
            let delta = fallback_translation_delta(tag, pointer);
            let masked = delta * tag.translation_mask();
            assert_eq!(delta, masked, "{tag:?} fallback leaks off its axis");
        }
    }
}
