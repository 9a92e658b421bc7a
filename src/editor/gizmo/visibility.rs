//! Per-mode handle visibility policy.

use crate::common::{GizmoMode, HandleKind, HandleTag};
use crate::constants::REFERENCE_AXIS_OPACITY;

/// Opacity of the translation plane quads
pub const PLANE_OPACITY: f32 = 0.6;

/// How one handle should present itself in a given mode.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HandleDisplay {
    pub visible: bool,
    pub opacity: f32,
    /// Whether the handle participates in ray casting. Reference axes are
    /// visible but not pickable.
    pub pickable: bool,
}

impl HandleDisplay {
    const HIDDEN: Self = Self {
        visible: false,
        opacity: 0.0,
        pickable: false,
    };

    const fn shown(opacity: f32) -> Self {
        Self {
            visible: true,
            opacity,
            pickable: true,
        }
    }

    const fn reference() -> Self {
        Self {
            visible: true,
            opacity: REFERENCE_AXIS_OPACITY,
            pickable: false,
        }
    }
}

/// Resolve how `tag` presents itself while the widget is in `mode`.
///
/// Translate shows arrows, plane quads, and the center marker. Rotate and
/// scale show their own handles plus the center, and keep the axis arrows
/// around as dimmed, unpickable orientation references.
pub fn handle_display(mode: GizmoMode, tag: HandleTag) -> HandleDisplay {
    match (mode, tag.kind()) {
        (GizmoMode::Translate, HandleKind::Axis | HandleKind::Center) => HandleDisplay::shown(1.0),
        (GizmoMode::Translate, HandleKind::Plane) => HandleDisplay::shown(PLANE_OPACITY),

        (GizmoMode::Rotate, HandleKind::Rotation | HandleKind::Center) => HandleDisplay::shown(1.0),
        (GizmoMode::Rotate, HandleKind::Axis) => HandleDisplay::reference(),

        (GizmoMode::Scale, HandleKind::Scale | HandleKind::Center) => HandleDisplay::shown(1.0),
        (GizmoMode::Scale, HandleKind::Axis) => HandleDisplay::reference(),

        _ => HandleDisplay::HIDDEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Handles of other modes must never be visible at the same time.
    #[test]
    fn test_mode_exclusivity() {
        for tag in HandleTag::ALL {
            let kind = tag.kind();
            assert!(
                !handle_display(GizmoMode::Translate, tag).visible
                    || !matches!(kind, HandleKind::Rotation | HandleKind::Scale),
                "{tag:?} leaks into translate mode"
            );
            assert!(
                !handle_display(GizmoMode::Rotate, tag).visible
                    || !matches!(kind, HandleKind::Plane | HandleKind::Scale),
                "{tag:?} leaks into rotate mode"
            );
            assert!(
                !handle_display(GizmoMode::Scale, tag).visible
                    || !matches!(kind, HandleKind::Plane | HandleKind::Rotation),
                "{tag:?} leaks into scale mode"
            );
        }
    }

    #[test]
    fn test_reference_axes_are_dimmed_and_unpickable() {
        for mode in [GizmoMode::Rotate, GizmoMode::Scale] {
            for tag in [HandleTag::AxisX, HandleTag::AxisY, HandleTag::AxisZ] {
                let display = handle_display(mode, tag);
                assert!(display.visible);
                assert!(!display.pickable);
                assert_eq!(display.opacity, REFERENCE_AXIS_OPACITY);
            }
        }
    }

    #[test]
    fn test_center_is_always_visible() {
        for mode in [GizmoMode::Translate, GizmoMode::Rotate, GizmoMode::Scale] {
            assert!(handle_display(mode, HandleTag::Center).visible);
        }
    }

    #[test]
    fn test_translate_planes_are_semi_transparent() {
        let display = handle_display(GizmoMode::Translate, HandleTag::PlaneXz);
        assert!(display.visible);
        assert!(display.pickable);
        assert_eq!(display.opacity, PLANE_OPACITY);
    }

    #[test]
    fn test_hidden_handles_are_not_pickable() {
        for mode in [GizmoMode::Translate, GizmoMode::Rotate, GizmoMode::Scale] {
            for tag in HandleTag::ALL {
                let display = handle_display(mode, tag);
                if !display.visible {
                    assert!(!display.pickable, "{tag:?} hidden but pickable in {mode:?}");
                }
            }
        }
    }
}
