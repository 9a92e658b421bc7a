//! Common types shared across multiple modules.
//!
//! The gizmo, drag, and selection modules all speak in terms of the widget's
//! mode and its named handles, so both enums live here rather than in any one
//! of them.

use bevy::prelude::*;

/// Active manipulation mode of the transform widget. Exactly one is active at
/// a time; it decides which handles are visible and how drag deltas are
/// interpreted.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GizmoMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl GizmoMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            GizmoMode::Translate => "Translate (G)",
            GizmoMode::Rotate => "Rotate (R)",
            GizmoMode::Scale => "Scale (S)",
        }
    }
}

/// Broad category of a handle, used for per-mode visibility.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandleKind {
    /// Axis arrow (translate; reference-only in other modes)
    Axis,
    /// Plane quad (translate)
    Plane,
    /// Center marker (all modes)
    Center,
    /// Rotation ring
    Rotation,
    /// Scale cube (per-axis or uniform)
    Scale,
}

/// Identity of one pickable region of the transform widget.
///
/// Handles are immutable once constructed; only their visibility and tint
/// change at runtime.
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandleTag {
    AxisX,
    AxisY,
    AxisZ,
    PlaneXy,
    PlaneXz,
    PlaneYz,
    Center,
    RotateX,
    RotateY,
    RotateZ,
    ScaleX,
    ScaleY,
    ScaleZ,
    ScaleUniform,
}

impl HandleTag {
    pub const ALL: [HandleTag; 14] = [
        HandleTag::AxisX,
        HandleTag::AxisY,
        HandleTag::AxisZ,
        HandleTag::PlaneXy,
        HandleTag::PlaneXz,
        HandleTag::PlaneYz,
        HandleTag::Center,
        HandleTag::RotateX,
        HandleTag::RotateY,
        HandleTag::RotateZ,
        HandleTag::ScaleX,
        HandleTag::ScaleY,
        HandleTag::ScaleZ,
        HandleTag::ScaleUniform,
    ];

    pub fn kind(&self) -> HandleKind {
        match self {
            HandleTag::AxisX | HandleTag::AxisY | HandleTag::AxisZ => HandleKind::Axis,
            HandleTag::PlaneXy | HandleTag::PlaneXz | HandleTag::PlaneYz => HandleKind::Plane,
            HandleTag::Center => HandleKind::Center,
            HandleTag::RotateX | HandleTag::RotateY | HandleTag::RotateZ => HandleKind::Rotation,
            HandleTag::ScaleX
            | HandleTag::ScaleY
            | HandleTag::ScaleZ
            | HandleTag::ScaleUniform => HandleKind::Scale,
        }
    }

    /// Unit axis this handle operates along / around, if it has one.
    pub fn axis(&self) -> Option<Vec3> {
        match self {
            HandleTag::AxisX | HandleTag::RotateX | HandleTag::ScaleX => Some(Vec3::X),
            HandleTag::AxisY | HandleTag::RotateY | HandleTag::ScaleY => Some(Vec3::Y),
            HandleTag::AxisZ | HandleTag::RotateZ | HandleTag::ScaleZ => Some(Vec3::Z),
            _ => None,
        }
    }

    /// Component mask for translation: which position components this handle
    /// is allowed to change. Zero for handles that do not translate.
    pub fn translation_mask(&self) -> Vec3 {
        match self {
            HandleTag::AxisX => Vec3::X,
            HandleTag::AxisY => Vec3::Y,
            HandleTag::AxisZ => Vec3::Z,
            HandleTag::PlaneXy => Vec3::new(1.0, 1.0, 0.0),
            HandleTag::PlaneXz => Vec3::new(1.0, 0.0, 1.0),
            HandleTag::PlaneYz => Vec3::new(0.0, 1.0, 1.0),
            HandleTag::Center => Vec3::ONE,
            _ => Vec3::ZERO,
        }
    }

    pub fn is_translation(&self) -> bool {
        self.translation_mask() != Vec3::ZERO
    }
}
