//! The transform widget ("gumball"): a world-anchored gizmo with named
//! handles for translating, rotating, and scaling the current target.

pub mod handles;
pub mod sync;
pub mod visibility;

use bevy::prelude::*;

use crate::common::GizmoMode;

/// Marker for the widget's root entity. Handles are its children.
#[derive(Component)]
pub struct GizmoWidgetRoot;

/// Sent when the widget attaches to a new target.
#[derive(Message)]
pub struct TargetAttached {
    pub target: Entity,
}

/// Sent when the widget detaches from its target.
#[derive(Message)]
pub struct TargetDetached;

/// Sent when the active manipulation mode changes.
#[derive(Message)]
pub struct GizmoModeChanged {
    pub mode: GizmoMode,
}

/// Widget state. The root entity is spawned once at startup and never
/// despawned; attachment only swaps the target and toggles visibility.
#[derive(Resource)]
pub struct GizmoWidget {
    pub root: Entity,
    pub target: Option<Entity>,
    pub mode: GizmoMode,
}

impl GizmoWidget {
    /// Attach to a target. Passing None is rejected with a warning; use
    /// [`detach`](Self::detach) to clear the target.
    pub fn attach(&mut self, target: Option<Entity>) -> bool {
        let Some(target) = target else {
            warn!("Refusing to attach widget to a missing target");
            return false;
        };
        self.target = Some(target);
        true
    }

    /// Detach from the current target. Idempotent; returns whether a target
    /// was attached.
    pub fn detach(&mut self) -> bool {
        self.target.take().is_some()
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }
}
