//! Selection state: which mesh was picked, which ancestor the widget drives,
//! and the material snapshot needed to undo the highlight.

pub mod ancestor;
pub mod highlight;
pub mod pick;

use bevy::prelude::*;

use highlight::HighlightSnapshot;

/// Sent whenever the selection changes, including deselection.
#[derive(Message)]
pub struct SelectionChanged {
    /// The newly picked mesh, or None on deselection
    pub picked: Option<Entity>,
}

/// The current selection, if any.
#[derive(Resource, Default)]
pub struct Selection {
    pub current: Option<SelectedNode>,
}

pub struct SelectedNode {
    /// The mesh the click actually hit; carries the highlight
    pub picked: Entity,
    /// The transformable ancestor the widget attaches to
    pub target: Entity,
    /// Original materials to restore on deselection
    pub snapshot: HighlightSnapshot,
}

impl Selection {
    pub fn picked(&self) -> Option<Entity> {
        self.current.as_ref().map(|node| node.picked)
    }
}
