//! Resolution of a picked mesh to the node the widget should drive.
//!
//! Imported hierarchies bury meshes under anonymous holder nodes; the
//! grouping the author intended is the nearest ancestor that both has a
//! non-empty name and more than one child. Manipulating that node moves the
//! whole logical object instead of one loose mesh.

use bevy::prelude::*;

/// Walk up from `picked` and return the entity the widget should attach to.
///
/// The first ancestor with a non-empty name is remembered; from then on, the
/// first ancestor that also has more than one child wins. If the walk runs
/// off the top of the hierarchy, the topmost ancestor is returned, and a
/// parentless mesh resolves to itself.
pub fn resolve_transformable_ancestor(
    picked: Entity,
    names: &Query<&Name>,
    parents: &Query<&ChildOf>,
    children: &Query<&Children>,
) -> Entity {
    resolve_with(
        picked,
        |entity| parents.get(entity).ok().map(ChildOf::parent),
        |entity| names.get(entity).is_ok_and(|name| !name.is_empty()),
        |entity| children.get(entity).map_or(0, |c| c.len()),
    )
}

/// Query-free core of the walk, parameterized over hierarchy lookups.
fn resolve_with(
    picked: Entity,
    parent_of: impl Fn(Entity) -> Option<Entity>,
    is_named: impl Fn(Entity) -> bool,
    child_count: impl Fn(Entity) -> usize,
) -> Entity {
    let Some(mut ancestor) = parent_of(picked) else {
        return picked;
    };

    let mut seen_named = false;
    loop {
        if is_named(ancestor) {
            seen_named = true;
        }
        if seen_named && child_count(ancestor) > 1 {
            return ancestor;
        }
        match parent_of(ancestor) {
            Some(parent) => ancestor = parent,
            // Topmost ancestor; nothing above it to prefer
            None => return ancestor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Node {
        name: Option<&'static str>,
        parent: Option<Entity>,
        children: usize,
    }

    struct TestTree {
        world: World,
        nodes: HashMap<Entity, Node>,
    }

    impl TestTree {
        fn new() -> Self {
            Self {
                world: World::new(),
                nodes: HashMap::new(),
            }
        }

        fn add(&mut self, name: Option<&'static str>, parent: Option<Entity>) -> Entity {
            let entity = self.world.spawn_empty().id();
            self.nodes.insert(
                entity,
                Node {
                    name,
                    parent,
                    children: 0,
                },
            );
            if let Some(parent) = parent {
                if let Some(node) = self.nodes.get_mut(&parent) {
                    node.children += 1;
                }
            }
            entity
        }

        /// Extra children so a node's child count crosses the threshold
        fn pad_children(&mut self, parent: Entity, count: usize) {
            for _ in 0..count {
                self.add(None, Some(parent));
            }
        }

        fn resolve(&self, picked: Entity) -> Entity {
            resolve_with(
                picked,
                |e| self.nodes[&e].parent,
                |e| self.nodes[&e].name.is_some_and(|n| !n.is_empty()),
                |e| self.nodes[&e].children,
            )
        }
    }

    #[test]
    fn test_named_multi_child_ancestor_wins() {
        // top("") -> group("Group1", 3 children) -> holder("") -> leaf
        let mut tree = TestTree::new();
        let top = tree.add(None, None);
        let group = tree.add(Some("Group1"), Some(top));
        let holder = tree.add(None, Some(group));
        tree.pad_children(group, 2);
        let leaf = tree.add(None, Some(holder));

        assert_eq!(tree.resolve(leaf), group);
    }

    #[test]
    fn test_both_conditions_required() {
        // A named single-child ancestor is passed over; so is an unnamed
        // multi-child one below the first named ancestor.
        let mut tree = TestTree::new();
        let top = tree.add(Some("Top"), None);
        tree.pad_children(top, 1);
        let named_single = tree.add(Some("Wrapper"), Some(top));
        let unnamed_multi = tree.add(None, Some(named_single));
        tree.pad_children(unnamed_multi, 2);
        let leaf = tree.add(None, Some(unnamed_multi));

        // unnamed_multi has 3 children but the named flag was set by
        // Wrapper above... the walk visits unnamed_multi first, where no
        // name has been seen yet, then Wrapper (named, 1 child), then Top
        // (named seen, 2 children).
        assert_eq!(tree.resolve(leaf), top);
    }

    #[test]
    fn test_empty_name_does_not_count() {
        let mut tree = TestTree::new();
        let top = tree.add(None, None);
        let group = tree.add(Some(""), Some(top));
        tree.pad_children(group, 2);
        let leaf = tree.add(None, Some(group));

        // The empty-named group is skipped, the walk tops out
        assert_eq!(tree.resolve(leaf), top);
    }

    #[test]
    fn test_walk_tops_out_at_highest_ancestor() {
        let mut tree = TestTree::new();
        let top = tree.add(None, None);
        let middle = tree.add(None, Some(top));
        let leaf = tree.add(None, Some(middle));

        assert_eq!(tree.resolve(leaf), top);
    }

    #[test]
    fn test_parentless_mesh_resolves_to_itself() {
        let mut tree = TestTree::new();
        let loner = tree.add(Some("Loner"), None);
        assert_eq!(tree.resolve(loner), loner);
    }
}
