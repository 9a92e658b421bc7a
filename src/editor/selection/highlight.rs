//! Selection highlight: the picked mesh (and any mesh descendants) swaps to
//! an emissive clone of its material, and the originals are snapshotted so
//! deselection restores them exactly.

use bevy::prelude::*;

use crate::theme;

/// Original material handles captured when a highlight was applied, plus the
/// temporary highlight assets to drop on restore.
#[derive(Default)]
pub struct HighlightSnapshot {
    originals: Vec<(Entity, Handle<StandardMaterial>)>,
    highlights: Vec<Handle<StandardMaterial>>,
}

/// Collect `root` and every descendant that renders a material.
fn collect_mesh_entities(
    root: Entity,
    children: &Query<&Children>,
    material_query: &Query<&mut MeshMaterial3d<StandardMaterial>>,
) -> Vec<Entity> {
    let mut found = Vec::new();
    let mut pending = vec![root];
    while let Some(entity) = pending.pop() {
        if material_query.contains(entity) {
            found.push(entity);
        }
        if let Ok(child_list) = children.get(entity) {
            pending.extend(child_list.iter());
        }
    }
    found
}

/// Swap every mesh under `root` to an emissive clone of its material and
/// return the snapshot needed to undo it.
pub fn apply(
    root: Entity,
    children: &Query<&Children>,
    material_query: &mut Query<&mut MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
) -> HighlightSnapshot {
    let mut snapshot = HighlightSnapshot::default();

    for entity in collect_mesh_entities(root, children, material_query) {
        let Ok(mut material_ref) = material_query.get_mut(entity) else {
            continue;
        };
        let Some(original) = materials.get(&material_ref.0) else {
            continue;
        };

        let mut highlighted = original.clone();
        highlighted.emissive = theme::HIGHLIGHT_EMISSIVE;
        let highlight_handle = materials.add(highlighted);

        snapshot
            .originals
            .push((entity, material_ref.0.clone()));
        snapshot.highlights.push(highlight_handle.clone());
        material_ref.0 = highlight_handle;
    }

    snapshot
}

/// Put the original materials back and drop the highlight assets. Entities
/// that disappeared in the meantime are skipped.
pub fn restore(
    snapshot: HighlightSnapshot,
    material_query: &mut Query<&mut MeshMaterial3d<StandardMaterial>>,
    materials: &mut Assets<StandardMaterial>,
) {
    for (entity, original) in snapshot.originals {
        if let Ok(mut material_ref) = material_query.get_mut(entity) {
            material_ref.0 = original;
        }
    }
    for handle in snapshot.highlights {
        materials.remove(&handle);
    }
}

/// Drop the highlight assets without touching entities, for when the whole
/// selected subtree has already been despawned.
pub fn discard(snapshot: HighlightSnapshot, materials: &mut Assets<StandardMaterial>) {
    for handle in snapshot.highlights {
        materials.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;

    fn setup() -> (World, Entity, Handle<StandardMaterial>) {
        let mut world = World::new();
        let mut materials = Assets::<StandardMaterial>::default();
        let original = materials.add(StandardMaterial {
            base_color: Color::srgb(0.4, 0.5, 0.6),
            ..default()
        });
        world.insert_resource(materials);
        let mesh = world.spawn(MeshMaterial3d(original.clone())).id();
        (world, mesh, original)
    }

    #[test]
    fn test_apply_then_restore_roundtrips_materials() {
        let (mut world, mesh, original) = setup();

        let mut state: SystemState<(
            Query<&Children>,
            Query<&mut MeshMaterial3d<StandardMaterial>>,
            ResMut<Assets<StandardMaterial>>,
        )> = SystemState::new(&mut world);
        let (children, mut material_query, mut materials) = state.get_mut(&mut world);

        let snapshot = apply(mesh, &children, &mut material_query, &mut materials);

        let swapped = material_query.get(mesh).unwrap().0.clone();
        assert_ne!(swapped, original, "highlight must swap to a new material");
        assert!(
            materials.get(&swapped).unwrap().emissive == theme::HIGHLIGHT_EMISSIVE,
            "highlight material must glow"
        );

        restore(snapshot, &mut material_query, &mut materials);
        assert_eq!(material_query.get(mesh).unwrap().0, original);
        assert!(
            materials.get(&swapped).is_none(),
            "highlight asset must be dropped on restore"
        );
    }

    #[test]
    fn test_apply_covers_mesh_descendants() {
        let (mut world, mesh, _) = setup();
        let child_material = world
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let child = world
            .spawn((MeshMaterial3d(child_material.clone()), ChildOf(mesh)))
            .id();

        let mut state: SystemState<(
            Query<&Children>,
            Query<&mut MeshMaterial3d<StandardMaterial>>,
            ResMut<Assets<StandardMaterial>>,
        )> = SystemState::new(&mut world);
        let (children, mut material_query, mut materials) = state.get_mut(&mut world);

        let snapshot = apply(mesh, &children, &mut material_query, &mut materials);
        assert_ne!(material_query.get(child).unwrap().0, child_material);

        restore(snapshot, &mut material_query, &mut materials);
        assert_eq!(material_query.get(child).unwrap().0, child_material);
    }
}
