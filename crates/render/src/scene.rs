use crate::Mesh;
use meshview_common::EntityId;
use std::collections::BTreeMap;

/// A set of meshes keyed by the entity that owns them.
///
/// Uses BTreeMap for deterministic draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    objects: BTreeMap<EntityId, Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mesh for `entity`, returning the mesh it replaced.
    pub fn add(&mut self, entity: EntityId, mesh: Mesh) -> Option<Mesh> {
        self.objects.insert(entity, mesh)
    }

    pub fn get(&self, entity: EntityId) -> Option<&Mesh> {
        self.objects.get(&entity)
    }

    pub fn objects(&self) -> &BTreeMap<EntityId, Mesh> {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BufferGeometry, LambertMaterial};

    fn mesh(hex: u32) -> Mesh {
        Mesh::new(BufferGeometry::new(), LambertMaterial::from_hex(hex))
    }

    #[test]
    fn add_to_empty_scene() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        let id = EntityId::new();
        assert!(scene.add(id, mesh(0xff0000)).is_none());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(id), Some(&mesh(0xff0000)));
    }

    #[test]
    fn re_adding_replaces() {
        let mut scene = Scene::new();
        let id = EntityId::new();
        scene.add(id, mesh(0xff0000));
        let old = scene.add(id, mesh(0x00ff00));
        assert_eq!(old, Some(mesh(0xff0000)));
        assert_eq!(scene.get(id), Some(&mesh(0x00ff00)));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn deterministic_iteration_order() {
        let mut scene = Scene::new();
        let mut ids: Vec<EntityId> = (0..20).map(|_| EntityId::new()).collect();
        for id in &ids {
            scene.add(*id, mesh(0));
        }
        ids.sort();
        let keys: Vec<EntityId> = scene.objects().keys().copied().collect();
        assert_eq!(keys, ids);
    }
}
