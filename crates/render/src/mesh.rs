use crate::{BufferGeometry, LambertMaterial};
use glam::Vec3;
use std::sync::Arc;

/// A drawable: shared geometry, a material and a world position.
///
/// Geometry sits behind an `Arc` so adding one mesh to many scenes does not
/// copy vertex data.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: Arc<BufferGeometry>,
    pub material: LambertMaterial,
    pub position: Vec3,
}

impl Mesh {
    pub fn new(geometry: BufferGeometry, material: LambertMaterial) -> Self {
        Self {
            geometry: Arc::new(geometry),
            material,
            position: Vec3::ZERO,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Vertex positions offset by the mesh position.
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.geometry.vertices().map(move |v| v + self.position)
    }
}
