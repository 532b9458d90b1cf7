use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A flat typed array interpreted in groups of `item_size` components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferAttribute {
    array: Vec<f32>,
    item_size: usize,
}

impl BufferAttribute {
    /// `item_size` must be non-zero.
    pub fn new(array: Vec<f32>, item_size: usize) -> Self {
        assert!(item_size > 0, "item_size must be non-zero");
        Self { array, item_size }
    }

    pub fn array(&self) -> &[f32] {
        &self.array
    }

    /// Number of complete items. A trailing partial item is not counted.
    pub fn count(&self) -> usize {
        self.array.len() / self.item_size
    }
}

/// Vertex geometry. Only the position attribute is modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BufferGeometry {
    position: Option<BufferAttribute>,
}

impl BufferGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a geometry from flattened `x, y, z` triples.
    pub fn from_positions(flat: Vec<f32>) -> Self {
        let mut geometry = Self::new();
        geometry.set_position(BufferAttribute::new(flat, 3));
        geometry
    }

    pub fn set_position(&mut self, attribute: BufferAttribute) {
        self.position = Some(attribute);
    }

    pub fn position(&self) -> Option<&BufferAttribute> {
        self.position.as_ref()
    }

    pub fn vertex_count(&self) -> usize {
        self.position.as_ref().map_or(0, BufferAttribute::count)
    }

    /// Position of vertex `index`, if the attribute holds at least three components for it.
    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        let attr = self.position.as_ref()?;
        if attr.item_size < 3 || index >= attr.count() {
            return None;
        }
        let start = index * attr.item_size;
        let a = &attr.array[start..start + 3];
        Some(Vec3::new(a[0], a[1], a[2]))
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.vertex_count()).filter_map(|i| self.vertex(i))
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for empty geometry.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        self.vertices().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_grouped_in_triples() {
        let g = BufferGeometry::from_positions(vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.vertex(1), Some(Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(g.vertex(2), None);
    }

    #[test]
    fn partial_triple_not_counted() {
        let g = BufferGeometry::from_positions(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.position().unwrap().array().len(), 4);
    }

    #[test]
    fn empty_geometry_has_no_bounds() {
        assert!(BufferGeometry::new().bounding_box().is_none());
        assert_eq!(BufferGeometry::new().vertex_count(), 0);
    }

    #[test]
    fn bounding_box_spans_vertices() {
        let g = BufferGeometry::from_positions(vec![-1.0, 0.0, 2.0, 3.0, -4.0, 0.5]);
        let (min, max) = g.bounding_box().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -4.0, 0.5));
        assert_eq!(max, Vec3::new(3.0, 0.0, 2.0));
    }
}
