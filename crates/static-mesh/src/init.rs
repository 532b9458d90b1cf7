use crate::StaticMeshError;
use glam::Vec3;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Material color used when a descriptor carries none.
pub const DEFAULT_COLOR: u32 = 0x7e57c2;

/// A validated component init descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshInit {
    /// Flattened `x, y, z` triples.
    pub vertices: Vec<f32>,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    pub position: Option<Vec3>,
}

#[derive(Deserialize)]
struct PositionInit {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    z: f32,
}

impl MeshInit {
    /// Descriptor with the default color and no position.
    pub fn new(vertices: Vec<f32>) -> Self {
        Self {
            vertices,
            color: DEFAULT_COLOR,
            position: None,
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Validate a host descriptor of the shape
    /// `{ vertices: [number], color?: number, position?: {x, y, z} }`.
    pub fn parse(init: &Value) -> Result<Self, StaticMeshError> {
        let obj = init
            .as_object()
            .ok_or_else(|| StaticMeshError::invalid("init data must be an object"))?;

        let raw = obj
            .get("vertices")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                StaticMeshError::invalid("init data must include an array of vertices")
            })?;
        let vertices = raw
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().map(|f| f as f32).ok_or_else(|| {
                    StaticMeshError::invalid(format!("vertex component {i} is not a number"))
                })
            })
            .collect::<Result<Vec<f32>, _>>()?;
        if vertices.len() % 3 != 0 {
            warn!(
                len = vertices.len(),
                "vertex data is not a whole number of triples; trailing components ignored"
            );
        }

        // Any number counts, zero included. Non-numbers fall back to the default.
        let color = obj
            .get("color")
            .and_then(Value::as_f64)
            .map_or(DEFAULT_COLOR, pack_color);

        let position = match obj.get("position") {
            None | Some(Value::Null) => None,
            Some(p @ Value::Object(_)) => {
                let p = PositionInit::deserialize(p).map_err(|e| {
                    StaticMeshError::invalid(format!("position must hold numeric x, y, z: {e}"))
                })?;
                Some(Vec3::new(p.x, p.y, p.z))
            }
            Some(_) => return Err(StaticMeshError::invalid("position must be an object")),
        };

        Ok(Self {
            vertices,
            color,
            position,
        })
    }
}

/// Floor, wrap to 32 bits and keep the low 24, matching integer hex semantics.
fn pack_color(n: f64) -> u32 {
    (n.floor() as i64 as u32) & 0x00ff_ffff
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invalid(init: Value) -> bool {
        matches!(MeshInit::parse(&init), Err(StaticMeshError::InvalidArgument(_)))
    }

    #[test]
    fn rejects_non_objects() {
        assert!(invalid(Value::Null));
        assert!(invalid(json!(false)));
        assert!(invalid(json!(3)));
        assert!(invalid(json!("mesh")));
        assert!(invalid(json!([0, 0, 0])));
    }

    #[test]
    fn rejects_missing_or_malformed_vertices() {
        assert!(invalid(json!({})));
        assert!(invalid(json!({ "vertices": {} })));
        assert!(invalid(json!({ "vertices": "0,0,0" })));
        assert!(invalid(json!({ "vertices": [0, "1", 2] })));
    }

    #[test]
    fn vertices_only_uses_default_color() {
        let init = MeshInit::parse(&json!({ "vertices": [0, 0, 0, 1, 1, 0] })).unwrap();
        assert_eq!(init.vertices, vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
        assert_eq!(init.color, DEFAULT_COLOR);
        assert_eq!(init.position, None);
    }

    #[test]
    fn zero_color_is_kept() {
        let init = MeshInit::parse(&json!({ "vertices": [0, 0, 0], "color": 0 })).unwrap();
        assert_eq!(init.color, 0);
    }

    #[test]
    fn non_numeric_color_falls_back() {
        let init = MeshInit::parse(&json!({ "vertices": [], "color": "red" })).unwrap();
        assert_eq!(init.color, DEFAULT_COLOR);
    }

    #[test]
    fn color_is_floored_and_masked() {
        assert_eq!(pack_color(255.9), 255);
        assert_eq!(pack_color(-1.0), 0xffffff);
        assert_eq!(pack_color(0x1ff0000 as f64), 0xff0000);
    }

    #[test]
    fn position_parsed_with_defaults() {
        let init =
            MeshInit::parse(&json!({ "vertices": [1, 1, 1], "position": { "x": 2, "z": -1.5 } }))
                .unwrap();
        assert_eq!(init.position, Some(Vec3::new(2.0, 0.0, -1.5)));
    }

    #[test]
    fn malformed_position_rejected() {
        assert!(invalid(json!({ "vertices": [], "position": [1, 2, 3] })));
        assert!(invalid(json!({ "vertices": [], "position": { "x": "left" } })));
    }

    #[test]
    fn null_position_is_absent() {
        let init = MeshInit::parse(&json!({ "vertices": [], "position": null })).unwrap();
        assert_eq!(init.position, None);
    }

    #[test]
    fn partial_triple_accepted() {
        let init = MeshInit::parse(&json!({ "vertices": [1, 2, 3, 4] })).unwrap();
        assert_eq!(init.vertices.len(), 4);
    }
}
