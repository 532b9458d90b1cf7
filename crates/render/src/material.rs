use meshview_common::Color;
use serde::{Deserialize, Serialize};

/// Diffuse-only material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LambertMaterial {
    pub color: Color,
}

impl LambertMaterial {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self::new(Color::from_hex(hex))
    }
}

impl Default for LambertMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}
