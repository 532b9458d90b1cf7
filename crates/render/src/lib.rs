//! Rendering Adapter: renderer-agnostic scene primitives.
//!
//! # Invariants
//! - Renderers read scenes and cameras; they never mutate them.
//! - Scene contents are keyed by entity id, so iteration order is stable.
//!
//! The `Renderer` trait is the seam a GPU backend plugs into. The bundled
//! `DebugTextRenderer` produces a text dump of each frame for CLI output and
//! tests.

mod camera;
mod geometry;
mod material;
mod mesh;
mod renderer;
mod scene;

pub use camera::PerspectiveCamera;
pub use geometry::{BufferAttribute, BufferGeometry};
pub use material::LambertMaterial;
pub use mesh::Mesh;
pub use renderer::{DebugTextRenderer, Renderer, RendererHandle};
pub use scene::Scene;

pub fn crate_info() -> &'static str {
    "meshview-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
