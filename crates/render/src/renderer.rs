use crate::{PerspectiveCamera, Scene};
use std::fmt;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, PoisonError};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads a scene through a camera and produces output as a side
/// effect. It never mutates the scene.
pub trait Renderer: fmt::Debug + Send + Sync {
    /// Render one frame of `scene` as seen from `camera`.
    fn render(&self, scene: &Scene, camera: &PerspectiveCamera);
}

/// Shared handle to a renderer, as stored in system state.
pub type RendererHandle = Arc<dyn Renderer>;

/// Debug text renderer.
///
/// Produces a human-readable dump per render call. Useful for CLI output,
/// logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: Mutex<Vec<String>>,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of render calls received so far.
    pub fn frame_count(&self) -> usize {
        self.frames.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Drain the text of every render call since the last drain.
    pub fn take_frames(&self) -> Vec<String> {
        std::mem::take(&mut *self.frames.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn describe(scene: &Scene, camera: &PerspectiveCamera) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Scene (objects={}) ===", scene.len());
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.target.x,
            camera.target.y,
            camera.target.z,
            camera.fov_degrees
        );

        for (id, mesh) in scene.objects() {
            let p = mesh.position;
            let visible = mesh.world_vertices().filter(|v| camera.sees(*v)).count();
            let _ = writeln!(
                out,
                "  [{:.8}] pos=({:.2}, {:.2}, {:.2}) color=#{:06x} vertices={} visible={}",
                &id.0.to_string()[..8],
                p.x,
                p.y,
                p.z,
                mesh.material.color.to_hex(),
                mesh.geometry.vertex_count(),
                visible
            );
        }

        out
    }
}

impl Renderer for DebugTextRenderer {
    fn render(&self, scene: &Scene, camera: &PerspectiveCamera) {
        let text = Self::describe(scene, camera);
        tracing::trace!(objects = scene.len(), "debug frame rendered");
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text);
    }
}
