//! Static mesh render system.
//!
//! Turns host init descriptors into [`Mesh`] components, folds host actions
//! into [`SystemState`], and renders every tracked view once per frame.
//!
//! # Invariants
//! - `reduce` returns a new state; the state it is given is left untouched.
//! - `views` only grows, in dispatch order.
//! - `draw` before `@Init/Renderer` issues no render calls.

mod error;
mod init;
mod state;
mod system;

pub use error::StaticMeshError;
pub use init::{DEFAULT_COLOR, MeshInit};
pub use meshview_render::Mesh;
pub use state::{SystemState, View};
pub use system::{STATIC_MESH_SYSTEM, StaticMeshRenderer};

pub fn crate_info() -> &'static str {
    "meshview-static-mesh v0.1.0"
}
