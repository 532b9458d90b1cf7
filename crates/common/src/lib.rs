//! Shared types for the meshview workspace.
//!
//! # Invariants
//! - Identifiers are plain values: cheap to copy or clone, totally ordered.
//! - `Color` is always built from packed RGB through one conversion path.

mod types;

pub use types::{Color, EntityId, SystemId};

pub fn crate_info() -> &'static str {
    "meshview-common v0.1.0"
}
