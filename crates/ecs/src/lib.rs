//! Host framework contract for render systems.
//!
//! The host owns every system's state. It creates components through the
//! system, folds actions through the system's reducer, and ticks the system
//! once per frame.
//!
//! # Invariants
//! - State changes only by replacing it with the reducer's return value.
//! - The reducer never sees a state it can mutate in place.
//! - Every dispatch and tick produces a host event.

mod action;
mod host;
mod system;

pub use action::{
    Action, ENTITY_ADD, ENTITY_CREATE, EntityPayload, INIT_RENDERER, VIEW_ADD,
};
pub use host::{Host, HostError, HostEvent};
pub use system::RenderSystem;

pub fn crate_info() -> &'static str {
    "meshview-ecs v0.1.0"
}
