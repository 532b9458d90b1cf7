use crate::Action;
use meshview_common::SystemId;

/// The capability contract every render system offers the host.
pub trait RenderSystem {
    /// The drawable produced by [`RenderSystem::make_component`].
    type Component: Clone;
    /// System-local state folded by [`RenderSystem::reduce`].
    type State: Clone;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identifies this system for entity action routing.
    fn system_id(&self) -> SystemId;

    /// Build a component from a host init descriptor.
    fn make_component(&self, init: &serde_json::Value) -> Result<Self::Component, Self::Error>;

    /// State the host starts from before the first action.
    fn initial_state(&self) -> Self::State;

    /// Fold `action` into a new state. Must not mutate `state`.
    fn reduce(&self, state: &Self::State, action: &Action<Self::Component>) -> Self::State;

    /// Issue draw calls for one frame. `delta` is seconds since the previous frame.
    fn draw(&self, delta: f32, state: &Self::State);
}
