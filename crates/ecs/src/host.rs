use crate::{Action, EntityPayload, RenderSystem};
use meshview_common::{EntityId, SystemId};
use tracing::{debug, trace};

/// A record of every host-side operation.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// An action was folded into the system state.
    Dispatched { kind: String },
    /// A component was built and announced for an entity.
    Spawned { entity: EntityId },
    /// A frame was drawn.
    Ticked { frame: u64, delta: f32 },
}

/// Errors surfaced by the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("system {system} rejected component init: {source}")]
    Component {
        system: SystemId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Owns one render system and its state, and drives it.
///
/// The state is replaced wholesale with whatever the reducer returns.
pub struct Host<S: RenderSystem> {
    system: S,
    state: S::State,
    frame: u64,
    event_log: Vec<HostEvent>,
}

impl<S: RenderSystem> Host<S> {
    /// Start from the system's initial state at frame 0.
    pub fn new(system: S) -> Self {
        let state = system.initial_state();
        Self {
            system,
            state,
            frame: 0,
            event_log: Vec::new(),
        }
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn state(&self) -> &S::State {
        &self.state
    }

    /// Frames drawn so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[HostEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Fold one action into the system state.
    pub fn dispatch(&mut self, action: Action<S::Component>) {
        debug!(kind = action.kind(), system = %self.system.system_id(), "dispatch");
        self.state = self.system.reduce(&self.state, &action);
        self.event_log.push(HostEvent::Dispatched {
            kind: action.kind().to_owned(),
        });
    }

    /// Build a component from `init` and announce a new entity carrying it.
    pub fn spawn(
        &mut self,
        init: &serde_json::Value,
        systems: Vec<SystemId>,
    ) -> Result<EntityId, HostError> {
        let component = self
            .system
            .make_component(init)
            .map_err(|e| HostError::Component {
                system: self.system.system_id(),
                source: Box::new(e),
            })?;
        let entity = EntityId::new();
        self.dispatch(Action::CreateEntity(EntityPayload::new(
            entity, systems, component,
        )));
        self.event_log.push(HostEvent::Spawned { entity });
        Ok(entity)
    }

    /// Draw one frame.
    pub fn tick(&mut self, delta: f32) {
        self.system.draw(delta, &self.state);
        self.frame += 1;
        trace!(frame = self.frame, delta, "tick");
        self.event_log.push(HostEvent::Ticked {
            frame: self.frame,
            delta,
        });
    }
}
