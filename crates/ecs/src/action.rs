use meshview_common::{EntityId, SystemId};
use meshview_render::{PerspectiveCamera, RendererHandle, Scene};

pub const INIT_RENDERER: &str = "@Init/Renderer";
pub const VIEW_ADD: &str = "View/Add";
pub const ENTITY_CREATE: &str = "Entity/Create";
pub const ENTITY_ADD: &str = "Entity/Add";

/// Entity data routed to the systems it names.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPayload<C> {
    pub entity: EntityId,
    pub systems: Vec<SystemId>,
    pub component: C,
}

impl<C> EntityPayload<C> {
    pub fn new(entity: EntityId, systems: Vec<SystemId>, component: C) -> Self {
        Self {
            entity,
            systems,
            component,
        }
    }

    /// Whether this payload is addressed to `system`.
    pub fn targets(&self, system: &SystemId) -> bool {
        self.systems.contains(system)
    }
}

/// An action dispatched by the host into a system's reducer.
///
/// Each variant corresponds to one wire `type` string, see [`Action::kind`].
#[derive(Debug, Clone)]
pub enum Action<C> {
    /// Hand the system its renderer.
    InitRenderer { renderer: RendererHandle },
    /// Register a scene to draw each frame. A missing camera means the default one.
    AddView {
        scene: Scene,
        camera: Option<PerspectiveCamera>,
    },
    /// A new entity was created.
    CreateEntity(EntityPayload<C>),
    /// Components were added to an existing entity.
    AddEntity(EntityPayload<C>),
    /// Any action type this contract does not name.
    Other { kind: String },
}

impl<C> Action<C> {
    /// The wire `type` string of this action.
    pub fn kind(&self) -> &str {
        match self {
            Self::InitRenderer { .. } => INIT_RENDERER,
            Self::AddView { .. } => VIEW_ADD,
            Self::CreateEntity(_) => ENTITY_CREATE,
            Self::AddEntity(_) => ENTITY_ADD,
            Self::Other { kind } => kind,
        }
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }

    /// Entity payload, for either of the entity action types.
    pub fn entity_payload(&self) -> Option<&EntityPayload<C>> {
        match self {
            Self::CreateEntity(payload) | Self::AddEntity(payload) => Some(payload),
            _ => None,
        }
    }
}
