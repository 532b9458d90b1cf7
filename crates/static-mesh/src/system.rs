use crate::{MeshInit, StaticMeshError, SystemState, View};
use glam::Vec3;
use meshview_common::{Color, SystemId};
use meshview_ecs::{Action, RenderSystem};
use meshview_render::{BufferGeometry, LambertMaterial, Mesh};
use tracing::{debug, trace};

/// Default identifier of the static mesh system.
pub const STATIC_MESH_SYSTEM: &str = "static-mesh";

/// Render system for static meshes.
///
/// Builds meshes from init descriptors, tracks views and the renderer in
/// [`SystemState`], and renders every view once per frame.
#[derive(Debug, Clone)]
pub struct StaticMeshRenderer {
    id: SystemId,
}

impl Default for StaticMeshRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticMeshRenderer {
    pub fn new() -> Self {
        Self::with_id(SystemId::new(STATIC_MESH_SYSTEM))
    }

    /// A renderer registered under a custom system id.
    pub fn with_id(id: SystemId) -> Self {
        Self { id }
    }

    /// Validate a host descriptor and build its mesh.
    pub fn make_component(&self, init: &serde_json::Value) -> Result<Mesh, StaticMeshError> {
        MeshInit::parse(init).map(|init| self.build(init))
    }

    /// Build a mesh from an already validated descriptor.
    pub fn build(&self, init: MeshInit) -> Mesh {
        let geometry = BufferGeometry::from_positions(init.vertices);
        let material = LambertMaterial::new(Color::from_hex(init.color));
        Mesh::new(geometry, material).with_position(init.position.unwrap_or(Vec3::ZERO))
    }

    /// Move a mesh to `position`.
    pub fn update_position(&self, component: Mesh, position: Vec3) -> Mesh {
        component.with_position(position)
    }

    pub fn reduce(&self, state: &SystemState, action: &Action<Mesh>) -> SystemState {
        match action {
            Action::InitRenderer { renderer } => {
                debug!("renderer attached");
                state.with_renderer(renderer.clone())
            }
            Action::AddView { scene, camera } => {
                let view = View::new(scene.clone(), camera.unwrap_or_default());
                debug!(views = state.views.len() + 1, "view added");
                state.with_view(view)
            }
            Action::CreateEntity(payload) | Action::AddEntity(payload) => {
                if !payload.targets(&self.id) {
                    return state.clone();
                }
                debug!(
                    kind = action.kind(),
                    entity = %payload.entity.0,
                    views = state.views.len(),
                    "mesh attached to views"
                );
                state.with_mesh(payload.entity, &payload.component)
            }
            Action::Other { .. } => state.clone(),
        }
    }

    /// Render every view in order. Skipped entirely until a renderer is set.
    pub fn draw(&self, delta: f32, state: &SystemState) {
        let Some(renderer) = &state.renderer else {
            return;
        };
        for (i, view) in state.views.iter().enumerate() {
            trace!(view = i, delta, "render");
            renderer.render(&view.scene, &view.camera);
        }
    }
}

impl RenderSystem for StaticMeshRenderer {
    type Component = Mesh;
    type State = SystemState;
    type Error = StaticMeshError;

    fn system_id(&self) -> SystemId {
        self.id.clone()
    }

    fn make_component(&self, init: &serde_json::Value) -> Result<Mesh, StaticMeshError> {
        StaticMeshRenderer::make_component(self, init)
    }

    fn initial_state(&self) -> SystemState {
        SystemState::initial()
    }

    fn reduce(&self, state: &SystemState, action: &Action<Mesh>) -> SystemState {
        StaticMeshRenderer::reduce(self, state, action)
    }

    fn draw(&self, delta: f32, state: &SystemState) {
        StaticMeshRenderer::draw(self, delta, state)
    }
}
