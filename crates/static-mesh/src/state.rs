use meshview_common::EntityId;
use meshview_render::{Mesh, PerspectiveCamera, RendererHandle, Scene};
use std::sync::Arc;

/// A scene drawn through a camera each frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
}

impl View {
    pub fn new(scene: Scene, camera: PerspectiveCamera) -> Self {
        Self { scene, camera }
    }
}

/// System-local state of the static mesh renderer.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub renderer: Option<RendererHandle>,
    pub views: Vec<View>,
}

impl SystemState {
    /// No renderer, no views.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Whether `handle` is the stored renderer.
    pub fn uses_renderer(&self, handle: &RendererHandle) -> bool {
        self.renderer
            .as_ref()
            .is_some_and(|r| Arc::ptr_eq(r, handle))
    }

    pub(crate) fn with_renderer(&self, renderer: RendererHandle) -> Self {
        Self {
            renderer: Some(renderer),
            views: self.views.clone(),
        }
    }

    pub(crate) fn with_view(&self, view: View) -> Self {
        let mut views = Vec::with_capacity(self.views.len() + 1);
        views.extend(self.views.iter().cloned());
        views.push(view);
        Self {
            renderer: self.renderer.clone(),
            views,
        }
    }

    /// Copy of this state with `mesh` placed in every view's scene.
    pub(crate) fn with_mesh(&self, entity: EntityId, mesh: &Mesh) -> Self {
        let views = self
            .views
            .iter()
            .map(|view| {
                let mut view = view.clone();
                view.scene.add(entity, mesh.clone());
                view
            })
            .collect();
        Self {
            renderer: self.renderer.clone(),
            views,
        }
    }
}
