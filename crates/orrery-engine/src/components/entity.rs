use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::button::ButtonComponent;
use crate::components::layer::RenderLayer;
use crate::components::mesh::MeshComponent;
use crate::components::text::TextComponent;

/// Fat Entity: a single struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are skipped by every system.
    pub active: bool,
    /// Position in world space.
    pub pos: Vec2,
    pub layer: RenderLayer,
    /// SDF circle (optional).
    pub mesh: Option<MeshComponent>,
    /// Text run (optional).
    pub text: Option<TextComponent>,
    /// Click target (optional).
    pub button: Option<ButtonComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            layer: RenderLayer::default(),
            mesh: None,
            text: None,
            button: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_text(mut self, text: TextComponent) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_button(mut self, button: ButtonComponent) -> Self {
        self.button = Some(button);
        self
    }
}
