pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::game::{Game, GameConfig, EngineContext, WindowDescriptor};
pub use crate::api::types::{EntityId, GameEvent};
pub use crate::bridge::protocol::{FrameHeader, ProtocolLayout};
pub use crate::components::button::ButtonComponent;
pub use crate::components::entity::Entity;
pub use crate::components::layer::RenderLayer;
pub use crate::components::mesh::{MeshComponent, SDFShape, SDFColor};
pub use crate::components::text::{FontSpec, TextComponent};
pub use crate::core::playback::PlaybackState;
pub use crate::core::scene::Scene;
pub use crate::core::time::{FixedTimestep, FrameClock, StepPolicy};
pub use crate::error::{EngineError, EngineResult};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::renderer::sdf_instance::{SDFInstance, SDFBuffer};
pub use crate::systems::text::{TextBuffer, TextRun};

#[cfg(feature = "vectors")]
pub use crate::systems::vector::{VectorState, VectorVertex, VectorColor};
