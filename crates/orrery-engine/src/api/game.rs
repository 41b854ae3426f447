use serde::Serialize;
use crate::api::types::{EntityId, GameEvent};
use crate::core::playback::PlaybackState;
use crate::core::scene::Scene;
use crate::core::time::StepPolicy;
use crate::error::{EngineError, EngineResult};
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// How display frames map to `Game::update` calls (default: one per frame).
    pub step: StepPolicy,
    /// World width in game units. The host surface is sized to match.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Window / document title.
    pub title: String,
    /// Whether the host may resize the surface.
    pub resizable: bool,
    /// Clear color, RGBA 0.0 - 1.0.
    pub background: [f32; 4],
    /// Maximum number of SDF instances (default: 64).
    pub max_sdf_instances: usize,
    /// Maximum number of vector vertices (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            step: StepPolicy::PerFrame,
            world_width: 800.0,
            world_height: 600.0,
            title: String::from("orrery"),
            resizable: false,
            background: [0.0, 0.0, 0.0, 1.0],
            max_sdf_instances: 64,
            max_vector_vertices: 65536,
            max_events: 32,
        }
    }
}

impl GameConfig {
    /// Reject values the host cannot build a surface or buffers from.
    pub fn validate(&self) -> EngineResult<()> {
        let (width, height) = (self.world_width, self.world_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(EngineError::InvalidWorldSize { width, height });
        }
        if let StepPolicy::Fixed(dt) = self.step {
            if !(dt.is_finite() && dt > 0.0) {
                return Err(EngineError::InvalidTimestep(dt));
            }
        }
        if self.title.trim().is_empty() {
            return Err(EngineError::EmptyTitle);
        }
        Ok(())
    }

    pub fn window(&self) -> WindowDescriptor {
        WindowDescriptor {
            title: self.title.clone(),
            width: self.world_width,
            height: self.world_height,
            resizable: self.resizable,
            background: self.background,
        }
    }
}

/// What the host needs to create its drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowDescriptor {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
    pub background: [f32; 4],
}

impl WindowDescriptor {
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene. Called once.
    fn init(&mut self, ctx: &mut EngineContext);

    /// A button entity was clicked. Delivered every frame, whether or not
    /// playback is running.
    fn on_click(&mut self, _ctx: &mut EngineContext, _button: EntityId) {}

    /// One simulation step. Only dispatched while `ctx.playback` is running.
    fn update(&mut self, ctx: &mut EngineContext);
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    /// Checked by the runner before dispatching `Game::update`.
    pub playback: PlaybackState,
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            playback: PlaybackState::default(),
            #[cfg(feature = "vectors")]
            vectors: VectorState::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
