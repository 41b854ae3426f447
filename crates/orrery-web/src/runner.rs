use orrery_engine::{
    EngineContext, EngineError, EngineResult, FrameClock, FrameHeader, Game, GameConfig,
    InputEvent, InputQueue, ProtocolLayout, SDFBuffer, TextBuffer,
};
use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::systems::{sdf_render, ui};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`crate::export_game!`]), because
/// wasm-bindgen cannot export generic structs directly.
///
/// The runner is the frame dispatcher: every display frame it delivers
/// button clicks, then dispatches `Game::update` only while
/// `ctx.playback` is running.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    sdf_buffer: SDFBuffer,
    text_buffer: TextBuffer,
    header: [f32; HEADER_FLOATS],
    window_json: String,
    frame: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let clock = FrameClock::new(config.step);
        let layout = ProtocolLayout::from_config(&config);
        let sdf_buffer = SDFBuffer::with_capacity(config.max_sdf_instances);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            clock,
            layout,
            config,
            sdf_buffer,
            text_buffer: TextBuffer::new(),
            header: [0.0; HEADER_FLOATS],
            window_json: String::new(),
            frame: 0,
            initialized: false,
        }
    }

    /// Validate the configuration and build the scene. Call once after
    /// construction; any error here is fatal for the host.
    pub fn init(&mut self) -> EngineResult<()> {
        self.config = self.game.config();
        self.config.validate()?;
        self.clock = FrameClock::new(self.config.step);
        self.layout = ProtocolLayout::from_config(&self.config);
        self.sdf_buffer = SDFBuffer::with_capacity(self.config.max_sdf_instances);
        self.window_json = self.config.window().to_json()?;

        self.game.init(&mut self.ctx);

        let meshes = sdf_render::count_meshes(&self.ctx.scene);
        if meshes > self.layout.max_sdf_instances {
            return Err(EngineError::CapacityExceeded {
                section: "sdf",
                required: meshes,
                capacity: self.layout.max_sdf_instances,
            });
        }
        #[cfg(feature = "vectors")]
        {
            let vertices = self.ctx.vectors.vertex_count();
            if vertices > self.layout.max_vector_vertices {
                return Err(EngineError::CapacityExceeded {
                    section: "vector",
                    required: vertices,
                    capacity: self.layout.max_vector_vertices,
                });
            }
        }

        self.initialized = true;
        self.build_frame_output();
        log::debug!(
            "runner: initialized {} entities, {} total floats",
            self.ctx.scene.len(),
            self.layout.buffer_total_floats
        );
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        for button in ui::collect_clicks(&mut self.ctx.scene, &self.input) {
            self.game.on_click(&mut self.ctx, button);
        }
        self.input.clear();

        if self.ctx.playback.is_running() {
            let steps = self.clock.steps(dt);
            for _ in 0..steps {
                self.game.update(&mut self.ctx);
            }
        } else {
            self.clock.reset();
        }

        self.frame = self.frame.wrapping_add(1);
        self.build_frame_output();
    }

    fn build_frame_output(&mut self) {
        let dropped = sdf_render::build_sdf_buffer(&self.ctx.scene, &mut self.sdf_buffer);
        if dropped > 0 {
            log::warn!("runner: {dropped} SDF instances over capacity were not drawn");
        }

        if let Err(err) = self.text_buffer.rebuild(&self.ctx.scene) {
            log::error!("runner: text encoding failed: {err}");
        }

        if self.ctx.events.len() > self.layout.max_events {
            log::warn!(
                "runner: {} game events truncated to {}",
                self.ctx.events.len(),
                self.layout.max_events
            );
            self.ctx.events.truncate(self.layout.max_events);
        }

        self.header = FrameHeader {
            frame: self.frame,
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            sdf_instance_count: self.sdf_buffer.instance_count(),
            vector_vertex_count: self.vector_vertex_count() as usize,
            vector_revision: self.vector_revision(),
            event_count: self.ctx.events.len(),
            running: self.ctx.playback.is_running(),
        }
        .encode(&self.layout);
    }

    // ---- State accessors ----

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn is_running(&self) -> bool {
        self.ctx.playback.is_running()
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Header section as last encoded by `init` or `tick`.
    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    // ---- Pointer accessors for wasm memory reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header().as_ptr()
    }

    pub fn sdf_instances_ptr(&self) -> *const f32 {
        self.sdf_buffer.instances_ptr()
    }

    pub fn sdf_instance_count(&self) -> u32 {
        self.sdf_buffer.instance_count() as u32
    }

    pub fn sdf_buffer(&self) -> &SDFBuffer {
        &self.sdf_buffer
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        #[cfg(feature = "vectors")]
        {
            self.ctx.vectors.vertex_count().min(self.layout.max_vector_vertices) as u32
        }
        #[cfg(not(feature = "vectors"))]
        {
            0
        }
    }

    pub fn vector_revision(&self) -> u32 {
        #[cfg(feature = "vectors")]
        {
            self.ctx.vectors.revision()
        }
        #[cfg(not(feature = "vectors"))]
        {
            0
        }
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn text_json(&self) -> &str {
        self.text_buffer.json()
    }

    pub fn text_revision(&self) -> u32 {
        self.text_buffer.revision()
    }

    pub fn window_json(&self) -> &str {
        &self.window_json
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_sdf_instances(&self) -> u32 {
        self.layout.max_sdf_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
