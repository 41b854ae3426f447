/// Jovian System: Jupiter, four rings and eight moons on circular orbits.
///
/// Pure SDF circles + retained vectors + text runs. The only input is the
/// play/pause button in the top-left corner.

use orrery_engine::*;
use glam::Vec2;

use crate::bodies;
use crate::orbit::OrbitState;
use crate::scene::{self, SceneIds};

// ── Game event kinds to the host ─────────────────────────────────────

/// a = 1.0 running / 0.0 stopped, b = frames advanced so far.
pub const EVENT_PLAYBACK: f32 = 1.0;

pub struct JovianSystem {
    orbits: OrbitState,
    ids: Option<SceneIds>,
    /// Frames in which the moons actually moved.
    frames_advanced: u64,
}

impl JovianSystem {
    pub fn new() -> Self {
        Self {
            orbits: OrbitState::from_moons(&bodies::MOONS),
            ids: None,
            frames_advanced: 0,
        }
    }

    pub fn orbits(&self) -> &OrbitState {
        &self.orbits
    }

    pub fn ids(&self) -> Option<&SceneIds> {
        self.ids.as_ref()
    }

    pub fn frames_advanced(&self) -> u64 {
        self.frames_advanced
    }

    fn emit_playback(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent {
            kind: EVENT_PLAYBACK,
            a: if ctx.playback.is_running() { 1.0 } else { 0.0 },
            b: self.frames_advanced as f32,
            c: 0.0,
        });
    }

    /// Copy every orbit's current position onto its moon entity.
    fn write_positions(&self, ctx: &mut EngineContext) {
        let Some(ids) = &self.ids else { return };
        for (orbit, id) in self.orbits.iter().zip(&ids.moons) {
            let (x, y) = orbit.position(bodies::CENTER);
            if let Some(entity) = ctx.scene.get_mut(*id) {
                entity.pos = Vec2::new(x as f32, y as f32);
            }
        }
    }
}

impl Default for JovianSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for JovianSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            step: StepPolicy::PerFrame,
            world_width: bodies::WORLD_W,
            world_height: bodies::WORLD_H,
            title: String::from(bodies::TITLE),
            resizable: false,
            background: [0.0, 0.0, 0.0, 1.0],
            max_sdf_instances: 64,
            max_vector_vertices: 65536,
            max_events: 8,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let (ids, stats) = scene::build(ctx);
        self.ids = Some(ids);
        self.write_positions(ctx);

        for ring in &bodies::RINGS {
            log::debug!("ring {}: r={} width={}", ring.name, ring.radius, ring.width);
        }
        for moon in &bodies::MOONS {
            log::debug!(
                "moon {}: r={} step={} rad/frame, period {} d",
                moon.name, moon.radius, moon.increment, moon.period_days
            );
        }
        if stats.rings != bodies::RINGS.len()
            || stats.orbit_guides != bodies::MOONS.len()
            || !stats.button_frame
        {
            log::warn!("jovian-system: incomplete backdrop {stats:?}");
        }
        log::info!(
            "jovian-system: {} moons, {} rings, {} grid lines, {} vector vertices",
            self.orbits.len(),
            stats.rings,
            stats.grid_lines,
            ctx.vectors.vertex_count()
        );
    }

    fn on_click(&mut self, ctx: &mut EngineContext, button: EntityId) {
        let Some(ids) = &self.ids else { return };
        if button != ids.button {
            return;
        }
        let glyph_id = ids.button_glyph;

        let state = ctx.playback.toggle();
        let glyph = if state.is_running() {
            bodies::PAUSE_GLYPH
        } else {
            bodies::PLAY_GLYPH
        };
        if let Some(text) = ctx.scene.get_mut(glyph_id).and_then(|e| e.text.as_mut()) {
            text.set_text(glyph);
        }
        log::debug!("playback {:?} after {} frames", state, self.frames_advanced);
        self.emit_playback(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        self.orbits.step();
        self.frames_advanced += 1;
        self.write_positions(ctx);
        self.emit_playback(ctx);
    }
}
