//! Text run collection.
//!
//! Text is not rasterized in Rust. Each frame the runner gathers the text
//! components of active entities into a list of runs and hands it to the
//! host as JSON; the host draws them with its own font stack.

use serde::Serialize;
use crate::core::scene::Scene;
use crate::error::EngineResult;

/// One positioned text run, as seen by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_family: String,
    pub font_size: f32,
    pub color: [f32; 4],
    pub layer: u8,
}

/// Text runs for the current frame plus their cached JSON encoding.
#[derive(Debug)]
pub struct TextBuffer {
    runs: Vec<TextRun>,
    json: String,
    revision: u32,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            json: String::from("[]"),
            revision: 0,
        }
    }

    /// Collect runs from the scene (back-to-front). The JSON is re-encoded
    /// only when the runs changed since the previous call.
    pub fn rebuild(&mut self, scene: &Scene) -> EngineResult<bool> {
        let runs: Vec<TextRun> = scene
            .iter_layered()
            .filter_map(|entity| {
                entity.text.as_ref().map(|t| TextRun {
                    x: entity.pos.x,
                    y: entity.pos.y,
                    text: t.text.clone(),
                    font_family: t.font.family.clone(),
                    font_size: t.font.size,
                    color: t.color,
                    layer: entity.layer.as_u8(),
                })
            })
            .collect();

        if runs == self.runs && self.revision > 0 {
            return Ok(false);
        }
        self.json = serde_json::to_string(&runs)?;
        self.runs = runs;
        self.revision = self.revision.wrapping_add(1);
        Ok(true)
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn json(&self) -> &str {
        &self.json
    }

    /// Bumped every time the JSON changes, so the host can skip re-layout.
    pub fn revision(&self) -> u32 {
        self.revision
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
