//! Lyon-based vector shape tessellation.
//!
//! Shapes are tessellated on the CPU into a flat triangle-list vertex buffer
//! that the host draws underneath SDF circles and text. Geometry is
//! retained: it stays in the buffer across frames until [`VectorState::clear`]
//! is called, so static backdrops are tessellated exactly once.
//!
//! ```ignore
//! // In Game::init():
//! ctx.vectors.stroke_line(Vec2::ZERO, Vec2::new(0.0, 800.0), 1.0, VectorColor::GRAY);
//! ctx.vectors.stroke_circle(center, 46.0, 7.0, VectorColor::rgb8(255, 99, 71).with_alpha(0.7));
//! ```
//!
//! Every drawing call returns `true` when it added triangles. Degenerate
//! input and tessellation failures add nothing and return `false`.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::{point, Box2D};
use lyon::path::builder::BorderRadii;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Flattening tolerance in world units.
const TOLERANCE: f32 = 0.1;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from 0-255 channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        vertex_at(p.x, p.y, self.color)
    }
}

struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        vertex_at(p.x, p.y, self.color)
    }
}

fn vertex_at(x: f32, y: f32, color: VectorColor) -> VectorVertex {
    VectorVertex {
        x,
        y,
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

/// Tessellators plus the retained output vertex buffer.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    /// Bumped whenever the buffer contents change.
    revision: u32,
}

impl VectorState {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(4096 * VectorVertex::FLOATS),
            revision: 0,
        }
    }

    /// Drop all retained geometry.
    pub fn clear(&mut self) {
        if !self.buffer.is_empty() {
            self.buffer.clear();
            self.revision = self.revision.wrapping_add(1);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the flat float buffer (for wasm memory reads).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    /// Returns whether any triangles were added.
    fn flush_geometry(&mut self) -> bool {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        let added = !self.geometry.indices.is_empty();
        if added {
            self.revision = self.revision.wrapping_add(1);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
        added
    }

    /// Fill an axis-aligned rectangle with its top-left corner at `pos`.
    /// A positive `corner_radius` rounds the corners.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, corner_radius: f32, color: VectorColor) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.fill_path(&rect_path(pos, width, height, corner_radius), color)
    }

    /// Stroke a straight segment.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: VectorColor) -> bool {
        if from == to {
            return false;
        }
        let path = polygon_path(&[from, to], false);
        self.stroke_path(&path, width, color)
    }

    /// Stroke an unfilled circle outline centered on `center`.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) -> bool {
        if radius <= 0.0 {
            return false;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();
        self.stroke_path(&path, width, color)
    }

    /// Stroke a rectangle outline with its top-left corner at `pos`.
    /// A positive `corner_radius` rounds the corners.
    pub fn stroke_rect(
        &mut self,
        pos: Vec2,
        width: f32,
        height: f32,
        corner_radius: f32,
        line_width: f32,
        color: VectorColor,
    ) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.stroke_path(&rect_path(pos, width, height, corner_radius), line_width, color)
    }

    fn fill_path(&mut self, path: &Path, color: VectorColor) -> bool {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("vector fill failed: {err:?}");
                self.discard_geometry();
                false
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) -> bool {
        if width <= 0.0 {
            return false;
        }
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("vector stroke failed: {err:?}");
                self.discard_geometry();
                false
            }
        }
    }

    fn discard_geometry(&mut self) {
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

fn rect_path(pos: Vec2, width: f32, height: f32, corner_radius: f32) -> Path {
    if corner_radius > 0.0 {
        let rect = Box2D::new(point(pos.x, pos.y), point(pos.x + width, pos.y + height));
        let mut builder = Path::builder();
        builder.add_rounded_rectangle(&rect, &BorderRadii::new(corner_radius), Winding::Positive);
        return builder.build();
    }
    let corners = [
        pos,
        Vec2::new(pos.x + width, pos.y),
        Vec2::new(pos.x + width, pos.y + height),
        Vec2::new(pos.x, pos.y + height),
    ];
    polygon_path(&corners, true)
}

fn polygon_path(points: &[Vec2], closed: bool) -> Path {
    let mut builder = Path::builder();
    builder.begin(point(points[0].x, points[0].y));
    for p in &points[1..] {
        builder.line_to(point(p.x, p.y));
    }
    builder.end(closed);
    builder.build()
}
