/// RGBA color for SDF circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SDFColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl SDFColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from 0-255 channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl Default for SDFColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// SDF shape primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SDFShape {
    /// Filled disc.
    Circle { radius: f32 },
}

/// Component for SDF-rendered shapes drawn at the entity position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: SDFShape,
    pub color: SDFColor,
}

impl MeshComponent {
    pub fn new(shape: SDFShape, color: SDFColor) -> Self {
        Self { shape, color }
    }

    pub fn circle(radius: f32, color: SDFColor) -> Self {
        Self::new(SDFShape::Circle { radius }, color)
    }

    pub fn radius(&self) -> f32 {
        match self.shape {
            SDFShape::Circle { radius } => radius,
        }
    }
}
