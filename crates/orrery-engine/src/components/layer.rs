/// Render layer: controls draw order for SDF circles and text runs.
///
/// Layers are drawn back-to-front: Background first, Ui last.
/// Vector geometry sits underneath every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Objects = 1,
    Ui = 2,
}

impl RenderLayer {
    pub const COUNT: usize = 3;

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
