pub mod sdf_render;
pub mod text;
pub mod ui;
#[cfg(feature = "vectors")]
pub mod vector;
