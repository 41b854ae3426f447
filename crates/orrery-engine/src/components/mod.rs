pub mod button;
pub mod entity;
pub mod layer;
pub mod mesh;
pub mod text;
