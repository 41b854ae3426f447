pub mod playback;
pub mod scene;
pub mod time;
