/// Frame buffer layout shared with the host.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [SDF circles: max_sdf_instances × 8 floats]
/// [Vectors: max_vector_vertices × 6 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init; the host reads them
/// back to compute section offsets.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::sdf_instance::SDFInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_WORLD_WIDTH: usize = 2;
pub const HEADER_WORLD_HEIGHT: usize = 3;
pub const HEADER_MAX_SDF_INSTANCES: usize = 4;
pub const HEADER_SDF_INSTANCE_COUNT: usize = 5;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 6;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 7;
pub const HEADER_VECTOR_REVISION: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_PLAYBACK_RUNNING: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per vector vertex: x, y, r, g, b, a (fixed wire format).
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_sdf_instances: usize,
    pub max_vector_vertices: usize,
    pub max_events: usize,

    pub sdf_data_floats: usize,
    pub vector_data_floats: usize,
    pub event_data_floats: usize,

    pub sdf_data_offset: usize,
    pub vector_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_sdf_instances: usize, max_vector_vertices: usize, max_events: usize) -> Self {
        let sdf_data_floats = max_sdf_instances * SDFInstance::FLOATS;
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let event_data_floats = max_events * GameEvent::FLOATS;

        let sdf_data_offset = HEADER_FLOATS;
        let vector_data_offset = sdf_data_offset + sdf_data_floats;
        let event_data_offset = vector_data_offset + vector_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_sdf_instances,
            max_vector_vertices,
            max_events,
            sdf_data_floats,
            vector_data_floats,
            event_data_floats,
            sdf_data_offset,
            vector_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_sdf_instances, config.max_vector_vertices, config.max_events)
    }
}

/// Per-frame values written into the header section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameHeader {
    pub frame: u32,
    pub world_width: f32,
    pub world_height: f32,
    pub sdf_instance_count: usize,
    pub vector_vertex_count: usize,
    pub vector_revision: u32,
    pub event_count: usize,
    pub running: bool,
}

impl FrameHeader {
    /// Encode into the header float array for the given layout.
    pub fn encode(&self, layout: &ProtocolLayout) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = self.frame as f32;
        header[HEADER_WORLD_WIDTH] = self.world_width;
        header[HEADER_WORLD_HEIGHT] = self.world_height;
        header[HEADER_MAX_SDF_INSTANCES] = layout.max_sdf_instances as f32;
        header[HEADER_SDF_INSTANCE_COUNT] = self.sdf_instance_count as f32;
        header[HEADER_MAX_VECTOR_VERTICES] = layout.max_vector_vertices as f32;
        header[HEADER_VECTOR_VERTEX_COUNT] = self.vector_vertex_count as f32;
        header[HEADER_VECTOR_REVISION] = self.vector_revision as f32;
        header[HEADER_MAX_EVENTS] = layout.max_events as f32;
        header[HEADER_EVENT_COUNT] = self.event_count as f32;
        header[HEADER_PLAYBACK_RUNNING] = if self.running { 1.0 } else { 0.0 };
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_sdf_instances, 64);
        assert_eq!(layout.sdf_data_floats, 64 * 8);
        assert_eq!(layout.vector_data_floats, 65536 * 6);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 200, 20);
        assert_eq!(layout.sdf_data_offset, HEADER_FLOATS);
        assert_eq!(layout.vector_data_offset, layout.sdf_data_offset + layout.sdf_data_floats);
        assert_eq!(layout.event_data_offset, layout.vector_data_offset + layout.vector_data_floats);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 10 * 8 + 200 * 6 + 20 * 4);
    }

    #[test]
    fn header_encoding() {
        let layout = ProtocolLayout::new(16, 100, 8);
        let header = FrameHeader {
            frame: 42,
            world_width: 800.0,
            world_height: 600.0,
            sdf_instance_count: 9,
            vector_vertex_count: 60,
            vector_revision: 3,
            event_count: 1,
            running: false,
        }
        .encode(&layout);

        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 42.0);
        assert_eq!(header[HEADER_MAX_SDF_INSTANCES], 16.0);
        assert_eq!(header[HEADER_SDF_INSTANCE_COUNT], 9.0);
        assert_eq!(header[HEADER_MAX_VECTOR_VERTICES], 100.0);
        assert_eq!(header[HEADER_VECTOR_REVISION], 3.0);
        assert_eq!(header[HEADER_MAX_EVENTS], 8.0);
        assert_eq!(header[HEADER_PLAYBACK_RUNNING], 0.0);
    }
}
