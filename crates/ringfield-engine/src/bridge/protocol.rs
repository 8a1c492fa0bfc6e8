/// Frame buffer layout shared with the browser host.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 20 floats]
/// [Lights: max_lights × 8 floats]
/// [Instances: max_instances × 16 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::config::FieldConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_WIREFRAME_SPLIT: usize = 4;
pub const HEADER_MAX_LIGHTS: usize = 5;
pub const HEADER_LIGHT_COUNT: usize = 6;
pub const HEADER_AMBIENT_R: usize = 7;
pub const HEADER_AMBIENT_G: usize = 8;
pub const HEADER_AMBIENT_B: usize = 9;
pub const HEADER_CLEAR_R: usize = 10;
pub const HEADER_CLEAR_G: usize = 11;
pub const HEADER_CLEAR_B: usize = 12;
pub const HEADER_CLEAR_A: usize = 13;
pub const HEADER_VIEWPORT_WIDTH: usize = 14;
pub const HEADER_VIEWPORT_HEIGHT: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera uniform: view-projection matrix + eye (wire format, fixed).
pub const CAMERA_FLOATS: usize = 20;

/// Floats per point light: x, y, z, r, g, b, intensity, distance.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per mesh instance (wire format, fixed).
pub const INSTANCE_FLOATS: usize = 16;

/// Upper bound on `max_instances` accepted from config.
pub const MAX_INSTANCES_LIMIT: usize = 65_536;

/// Upper bound on `max_lights` accepted from config.
pub const MAX_LIGHTS_LIMIT: usize = 64;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum mesh instances.
    pub max_instances: usize,
    /// Maximum point lights.
    pub max_lights: usize,

    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values. Capacities above
    /// [`MAX_INSTANCES_LIMIT`] / [`MAX_LIGHTS_LIMIT`] are clamped.
    pub fn new(max_instances: usize, max_lights: usize) -> Self {
        if max_instances > MAX_INSTANCES_LIMIT || max_lights > MAX_LIGHTS_LIMIT {
            log::warn!(
                "layout capacities {}/{} clamped to {}/{}",
                max_instances,
                max_lights,
                MAX_INSTANCES_LIMIT,
                MAX_LIGHTS_LIMIT
            );
        }
        let max_instances = max_instances.min(MAX_INSTANCES_LIMIT);
        let max_lights = max_lights.min(MAX_LIGHTS_LIMIT);

        let light_data_floats = max_lights * LIGHT_FLOATS;
        let instance_data_floats = max_instances * INSTANCE_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let light_data_offset = camera_offset + CAMERA_FLOATS;
        let instance_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = instance_data_offset + instance_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_lights,
            light_data_floats,
            instance_data_floats,
            camera_offset,
            light_data_offset,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a FieldConfig.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.max_instances, config.max_lights)
    }
}
