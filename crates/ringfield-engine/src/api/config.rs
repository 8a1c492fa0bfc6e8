use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::{FieldError, FieldResult};
use crate::bridge::protocol::{MAX_INSTANCES_LIMIT, MAX_LIGHTS_LIMIT};
use crate::components::item::{MotionMode, PhaseWrap};

/// Perspective camera settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov: f32,
    /// Near clip plane (default: 1).
    pub near: f32,
    /// Far clip plane (default: 10000).
    pub far: f32,
    /// Distance from the origin along +Z (default: 1000).
    pub z: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 1.0,
            far: 10_000.0,
            z: 1000.0,
        }
    }
}

/// Configuration for a field, provided by the field implementation and
/// optionally overridden by the host as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of solid/wireframe pairs (default: 40).
    pub total: usize,
    /// Half-extent of the field used for random placement (default: 1000).
    pub scene_size: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    pub camera: CameraConfig,
    /// Clear color RGBA (default: transparent black).
    pub clear_color: [f32; 4],
    /// Ambient light RGB added to every Lambert surface (default: black).
    pub ambient: [f32; 3],
    /// Maximum number of mesh instances in the frame buffer (default: 256).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
    /// Seed for the field's random generator.
    pub seed: u64,
    /// Motion applied to every item each frame.
    pub motion: MotionMode,
    /// Phase behavior past +π.
    pub phase_wrap: PhaseWrap,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            total: 40,
            scene_size: 1000.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            camera: CameraConfig::default(),
            clear_color: [0.0, 0.0, 0.0, 0.0],
            ambient: [0.0, 0.0, 0.0],
            max_instances: 256,
            max_lights: 4,
            seed: 0x5EED,
            motion: MotionMode::Orbit,
            phase_wrap: PhaseWrap::Clamp,
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> FieldResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a JSON override on top of this config. Keys present in the JSON
    /// replace the current values (nested objects merge key by key); all
    /// other settings are kept.
    pub fn merged_with_json(&self, json: &str) -> FieldResult<Self> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(self)?;
        merge_json(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the field cannot run with.
    pub fn validate(&self) -> FieldResult<()> {
        if self.max_instances > MAX_INSTANCES_LIMIT {
            return Err(FieldError::InvalidConfig(format!(
                "max_instances {} exceeds the limit of {}",
                self.max_instances, MAX_INSTANCES_LIMIT
            )));
        }
        if self.max_lights > MAX_LIGHTS_LIMIT {
            return Err(FieldError::InvalidConfig(format!(
                "max_lights {} exceeds the limit of {}",
                self.max_lights, MAX_LIGHTS_LIMIT
            )));
        }
        match self.total.checked_mul(2) {
            Some(needed) if needed <= self.max_instances => {}
            _ => {
                return Err(FieldError::InvalidConfig(format!(
                    "{} pairs do not fit in max_instances {}",
                    self.total, self.max_instances
                )))
            }
        }
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(FieldError::InvalidConfig(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if !(self.scene_size > 0.0) {
            return Err(FieldError::InvalidConfig(format!(
                "scene_size must be positive, got {}",
                self.scene_size
            )));
        }
        let cam = &self.camera;
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(FieldError::InvalidConfig(format!(
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                cam.near, cam.far
            )));
        }
        Ok(())
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }
}

fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_json(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, value) => *base = value,
    }
}
