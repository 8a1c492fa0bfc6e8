/// Point lights for the Lambert pass.
///
/// Lights are persistent: they stay until explicitly removed. Each frame the
/// renderer copies the active lights into its light buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::mesh::Color;

/// A 3D point light.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, distance]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Falloff distance in world units. 0.0 means no falloff.
    pub distance: f32,
}

impl PointLight {
    /// Create a full-intensity light with no falloff.
    pub fn new(pos: Vec3, color: Color) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity: 1.0,
            distance: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Active lights plus the ambient term.
///
/// Ambient defaults to black: with no lights only emissive surfaces show.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: [0.0, 0.0, 0.0],
        }
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: [0.0, 0.0, 0.0],
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = [r, g, b];
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::new(0.0, 0.0, 10_000.0), Color::new(1.0, 0.5, 0.0));
        assert_eq!(light.position(), Vec3::new(0.0, 0.0, 10_000.0));
        assert_eq!(light.r, 1.0);
        assert_eq!(light.g, 0.5);
        assert_eq!(light.b, 0.0);
        assert_eq!(light.intensity, 1.0);
        assert_eq!(light.distance, 0.0);
    }

    #[test]
    fn light_state_add_clear() {
        let mut state = LightState::with_capacity(2);
        state.add(PointLight::new(Vec3::ZERO, Color::WHITE));
        state.add(PointLight::new(Vec3::X, Color::WHITE));
        assert_eq!(state.count(), 2);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn ambient_defaults_to_black() {
        let mut state = LightState::new();
        assert_eq!(state.ambient(), [0.0; 3]);
        state.set_ambient(0.1, 0.1, 0.15);
        assert_eq!(state.ambient(), [0.1, 0.1, 0.15]);
    }

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }
}
