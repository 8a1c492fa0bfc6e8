use glam::Vec3;

use crate::api::config::FieldConfig;
use crate::api::error::{FieldError, FieldResult};
use crate::bridge::protocol::{MAX_INSTANCES_LIMIT, MAX_LIGHTS_LIMIT};
use crate::components::item::{Item, ItemDesc};
use crate::components::mesh::Mesh;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::{ClearColor, FrameData};
use crate::systems::lighting::LightState;
use crate::systems::orbit::ItemField;

/// The contract every field must fulfill.
pub trait Field {
    /// Return field configuration. Called once before init.
    fn config(&self) -> FieldConfig {
        FieldConfig::default()
    }

    /// Build the scene: add meshes, spawn item pairs, place lights.
    fn init(&mut self, ctx: &mut FieldContext);
}

/// Everything a field owns: the scene graph, the camera, lights, the item
/// pairs that move meshes around, and the random source used to build them.
pub struct FieldContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub lights: LightState,
    pub items: ItemField,
    pub clear: ClearColor,
    pub rng: Rng,
    config: FieldConfig,
}

impl FieldContext {
    pub fn new(config: FieldConfig) -> Self {
        let camera = PerspectiveCamera::new(
            config.camera.fov,
            config.aspect(),
            config.camera.near,
            config.camera.far,
        )
        .with_position(Vec3::new(0.0, 0.0, config.camera.z));

        let pairs = config.total.min(MAX_INSTANCES_LIMIT / 2);
        let mut lights = LightState::with_capacity(config.max_lights.min(MAX_LIGHTS_LIMIT));
        let [r, g, b] = config.ambient;
        lights.set_ambient(r, g, b);

        Self {
            scene: Scene::with_capacity(pairs * 2),
            camera,
            lights,
            items: ItemField::with_capacity(pairs),
            clear: ClearColor::from_array(config.clear_color),
            rng: Rng::new(config.seed),
            config,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Viewport size in pixels as last set by config or [`FieldContext::resize`].
    pub fn viewport(&self) -> (f32, f32) {
        (self.config.viewport_width, self.config.viewport_height)
    }

    /// Add a solid mesh and its wireframe overlay to the scene and spawn the
    /// matching item pair. Returns the pair index.
    ///
    /// Nothing is added to the scene if the description is rejected.
    pub fn spawn_pair(&mut self, solid: Mesh, wireframe: Mesh, desc: &ItemDesc) -> FieldResult<usize> {
        if desc.radius == Vec3::ZERO {
            return Err(FieldError::ZeroRadius);
        }

        let solid_id = self.scene.add(solid);
        let wire_id = self.scene.add(wireframe);

        let item = {
            let t = self
                .scene
                .transform_mut(solid_id)
                .ok_or(FieldError::UnknownMesh(solid_id.0))?;
            Item::new(solid_id, t, desc)?
        };
        let effect = {
            let t = self
                .scene
                .transform_mut(wire_id)
                .ok_or(FieldError::UnknownMesh(wire_id.0))?;
            Item::new(wire_id, t, desc)?
        };

        Ok(self.items.push_pair(item, effect))
    }

    /// Track a new viewport size: camera aspect follows it.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::debug!("ignoring empty viewport {}x{}", width, height);
            return;
        }
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.camera.resize(width, height);
    }

    /// Advance every item pair by `dt` seconds.
    pub fn animate(&mut self, dt: f32) {
        self.items.animate(&mut self.scene, dt);
    }

    /// Borrow the current state as a renderer frame.
    pub fn frame_data(&self) -> FrameData<'_> {
        FrameData {
            scene: &self.scene,
            camera: &self.camera,
            lights: &self.lights,
            clear: self.clear,
        }
    }
}

impl Default for FieldContext {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}
