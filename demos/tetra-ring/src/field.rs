//! Tetra Ring: a field of lit tetrahedra, each wrapped in a coloured
//! wireframe shell, orbiting the origin on viewport-stretched ellipses.

use glam::Vec3;
use ringfield_engine::*;

// ── Shapes ───────────────────────────────────────────────────────────

const SOLID_RADIUS_MIN: f32 = 50.0;
const SOLID_RADIUS_MAX: f32 = 100.0;
/// Wireframe shell radius relative to its solid.
const WIRE_SCALE: f32 = 1.5;
const WIRE_LIGHT_MIN: f32 = 50.0;
const WIRE_LIGHT_MAX: f32 = 90.0;

// ── Motion ───────────────────────────────────────────────────────────

const BASE_VELOCITY: f32 = 0.25;
const VELOCITY_JITTER: f32 = 0.25;
/// Orbit stretch per unit of viewport/scene ratio.
const ECLIPTIC_STRETCH: f32 = 1.2;

// ── Light ────────────────────────────────────────────────────────────

const LIGHT_POS: Vec3 = Vec3::new(0.0, 0.0, 10_000.0);

pub struct TetraRing;

impl TetraRing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TetraRing {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for TetraRing {
    fn init(&mut self, ctx: &mut FieldContext) {
        let config = ctx.config().clone();
        let (width, height) = ctx.viewport();
        let ecliptic = Vec3::new(
            ECLIPTIC_STRETCH * width / config.scene_size,
            ECLIPTIC_STRETCH * height / config.scene_size,
            1.0,
        );

        for i in 0..config.total {
            let (solid, wireframe, desc) = build_pair(&mut ctx.rng, &config, ecliptic);
            if let Err(err) = ctx.spawn_pair(solid, wireframe, &desc) {
                log::warn!("pair {} skipped: {}", i, err);
            }
        }

        ctx.lights.add(PointLight::new(LIGHT_POS, Color::WHITE));
        log::info!(
            "tetra ring populated: {} of {} pairs, ecliptic {:?}",
            ctx.items.len(),
            config.total,
            ecliptic
        );
    }
}

/// Draw one solid/wireframe pair and its shared motion from `rng`.
fn build_pair(rng: &mut Rng, config: &FieldConfig, ecliptic: Vec3) -> (Mesh, Mesh, ItemDesc) {
    let geometry = Geometry::tetrahedron(rng.math_range(SOLID_RADIUS_MIN, SOLID_RADIUS_MAX));
    let solid = Mesh::new(
        geometry,
        Material::Lambert {
            color: Color::WHITE,
            emissive: Color::WHITE,
        },
    );

    let light = rng.math_range(WIRE_LIGHT_MIN, WIRE_LIGHT_MAX);
    let wireframe = Mesh::new(
        geometry.scaled(WIRE_SCALE),
        Material::Basic {
            color: color_object_hue(rng, 0.0, 360.0, 100.0, light),
            wireframe: true,
        },
    );

    let velocity = BASE_VELOCITY + rng.next_f32() * VELOCITY_JITTER;
    let radius = rng.random_position(config.scene_size);
    let spin = Vec3::new(rng.next_f32(), rng.next_f32(), rng.next_f32());

    let desc = ItemDesc::new(radius)
        .with_spin(spin)
        .with_velocity(velocity)
        .with_ecliptic(ecliptic)
        .with_motion(config.motion)
        .with_wrap(config.phase_wrap);

    (solid, wireframe, desc)
}
