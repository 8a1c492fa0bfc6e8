use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::error::{FieldError, FieldResult};
use crate::api::types::MeshId;
use crate::components::mesh::Transform;

/// Which per-frame motion an item applies in [`Item::animate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Closed elliptical orbit around the origin.
    #[default]
    Orbit,
    /// Outward spiral: position drifts by a rotating displacement each frame.
    Explosion,
}

/// What happens to the phase angle once it passes `+π`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseWrap {
    /// Reset to exactly `-π`. The overshoot is dropped, so the item skips
    /// a little along its path each lap.
    #[default]
    Clamp,
    /// Wrap into `(-π, π]` keeping the overshoot. Applied in both directions.
    Wrap,
}

impl PhaseWrap {
    fn apply(self, angle: f32) -> f32 {
        match self {
            PhaseWrap::Clamp if angle > PI => -PI,
            PhaseWrap::Clamp => angle,
            PhaseWrap::Wrap if angle > PI || angle <= -PI => {
                let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
                // rem_euclid lands on -π for exact odd multiples; keep the range half-open at -π.
                if wrapped <= -PI { PI } else { wrapped }
            }
            PhaseWrap::Wrap => angle,
        }
    }
}

/// Motion parameters for an item. Only `radius` is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDesc {
    /// Orbit seed: the mesh starts here and `|radius|` scales the ellipse.
    pub radius: Vec3,
    /// Per-axis angular velocity for mesh rotation.
    pub spin: Vec3,
    /// Phase speed in radians per second.
    pub velocity: f32,
    /// Per-axis stretch of the orbit ellipse.
    pub ecliptic: Vec3,
    pub motion: MotionMode,
    pub wrap: PhaseWrap,
}

impl ItemDesc {
    pub fn new(radius: Vec3) -> Self {
        Self {
            radius,
            spin: Vec3::ONE,
            velocity: 1.0,
            ecliptic: Vec3::ONE,
            motion: MotionMode::Orbit,
            wrap: PhaseWrap::Clamp,
        }
    }

    pub fn with_spin(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_ecliptic(mut self, ecliptic: Vec3) -> Self {
        self.ecliptic = ecliptic;
        self
    }

    pub fn with_motion(mut self, motion: MotionMode) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_wrap(mut self, wrap: PhaseWrap) -> Self {
        self.wrap = wrap;
        self
    }
}

/// One orbiting shape: a mesh handle plus the motion that drives its transform.
///
/// The item never touches geometry or material, only the transform it is
/// handed each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    mesh: MeshId,
    radius: Vec3,
    spin: Vec3,
    velocity: f32,
    ecliptic: Vec3,
    motion: MotionMode,
    wrap: PhaseWrap,
    /// Orbital phase in radians.
    angle: f32,
}

impl Item {
    /// Build an item and place its mesh at the literal radius coordinates.
    ///
    /// The starting phase is `atan2(radius.y, radius.x)`, so the first orbit
    /// update lands the mesh on the matching point of its ellipse.
    pub fn new(mesh: MeshId, transform: &mut Transform, desc: &ItemDesc) -> FieldResult<Self> {
        if desc.radius == Vec3::ZERO {
            return Err(FieldError::ZeroRadius);
        }

        transform.position = desc.radius;

        Ok(Self {
            mesh,
            radius: desc.radius,
            spin: desc.spin,
            velocity: desc.velocity,
            ecliptic: desc.ecliptic,
            motion: desc.motion,
            wrap: desc.wrap,
            angle: desc.radius.y.atan2(desc.radius.x),
        })
    }

    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    pub fn radius(&self) -> Vec3 {
        self.radius
    }

    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn ecliptic(&self) -> Vec3 {
        self.ecliptic
    }

    pub fn motion(&self) -> MotionMode {
        self.motion
    }

    pub fn set_motion(&mut self, motion: MotionMode) {
        self.motion = motion;
    }

    /// Current orbital phase in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Spin the mesh. Purely additive, independent of the orbit.
    pub fn rotate_item(&self, transform: &mut Transform, dt: f32) {
        transform.rotation += self.spin * dt;
    }

    /// Advance using the configured [`MotionMode`].
    pub fn animate(&mut self, transform: &mut Transform, dt: f32) {
        match self.motion {
            MotionMode::Orbit => self.animate_rotation(transform, dt),
            MotionMode::Explosion => self.animate_explosion(transform, dt),
        }
    }

    /// Advance the phase and place the mesh on its ellipse. Z passes through
    /// from the radius vector.
    pub fn animate_rotation(&mut self, transform: &mut Transform, dt: f32) {
        self.angle += dt * self.velocity;
        let scale = self.radius.length();
        transform.position = Vec3::new(
            scale * self.ecliptic.x * self.angle.cos(),
            scale * self.ecliptic.y * self.angle.sin(),
            self.radius.z,
        );
        self.angle = self.wrap.apply(self.angle);
    }

    /// Advance the phase and push the mesh along the current heading.
    ///
    /// Both x and y scale off `ecliptic.x`; `ecliptic.y` has no effect in this
    /// mode. Z is left alone.
    pub fn animate_explosion(&mut self, transform: &mut Transform, dt: f32) {
        self.angle += dt * self.velocity;
        let step = self.radius.length() * self.ecliptic.x * dt;
        transform.position.x += step * self.angle.cos();
        transform.position.y += step * self.angle.sin();
        self.angle = self.wrap.apply(self.angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(desc: ItemDesc) -> (Item, Transform) {
        let mut transform = Transform::default();
        let item = Item::new(MeshId(0), &mut transform, &desc).unwrap();
        (item, transform)
    }

    #[test]
    fn construction_places_mesh_at_radius() {
        let (_, t) = spawn(ItemDesc::new(Vec3::new(-120.5, 33.25, 7.0)));
        assert_eq!(t.position, Vec3::new(-120.5, 33.25, 7.0));
        assert_eq!(t.rotation, Vec3::ZERO);
    }

    #[test]
    fn initial_angle_is_atan2_of_radius() {
        let (item, _) = spawn(ItemDesc::new(Vec3::new(0.0, 10.0, 0.0)));
        assert!((item.angle() - PI / 2.0).abs() < 1e-6);

        let (item, _) = spawn(ItemDesc::new(Vec3::new(-1.0, -1.0, 0.0)));
        assert!((item.angle() + 3.0 * PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn defaults_are_unit() {
        let desc = ItemDesc::new(Vec3::X);
        assert_eq!(desc.spin, Vec3::ONE);
        assert_eq!(desc.velocity, 1.0);
        assert_eq!(desc.ecliptic, Vec3::ONE);
        assert_eq!(desc.motion, MotionMode::Orbit);
        assert_eq!(desc.wrap, PhaseWrap::Clamp);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let mut t = Transform::default();
        let err = Item::new(MeshId(3), &mut t, &ItemDesc::new(Vec3::ZERO)).unwrap_err();
        assert!(matches!(err, FieldError::ZeroRadius));
        assert_eq!(t.position, Vec3::ZERO);
    }

    #[test]
    fn rotate_item_accumulates_spin() {
        let (item, mut t) = spawn(ItemDesc::new(Vec3::X).with_spin(Vec3::new(1.0, 2.0, -3.0)));
        item.rotate_item(&mut t, 0.5);
        item.rotate_item(&mut t, 0.5);
        assert_eq!(t.rotation, Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn rotation_grows_without_wraparound() {
        let (item, mut t) = spawn(ItemDesc::new(Vec3::X).with_spin(Vec3::splat(10.0)));
        for _ in 0..100 {
            item.rotate_item(&mut t, 0.1);
        }
        assert!(t.rotation.x > 99.0, "rotation was {}", t.rotation.x);
    }

    #[test]
    fn negative_dt_reverses_spin() {
        let (item, mut t) = spawn(ItemDesc::new(Vec3::X).with_spin(Vec3::ONE));
        item.rotate_item(&mut t, -0.25);
        assert_eq!(t.rotation, Vec3::splat(-0.25));
    }

    #[test]
    fn angle_advances_by_velocity_times_dt() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::X).with_velocity(0.75));
        let before = item.angle();
        item.animate_rotation(&mut t, 0.4);
        assert!((item.angle() - (before + 0.3)).abs() < 1e-6);
    }

    #[test]
    fn orbit_position_at_zero_phase() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::new(3.0, 4.0, 5.0)));
        item.angle = 0.0;
        item.animate_rotation(&mut t, 0.0);
        assert_eq!(item.angle(), 0.0);
        // Orbit scale is the full 3D length, z included.
        assert!((t.position.x - 50.0f32.sqrt()).abs() < 1e-5);
        assert!(t.position.y.abs() < 1e-6);
        assert_eq!(t.position.z, 5.0);
    }

    #[test]
    fn orbit_applies_ecliptic_per_axis() {
        let (mut item, mut t) =
            spawn(ItemDesc::new(Vec3::new(0.0, 2.0, 1.0)).with_ecliptic(Vec3::new(3.0, 0.5, 9.0)));
        item.angle = 0.0;
        item.animate_rotation(&mut t, PI / 2.0);
        // |r| = sqrt(5)
        let r = 5.0f32.sqrt();
        assert!(t.position.x.abs() < 1e-5);
        assert!((t.position.y - r * 0.5).abs() < 1e-5);
        assert_eq!(t.position.z, 1.0);
    }

    #[test]
    fn clamp_resets_to_exactly_minus_pi() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::X).with_velocity(1.0));
        item.angle = 3.0;
        item.animate_rotation(&mut t, 0.2);
        assert_eq!(item.angle(), -PI);
    }

    #[test]
    fn clamp_uses_unclamped_angle_for_position() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::X));
        item.angle = 3.0;
        item.animate_rotation(&mut t, 0.2);
        assert!((t.position.x - 3.2f32.cos()).abs() < 1e-6);
        assert!((t.position.y - 3.2f32.sin()).abs() < 1e-6);
    }

    #[test]
    fn clamp_leaves_angles_below_pi_alone() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::X).with_velocity(-1.0));
        item.angle = -3.0;
        item.animate_rotation(&mut t, 1.0);
        assert!((item.angle() + 4.0).abs() < 1e-6);
    }

    #[test]
    fn wrap_keeps_overshoot() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::X).with_wrap(PhaseWrap::Wrap));
        item.angle = 3.0;
        item.animate_rotation(&mut t, 0.2);
        let expected = 3.2 - 2.0 * PI;
        assert!((item.angle() - expected).abs() < 1e-5, "angle was {}", item.angle());
    }

    #[test]
    fn wrap_handles_negative_velocity() {
        let (mut item, mut t) =
            spawn(ItemDesc::new(Vec3::X).with_velocity(-1.0).with_wrap(PhaseWrap::Wrap));
        item.angle = -3.0;
        item.animate_rotation(&mut t, 0.5);
        let expected = -3.5 + 2.0 * PI;
        assert!((item.angle() - expected).abs() < 1e-5, "angle was {}", item.angle());
    }

    #[test]
    fn explosion_displaces_relative_to_current_position() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::new(3.0, 4.0, 5.0)));
        item.angle = 0.0;
        item.animate_explosion(&mut t, 0.1);
        let step = 50.0f32.sqrt() * 0.1;
        assert!((t.position.x - (3.0 + step * 0.1f32.cos())).abs() < 1e-5);
        assert!((t.position.y - (4.0 + step * 0.1f32.sin())).abs() < 1e-5);
        assert_eq!(t.position.z, 5.0);
    }

    #[test]
    fn explosion_y_scales_with_ecliptic_x() {
        let desc = ItemDesc::new(Vec3::new(0.0, 1.0, 0.0)).with_ecliptic(Vec3::new(2.0, 100.0, 1.0));
        let (mut item, mut t) = spawn(desc);
        item.angle = 0.0;
        item.animate_explosion(&mut t, PI / 2.0);
        // step = |r| * ecliptic.x * dt = 1 * 2 * π/2 = π; sin(π/2) = 1
        let dy = t.position.y - 1.0;
        assert!((dy - PI).abs() < 1e-5, "dy was {}", dy);
    }

    #[test]
    fn explosion_clamps_like_orbit() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::X));
        item.angle = 3.1;
        item.animate_explosion(&mut t, 0.1);
        assert_eq!(item.angle(), -PI);
    }

    #[test]
    fn animate_dispatches_on_motion_mode() {
        let desc = ItemDesc::new(Vec3::new(3.0, 4.0, 0.0));
        let (mut orbit, mut t_orbit) = spawn(desc);
        let (mut boom, mut t_boom) = spawn(desc.with_motion(MotionMode::Explosion));

        orbit.animate(&mut t_orbit, 0.0);
        boom.animate(&mut t_boom, 0.0);

        // Orbit snaps onto the ellipse; explosion with dt = 0 stays put.
        assert!((t_orbit.position.length() - 5.0).abs() < 1e-5);
        assert_eq!(t_boom.position, Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn rotation_and_orbit_are_independent() {
        let desc = ItemDesc::new(Vec3::new(1.0, 2.0, 3.0))
            .with_spin(Vec3::new(0.3, 0.2, 0.1))
            .with_velocity(0.4);
        let (mut a, mut ta) = spawn(desc);
        let (mut b, mut tb) = spawn(desc);

        a.rotate_item(&mut ta, 0.016);
        a.animate_rotation(&mut ta, 0.016);

        b.animate_rotation(&mut tb, 0.016);
        b.rotate_item(&mut tb, 0.016);

        assert_eq!(ta, tb);
        assert_eq!(a.angle(), b.angle());
    }

    #[test]
    fn paired_items_stay_in_lockstep() {
        let desc = ItemDesc::new(Vec3::new(-640.0, 212.0, 4.0))
            .with_spin(Vec3::new(0.9, 0.1, 0.5))
            .with_velocity(0.37)
            .with_ecliptic(Vec3::new(1.5, 0.8, 1.0));

        let mut ta = Transform::default();
        let mut tb = Transform::default();
        let mut a = Item::new(MeshId(0), &mut ta, &desc).unwrap();
        let mut b = Item::new(MeshId(1), &mut tb, &desc).unwrap();

        for _ in 0..10_000 {
            a.rotate_item(&mut ta, 1.0 / 60.0);
            a.animate_rotation(&mut ta, 1.0 / 60.0);
            b.rotate_item(&mut tb, 1.0 / 60.0);
            b.animate_rotation(&mut tb, 1.0 / 60.0);
            assert_eq!(a.angle().to_bits(), b.angle().to_bits());
        }
        assert_eq!(ta, tb);
    }

    #[test]
    fn angle_stays_in_range_over_many_laps() {
        let (mut item, mut t) = spawn(ItemDesc::new(Vec3::new(1.0, 1.0, 0.0)).with_velocity(2.5));
        for _ in 0..5_000 {
            item.animate_rotation(&mut t, 0.05);
            assert!(item.angle() >= -PI && item.angle() <= PI);
        }
    }
}
