use glam::Vec3;

/// Linear RGB color, each channel in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Polyhedron geometry description. The host renderer builds the vertex data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Tetrahedron { radius: f32, detail: u32 },
    Icosahedron { radius: f32, detail: u32 },
}

impl Geometry {
    pub fn tetrahedron(radius: f32) -> Self {
        Geometry::Tetrahedron { radius, detail: 0 }
    }

    /// Circumscribed radius.
    pub fn radius(&self) -> f32 {
        match *self {
            Geometry::Tetrahedron { radius, .. } | Geometry::Icosahedron { radius, .. } => radius,
        }
    }

    pub fn detail(&self) -> u32 {
        match *self {
            Geometry::Tetrahedron { detail, .. } | Geometry::Icosahedron { detail, .. } => detail,
        }
    }

    /// Same shape and detail, scaled radius. Used for wireframe overlays.
    pub fn scaled(&self, factor: f32) -> Self {
        match *self {
            Geometry::Tetrahedron { radius, detail } => Geometry::Tetrahedron {
                radius: radius * factor,
                detail,
            },
            Geometry::Icosahedron { radius, detail } => Geometry::Icosahedron {
                radius: radius * factor,
                detail,
            },
        }
    }

    /// Numeric shape code used in the instance wire format.
    pub fn kind(&self) -> u32 {
        match self {
            Geometry::Tetrahedron { .. } => 0,
            Geometry::Icosahedron { .. } => 1,
        }
    }
}

/// Surface description for a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse-lit surface with an emissive term.
    Lambert { color: Color, emissive: Color },
    /// Unlit surface, optionally drawn as edges only.
    Basic { color: Color, wireframe: bool },
}

impl Material {
    pub fn color(&self) -> Color {
        match *self {
            Material::Lambert { color, .. } | Material::Basic { color, .. } => color,
        }
    }

    pub fn is_wireframe(&self) -> bool {
        matches!(self, Material::Basic { wireframe: true, .. })
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::Lambert {
            color: Color::WHITE,
            emissive: Color::BLACK,
        }
    }
}

/// Mutable placement of a mesh. Rotation is Euler XYZ in radians and is
/// allowed to grow without bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// A renderable object: geometry + material + transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn from_hex_ignores_high_bits() {
        assert_eq!(Color::from_hex(0xAB_FFFFFF), Color::WHITE);
    }

    #[test]
    fn scaled_geometry_keeps_shape_and_detail() {
        let g = Geometry::Tetrahedron { radius: 60.0, detail: 2 };
        let wf = g.scaled(1.5);
        assert_eq!(wf, Geometry::Tetrahedron { radius: 90.0, detail: 2 });
        assert_eq!(wf.kind(), g.kind());
    }

    #[test]
    fn only_basic_wireframe_is_wireframe() {
        let solid = Material::Lambert { color: Color::WHITE, emissive: Color::WHITE };
        let flat = Material::Basic { color: Color::WHITE, wireframe: false };
        let edges = Material::Basic { color: Color::WHITE, wireframe: true };
        assert!(!solid.is_wireframe());
        assert!(!flat.is_wireframe());
        assert!(edges.is_wireframe());
    }

    #[test]
    fn new_mesh_starts_at_origin() {
        let mesh = Mesh::new(Geometry::tetrahedron(50.0), Material::default());
        assert_eq!(mesh.transform.position, Vec3::ZERO);
        assert_eq!(mesh.transform.rotation, Vec3::ZERO);
    }
}
