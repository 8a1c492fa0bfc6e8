use bytemuck::{Pod, Zeroable};

/// Per-mesh render data read by the browser host.
/// Must match the host protocol: 16 floats = 64 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Position in world space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler XYZ rotation in radians (unbounded).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Circumscribed geometry radius.
    pub radius: f32,
    /// Geometry kind (0 = tetrahedron, 1 = icosahedron).
    pub kind: f32,
    /// Subdivision level.
    pub detail: f32,
    /// Base color.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Emissive color (zero for unlit materials).
    pub emissive_r: f32,
    pub emissive_g: f32,
    pub emissive_b: f32,
    /// Bit flags, see [`MeshInstance::FLAG_WIREFRAME`] and [`MeshInstance::FLAG_LIT`].
    pub flags: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const FLAG_WIREFRAME: u32 = 1;
    pub const FLAG_LIT: u32 = 2;
}

/// All mesh instances for one frame.
pub struct RenderBuffer {
    /// Solid meshes first, then wireframes from `wireframe_split` on, so the
    /// host can draw each group with one pipeline.
    pub instances: Vec<MeshInstance>,
    pub wireframe_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            wireframe_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.wireframe_split = 0;
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn set_wireframe_split(&mut self, split: u32) {
        self.wireframe_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
