use crate::api::types::MeshId;
use crate::components::mesh::{Mesh, Transform};

/// Flat mesh storage. Meshes are only ever added, so a `MeshId` is the
/// index of its mesh and lookups are O(1).
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            meshes: Vec::with_capacity(128),
        }
    }

    /// Create a scene with a specific mesh capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            meshes: Vec::with_capacity(capacity),
        }
    }

    /// Add a mesh to the scene and return its handle.
    pub fn add(&mut self, mesh: Mesh) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(mesh);
        id
    }

    pub fn get(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.index())
    }

    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id.index())
    }

    /// Mutable access to just the transform of a mesh.
    pub fn transform_mut(&mut self, id: MeshId) -> Option<&mut Transform> {
        self.meshes.get_mut(id.index()).map(|m| &mut m.transform)
    }

    /// Iterate over all meshes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter()
    }

    /// Number of meshes in the scene.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
