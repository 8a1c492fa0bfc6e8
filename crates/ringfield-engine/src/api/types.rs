/// Handle to a mesh stored in a [`Scene`](crate::core::scene::Scene).
///
/// Handles are dense indices handed out by `Scene::add`; meshes are never
/// removed, so a handle stays valid for the lifetime of the scene that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

impl MeshId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
