pub mod buffered;
pub mod camera;
pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use buffered::BufferedRenderer;
pub use camera::{CameraUniform, PerspectiveCamera};
pub use instance::{MeshInstance, RenderBuffer};
pub use traits::{ClearColor, FrameData, Renderer};
