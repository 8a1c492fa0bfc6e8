pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::{CameraConfig, FieldConfig};
pub use api::error::{FieldError, FieldResult};
pub use api::field::{Field, FieldContext};
pub use api::types::MeshId;
pub use components::item::{Item, ItemDesc, MotionMode, PhaseWrap};
pub use components::mesh::{Color, Geometry, Material, Mesh, Transform};
pub use core::rng::Rng;
pub use core::run_loop::{AnimationLoop, StopSignal};
pub use core::scene::Scene;
pub use core::time::{Clock, FixedClock, FrameClock};
#[cfg(not(target_arch = "wasm32"))]
pub use core::time::InstantClock;
pub use renderer::{
    BufferedRenderer, CameraUniform, ClearColor, FrameData, MeshInstance, PerspectiveCamera,
    RenderBuffer, Renderer,
};
pub use bridge::protocol::ProtocolLayout;
pub use systems::color::{color_object, color_object_hue, color_random, hsl_to_rgb};
pub use systems::lighting::{LightState, PointLight};
pub use systems::orbit::ItemField;
