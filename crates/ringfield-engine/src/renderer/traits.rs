//! Renderer contract.
//!
//! The engine never draws pixels itself. A renderer receives the scene and
//! camera once per frame and does whatever its backend needs: the bundled
//! [`BufferedRenderer`](super::buffered::BufferedRenderer) packs flat
//! buffers for the browser host, a native backend would encode GPU commands.

use crate::core::scene::Scene;
use crate::systems::lighting::LightState;
use super::camera::PerspectiveCamera;

/// Background color used to clear the surface before drawing.
/// The field renders over page content, so the default is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    pub const TRANSPARENT: ClearColor = ClearColor { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub fn from_array(rgba: [f32; 4]) -> Self {
        Self { r: rgba[0], g: rgba[1], b: rgba[2], a: rgba[3] }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Everything a renderer needs for one frame.
pub struct FrameData<'a> {
    pub scene: &'a Scene,
    pub camera: &'a PerspectiveCamera,
    pub lights: &'a LightState,
    pub clear: ClearColor,
}

/// Renderer trait for drawing backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct WebGlRenderer {
///     gl: WebGl2RenderingContext,
///     // ...
/// }
///
/// impl Renderer for WebGlRenderer {
///     fn backend(&self) -> &'static str { "webgl2" }
///
///     fn set_size(&mut self, width: u32, height: u32) {
///         // Resize the drawing buffer...
///     }
///
///     fn render(&mut self, frame: &FrameData) {
///         // Clear, upload instances, draw...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "buffer", "webgl2", "wgpu").
    fn backend(&self) -> &'static str;

    /// Resize the drawing surface in physical pixels.
    fn set_size(&mut self, width: u32, height: u32);

    /// Draw one frame.
    fn render(&mut self, frame: &FrameData);
}
