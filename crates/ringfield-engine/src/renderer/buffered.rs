use crate::bridge::protocol::{self, ProtocolLayout, PROTOCOL_VERSION};
use crate::systems::lighting::PointLight;
use crate::systems::render::build_render_buffer;

use super::camera::CameraUniform;
use super::instance::RenderBuffer;
use super::traits::{ClearColor, FrameData, Renderer};

/// Renderer that packs each frame into one flat float buffer laid out per
/// [`ProtocolLayout`]. The browser host reads it straight out of WASM memory
/// and does the actual drawing.
pub struct BufferedRenderer {
    layout: ProtocolLayout,
    frame: Vec<f32>,
    buffer: RenderBuffer,
    camera: CameraUniform,
    lights: Vec<PointLight>,
    ambient: [f32; 3],
    clear: ClearColor,
    width: u32,
    height: u32,
    frames: u64,
}

impl BufferedRenderer {
    pub fn new(layout: ProtocolLayout) -> Self {
        Self {
            frame: vec![0.0; layout.buffer_total_floats],
            buffer: RenderBuffer::with_capacity(layout.max_instances),
            camera: CameraUniform {
                view_proj: [[0.0; 4]; 4],
                eye: [0.0; 4],
            },
            lights: Vec::with_capacity(layout.max_lights),
            ambient: [0.0; 3],
            clear: ClearColor::TRANSPARENT,
            width: 0,
            height: 0,
            frames: 0,
            layout,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// The packed frame: header, camera, lights, instances.
    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    /// Raw pointer to the packed frame for host-side reads.
    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn buffer(&self) -> &RenderBuffer {
        &self.buffer
    }

    pub fn camera(&self) -> &CameraUniform {
        &self.camera
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    pub fn clear_color(&self) -> ClearColor {
        self.clear
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Write header, camera, lights and instances into the frame buffer.
    fn pack_frame(&mut self) {
        let layout = &self.layout;
        let frame = &mut self.frame;

        let header = &mut frame[..protocol::HEADER_FLOATS];
        header[protocol::HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[protocol::HEADER_FRAME_COUNTER] = self.frames as f32;
        header[protocol::HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        header[protocol::HEADER_INSTANCE_COUNT] = self.buffer.instance_count() as f32;
        header[protocol::HEADER_WIREFRAME_SPLIT] = self.buffer.wireframe_split as f32;
        header[protocol::HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        header[protocol::HEADER_LIGHT_COUNT] = self.lights.len() as f32;
        header[protocol::HEADER_AMBIENT_R..=protocol::HEADER_AMBIENT_B].copy_from_slice(&self.ambient);
        header[protocol::HEADER_CLEAR_R..=protocol::HEADER_CLEAR_A].copy_from_slice(&self.clear.to_array());
        header[protocol::HEADER_VIEWPORT_WIDTH] = self.width as f32;
        header[protocol::HEADER_VIEWPORT_HEIGHT] = self.height as f32;

        let camera: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&self.camera));
        frame[layout.camera_offset..layout.camera_offset + camera.len()].copy_from_slice(camera);

        let lights: &[f32] = bytemuck::cast_slice(&self.lights);
        frame[layout.light_data_offset..layout.light_data_offset + lights.len()].copy_from_slice(lights);

        let instances = self.buffer.as_floats();
        frame[layout.instance_data_offset..layout.instance_data_offset + instances.len()]
            .copy_from_slice(instances);
    }
}

impl Renderer for BufferedRenderer {
    fn backend(&self) -> &'static str {
        "buffer"
    }

    fn set_size(&mut self, width: u32, height: u32) {
        log::debug!("render surface resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    fn render(&mut self, frame: &FrameData) {
        build_render_buffer(frame.scene.iter(), &mut self.buffer, self.layout.max_instances);

        self.camera = frame.camera.uniform();

        self.lights.clear();
        self.lights
            .extend(frame.lights.iter().take(self.layout.max_lights).copied());
        self.ambient = frame.lights.ambient();
        self.clear = frame.clear;
        self.frames += 1;
        self.pack_frame();
    }
}
