use ringfield_engine::{
    AnimationLoop, BufferedRenderer, Field, FieldConfig, FieldContext, FieldError, FieldResult,
    FrameClock, ProtocolLayout, Renderer, StopSignal,
};

/// Generic field runner that wires the animation loop to a browser host.
///
/// Each concrete field (e.g., `tetra-ring`) keeps a `thread_local!`
/// FieldRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// The host owns scheduling: it calls [`FieldRunner::frame`] from its
/// `requestAnimationFrame` callback and requests the next frame only while
/// `frame` returns `true`.
pub struct FieldRunner<F: Field> {
    field: F,
    ctx: FieldContext,
    animation: AnimationLoop,
    clock: FrameClock,
    renderer: BufferedRenderer,
    stop: StopSignal,
    initialized: bool,
}

impl<F: Field> FieldRunner<F> {
    /// A field whose own config fails validation runs with the defaults.
    pub fn new(field: F) -> Self {
        let config = field.config();
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::error!("field config rejected, using defaults: {}", err);
                FieldConfig::default()
            }
        };
        let renderer = BufferedRenderer::new(ProtocolLayout::from_config(&config));

        Self {
            field,
            ctx: FieldContext::new(config),
            animation: AnimationLoop::new(),
            clock: FrameClock::new(),
            renderer,
            stop: StopSignal::new(),
            initialized: false,
        }
    }

    /// Override configuration from host JSON. Only allowed before `init`;
    /// fields missing from the JSON keep the field's own values.
    pub fn load_config(&mut self, json: &str) -> FieldResult<()> {
        if self.initialized {
            return Err(FieldError::InvalidConfig(
                "config must be loaded before init".to_string(),
            ));
        }
        let config = self.ctx.config().merged_with_json(json)?;
        log::debug!("config loaded: {} pairs, seed {}", config.total, config.seed);
        self.renderer = BufferedRenderer::new(ProtocolLayout::from_config(&config));
        self.ctx = FieldContext::new(config);
        Ok(())
    }

    /// Build the field for a viewport of the given size. Call once.
    pub fn init(&mut self, width: f32, height: f32) {
        if self.initialized {
            log::warn!("field already initialized, ignoring init");
            return;
        }
        self.ctx.resize(width, height);
        self.renderer.set_size(width as u32, height as u32);
        self.field.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "field ready: {} pairs, {} meshes",
            self.ctx.items.len(),
            self.ctx.scene.len()
        );
    }

    /// Run one frame at host timestamp `timestamp_ms`. Returns whether the
    /// host should schedule another frame.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.initialized || self.stop.is_stopped() {
            return false;
        }
        self.clock.advance_to(timestamp_ms);
        self.animation
            .frame(&mut self.ctx, &mut self.clock, &mut self.renderer);
        true
    }

    /// Empty sizes (e.g. a collapsed canvas) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::debug!("ignoring empty viewport {}x{}", width, height);
            return;
        }
        self.ctx.resize(width, height);
        self.renderer.set_size(width as u32, height as u32);
    }

    /// Stop the loop; subsequent `frame` calls return `false`.
    pub fn stop(&mut self) {
        self.stop.stop();
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn context(&self) -> &FieldContext {
        &self.ctx
    }

    pub fn config(&self) -> &FieldConfig {
        self.ctx.config()
    }

    // ---- Frame buffer accessors for host reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.renderer.frame_ptr()
    }

    pub fn frame_floats(&self) -> &[f32] {
        self.renderer.frame()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.renderer.layout().buffer_total_floats as u32
    }

    pub fn instance_count(&self) -> u32 {
        self.renderer.buffer().instance_count()
    }

    pub fn max_instances(&self) -> u32 {
        self.renderer.layout().max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.renderer.layout().max_lights as u32
    }

    pub fn frame_count(&self) -> u32 {
        self.animation.frames() as u32
    }

    pub fn pair_count(&self) -> u32 {
        self.ctx.items.len() as u32
    }
}
