use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::field::FieldContext;
use crate::core::time::Clock;
use crate::renderer::traits::Renderer;

/// Cloneable stop flag for [`AnimationLoop::run`]. Any clone can raise it.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Lower the flag so the loop can be started again.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Drives a field frame by frame: read the clock, move every item pair,
/// hand the result to the renderer.
#[derive(Debug, Default)]
pub struct AnimationLoop {
    frames: u64,
    elapsed: f64,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single frame. Returns the delta time that was applied.
    pub fn frame<C: Clock, R: Renderer>(
        &mut self,
        ctx: &mut FieldContext,
        clock: &mut C,
        renderer: &mut R,
    ) -> f32 {
        let dt = clock.delta();
        ctx.animate(dt);
        renderer.render(&ctx.frame_data());

        self.frames += 1;
        self.elapsed += dt as f64;
        dt
    }

    /// Run frames back to back until `stop` is raised. Returns the number of
    /// frames run by this call.
    ///
    /// The flag is checked before every frame, so a signal raised during a
    /// frame (e.g. by the renderer) ends the loop after that frame.
    pub fn run<C: Clock, R: Renderer>(
        &mut self,
        ctx: &mut FieldContext,
        clock: &mut C,
        renderer: &mut R,
        stop: &StopSignal,
    ) -> u64 {
        let start = self.frames;
        while !stop.is_stopped() {
            self.frame(ctx, clock, renderer);
        }
        log::info!("animation loop stopped after {} frames", self.frames - start);
        self.frames - start
    }

    /// Run exactly `count` frames.
    pub fn run_frames<C: Clock, R: Renderer>(
        &mut self,
        ctx: &mut FieldContext,
        clock: &mut C,
        renderer: &mut R,
        count: u64,
    ) {
        for _ in 0..count {
            self.frame(ctx, clock, renderer);
        }
    }

    /// Total frames run.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sum of all applied deltas, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::item::ItemDesc;
    use crate::components::mesh::{Geometry, Material, Mesh};
    use crate::core::time::FixedClock;
    use crate::renderer::traits::FrameData;
    use glam::Vec3;

    /// Records what it was asked to draw; optionally raises a stop signal.
    struct RecordingRenderer {
        renders: u64,
        first_x: Vec<f32>,
        stop_after: Option<(u64, StopSignal)>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self { renders: 0, first_x: Vec::new(), stop_after: None }
        }
    }

    impl Renderer for RecordingRenderer {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn set_size(&mut self, _width: u32, _height: u32) {}

        fn render(&mut self, frame: &FrameData) {
            self.renders += 1;
            if let Some(mesh) = frame.scene.iter().next() {
                self.first_x.push(mesh.transform.position.x);
            }
            if let Some((limit, stop)) = &self.stop_after {
                if self.renders >= *limit {
                    stop.stop();
                }
            }
        }
    }

    fn ctx_with_pair() -> FieldContext {
        let mut ctx = FieldContext::default();
        let mesh = || Mesh::new(Geometry::tetrahedron(50.0), Material::default());
        ctx.spawn_pair(mesh(), mesh(), &ItemDesc::new(Vec3::new(2.0, 0.0, 0.0)).with_velocity(1.0))
            .unwrap();
        ctx
    }

    #[test]
    fn frame_animates_then_renders() {
        let mut ctx = ctx_with_pair();
        let mut clock = FixedClock::new(0.25);
        let mut renderer = RecordingRenderer::new();
        let mut lp = AnimationLoop::new();

        let dt = lp.frame(&mut ctx, &mut clock, &mut renderer);

        assert_eq!(dt, 0.25);
        assert_eq!(renderer.renders, 1);
        // The renderer saw the already-moved mesh.
        assert!((renderer.first_x[0] - 2.0 * 0.25f32.cos()).abs() < 1e-5);
        assert_eq!(ctx.items.items()[0].angle(), ctx.items.effects()[0].angle());
    }

    #[test]
    fn run_frames_is_bounded() {
        let mut ctx = ctx_with_pair();
        let mut clock = FixedClock::new(1.0 / 60.0);
        let mut renderer = RecordingRenderer::new();
        let mut lp = AnimationLoop::new();

        lp.run_frames(&mut ctx, &mut clock, &mut renderer, 120);

        assert_eq!(lp.frames(), 120);
        assert_eq!(renderer.renders, 120);
        assert!((lp.elapsed() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn run_stops_on_signal() {
        let mut ctx = ctx_with_pair();
        let mut clock = FixedClock::new(0.01);
        let stop = StopSignal::new();
        let mut renderer = RecordingRenderer::new();
        renderer.stop_after = Some((37, stop.clone()));
        let mut lp = AnimationLoop::new();

        let ran = lp.run(&mut ctx, &mut clock, &mut renderer, &stop);

        assert_eq!(ran, 37);
        assert_eq!(renderer.renders, 37);
        assert!(stop.is_stopped());
    }

    #[test]
    fn raised_signal_runs_no_frames() {
        let mut ctx = ctx_with_pair();
        let mut clock = FixedClock::new(0.01);
        let stop = StopSignal::new();
        stop.stop();
        let mut renderer = RecordingRenderer::new();

        let ran = AnimationLoop::new().run(&mut ctx, &mut clock, &mut renderer, &stop);
        assert_eq!(ran, 0);
        assert_eq!(renderer.renders, 0);

        stop.reset();
        assert!(!stop.is_stopped());
    }
}
