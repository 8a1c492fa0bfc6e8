/// Source of frame delta time.
pub trait Clock {
    /// Seconds elapsed since the previous call.
    fn delta(&mut self) -> f32;
}

/// Returns the same delta every frame. Deterministic stepping for tests and
/// offline runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Clock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.dt
    }
}

/// Clock driven by host timestamps (e.g. the `requestAnimationFrame`
/// argument, in milliseconds).
///
/// The host calls [`FrameClock::advance_to`] before each frame; `delta`
/// then reports the time since the previous frame. The first frame, and any
/// timestamp that goes backwards, yield 0.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    pending: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the timestamp of the frame about to run.
    pub fn advance_to(&mut self, now_ms: f64) {
        self.pending = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
    }
}

impl Clock for FrameClock {
    fn delta(&mut self) -> f32 {
        // Consumed once so a repeated query without a new timestamp reads 0.
        std::mem::take(&mut self.pending)
    }
}

/// Monotonic wall clock for native hosts.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct InstantClock {
    last: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl InstantClock {
    pub fn new() -> Self {
        Self {
            last: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for InstantClock {
    fn delta(&mut self) -> f32 {
        let now = std::time::Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
