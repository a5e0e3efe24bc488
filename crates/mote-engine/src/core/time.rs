/// Fixed timestep accumulator.
///
/// The host's per-frame callback delivers variable deltas; the field
/// integrator uses per-tick constants, so ticks must run at a fixed rate
/// for the motion to be frame-rate independent.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// Never run more than this many ticks for a single frame delta, so a
    /// long-stalled tab does not fast-forward the whole backlog at once.
    const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed
    /// ticks to run this frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
