use mote_engine::{build_dot_buffer, DotBuffer, FieldConfig, FieldState, FixedTimestep};

/// Drives the field from the browser's frame callback.
///
/// JS holds a single runner in `thread_local!` storage and calls the free
/// functions exported from `lib.rs`; between `field_tick` calls it reads
/// the dot buffer straight out of WASM linear memory.
pub struct FieldRunner {
    state: FieldState,
    dots: DotBuffer,
    timestep: FixedTimestep,
}

impl FieldRunner {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let config = FieldConfig::default();
        let timestep = FixedTimestep::new(config.fixed_dt);
        Self {
            state: FieldState::new(width, height, config, seed),
            dots: DotBuffer::new(),
            timestep,
        }
    }

    /// Replace the config from a JSON string. A parse failure keeps the
    /// previous config untouched.
    pub fn load_config(&mut self, json: &str) {
        match FieldConfig::from_json(json) {
            Ok(config) => {
                self.timestep = FixedTimestep::new(config.fixed_dt);
                self.state.apply_config(config);
            }
            Err(e) => log::warn!("bad field config, keeping previous: {}", e),
        }
    }

    /// One frame: run the accumulated fixed ticks, then rebuild the dot
    /// buffer for the renderer.
    pub fn tick(&mut self, dt: f32) {
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.state.tick(self.timestep.dt());
        }
        build_dot_buffer(&self.state, &mut self.dots);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    pub fn set_sphere(&mut self) {
        self.state.set_sphere();
    }

    pub fn set_text_raster(&mut self, rgba: &[u8], width: u32, height: u32) -> bool {
        self.state
            .set_text_raster(rgba, width as usize, height as usize)
    }

    pub fn set_skeleton(&mut self) {
        self.state.set_skeleton();
    }

    pub fn hand_frame(&mut self, landmarks: &[f32]) {
        self.state.hand_frame(landmarks);
    }

    pub fn hand_lost(&mut self) {
        self.state.hand_lost();
    }

    // ---- Accessors for zero-copy JS reads ----

    pub fn dots_ptr(&self) -> *const f32 {
        self.dots.dots_ptr()
    }

    pub fn dot_count(&self) -> u32 {
        self.dots.dot_count()
    }

    pub fn tracking_active(&self) -> bool {
        self.state.influence.is_active()
    }

    pub fn scene_kind(&self) -> u32 {
        self.state.scene().as_u32()
    }
}
