use bytemuck::{Pod, Zeroable};

/// Per-dot render data read directly out of WASM linear memory by the
/// canvas renderer. Must match the JS protocol: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DotInstance {
    /// X position in canvas pixels.
    pub x: f32,
    /// Y position in canvas pixels.
    pub y: f32,
    /// Disc radius in pixels.
    pub radius: f32,
    /// Hue in degrees; JS draws `hsl(hue, 100%, 50%)`.
    pub hue: f32,
}

impl DotInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Snapshot buffer of everything to draw this frame.
pub struct DotBuffer {
    instances: Vec<DotInstance>,
}

impl DotBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, dot: DotInstance) {
        self.instances.push(dot);
    }

    pub fn dot_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy JS reads.
    pub fn dots_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn iter(&self) -> impl Iterator<Item = &DotInstance> {
        self.instances.iter()
    }
}

impl Default for DotBuffer {
    fn default() -> Self {
        Self::new()
    }
}
