use glam::Vec2;

/// The single moving repulsion source (tracked fingertip or cursor).
///
/// Pure current-sample state: each detection replaces the previous one,
/// no trajectory is kept. A detection that stops arriving goes stale
/// after a configurable bound and the source deactivates itself, so a
/// stalled detector cannot pin the field in a repelled state forever.
#[derive(Debug, Clone, Copy)]
pub struct InfluenceSource {
    pos: Vec2,
    active: bool,
    since_seen: f32,
}

impl InfluenceSource {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            active: false,
            since_seen: 0.0,
        }
    }

    /// Record a fresh detection at canvas coordinates.
    pub fn update(&mut self, pos: Vec2) {
        self.pos = pos;
        self.active = true;
        self.since_seen = 0.0;
    }

    /// The detector reported no tracked entity this result.
    pub fn clear(&mut self) {
        self.active = false;
    }

    /// Advance the staleness clock; deactivates past `stale_after` seconds.
    pub fn age(&mut self, dt: f32, stale_after: f32) {
        if self.active {
            self.since_seen += dt;
            if self.since_seen > stale_after {
                self.active = false;
            }
        }
    }

    /// Current position if the source is active.
    pub fn sample(&self) -> Option<Vec2> {
        self.active.then_some(self.pos)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }
}

impl Default for InfluenceSource {
    fn default() -> Self {
        Self::new()
    }
}
