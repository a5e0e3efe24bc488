use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::rng::Rng;

/// How particle hues are chosen at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// All particles share one hue (degrees).
    Fixed(f32),
    /// Pick a hue uniformly from [min, max) per particle.
    Range { min: f32, max: f32 },
}

impl ColorMode {
    pub fn pick(&self, rng: &mut Rng) -> f32 {
        match *self {
            ColorMode::Fixed(hue) => hue,
            ColorMode::Range { min, max } => rng.next_range(min, max),
        }
    }
}

/// A single point mass in the field.
///
/// `pos` is mutated every tick; `rest` is mutated only when the target
/// generator reassigns targets. Everything else is fixed at creation.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Current rendered location.
    pub pos: Vec2,
    /// Position the particle relaxes toward when not perturbed.
    pub rest: Vec2,
    /// Render size.
    pub radius: f32,
    /// Color hue in degrees.
    pub hue: f32,
    /// Per-particle coefficient scaling repulsion displacement.
    pub responsiveness: f32,
}

impl Particle {
    /// Advance one tick. `probe` is the active influence position, if any.
    ///
    /// Inside `interaction_radius` the particle is pushed away from the
    /// probe with a force falling off linearly to zero at the boundary.
    /// Otherwise it relaxes toward `rest` by a first-order exponential
    /// decay, which converges without overshoot.
    pub fn tick(&mut self, probe: Option<Vec2>, interaction_radius: f32, relax_rate: f32) {
        if let Some(src) = probe {
            let d = src - self.pos;
            let dist = d.length();
            if dist < interaction_radius {
                // dist == 0 has no direction; sit out this tick rather
                // than propagate NaN into the position
                if dist > 0.0 {
                    let force = (interaction_radius - dist) / interaction_radius;
                    self.pos -= d / dist * force * self.responsiveness;
                }
                return;
            }
        }
        self.pos += (self.rest - self.pos) * relax_rate;
    }
}
