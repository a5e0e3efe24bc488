//! Render snapshot: flattens the field into a dot buffer the JS canvas
//! renderer reads. Stateless with respect to the field logic; headless
//! tests never touch it.

pub mod instance;

use crate::api::state::FieldState;
use instance::{DotBuffer, DotInstance};

/// Rebuild the dot buffer from the field plus the ephemeral skeleton
/// connector dots (which share one color, distinct from the particles).
pub fn build_dot_buffer(state: &FieldState, buf: &mut DotBuffer) {
    buf.clear();
    for p in state.field.iter() {
        buf.push(DotInstance {
            x: p.pos.x,
            y: p.pos.y,
            radius: p.radius,
            hue: p.hue,
        });
    }
    let config = state.config();
    for c in state.connectors() {
        buf.push(DotInstance {
            x: c.x,
            y: c.y,
            radius: config.connector_radius,
            hue: config.connector_hue,
        });
    }
}
