pub mod api;
pub mod core;
pub mod render;
pub mod targets;
pub mod tracking;

// Re-export key types at crate root for convenience
pub use api::config::FieldConfig;
pub use api::state::FieldState;
pub use core::field::ParticleField;
pub use core::particle::{ColorMode, Particle};
pub use core::rng::Rng;
pub use core::time::FixedTimestep;
pub use render::build_dot_buffer;
pub use render::instance::{DotBuffer, DotInstance};
pub use targets::disc::disc_targets;
pub use targets::glyph::glyph_targets;
pub use targets::skeleton::{connector_points, keypoint_targets};
pub use targets::SceneKind;
pub use tracking::hand::{mirror_to_canvas, HandFrame, BONES, INDEX_FINGER_TIP, KEYPOINT_COUNT};
pub use tracking::influence::InfluenceSource;
