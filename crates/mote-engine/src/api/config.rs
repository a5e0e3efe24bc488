use serde::{Deserialize, Serialize};

use crate::core::particle::ColorMode;

/// Tunable parameters for the field, loaded from a JSON string at runtime.
///
/// Every field has a default matching the reference visualization, so an
/// empty object `{}` is a valid config and partial overrides are fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Repulsion reach in canvas pixels.
    #[serde(default = "default_interaction_radius")]
    pub interaction_radius: f32,
    /// Per-tick exponential decay toward rest (0..1).
    #[serde(default = "default_relax_rate")]
    pub relax_rate: f32,
    /// Particle count for the disc scene.
    #[serde(default = "default_sphere_count")]
    pub sphere_count: usize,
    /// Disc scene radius in pixels.
    #[serde(default = "default_disc_radius")]
    pub disc_radius: f32,
    /// Sample every Nth raster pixel in both axes for glyph coverage.
    #[serde(default = "default_glyph_stride")]
    pub glyph_stride: usize,
    /// Alpha cutoff for keeping a glyph sample (0-255).
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,
    /// Lower bound for per-particle responsiveness.
    #[serde(default = "default_responsiveness_min")]
    pub responsiveness_min: f32,
    /// Upper bound for per-particle responsiveness.
    #[serde(default = "default_responsiveness_max")]
    pub responsiveness_max: f32,
    /// Render radius of a field particle.
    #[serde(default = "default_particle_radius")]
    pub particle_radius: f32,
    /// How particle hues are chosen.
    #[serde(default = "default_color")]
    pub color: ColorMode,
    /// Interpolation segments per skeleton bone.
    #[serde(default = "default_bone_subdivisions")]
    pub bone_subdivisions: usize,
    /// Hue for the ephemeral bone connector dots.
    #[serde(default = "default_connector_hue")]
    pub connector_hue: f32,
    /// Render radius of a connector dot.
    #[serde(default = "default_connector_radius")]
    pub connector_radius: f32,
    /// Seconds without a detection before the influence deactivates.
    #[serde(default = "default_stale_after")]
    pub stale_after: f32,
    /// Fixed timestep in seconds.
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: f32,
}

fn default_interaction_radius() -> f32 {
    120.0
}

fn default_relax_rate() -> f32 {
    0.1
}

fn default_sphere_count() -> usize {
    1500
}

fn default_disc_radius() -> f32 {
    120.0
}

fn default_glyph_stride() -> usize {
    4
}

fn default_alpha_threshold() -> u8 {
    128
}

fn default_responsiveness_min() -> f32 {
    2.0
}

fn default_responsiveness_max() -> f32 {
    32.0
}

fn default_particle_radius() -> f32 {
    2.0
}

fn default_color() -> ColorMode {
    ColorMode::Fixed(0.0)
}

fn default_bone_subdivisions() -> usize {
    8
}

fn default_connector_hue() -> f32 {
    200.0
}

fn default_connector_radius() -> f32 {
    1.5
}

fn default_stale_after() -> f32 {
    0.5
}

fn default_fixed_dt() -> f32 {
    1.0 / 60.0
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            interaction_radius: default_interaction_radius(),
            relax_rate: default_relax_rate(),
            sphere_count: default_sphere_count(),
            disc_radius: default_disc_radius(),
            glyph_stride: default_glyph_stride(),
            alpha_threshold: default_alpha_threshold(),
            responsiveness_min: default_responsiveness_min(),
            responsiveness_max: default_responsiveness_max(),
            particle_radius: default_particle_radius(),
            color: default_color(),
            bone_subdivisions: default_bone_subdivisions(),
            connector_hue: default_connector_hue(),
            connector_radius: default_connector_radius(),
            stale_after: default_stale_after(),
            fixed_dt: default_fixed_dt(),
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = FieldConfig::from_json("{}").unwrap();
        assert_eq!(cfg.interaction_radius, 120.0);
        assert_eq!(cfg.relax_rate, 0.1);
        assert_eq!(cfg.sphere_count, 1500);
        assert_eq!(cfg.glyph_stride, 4);
        assert_eq!(cfg.alpha_threshold, 128);
        assert_eq!(cfg.bone_subdivisions, 8);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = FieldConfig::from_json(r#"{ "interaction_radius": 140.0, "sphere_count": 2000 }"#)
            .unwrap();
        assert_eq!(cfg.interaction_radius, 140.0);
        assert_eq!(cfg.sphere_count, 2000);
        assert_eq!(cfg.relax_rate, 0.1);
    }

    #[test]
    fn color_mode_parses() {
        let cfg = FieldConfig::from_json(r#"{ "color": { "range": { "min": 300.0, "max": 360.0 } } }"#)
            .unwrap();
        match cfg.color {
            ColorMode::Range { min, max } => {
                assert_eq!(min, 300.0);
                assert_eq!(max, 360.0);
            }
            other => panic!("expected range color mode, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(FieldConfig::from_json("{ not json").is_err());
    }
}
