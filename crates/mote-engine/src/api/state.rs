use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::core::field::ParticleField;
use crate::core::rng::Rng;
use crate::targets::disc::disc_targets;
use crate::targets::glyph::glyph_targets;
use crate::targets::skeleton::{connector_points, keypoint_targets};
use crate::targets::SceneKind;
use crate::tracking::hand::{HandFrame, INDEX_FINGER_TIP, KEYPOINT_COUNT};
use crate::tracking::influence::InfluenceSource;

/// Top-level field state owned by the animation driver: the particle
/// collection, the influence source, the active scene and the latest
/// detection cell. No process-wide singletons — the runner holds exactly
/// one of these.
pub struct FieldState {
    pub field: ParticleField,
    pub influence: InfluenceSource,
    config: FieldConfig,
    scene: SceneKind,
    bounds: Vec2,
    rng: Rng,
    /// Most recent detection, written by the bridge whenever the detector
    /// completes and consumed once per tick. Detection frequency is
    /// decoupled from tick frequency; ticks never wait on this.
    pending: Option<HandFrame>,
    /// Ephemeral bone fill-in dots, fully determined by the last frame.
    connectors: Vec<Vec2>,
}

impl FieldState {
    /// Create a field covering a `width` x `height` canvas, seeded with
    /// the idle disc scene.
    pub fn new(width: f32, height: f32, config: FieldConfig, seed: u64) -> Self {
        let mut state = Self {
            field: ParticleField::new(),
            influence: InfluenceSource::new(),
            config,
            scene: SceneKind::Sphere,
            bounds: Vec2::new(width, height),
            rng: Rng::new(seed),
            pending: None,
            connectors: Vec::new(),
        };
        state.set_sphere();
        state
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn scene(&self) -> SceneKind {
        self.scene
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn connectors(&self) -> &[Vec2] {
        &self.connectors
    }

    fn center(&self) -> Vec2 {
        self.bounds * 0.5
    }

    /// Disc layout for the current bounds. The radius is clamped so the
    /// layout stays inside the canvas even after a shrink.
    fn disc_layout(&mut self) -> Vec<Vec2> {
        let radius = self.config.disc_radius.min(self.bounds.min_element() * 0.5);
        disc_targets(
            self.config.sphere_count,
            self.center(),
            radius,
            &mut self.rng,
        )
    }

    /// Apply a new config. The disc scene re-lays itself out since its
    /// count and radius may have changed; other scenes pick the new
    /// parameters up on their next regeneration.
    pub fn apply_config(&mut self, config: FieldConfig) {
        self.config = config;
        if self.scene == SceneKind::Sphere {
            self.set_sphere();
        }
    }

    /// Switch to the idle disc scene. Explicit regeneration: the
    /// collection is replaced.
    pub fn set_sphere(&mut self) {
        let targets = self.disc_layout();
        self.field
            .reseed(&targets, self.bounds, &self.config, &mut self.rng);
        self.scene = SceneKind::Sphere;
        self.connectors.clear();
        log::debug!("scene: sphere ({} particles)", self.field.len());
    }

    /// Switch to the text scene from a pre-rendered RGBA raster of the
    /// glyphs. Rest positions are remapped in place so the transition
    /// stays continuous; excess particles park at the canvas center.
    ///
    /// A raster with no covered pixels (e.g. the empty string) falls back
    /// to the disc scene. Returns `false` only for a malformed raster.
    pub fn set_text_raster(&mut self, rgba: &[u8], width: usize, height: usize) -> bool {
        let targets = match glyph_targets(
            rgba,
            width,
            height,
            self.config.glyph_stride,
            self.config.alpha_threshold,
        ) {
            Some(t) => t,
            None => {
                log::warn!(
                    "rejecting text raster: {} bytes for {}x{}",
                    rgba.len(),
                    width,
                    height
                );
                return false;
            }
        };

        if targets.is_empty() {
            self.set_sphere();
            return true;
        }

        if self.field.is_empty() {
            self.field
                .reseed(&targets, self.bounds, &self.config, &mut self.rng);
        } else {
            self.field.retarget(
                &targets,
                self.center(),
                self.bounds,
                &self.config,
                &mut self.rng,
            );
        }
        self.scene = SceneKind::Text;
        self.connectors.clear();
        log::debug!("scene: text ({} targets)", targets.len());
        true
    }

    /// Switch to the live skeleton scene: 21 persistent joint particles,
    /// parked at the canvas center until the first detection remaps them.
    pub fn set_skeleton(&mut self) {
        let targets = [self.center(); KEYPOINT_COUNT];
        self.field
            .reseed(&targets, self.bounds, &self.config, &mut self.rng);
        self.scene = SceneKind::Skeleton;
        self.connectors.clear();
        log::debug!("scene: skeleton");
    }

    /// Canvas resized. The disc scene re-lays itself out inside the new
    /// bounds (rest positions remapped in place, count unchanged); the
    /// text scene waits for the glue to re-rasterize at the new size and
    /// the skeleton remaps on its next detection anyway.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        if self.scene == SceneKind::Sphere {
            let targets = self.disc_layout();
            self.field.retarget(
                &targets,
                self.center(),
                self.bounds,
                &self.config,
                &mut self.rng,
            );
        }
    }

    /// Latest detection from the bridge: 21 normalized keypoints as
    /// `[x0, y0, x1, y1, ...]`. Malformed payloads are dropped.
    pub fn hand_frame(&mut self, data: &[f32]) {
        match HandFrame::from_flat(data) {
            Some(frame) => self.pending = Some(frame),
            None => log::warn!("dropping hand frame with {} floats", data.len()),
        }
    }

    /// The detector reported no hand this result.
    pub fn hand_lost(&mut self) {
        self.pending = None;
        self.influence.clear();
        self.connectors.clear();
    }

    /// One atomic tick: consume the latest detection (if any), age the
    /// influence, advance every particle.
    pub fn tick(&mut self, dt: f32) {
        if let Some(frame) = self.pending.take() {
            let joints = keypoint_targets(&frame, self.bounds);
            self.influence.update(joints[INDEX_FINGER_TIP]);
            if self.scene == SceneKind::Skeleton {
                // seek-to-target: same integrator, the targets just move
                // every detection frame
                self.field.retarget(
                    &joints,
                    self.center(),
                    self.bounds,
                    &self.config,
                    &mut self.rng,
                );
                self.connectors = connector_points(&joints, self.config.bone_subdivisions);
            }
        }
        self.influence.age(dt, self.config.stale_after);
        self.field.tick(&self.influence, &self.config);
    }
}
