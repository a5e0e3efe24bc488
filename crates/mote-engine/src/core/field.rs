use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::core::particle::Particle;
use crate::core::rng::Rng;
use crate::tracking::influence::InfluenceSource;

/// Owns the particle collection. Densely packed plain structs; after a
/// scene is populated no per-particle allocation happens on the tick path.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Replace the collection. One particle per target, spawned at a
    /// random position inside `bounds` so the scene assembles visibly.
    pub fn reseed(&mut self, targets: &[Vec2], bounds: Vec2, config: &FieldConfig, rng: &mut Rng) {
        self.particles.clear();
        self.particles.reserve(targets.len());
        for &t in targets {
            self.particles.push(Self::spawn(t, bounds, config, rng));
        }
    }

    /// Remap rest positions in place, preserving particle identity so the
    /// transition stays continuous. Excess particles are parked at
    /// `fallback` (never left pointing at stale geometry); missing ones
    /// are grown.
    pub fn retarget(
        &mut self,
        targets: &[Vec2],
        fallback: Vec2,
        bounds: Vec2,
        config: &FieldConfig,
        rng: &mut Rng,
    ) {
        let have = self.particles.len();
        let want = targets.len();

        for (p, &t) in self.particles.iter_mut().zip(targets.iter()) {
            p.rest = t;
        }
        if want < have {
            for p in &mut self.particles[want..] {
                p.rest = fallback;
            }
        } else {
            for &t in &targets[have..] {
                self.particles.push(Self::spawn(t, bounds, config, rng));
            }
        }
    }

    /// Advance every particle one tick against the influence source.
    pub fn tick(&mut self, influence: &InfluenceSource, config: &FieldConfig) {
        let probe = influence.sample();
        for p in &mut self.particles {
            p.tick(probe, config.interaction_radius, config.relax_rate);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn spawn(rest: Vec2, bounds: Vec2, config: &FieldConfig, rng: &mut Rng) -> Particle {
        Particle {
            pos: Vec2::new(rng.next_f32() * bounds.x, rng.next_f32() * bounds.y),
            rest,
            radius: config.particle_radius,
            hue: config.color.pick(rng),
            responsiveness: rng.next_range(config.responsiveness_min, config.responsiveness_max),
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn fixtures() -> (FieldConfig, Rng) {
        (FieldConfig::default(), Rng::new(42))
    }

    #[test]
    fn reseed_matches_target_count() {
        let (config, mut rng) = fixtures();
        let mut field = ParticleField::new();
        let targets = vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)];
        field.reseed(&targets, BOUNDS, &config, &mut rng);

        assert_eq!(field.len(), 2);
        let rests: Vec<Vec2> = field.iter().map(|p| p.rest).collect();
        assert_eq!(rests, targets);
        for p in field.iter() {
            assert!(p.pos.x >= 0.0 && p.pos.x < BOUNDS.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < BOUNDS.y);
            assert!((config.responsiveness_min..config.responsiveness_max)
                .contains(&p.responsiveness));
        }
    }

    #[test]
    fn retarget_shrinking_parks_excess_at_fallback() {
        let (config, mut rng) = fixtures();
        let mut field = ParticleField::new();
        let targets: Vec<Vec2> = (0..10).map(|i| Vec2::new(i as f32, 0.0)).collect();
        field.reseed(&targets, BOUNDS, &config, &mut rng);

        let fallback = Vec2::new(400.0, 300.0);
        field.retarget(&targets[..4], fallback, BOUNDS, &config, &mut rng);

        assert_eq!(field.len(), 10, "shrinking must not destroy particles");
        let rests: Vec<Vec2> = field.iter().map(|p| p.rest).collect();
        assert_eq!(&rests[..4], &targets[..4]);
        for &rest in &rests[4..] {
            assert_eq!(rest, fallback);
        }
    }

    #[test]
    fn retarget_growing_spawns_new_particles() {
        let (config, mut rng) = fixtures();
        let mut field = ParticleField::new();
        field.reseed(&[Vec2::ZERO], BOUNDS, &config, &mut rng);

        let targets: Vec<Vec2> = (0..5).map(|i| Vec2::new(0.0, i as f32)).collect();
        field.retarget(&targets, Vec2::ZERO, BOUNDS, &config, &mut rng);

        assert_eq!(field.len(), 5);
        let rests: Vec<Vec2> = field.iter().map(|p| p.rest).collect();
        assert_eq!(rests, targets);
    }

    #[test]
    fn positions_stay_finite_under_coincident_influence() {
        let (config, mut rng) = fixtures();
        let mut field = ParticleField::new();
        let target = Vec2::new(100.0, 100.0);
        field.reseed(&[target], BOUNDS, &config, &mut rng);

        let mut influence = InfluenceSource::new();
        for _ in 0..200 {
            // pin the influence exactly on top of the particle every tick
            let pos = field.iter().next().unwrap().pos;
            influence.update(pos);
            field.tick(&influence, &config);
            assert!(field.iter().all(|p| p.pos.is_finite()));
        }
    }

    #[test]
    fn inactive_influence_drives_field_to_rest() {
        let (config, mut rng) = fixtures();
        let mut field = ParticleField::new();
        let targets: Vec<Vec2> = (0..50)
            .map(|i| Vec2::new((i % 10) as f32 * 20.0, (i / 10) as f32 * 20.0))
            .collect();
        field.reseed(&targets, BOUNDS, &config, &mut rng);

        let influence = InfluenceSource::new();
        // worst case start error is the canvas diagonal (~1000 px); at
        // relax_rate 0.1 that decays below 0.01 px within ~110 ticks
        for _ in 0..150 {
            field.tick(&influence, &config);
        }
        for p in field.iter() {
            assert!(
                p.pos.distance(p.rest) < 0.01,
                "particle stuck at {:?}, rest {:?}",
                p.pos,
                p.rest
            );
        }
    }

    #[test]
    fn active_influence_repels_nearby_particles() {
        let (config, mut rng) = fixtures();
        let mut field = ParticleField::new();
        let target = Vec2::new(100.0, 100.0);
        field.reseed(&[target], BOUNDS, &config, &mut rng);

        // let it settle first
        let mut influence = InfluenceSource::new();
        for _ in 0..150 {
            field.tick(&influence, &config);
        }

        influence.update(Vec2::new(110.0, 100.0));
        field.tick(&influence, &config);
        let p = field.iter().next().unwrap();
        assert!(
            p.pos.x < 100.0,
            "particle should be pushed away from the probe, was at {:?}",
            p.pos
        );
    }
}
