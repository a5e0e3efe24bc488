use std::f32::consts::TAU;

use glam::Vec2;

use crate::core::rng::Rng;

/// Random placement of `count` points within a disc around `center`.
///
/// The radius is drawn area-uniformly (`sqrt(u) * max_radius`): a naive
/// `u * max_radius` draw clusters points toward the center because inner
/// annuli have less area per unit radius.
pub fn disc_targets(count: usize, center: Vec2, max_radius: f32, rng: &mut Rng) -> Vec<Vec2> {
    (0..count)
        .map(|_| {
            let angle = rng.next_f32() * TAU;
            let r = rng.next_f32().sqrt() * max_radius;
            center + Vec2::new(angle.cos(), angle.sin()) * r
        })
        .collect()
}
