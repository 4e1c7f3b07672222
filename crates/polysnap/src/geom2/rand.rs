//! Random polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for convex and star-shaped vertex
//!   rings used by property tests and benchmarks of the boundary and
//!   containment queries.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, then either keep the star-shaped ring as is or take its
//!   convex hull.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `util::{convex_hull, halfplanes_ccw}`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use super::util::convex_hull;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius around `center`.
    pub base_radius: f64,
    pub center: Vector2<f64>,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform draw from `[-half_width, half_width]`, or 0 for a non-positive width.
fn symmetric<R: Rng>(rng: &mut R, half_width: f64) -> f64 {
    if half_width > 0.0 {
        rng.gen_range(-half_width..=half_width)
    } else {
        0.0
    }
}

/// Draw a star-shaped ring (CCW, generally concave) around `cfg.center`.
///
/// Angles are strictly increasing because the jitter stays below half the
/// spacing. With at least five vertices every angular gap is below π, so the
/// ring is simple and star-shaped around the center.
pub fn draw_star_ring(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let spacing = TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen_range(0.0..TAU)
    } else {
        0.0
    };
    let max_shift = cfg.angle_jitter_frac.clamp(0.0, 0.49) * spacing;
    let stretch = cfg.radial_jitter.max(0.0);
    let radius = cfg.base_radius.max(1e-9);
    (0..n)
        .map(|k| {
            let theta = phase + k as f64 * spacing + symmetric(&mut rng, max_shift);
            let r = radius * (1.0 + symmetric(&mut rng, stretch)).max(1e-6);
            cfg.center + Vector2::new(theta.cos(), theta.sin()) * r
        })
        .collect()
}

/// Draw a random convex ring (CCW) via radial jitter + convex hull.
pub fn draw_convex_ring(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Vector2<f64>>> {
    convex_hull(&draw_star_ring(cfg, tok))
}
