//! Random separated point clouds (two rectangles + replay tokens).
//!
//! Purpose
//! - Provide the deterministic instance generator used by tests, benches, and
//!   the CLI harness. Instances are what the matchers expect: two equal-size
//!   clouds in disjoint vertical strips around a gap at x = 0.
//!
//! Model
//! - P is uniform in [−hw, −hw/4] × [−hh, hh], Q in [hw/4, hw] × [−hh, hh];
//!   ids run 0..n over P and n..2n over Q.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Two-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of matched pairs (points per side).
    pub pairs: usize,
    /// Half-width of the sampled region; the strips are [−hw, −hw/4] and
    /// [hw/4, hw], leaving a gap of hw/2 around the axis.
    pub half_width: f64,
    /// Half-height of both strips.
    pub half_height: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            pairs: 8,
            half_width: 1000.0,
            half_height: 1000.0,
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
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw a reproducible instance for the given token.
pub fn draw_clouds(cfg: CloudCfg, tok: ReplayToken) -> (Vec<Point>, Vec<Point>) {
    let mut rng = tok.to_std_rng();
    draw_clouds_with(cfg, &mut rng)
}

/// Draw an instance from a caller-supplied RNG.
pub fn draw_clouds_with<R: Rng>(cfg: CloudCfg, rng: &mut R) -> (Vec<Point>, Vec<Point>) {
    let hw = cfg.half_width.max(1e-9);
    let hh = cfg.half_height.max(0.0);
    let n = cfg.pairs;
    let p = (0..n)
        .map(|i| {
            Point::new(
                i as u32,
                rng.gen_range(-hw..=(-hw / 4.0)),
                rng.gen_range(-hh..=hh),
            )
        })
        .collect();
    let q = (0..n)
        .map(|i| {
            Point::new(
                (n + i) as u32,
                rng.gen_range((hw / 4.0)..=hw),
                rng.gen_range(-hh..=hh),
            )
        })
        .collect();
    (p, q)
}
