//! Core types: labeled points, matcher configuration, and error taxonomy.
//!
//! - `Point`: immutable labeled 2D point; the id is opaque to the algorithms
//!   and only used to track the matching bijection.
//! - `MatchCfg`: centralizes slope bounds, epsilons, and retry budgets for the
//!   randomized ham-sandwich search.
//! - `MatchError`: the few ways a matcher can reject or give up on an input.

use nalgebra::Vector2;

/// Immutable labeled planar point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub id: u32,
    pub pos: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self {
            id,
            pos: Vector2::new(x, y),
        }
    }

    /// Signed offset of the point within the line family of slope `c`:
    /// the intercept `x·c − y` of the unique member passing through it.
    /// Ordering points by this value orders them across lines of slope `c`.
    #[inline]
    pub fn level(&self, slope: f64) -> f64 {
        self.pos.x * slope - self.pos.y
    }
}

/// Matcher configuration (slope bracket, tolerances, retry budgets).
#[derive(Clone, Copy, Debug)]
pub struct MatchCfg {
    /// Initial slope bracket. Wide constants work for well-separated clouds;
    /// the search widens geometrically if the bracket misses the crossing.
    pub slope_lo: f64,
    pub slope_hi: f64,
    /// Additive jitter on accepted probe slopes, breaking ties with data
    /// points lying exactly on a candidate line.
    pub slope_jitter: f64,
    /// Intercept nudge classifying on-line points as "below" the cut.
    pub eps_side: f64,
    /// Interval width at which candidate pruning first triggers; the
    /// threshold quarters after every pruning round.
    pub prune_width: f64,
    /// Random (p, q) slope draws per probe before falling back to the
    /// interval midpoint.
    pub max_probe_retries: usize,
    /// Geometric widenings of the initial bracket before giving up.
    pub max_widenings: u32,
    /// Outer iteration budget per input point; exceeding it means the
    /// search is not converging on this input.
    pub max_iters_per_point: usize,
}

impl Default for MatchCfg {
    fn default() -> Self {
        Self {
            slope_lo: -1e4,
            slope_hi: 1e4,
            slope_jitter: 1e-8,
            eps_side: 1e-12,
            prune_width: 10.0,
            max_probe_retries: 64,
            max_widenings: 8,
            max_iters_per_point: 64,
        }
    }
}

/// Failure modes of the matchers. Degenerate collinearity is absorbed by
/// epsilon nudging and never surfaces here; empty input is a valid no-op.
#[derive(Clone, Copy, Debug, thiserror::Error, PartialEq)]
pub enum MatchError {
    #[error("point sets differ in size ({p} vs {q})")]
    SizeMismatch { p: usize, q: usize },
    #[error("median levels do not cross inside the slope bracket [{lo}, {hi}]")]
    Unbracketed { lo: f64, hi: f64 },
    #[error("bisection failed to converge after {iters} probes")]
    BisectionStalled { iters: usize },
    #[error("cut splits the two sets unevenly ({upper_p} vs {upper_q} above)")]
    UnbalancedCut { upper_p: usize, upper_q: usize },
    #[error("input is not strictly separated by the axis x = {axis}")]
    Unseparated { axis: f64 },
}
