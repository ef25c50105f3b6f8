//! Median-level oracle.
//!
//! For a point set and a slope `c`, the median level is the rank-⌊m/2⌋
//! intercept among the lines of slope `c` through each point. As `c` sweeps,
//! the difference of two sets' median levels changes sign exactly where a
//! single line of slope `c` bisects both sets, which is what the bisection
//! search in `hscut::bisect` roots for.

use crate::types::Point;

/// Rank-⌊m/2⌋ (0-indexed) value of `p.x·slope − p.y` over `set`.
///
/// Pure and deterministic; O(m) via quickselect. `set` must be non-empty.
pub fn median_level(set: &[Point], slope: f64) -> f64 {
    debug_assert!(!set.is_empty(), "median of empty set");
    let mut levels: Vec<f64> = set.iter().map(|p| p.level(slope)).collect();
    let m = levels.len() / 2;
    let (_, mid, _) = levels.select_nth_unstable_by(m, |a, b| {
        a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
    });
    *mid
}
