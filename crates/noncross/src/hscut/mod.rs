//! Ham-sandwich divide-and-conquer matcher.
//!
//! Purpose
//! - Match two equal-size separated point clouds with non-crossing segments
//!   in expected O(n log² n): find a line simultaneously bisecting both
//!   clouds, recurse on the two half-instances, concatenate.
//!
//! Why it works
//! - The cut splits P and Q into identical size profiles (⌊n/2⌋ / ⌈n/2⌉), so
//!   each half-instance is again balanced; no segment of the upper instance
//!   can cross one of the lower instance because the cut line separates them.
//!
//! See `bisect` for how the cut line is found.

pub mod bisect;

pub use bisect::{find_cut, CutLine};

use rand::Rng;

use crate::types::{MatchCfg, MatchError, Point};

/// Non-crossing perfect matching via recursive ham-sandwich bisection.
///
/// Returns reordered copies `(p', q')` of the inputs; same-index elements are
/// matched. `p` and `q` must have equal length. Empty input is a no-op.
pub fn hscut<R: Rng>(
    p: &[Point],
    q: &[Point],
    cfg: MatchCfg,
    rng: &mut R,
) -> Result<(Vec<Point>, Vec<Point>), MatchError> {
    if p.len() != q.len() {
        return Err(MatchError::SizeMismatch {
            p: p.len(),
            q: q.len(),
        });
    }
    hscut_rec(p.to_vec(), q.to_vec(), cfg, rng)
}

fn hscut_rec<R: Rng>(
    p: Vec<Point>,
    q: Vec<Point>,
    cfg: MatchCfg,
    rng: &mut R,
) -> Result<(Vec<Point>, Vec<Point>), MatchError> {
    if p.len() < 2 {
        return Ok((p, q));
    }

    let cut = find_cut(&p, &q, cfg, rng)?;
    let (pu, pl): (Vec<Point>, Vec<Point>) = p.into_iter().partition(|t| cut.is_above(t));
    let (qu, ql): (Vec<Point>, Vec<Point>) = q.into_iter().partition(|t| cut.is_above(t));
    if pu.len() != qu.len() {
        return Err(MatchError::UnbalancedCut {
            upper_p: pu.len(),
            upper_q: qu.len(),
        });
    }

    let (mut p_out, mut q_out) = hscut_rec(pu, qu, cfg, rng)?;
    let (pl, ql) = hscut_rec(pl, ql, cfg, rng)?;
    p_out.extend(pl);
    q_out.extend(ql);
    Ok((p_out, q_out))
}

#[cfg(test)]
mod tests;
