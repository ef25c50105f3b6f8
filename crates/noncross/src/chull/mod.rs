//! Convex-hull peeling matcher.
//!
//! Exact O(n²) alternative to `hscut`, robust to collinear and otherwise
//! degenerate input, and faster in practice for small instances. Works on the
//! union R of both clouds, which must be strictly separated by a vertical
//! axis supplied by the caller.
//!
//! Each layer rebuilds the upper and lower hull chains of the remaining
//! points (Andrew's monotone chain with a cheap support-line early reject),
//! then removes the unique axis-straddling edge of each chain. Those two
//! edges never cross each other, and no later segment can cross them either
//! because everything emitted later lies inside the current hull.

use crate::types::{MatchError, Point};
use crate::util::orient;

/// Guards the support-line slope against a vanishing run.
const EPS_DX: f64 = 1e-12;

/// Non-crossing perfect matching via hull peeling.
///
/// `r` is the disjoint union of the two clouds; points with `x < axis` end up
/// on the left side of the matching (`p'`), points with `x > axis` on the
/// right (`q'`). Fails if any point lies on the axis or the sides are
/// unbalanced. Empty input is a no-op.
pub fn chull(r: &[Point], axis: f64) -> Result<(Vec<Point>, Vec<Point>), MatchError> {
    let left = r.iter().filter(|t| t.pos.x < axis).count();
    let right = r.iter().filter(|t| t.pos.x > axis).count();
    if left + right != r.len() {
        return Err(MatchError::Unseparated { axis });
    }
    if left != right {
        return Err(MatchError::SizeMismatch { p: left, q: right });
    }

    let mut rest: Vec<Point> = r.to_vec();
    rest.sort_by(|s, t| {
        s.pos
            .x
            .partial_cmp(&t.pos.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut p_out: Vec<Point> = Vec::with_capacity(left);
    let mut q_out: Vec<Point> = Vec::with_capacity(right);
    let mut upper: Vec<Point> = Vec::new();
    let mut lower: Vec<Point> = Vec::new();

    while !rest.is_empty() {
        let r0 = rest[0];
        let rn = rest[rest.len() - 1];

        // Support lines from the current chain tip to the right endpoint.
        // Points under (over) them cannot join the upper (lower) chain, which
        // skips the exact stack test for most interior points.
        let mut ku = (rn.pos.y - r0.pos.y) / (rn.pos.x - r0.pos.x + EPS_DX);
        let mut nu = r0.pos.y - ku * r0.pos.x;
        let mut kl = ku;
        let mut nl = nu;

        upper.clear();
        lower.clear();
        upper.push(r0);
        lower.push(r0);

        for &t in &rest[1..rest.len() - 1] {
            if t.pos.y > ku * t.pos.x + nu {
                while chain_turns_left(&upper, t) {
                    upper.pop();
                }
                upper.push(t);
                ku = (rn.pos.y - t.pos.y) / (rn.pos.x - t.pos.x + EPS_DX);
                nu = t.pos.y - ku * t.pos.x;
            } else if t.pos.y < kl * t.pos.x + nl {
                while chain_turns_right(&lower, t) {
                    lower.pop();
                }
                lower.push(t);
                kl = (rn.pos.y - t.pos.y) / (rn.pos.x - t.pos.x + EPS_DX);
                nl = t.pos.y - kl * t.pos.x;
            }
        }

        // Close both chains against the right endpoint.
        while chain_turns_left(&upper, rn) {
            upper.pop();
        }
        while chain_turns_right(&lower, rn) {
            lower.pop();
        }
        upper.push(rn);
        lower.push(rn);

        let (u1, u2) = straddling_edge(&upper, axis).ok_or(MatchError::Unseparated { axis })?;
        let (v1, v2) = straddling_edge(&lower, axis).ok_or(MatchError::Unseparated { axis })?;

        rest.retain(|t| t.id != u1.id && t.id != u2.id);
        p_out.push(u1);
        q_out.push(u2);

        // When the layer has shrunk to the two straddling points the chains
        // share the edge; emitting it once keeps the removals consistent.
        if v1.id != u1.id && v2.id != u2.id {
            rest.retain(|t| t.id != v1.id && t.id != v2.id);
            p_out.push(v1);
            q_out.push(v2);
        }
    }

    Ok((p_out, q_out))
}

/// Upper-chain stack test: the chain tip must be popped while the incoming
/// point makes the last two chain points a counterclockwise turn.
#[inline]
fn chain_turns_left(chain: &[Point], t: Point) -> bool {
    chain.len() > 1
        && orient(
            chain[chain.len() - 2].pos,
            chain[chain.len() - 1].pos,
            t.pos,
        ) > 0.0
}

#[inline]
fn chain_turns_right(chain: &[Point], t: Point) -> bool {
    chain.len() > 1
        && orient(
            chain[chain.len() - 2].pos,
            chain[chain.len() - 1].pos,
            t.pos,
        ) < 0.0
}

/// The unique chain edge whose endpoints straddle the axis.
#[inline]
fn straddling_edge(chain: &[Point], axis: f64) -> Option<(Point, Point)> {
    chain
        .windows(2)
        .find(|w| w[0].pos.x < axis && w[1].pos.x > axis)
        .map(|w| (w[0], w[1]))
}
