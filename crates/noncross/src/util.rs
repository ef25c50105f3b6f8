//! Orientation and segment-intersection predicates, plus matching validation
//! helpers shared by tests and the CLI harness.

use nalgebra::Vector2;

use crate::types::Point;

/// Signed area of the parallelogram spanned by `b − a` and `c − a`.
/// Positive iff a→b→c turns counterclockwise.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// True iff segments (a1, a2) and (b1, b2) intersect, excluding contacts at
/// shared endpoints. Collinear overlap counts as an intersection.
pub fn segments_cross(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
) -> bool {
    if a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2 {
        return false;
    }
    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    (d1 == 0.0 && on_segment(b1, b2, a1))
        || (d2 == 0.0 && on_segment(b1, b2, a2))
        || (d3 == 0.0 && on_segment(a1, a2, b1))
        || (d4 == 0.0 && on_segment(a1, a2, b2))
}

/// Number of crossing pairs among the matched segments (p[i], q[i]).
/// A valid non-crossing matching yields 0.
pub fn crossing_count(p: &[Point], q: &[Point]) -> usize {
    debug_assert_eq!(p.len(), q.len());
    let mut count = 0;
    for i in 0..p.len() {
        for j in (i + 1)..p.len() {
            if segments_cross(p[i].pos, q[i].pos, p[j].pos, q[j].pos) {
                count += 1;
            }
        }
    }
    count
}

/// True iff `a` and `b` carry the same ids (as multisets).
pub fn same_ids(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut ia: Vec<u32> = a.iter().map(|p| p.id).collect();
    let mut ib: Vec<u32> = b.iter().map(|p| p.id).collect();
    ia.sort_unstable();
    ib.sort_unstable();
    ia == ib
}

/// Full matching check: output sides are id-bijective with the inputs and the
/// matched segments are pairwise non-crossing.
pub fn verify_matching(p_in: &[Point], q_in: &[Point], p_out: &[Point], q_out: &[Point]) -> bool {
    p_out.len() == q_out.len()
        && same_ids(p_in, p_out)
        && same_ids(q_in, q_out)
        && crossing_count(p_out, q_out) == 0
}
