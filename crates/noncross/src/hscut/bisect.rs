//! Randomized bisection for the ham-sandwich slope.
//!
//! The search maintains a slope bracket [a, b] across which the difference of
//! the two sets' median levels changes sign, plus shrinking candidate subsets
//! Pi ⊆ P, Qi ⊆ Q of points whose dual lines can still pass through the
//! crossing. Probes are slopes of lines through one random candidate of each
//! side; each probe halves the bracket on average, and once the bracket is
//! narrow the pruner discards dominated candidates, which bounds the expected
//! probe cost. The search ends when one candidate per side survives; the line
//! through those two points is the cut.

use rand::Rng;

use crate::median::median_level;
use crate::types::{MatchCfg, MatchError, Point};

/// Cut line `y = k·x + n` in slope-intercept form.
#[derive(Clone, Copy, Debug)]
pub struct CutLine {
    pub k: f64,
    pub n: f64,
}

impl CutLine {
    /// Line through `p` and `q`, intercept nudged by `eps` so that points
    /// exactly on the line classify as below.
    #[inline]
    pub fn through(p: Point, q: Point, eps: f64) -> Self {
        let k = (q.pos.y - p.pos.y) / (q.pos.x - p.pos.x);
        let n = p.pos.y - k * p.pos.x + eps;
        Self { k, n }
    }

    #[inline]
    pub fn is_above(&self, p: &Point) -> bool {
        p.pos.y > self.k * p.pos.x + self.n
    }
}

/// Sign-change bracket with cached median levels at both ends.
#[derive(Clone, Copy, Debug)]
struct Bracket {
    a: f64,
    b: f64,
    mpa: f64,
    mqa: f64,
    mpb: f64,
    mqb: f64,
}

/// Find a line simultaneously bisecting `p` and `q`.
///
/// Both slices must be non-empty and of equal length ≥ 2. Randomness comes
/// only from `rng`, so a seeded `StdRng` makes the search reproducible.
pub fn find_cut<R: Rng>(
    p: &[Point],
    q: &[Point],
    cfg: MatchCfg,
    rng: &mut R,
) -> Result<CutLine, MatchError> {
    debug_assert_eq!(p.len(), q.len());
    debug_assert!(p.len() >= 2);

    let mut br = bracket(p, q, cfg)?;
    let mut prune_width = cfg.prune_width;
    let mut pi: Vec<Point> = p.to_vec();
    let mut qi: Vec<Point> = q.to_vec();

    let max_iters = cfg.max_iters_per_point.saturating_mul(p.len().max(4));
    let mut iters = 0usize;

    while pi.len() > 1 || qi.len() > 1 {
        iters += 1;
        if iters > max_iters {
            return Err(MatchError::BisectionStalled { iters });
        }

        let c = probe_slope(&pi, &qi, &br, cfg, rng);
        let mpc = median_level(p, c);
        let mqc = median_level(q, c);
        if (br.mpa - br.mqa) * (mpc - mqc) < 0.0 {
            // Sign change persists on the left half.
            br.b = c;
            br.mpb = mpc;
            br.mqb = mqc;
        } else {
            br.a = c;
            br.mpa = mpc;
            br.mqa = mqc;
        }

        if pi.len() < 4 || br.b - br.a < prune_width {
            prune_width = (br.b - br.a) / 4.0;
            pi.retain(|t| still_candidate(t, &br));
            qi.retain(|t| still_candidate(t, &br));
            if pi.is_empty() || qi.is_empty() {
                return Err(MatchError::BisectionStalled { iters });
            }
        }
    }

    if pi[0].pos.x == qi[0].pos.x {
        // Vertical survivor pair; a slope-intercept cut cannot represent it.
        return Err(MatchError::BisectionStalled { iters });
    }
    Ok(CutLine::through(pi[0], qi[0], cfg.eps_side))
}

/// Establish a bracket on which the median-level difference changes sign,
/// widening the configured interval geometrically if needed.
fn bracket(p: &[Point], q: &[Point], cfg: MatchCfg) -> Result<Bracket, MatchError> {
    let mut a = cfg.slope_lo;
    let mut b = cfg.slope_hi;
    for _ in 0..=cfg.max_widenings {
        let br = Bracket {
            a,
            b,
            mpa: median_level(p, a),
            mqa: median_level(q, a),
            mpb: median_level(p, b),
            mqb: median_level(q, b),
        };
        if (br.mpa - br.mqa) * (br.mpb - br.mqb) <= 0.0 {
            return Ok(br);
        }
        a *= 2.0;
        b *= 2.0;
    }
    Err(MatchError::Unbracketed { lo: a, hi: b })
}

/// Draw a probe slope strictly inside the bracket: the slope of the line
/// through a random candidate of each side, jittered to avoid data points
/// landing exactly on the probe line. Falls back to the interval midpoint
/// when no candidate slope lands inside the bracket within the retry budget;
/// the midpoint still yields a valid sign test and shrinks the bracket.
fn probe_slope<R: Rng>(
    pi: &[Point],
    qi: &[Point],
    br: &Bracket,
    cfg: MatchCfg,
    rng: &mut R,
) -> f64 {
    for _ in 0..cfg.max_probe_retries {
        let pr = pi[rng.gen_range(0..pi.len())];
        let qr = qi[rng.gen_range(0..qi.len())];
        let dx = pr.pos.x - qr.pos.x;
        if dx == 0.0 {
            continue;
        }
        let c = (pr.pos.y - qr.pos.y) / dx;
        if br.a < c && c < br.b {
            return c + (rng.gen::<f64>() - 0.5) * cfg.slope_jitter;
        }
    }
    0.5 * (br.a + br.b)
}

/// Candidate retention test. A point stays if its level at either bracket end
/// lies between the two cached median levels there, or if its dual line meets
/// the chord through the bracketing median levels strictly inside (a, b).
/// Points failing all three are dominated: their dual lines stay on one side
/// of both medians across the whole bracket and cannot define the crossing.
fn still_candidate(t: &Point, br: &Bracket) -> bool {
    let va = t.level(br.a);
    if br.mpa >= va && va >= br.mqa {
        return true;
    }
    let vb = t.level(br.b);
    if br.mqb >= vb && vb >= br.mpb {
        return true;
    }
    // Chord through (a, mpa) and (b, mqb).
    let k = (br.mqb - br.mpa) / (br.b - br.a);
    let n = br.mpa - k * br.a;
    // Abscissa where the point's dual line x·s − y meets the chord. A
    // vanishing denominator sends this to ±inf and the test fails, which is
    // the correct outcome for a dual line parallel to the chord.
    let s = (n + t.pos.y) / (t.pos.x - k);
    br.a < s && s < br.b
}
