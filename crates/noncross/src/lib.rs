//! Non-crossing bipartite matching of separated planar point sets.
//!
//! The "ghosts vs busters" problem: given two equal-size point clouds on
//! opposite sides of a line, pair them up so that the segments joining
//! matched pairs never cross. Two independent matchers implement the same
//! contract:
//!
//! - [`hscut()`]: randomized divide-and-conquer via recursive ham-sandwich
//!   bisection, expected O(n log² n). Takes a caller-supplied RNG so runs
//!   are reproducible.
//! - [`chull()`]: exact convex-hull peeling, O(n²), robust to collinear and
//!   degenerate input; the better choice for small instances. Requires the
//!   separating abscissa as an explicit parameter.
//!
//! Both return reordered copies of the input sides; same-index elements are
//! matched. `util` has the predicates to validate an output, `clouds` the
//! deterministic instance generator used by tests and the CLI harness.

pub mod chull;
pub mod clouds;
pub mod hscut;
pub mod median;
pub mod types;
pub mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use chull::chull;
pub use hscut::{hscut, CutLine};
pub use types::{MatchCfg, MatchError, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chull::chull;
    pub use crate::clouds::{draw_clouds, draw_clouds_with, CloudCfg, ReplayToken};
    pub use crate::hscut::{find_cut, hscut, CutLine};
    pub use crate::median::median_level;
    pub use crate::types::{MatchCfg, MatchError, Point};
    pub use crate::util::{crossing_count, same_ids, segments_cross, verify_matching};
    pub use nalgebra::Vector2 as Vec2;
}
