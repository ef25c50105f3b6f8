use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::clouds::{draw_clouds, CloudCfg, ReplayToken};
use crate::types::{MatchCfg, MatchError, Point};
use crate::util::verify_matching;

fn clouds(pairs: usize, seed: u64) -> (Vec<Point>, Vec<Point>) {
    let cfg = CloudCfg {
        pairs,
        half_width: 1000.0,
        half_height: 1000.0,
    };
    draw_clouds(cfg, ReplayToken { seed, index: 0 })
}

#[test]
fn empty_input_is_a_noop() {
    let mut rng = StdRng::seed_from_u64(0);
    let (p, q) = hscut(&[], &[], MatchCfg::default(), &mut rng).unwrap();
    assert!(p.is_empty() && q.is_empty());
}

#[test]
fn singleton_passes_through() {
    let mut rng = StdRng::seed_from_u64(0);
    let a = Point::new(0, -1.0, 2.0);
    let b = Point::new(1, 3.0, -4.0);
    let (p, q) = hscut(&[a], &[b], MatchCfg::default(), &mut rng).unwrap();
    assert_eq!(p, vec![a]);
    assert_eq!(q, vec![b]);
}

#[test]
fn size_mismatch_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let a = Point::new(0, -1.0, 0.0);
    let err = hscut(&[a], &[], MatchCfg::default(), &mut rng).unwrap_err();
    assert_eq!(err, MatchError::SizeMismatch { p: 1, q: 0 });
}

#[test]
fn unseparated_clouds_fail_to_bracket() {
    // Q is P shifted straight up, so the median-level difference is the same
    // constant at every slope and no amount of widening finds a sign change.
    let p = vec![Point::new(0, 1.0, 0.0), Point::new(1, 2.0, 0.0)];
    let q = vec![Point::new(2, 1.0, 10.0), Point::new(3, 2.0, 10.0)];
    let mut rng = StdRng::seed_from_u64(0);
    let err = hscut(&p, &q, MatchCfg::default(), &mut rng).unwrap_err();
    assert!(matches!(err, MatchError::Unbracketed { .. }), "{err:?}");
}

#[test]
fn exhausted_iteration_budget_reported() {
    let (p, q) = clouds(8, 21);
    let cfg = MatchCfg {
        max_iters_per_point: 0,
        ..MatchCfg::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let err = hscut(&p, &q, cfg, &mut rng).unwrap_err();
    assert!(matches!(err, MatchError::BisectionStalled { .. }), "{err:?}");
}

#[test]
fn unique_matching_found() {
    // Only one non-crossing perfect matching exists for this configuration:
    // (-2,0)↔(2,-1) and (-1,1)↔(1,0).
    let p = vec![Point::new(0, -2.0, 0.0), Point::new(1, -1.0, 1.0)];
    let q = vec![Point::new(2, 1.0, 0.0), Point::new(3, 2.0, -1.0)];
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (pm, qm) = hscut(&p, &q, MatchCfg::default(), &mut rng).unwrap();
        assert!(verify_matching(&p, &q, &pm, &qm));
        for i in 0..2 {
            match pm[i].id {
                0 => assert_eq!(qm[i].id, 3),
                1 => assert_eq!(qm[i].id, 2),
                other => panic!("unexpected id {other}"),
            }
        }
    }
}

#[test]
fn cut_splits_both_sides_in_half() {
    for &pairs in &[2usize, 5, 9, 16] {
        let (p, q) = clouds(pairs, 11 + pairs as u64);
        let mut rng = StdRng::seed_from_u64(99);
        let cut = find_cut(&p, &q, MatchCfg::default(), &mut rng).unwrap();
        let pu = p.iter().filter(|t| cut.is_above(t)).count();
        let qu = q.iter().filter(|t| cut.is_above(t)).count();
        assert_eq!(pu, qu, "pairs={pairs}");
        assert_eq!(pu, pairs / 2, "pairs={pairs}");
    }
}

#[test]
fn random_clouds_match_without_crossings() {
    for &pairs in &[2usize, 3, 5, 8, 13, 21, 34] {
        let (p, q) = clouds(pairs, pairs as u64);
        let mut rng = StdRng::seed_from_u64(4242);
        let (pm, qm) = hscut(&p, &q, MatchCfg::default(), &mut rng).unwrap();
        assert!(
            verify_matching(&p, &q, &pm, &qm),
            "invalid matching for pairs={pairs}"
        );
    }
}

#[test]
fn deterministic_for_a_fixed_seed() {
    let (p, q) = clouds(12, 5);
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        hscut(&p, &q, MatchCfg::default(), &mut rng).unwrap()
    };
    let (p1, q1) = run(7);
    let (p2, q2) = run(7);
    assert_eq!(p1, p2);
    assert_eq!(q1, q2);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn always_bijective_and_noncrossing(seed in 0u64..1024, pairs in 1usize..24) {
            let (p, q) = clouds(pairs, seed);
            let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
            let (pm, qm) = hscut(&p, &q, MatchCfg::default(), &mut rng).unwrap();
            prop_assert!(verify_matching(&p, &q, &pm, &qm));
        }
    }
}
