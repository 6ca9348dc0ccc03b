//! Property tests over half-integer coordinates, where every orientation is exact.
//! Zeros are drawn with either sign.

use super::*;
use crate::rand::{draw_points, CloudCfg, ReplayToken};
use nalgebra::Vector2;
use proptest::prelude::*;

/// `k / 2` for small `k`; `k = 0` comes out as `+0.0` or `-0.0`.
fn half_step() -> impl Strategy<Value = f64> {
    (-80i32..=80, any::<bool>()).prop_map(|(k, neg)| {
        if k == 0 && neg {
            -0.0
        } else {
            k as f64 * 0.5
        }
    })
}

fn lattice_points(max_len: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((half_step(), half_step()), 1..max_len).prop_map(|raw| {
        raw.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
    })
}

/// Dense integer clouds from the sampler; small extents give many shared rays.
fn sampled_cloud() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    (3usize..80, 1u32..=4, any::<u64>()).prop_map(|(count, extent, seed)| {
        let cfg = CloudCfg {
            count,
            extent: extent as f64,
            lattice: true,
            ..CloudCfg::default()
        };
        draw_points(cfg, ReplayToken::new(seed, 0))
    })
}

fn check_hull(pts: &[Vector2<f64>], hull: &Hull) -> Result<(), TestCaseError> {
    let v = hull.vertices();

    let mut sorted = pts.to_vec();
    select_pivot(&mut sorted).unwrap();
    prop_assert_eq!(v[0], sorted[0]);

    for h in v {
        prop_assert!(pts.contains(h));
    }
    for p in pts {
        prop_assert!(hull.contains(*p), "{:?} outside hull {:?}", p, v);
    }
    if v.len() >= 3 {
        for i in 0..v.len() {
            let o = orientation(v[i], v[(i + 1) % v.len()], v[(i + 2) % v.len()]);
            prop_assert!(o >= 0.0, "right turn at {:?}", v[(i + 1) % v.len()]);
        }
        prop_assert!(hull.signed_area() > 0.0);
    }
    Ok(())
}

fn polar_tail(points: &[Vector2<f64>]) -> (Vector2<f64>, Vec<PolarPoint>) {
    let mut work = points.to_vec();
    select_pivot(&mut work).unwrap();
    let pivot = work[0];
    let tail = work[1..]
        .iter()
        .filter(|&&p| p != pivot)
        .map(|&p| PolarPoint::from_cartesian(p, pivot))
        .collect();
    (pivot, tail)
}

proptest! {
    #[test]
    fn pivot_is_lexicographic_minimum(mut pts in lattice_points(50)) {
        select_pivot(&mut pts).unwrap();
        let pivot = pts[0];
        for p in &pts {
            prop_assert!(pivot.x < p.x || (pivot.x == p.x && pivot.y <= p.y));
        }
    }

    #[test]
    fn sorts_agree_and_are_ordered(pts in lattice_points(60)) {
        let (_, tail) = polar_tail(&pts);
        let mut a = tail.clone();
        let mut b = tail;
        sort_polar(&mut a, PolarSort::Bubble);
        sort_polar(&mut b, PolarSort::Unstable);
        prop_assert_eq!(&a, &b);
        for w in a.windows(2) {
            prop_assert!(w[0].theta <= w[1].theta);
            if w[0].theta == w[1].theta {
                prop_assert!(w[0].r <= w[1].r);
            }
        }
    }

    #[test]
    fn reduction_keeps_farthest_per_angle(pts in lattice_points(60)) {
        let (pivot, mut tail) = polar_tail(&pts);
        sort_polar(&mut tail, PolarSort::Unstable);
        let mut seq = vec![PolarPoint::from_cartesian(pivot, pivot)];
        seq.extend(tail.iter().copied());
        let out = reduce_collinear(&seq);
        prop_assert!(out.len() <= seq.len());
        prop_assert_eq!(out[0].point, pivot);
        if out.len() > 2 {
            for w in out[1..].windows(2) {
                prop_assert!(w[0].theta != w[1].theta);
            }
        }
        for p in &tail {
            let farthest = tail
                .iter()
                .filter(|q| q.theta == p.theta)
                .map(|q| q.r)
                .fold(0.0, f64::max);
            prop_assert!(out.iter().any(|q| q.theta == p.theta && q.r == farthest));
        }
    }

    #[test]
    fn hull_is_convex_and_encloses_input(pts in lattice_points(80)) {
        let cfg = HullCfg::default().allow_degenerate();
        let hull = graham_scan(&pts, &cfg).unwrap();
        check_hull(&pts, &hull)?;
    }

    #[test]
    fn sampled_lattice_clouds_are_enclosed(pts in sampled_cloud()) {
        for sort in [PolarSort::Bubble, PolarSort::Unstable] {
            let cfg = HullCfg::default().with_sort(sort).allow_degenerate();
            let hull = graham_scan(&pts, &cfg).unwrap();
            check_hull(&pts, &hull)?;
        }
    }

    #[test]
    fn reject_policy_matches_allow_on_proper_hulls(pts in lattice_points(40)) {
        let allowed = graham_scan(&pts, &HullCfg::default().allow_degenerate()).unwrap();
        match convex_hull(&pts) {
            Ok(h) => prop_assert_eq!(h, allowed),
            Err(HullError::InsufficientPoints { found }) => {
                prop_assert!(found < 3);
                prop_assert!(allowed.len() <= found);
            }
            Err(HullError::AllCollinear { count }) => {
                prop_assert_eq!(count, pts.len());
                prop_assert!(allowed.is_degenerate());
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
