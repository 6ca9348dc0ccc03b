//! Random point clouds (replay tokens).
//!
//! Purpose
//! - Provide small, deterministic inputs for tests, benches, and the CLI
//!   `sample` command.
//!
//! Model
//! - `count` points drawn uniformly from a square `[-extent, extent]²` or a disc
//!   of radius `extent`.
//! - `lattice = true` rounds coordinates to integers, which produces duplicates
//!   and collinear runs on purpose. Rounding a small negative value gives `-0.0`;
//!   lattice coordinates are folded to `+0.0` so every zero has the same bits.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sampling region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CloudShape {
    #[default]
    Square,
    Disc,
}

/// Point cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    /// Half-width of the square, or radius of the disc. Clamped to > 0.
    pub extent: f64,
    /// Round coordinates to the integer lattice.
    pub lattice: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Square,
            extent: 1.0,
            lattice: false,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// Draw `cfg.count` points. Same `(cfg, tok)` gives the same points.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.max(1e-9);
    (0..cfg.count)
        .map(|_| {
            let p = match cfg.shape {
                CloudShape::Square => Vector2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e)),
                CloudShape::Disc => {
                    // sqrt keeps the density uniform in area
                    let r = e * rng.gen::<f64>().sqrt();
                    let th = rng.gen::<f64>() * std::f64::consts::TAU;
                    Vector2::new(r * th.cos(), r * th.sin())
                }
            };
            if cfg.lattice {
                p.map(|c| c.round() + 0.0)
            } else {
                p
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{convex_hull, graham_scan, HullCfg};

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg::default();
        let tok = ReplayToken::new(42, 7);
        assert_eq!(draw_points(cfg, tok), draw_points(cfg, tok));
        assert_ne!(draw_points(cfg, tok), draw_points(cfg, ReplayToken::new(42, 8)));
    }

    #[test]
    fn points_stay_in_region() {
        let square = CloudCfg {
            count: 500,
            extent: 2.0,
            ..CloudCfg::default()
        };
        for p in draw_points(square, ReplayToken::new(1, 0)) {
            assert!(p.x.abs() <= 2.0 && p.y.abs() <= 2.0);
        }
        let disc = CloudCfg {
            shape: CloudShape::Disc,
            ..square
        };
        for p in draw_points(disc, ReplayToken::new(1, 0)) {
            assert!(p.norm() <= 2.0 + 1e-12);
        }
    }

    #[test]
    fn lattice_clouds_are_integral_and_hullable() {
        let cfg = CloudCfg {
            count: 300,
            extent: 5.0,
            lattice: true,
            ..CloudCfg::default()
        };
        let pts = draw_points(cfg, ReplayToken::new(3, 1));
        assert!(pts.iter().all(|p| p.x.fract() == 0.0 && p.y.fract() == 0.0));
        let hull = convex_hull(&pts).unwrap();
        for p in &pts {
            assert!(hull.contains(*p));
        }
        let same = graham_scan(&pts, &HullCfg::default().allow_degenerate()).unwrap();
        assert_eq!(hull, same);
    }

    #[test]
    fn lattice_zeros_are_positive() {
        let cfg = CloudCfg {
            count: 400,
            extent: 2.0,
            lattice: true,
            ..CloudCfg::default()
        };
        for seed in 0..8 {
            let pts = draw_points(cfg, ReplayToken::new(seed, 0));
            assert!(pts.iter().any(|p| p.x == 0.0 || p.y == 0.0));
            for p in &pts {
                assert!(!(p.x == 0.0 && p.x.is_sign_negative()), "{p:?}");
                assert!(!(p.y == 0.0 && p.y.is_sign_negative()), "{p:?}");
            }
        }
    }

    #[test]
    fn small_lattice_clouds_keep_every_input_inside() {
        let cfg = CloudCfg {
            count: 60,
            extent: 3.0,
            lattice: true,
            ..CloudCfg::default()
        };
        let allow = HullCfg::default().allow_degenerate();
        for seed in 0..64 {
            let pts = draw_points(cfg, ReplayToken::new(seed, 0));
            let hull = graham_scan(&pts, &allow).unwrap();
            for p in &pts {
                assert!(hull.contains(*p), "seed {seed}: {p:?} outside {:?}", hull.vertices());
            }
        }
    }
}
