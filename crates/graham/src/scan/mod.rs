//! Graham scan over planar point sets.
//!
//! Purpose
//! - Compute the convex hull of a finite point set in counter-clockwise order,
//!   starting at the lexicographically smallest point (the pivot).
//!
//! Pipeline
//! - `pivot::select_pivot`: lowest x (then lowest y) moves to index 0.
//! - `polar::PolarPoint::from_cartesian`: angle/radius about the pivot, computed once.
//! - `polar::sort_polar`: angle ascending, radius ascending on exact angle ties.
//! - `reduce::reduce_collinear`: keep only the farthest point per angle.
//! - `sweep::sweep`: stack walk, popping while the turn is to the right.
//!
//! Conventions
//! - Angle equality is exact; no tolerances anywhere in the pipeline.
//! - Points on a hull edge that does not touch the pivot are kept (collinear
//!   turns push), points on an edge through the pivot are reduced away.
//! - Degenerate inputs are decided up front by `HullCfg::degenerate`.

mod error;
mod hull;
pub mod orientation;
pub mod pivot;
pub mod polar;
pub mod reduce;
pub mod stack;
pub mod sweep;
mod types;

pub use error::HullError;
pub use hull::{convex_hull, graham_scan};
pub use orientation::{orientation, turn, Turn};
pub use pivot::select_pivot;
pub use polar::{sort_polar, PolarPoint};
pub use reduce::reduce_collinear;
pub use stack::HullStack;
pub use sweep::sweep;
pub use types::{Degenerate, Hull, HullCfg, PolarSort};

#[cfg(test)]
mod proptests;
