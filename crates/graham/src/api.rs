//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI, the
//!   Python bindings, and benches. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across callers.

// Pipeline
pub use crate::scan::{
    convex_hull, graham_scan, Degenerate, Hull, HullCfg, HullError, PolarSort,
};
// Building blocks
pub use crate::scan::{
    orientation, reduce_collinear, select_pivot, sort_polar, sweep, turn, HullStack, PolarPoint,
    Turn,
};
// Random inputs
pub use crate::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
