//! Planar convex hulls via the Graham scan.
//!
//! Layout
//! - `scan`: the pipeline (pivot, polar sort, collinearity reduction, sweep)
//!   and its building blocks, each usable on its own.
//! - `rand`: reproducible point clouds for tests, benches, and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; `api` is the curated
//!   surface that callers import from.

pub mod api;
pub mod rand;
pub mod scan;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use scan::{convex_hull, graham_scan, Degenerate, Hull, HullCfg, HullError, PolarSort};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
    pub use crate::scan::{
        convex_hull, graham_scan, orientation, turn, Degenerate, Hull, HullCfg, HullError,
        PolarSort, Turn,
    };
    pub use nalgebra::Vector2 as Vec2;
}
