//! Hull bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_hull_err, points_from_py, points_to_py};
use graham::{graham_scan, HullCfg, PolarSort};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Convex hull in counter-clockwise order, starting at the lowest-x (then lowest-y) point.
#[pyfunction]
#[pyo3(signature = (points, allow_degenerate = false, sort = "unstable"))]
pub fn convex_hull(
    points: Vec<(f64, f64)>,
    allow_degenerate: bool,
    sort: &str,
) -> PyResult<Vec<(f64, f64)>> {
    let sort = match sort {
        "unstable" => PolarSort::Unstable,
        "bubble" => PolarSort::Bubble,
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown sort '{other}', expected 'unstable' or 'bubble'"
            )))
        }
    };
    let mut cfg = HullCfg::default().with_sort(sort);
    if allow_degenerate {
        cfg = cfg.allow_degenerate();
    }
    let hull = graham_scan(&points_from_py(points), &cfg).map_err(map_hull_err)?;
    Ok(points_to_py(hull.vertices()))
}

/// Signed turn of p → q → r: positive left, negative right, zero collinear.
#[pyfunction]
pub fn orientation(p: (f64, f64), q: (f64, f64), r: (f64, f64)) -> f64 {
    graham::scan::orientation(
        Vector2::new(p.0, p.1),
        Vector2::new(q.0, q.1),
        Vector2::new(r.0, r.1),
    )
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(orientation, m)?)?;
    Ok(())
}
