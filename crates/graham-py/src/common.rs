use graham::HullError;
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(points: Vec<(f64, f64)>) -> Vec<Vector2<f64>> {
    points.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
}

pub fn points_to_py(points: &[Vector2<f64>]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
