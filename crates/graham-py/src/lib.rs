//! PyO3 bindings for the `graham` crate.
//!
//! Notes
//! - Keep bindings thin and predictable; points cross the boundary as
//!   `(x, y)` tuples.
//! - Errors surface as `ValueError` with the Rust error message.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn graham_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    geom::register(m)?;
    m.add("__version__", graham::VERSION)?;
    Ok(())
}
