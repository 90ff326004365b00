//! Power: scalar `x^e`.
//!
//! Forward and reverse reserve their signatures and always fail.

use crate::error::{PrimitiveError, Result};
use crate::registry::{Mode, OpId};

pub fn primal(x: f64, e: f64) -> f64 {
    x.powf(e)
}

/// Tangent along `(dx, de)`. Not implemented.
pub fn forward(_x: f64, _e: f64, _dx: f64, _de: f64) -> Result<f64> {
    Err(PrimitiveError::not_implemented(OpId::Power, Mode::Forward))
}

/// Adjoints `(dx, de)` for output adjoint `dr`. Not implemented.
pub fn reverse(_x: f64, _e: f64, _dr: f64) -> Result<(f64, f64)> {
    Err(PrimitiveError::not_implemented(OpId::Power, Mode::Reverse))
}
