//! LogGamma: `ln |Γ(x)|`.
//!
//! The forward rule only serves the zero-tangent case, where the output
//! tangent is zero for any differentiable function. Every other tangent, and
//! every reverse call, fails with `NotImplemented`.

use crate::error::{PrimitiveError, Result};
use crate::registry::{Mode, OpId};
use crate::special;

/// `ln |Γ(x)|`.
pub fn primal(x: f64) -> f64 {
    special::ln_gamma(x)
}

/// Tangent of `ln Γ` at `x` along `dx`; defined only for `dx == 0`.
///
/// # Example
///
/// ```
/// use adprims::prims::lgamma;
///
/// assert_eq!(lgamma::forward(3.5, 0.0).unwrap(), 0.0);
/// assert!(lgamma::forward(3.5, 1.0).unwrap_err().is_not_implemented());
/// ```
pub fn forward(_x: f64, dx: f64) -> Result<f64> {
    if dx == 0.0 {
        Ok(0.0)
    } else {
        Err(PrimitiveError::not_implemented(OpId::LogGamma, Mode::Forward))
    }
}

/// Adjoint of `ln Γ`. Not implemented.
pub fn reverse(_x: f64, _dr: f64) -> Result<f64> {
    Err(PrimitiveError::not_implemented(OpId::LogGamma, Mode::Reverse))
}
