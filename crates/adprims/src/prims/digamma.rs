//! Digamma: derivative of `ln Γ`.
//!
//! Declared with no numeric behavior. The primal fails with `NotImplemented`
//! for every input; forward and reverse are registry markers only.

use crate::error::{PrimitiveError, Result};
use crate::registry::{Mode, OpId};

/// `ψ(x)`. Not implemented.
pub fn primal(_x: f64) -> Result<f64> {
    Err(PrimitiveError::not_implemented(OpId::Digamma, Mode::Primal))
}
