//! GreaterThan: scalar comparison `a > b`.
//!
//! The boolean output is not differentiable, so the forward rule returns the
//! zero-dimensional tangent `()`. No reverse rule is supplied.

use crate::error::{PrimitiveError, Result};
use crate::registry::{Mode, OpId};

pub fn primal<T: PartialOrd>(a: T, b: T) -> bool {
    a > b
}

/// Always the zero-dimensional tangent.
pub fn forward<T>(_a: T, _b: T, _da: T, _db: T) {}

/// Adjoints for `(a, b)` given the zero-dimensional output adjoint. Not implemented.
pub fn reverse<T>(_a: T, _b: T, _dr: ()) -> Result<(T, T)> {
    Err(PrimitiveError::not_implemented(OpId::GreaterThan, Mode::Reverse))
}
