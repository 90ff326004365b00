//! Dot: inner product of two vectors.
//!
//! Only the primal is served. The registry declares forward and reverse as
//! explicit unimplemented markers: whether the product is differentiated
//! upstream by composing elementwise multiply and sum, or is simply missing
//! here, is left open.

use crate::container::{self, Vector};
use crate::error::Result;
use crate::scalar::Scalar;

/// `Σ a[i] * b[i]`, failing with `LengthMismatch` on unequal lengths.
pub fn primal<T: Scalar>(a: &Vector<'_, T>, b: &Vector<'_, T>) -> Result<T> {
    container::dot(a, b)
}
