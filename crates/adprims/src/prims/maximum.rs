//! Maximum: largest element of a non-empty vector.
//!
//! The selected index `k` is the first strictly-greatest element scanning
//! left to right. Forward returns `dv[k]` and reverse returns a one-hot
//! adjoint at `k`; at ties this is a one-sided subgradient.
//!
//! Both derivative rules are unvalidated and emit an advisory on every call.

use super::util;
use crate::container::Vector;
use crate::context::Context;
use crate::diagnostics::Advisory;
use crate::error::{PrimitiveError, Result};
use crate::registry::{Mode, OpId};
use crate::scalar::Scalar;

/// Index selected by [`primal`].
///
/// # Errors
///
/// Returns `Precondition` for an empty vector.
///
/// # Example
///
/// ```
/// use adprims::{Arena, Vector};
/// use adprims::prims::maximum;
///
/// let arena = Arena::new();
/// let v = Vector::from_vec_in(&arena, vec![3.0, 7.0, 2.0, 7.0]).unwrap();
/// assert_eq!(maximum::argmax(&v).unwrap(), 1);
/// assert_eq!(maximum::primal(&v).unwrap(), 7.0);
/// ```
pub fn argmax<T: Scalar>(v: &Vector<'_, T>) -> Result<usize> {
    util::argmax(v.as_slice()).ok_or_else(|| PrimitiveError::Precondition {
        op: OpId::Maximum,
        message: "maximum of an empty vector".to_string(),
    })
}

/// `v[k]` for the first maximal index `k`.
pub fn primal<T: Scalar>(v: &Vector<'_, T>) -> Result<T> {
    let k = argmax(v)?;
    Ok(v[k])
}

/// Tangent of the maximum: `dv[k]`.
///
/// # Errors
///
/// Returns `Precondition` for an empty `v` and `LengthMismatch` if `dv` does
/// not have the shape of `v`.
pub fn forward<T: Scalar>(cx: &Context<'_>, v: &Vector<'_, T>, dv: &Vector<'_, T>) -> Result<T> {
    cx.advise(Advisory::untested(OpId::Maximum, Mode::Forward));
    if dv.len() != v.len() {
        return Err(PrimitiveError::LengthMismatch {
            op: OpId::Maximum,
            expected: v.len(),
            actual: dv.len(),
        });
    }
    let k = argmax(v)?;
    Ok(dv[k])
}

/// Adjoint of the maximum: zero everywhere except `dr` at index `k`.
pub fn reverse<'a, T: Scalar>(cx: &Context<'a>, v: &Vector<'_, T>, dr: T) -> Result<Vector<'a, T>> {
    cx.advise(Advisory::untested(OpId::Maximum, Mode::Reverse));
    let k = argmax(v)?;
    util::one_hot(cx.arena(), v.len(), k, dr)
}
