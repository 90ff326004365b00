//! Container types consumed by the primitives.
//!
//! ```text
//! Vector<'a, T>            - ordered sequence built in an Arena
//! Matrix<'a, T>            - Vector of row Vectors (row-major, rows may be ragged)
//! (A, B, ...)              - fixed heterogeneous product (plain Rust tuples)
//! ()                       - zero-dimensional value: "no derivative information"
//! ```
//!
//! The free functions [`size`] and [`dot`] complete the container ABI.

mod vector;

pub use vector::Vector;

use crate::error::{PrimitiveError, Result};
use crate::registry::OpId;
use crate::scalar::Scalar;

/// Row-major dense matrix: a sequence of rows.
pub type Matrix<'a, T = f64> = Vector<'a, Vector<'a, T>>;

/// Number of elements in a sequence.
#[inline]
pub fn size<T>(v: &Vector<'_, T>) -> usize {
    v.len()
}

/// Inner product `Σ a[i] * b[i]`.
///
/// # Errors
///
/// Returns `PrimitiveError::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use adprims::{Arena, Vector, dot};
///
/// let arena = Arena::new();
/// let a = Vector::from_vec_in(&arena, vec![1.0, 2.0, 3.0]).unwrap();
/// let b = Vector::from_vec_in(&arena, vec![4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(dot(&a, &b).unwrap(), 32.0);
/// ```
pub fn dot<T: Scalar>(a: &Vector<'_, T>, b: &Vector<'_, T>) -> Result<T> {
    if a.len() != b.len() {
        return Err(PrimitiveError::LengthMismatch {
            op: OpId::Dot,
            expected: a.len(),
            actual: b.len(),
        });
    }
    let mut sum = T::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        sum += x * y;
    }
    Ok(sum)
}
