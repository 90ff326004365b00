//! Internal building blocks shared by the primitives.

use crate::arena::Arena;
use crate::container::Vector;
use crate::error::Result;
use crate::scalar::Scalar;

/// Index of the first strictly-greatest element, scanning left to right.
///
/// Returns `None` for an empty slice. NaN elements never compare greater, so
/// they are only selected when they sit at index 0.
pub(crate) fn argmax<T: PartialOrd>(v: &[T]) -> Option<usize> {
    let (first, rest) = v.split_first()?;
    let mut imax = 0;
    let mut vmax = first;
    for (i, x) in rest.iter().enumerate() {
        if x > vmax {
            vmax = x;
            imax = i + 1;
        }
    }
    Some(imax)
}

/// Vector of length `len` that is zero everywhere except `value` at `index`.
pub(crate) fn one_hot<'a, T: Scalar>(
    arena: &'a Arena,
    len: usize,
    index: usize,
    value: T,
) -> Result<Vector<'a, T>> {
    Vector::from_fn_in(arena, len, |i| if i == index { value } else { T::zero() })
}
