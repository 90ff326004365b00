//! MatrixVector: dense matrix times vector.
//!
//! For `M` with `r` rows of length `c` and `v` of length `c`:
//!
//! ```text
//! primal:   o[i]        = dot(M[i], v)
//! reverse:  dM[i][j]    = dr[i] * v[j]          (outer product dr ⊗ v)
//!           dv[j]       = Σ_i M[i][j] * dr[i]   (Mᵀ · dr)
//! ```
//!
//! No forward rule is supplied. The registry lists the forward entry as
//! unimplemented so the asymmetry stays visible.

use crate::container::{self, Matrix, Vector};
use crate::context::Context;
use crate::error::{PrimitiveError, Result};
use crate::registry::OpId;
use crate::scalar::Scalar;

/// Check that every row of `m` has length `cols`.
fn check_rows<T>(m: &Matrix<'_, T>, cols: usize) -> Result<()> {
    for row in m {
        if row.len() != cols {
            return Err(PrimitiveError::LengthMismatch {
                op: OpId::MatrixVector,
                expected: cols,
                actual: row.len(),
            });
        }
    }
    Ok(())
}

/// Matrix-vector product `M · v`.
///
/// # Errors
///
/// Returns `LengthMismatch` if any row of `m` differs in length from `v`.
///
/// # Example
///
/// ```
/// use adprims::{Arena, Context, Matrix, Vector};
/// use adprims::prims::matvec;
///
/// let arena = Arena::new();
/// let cx = Context::new(&arena);
/// let m = Matrix::from_rows_in(&arena, vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
/// let v = Vector::from_vec_in(&arena, vec![1.0, -1.0]).unwrap();
///
/// let o = matvec::primal(&cx, &m, &v).unwrap();
/// assert_eq!(o.as_slice(), &[-1.0, -1.0, -1.0]);
/// ```
pub fn primal<'a, T: Scalar>(
    cx: &Context<'a>,
    m: &Matrix<'_, T>,
    v: &Vector<'_, T>,
) -> Result<Vector<'a, T>> {
    check_rows(m, v.len())?;
    Vector::try_from_fn_in(cx.arena(), m.len(), |i| container::dot(&m[i], v))
}

/// Reverse rule given the bundled primal inputs `(M, v)` and output adjoint `dr`.
///
/// Returns `(dM, dv)` in input order.
///
/// # Errors
///
/// Returns `LengthMismatch` if `M` is ragged against `v` or `dr` does not have
/// one entry per row of `M`.
pub fn reverse<'a, T: Scalar>(
    cx: &Context<'a>,
    (m, v): (&Matrix<'_, T>, &Vector<'_, T>),
    dr: &Vector<'_, T>,
) -> Result<(Matrix<'a, T>, Vector<'a, T>)> {
    let r = m.len();
    let c = v.len();
    check_rows(m, c)?;
    if dr.len() != r {
        return Err(PrimitiveError::LengthMismatch {
            op: OpId::MatrixVector,
            expected: r,
            actual: dr.len(),
        });
    }

    let arena = cx.arena();
    let dm = Vector::try_from_fn_in(arena, r, |i| v.scaled_in(arena, dr[i]))?;

    let dv = Vector::from_fn_in(arena, c, |j| {
        let mut acc = T::zero();
        for i in 0..r {
            acc += m[i][j] * dr[i];
        }
        acc
    })?;

    Ok((dm, dv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;

    fn fixture(arena: &Arena) -> (Matrix<'_>, Vector<'_, f64>) {
        let m = Matrix::from_rows_in(arena, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .unwrap();
        let v = Vector::from_vec_in(arena, vec![1.0, 0.5, -1.0]).unwrap();
        (m, v)
    }

    #[test]
    fn test_primal() {
        let arena = Arena::new();
        let cx = Context::new(&arena);
        let (m, v) = fixture(&arena);
        let o = primal(&cx, &m, &v).unwrap();
        // [1 + 1 - 3, 4 + 2.5 - 6]
        assert_eq!(o.as_slice(), &[-1.0, 0.5]);
    }

    #[test]
    fn test_primal_ragged() {
        let arena = Arena::new();
        let cx = Context::new(&arena);
        let m = Matrix::from_rows_in(&arena, vec![vec![1.0, 2.0], vec![3.0]]).unwrap();
        let v = Vector::from_vec_in(&arena, vec![1.0, 1.0]).unwrap();
        let err = primal(&cx, &m, &v).unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::LengthMismatch {
                op: OpId::MatrixVector,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_primal_no_rows() {
        let arena = Arena::new();
        let cx = Context::new(&arena);
        let m: Matrix = Matrix::from_rows_in(&arena, vec![]).unwrap();
        let v = Vector::from_vec_in(&arena, vec![1.0, 2.0]).unwrap();
        assert!(primal(&cx, &m, &v).unwrap().is_empty());
    }

    #[test]
    fn test_reverse() {
        let arena = Arena::new();
        let cx = Context::new(&arena);
        let (m, v) = fixture(&arena);
        let dr = Vector::from_vec_in(&arena, vec![2.0, -1.0]).unwrap();

        let (dm, dv) = reverse(&cx, (&m, &v), &dr).unwrap();

        assert_eq!(dm.len(), 2);
        assert_eq!(dm[0].as_slice(), &[2.0, 1.0, -2.0]);
        assert_eq!(dm[1].as_slice(), &[-1.0, -0.5, 1.0]);
        // Mᵀ · dr = [2 - 4, 4 - 5, 6 - 6]
        assert_eq!(dv.as_slice(), &[-2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_reverse_adjoint_length() {
        let arena = Arena::new();
        let cx = Context::new(&arena);
        let (m, v) = fixture(&arena);
        let dr = Vector::from_vec_in(&arena, vec![1.0, 2.0, 3.0]).unwrap();
        let err = reverse(&cx, (&m, &v), &dr).unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::LengthMismatch {
                op: OpId::MatrixVector,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_reverse_zero_adjoint() {
        let arena = Arena::new();
        let cx = Context::new(&arena);
        let (m, v) = fixture(&arena);
        let dr: Vector<f64> = Vector::zeros_in(&arena, 2).unwrap();
        let (dm, dv) = reverse(&cx, (&m, &v), &dr).unwrap();
        assert!(dm.iter().all(|row| row.iter().all(|&x| x == 0.0)));
        assert!(dv.iter().all(|&x| x == 0.0));
    }
}
