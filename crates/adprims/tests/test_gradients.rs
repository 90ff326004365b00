//! Derivative rules checked against central finite differences.

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use adprims::prims::{matvec, maximum};
use adprims::random::randn_matrix_in;
use adprims::{Arena, Context, Matrix, NullSink, Vector};

/// Compute numerical gradient using central difference.
///
/// grad_i ≈ (f(x + eps*e_i) - f(x - eps*e_i)) / (2*eps)
fn numerical_gradient<F>(f: F, x: &[f64], eps: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut grad = vec![0.0; x.len()];
    let mut x_plus = x.to_vec();
    let mut x_minus = x.to_vec();

    for i in 0..x.len() {
        x_plus[i] = x[i] + eps;
        x_minus[i] = x[i] - eps;

        let f_plus = f(&x_plus);
        let f_minus = f(&x_minus);
        grad[i] = (f_plus - f_minus) / (2.0 * eps);

        x_plus[i] = x[i];
        x_minus[i] = x[i];
    }
    grad
}

/// Row-major flattening of a matrix.
fn flatten(m: &Matrix<'_>) -> Vec<f64> {
    m.iter().flat_map(|row| row.iter().copied()).collect()
}

/// `dr · (M v)` for a row-major `rows × cols` matrix.
fn weighted_matvec(m: &[f64], v: &[f64], dr: &[f64], cols: usize) -> f64 {
    let arena = Arena::new();
    let cx = Context::new(&arena);
    let rows = m.chunks(cols).map(<[f64]>::to_vec).collect();
    let m = Matrix::from_rows_in(&arena, rows).unwrap();
    let v = Vector::from_vec_in(&arena, v.to_vec()).unwrap();
    let o = matvec::primal(&cx, &m, &v).unwrap();
    o.iter().zip(dr).map(|(a, b)| a * b).sum()
}

#[test]
fn test_numerical_gradient_matvec_reverse() {
    let eps = 1e-6;
    let mut rng = StdRng::seed_from_u64(1234);

    for (rows, cols) in [(1, 1), (2, 3), (5, 4)] {
        let arena = Arena::new();
        let cx = Context::new(&arena);
        let m: Matrix = randn_matrix_in(&arena, rows, cols, &mut rng).unwrap();
        let v: Vector<f64> = Vector::randn_in(&arena, cols, &mut rng).unwrap();
        let dr: Vector<f64> = Vector::randn_in(&arena, rows, &mut rng).unwrap();

        let m_data = flatten(&m);
        let numerical_dm = numerical_gradient(
            |x| weighted_matvec(x, v.as_slice(), dr.as_slice(), cols),
            &m_data,
            eps,
        );
        let numerical_dv = numerical_gradient(
            |x| weighted_matvec(&m_data, x, dr.as_slice(), cols),
            v.as_slice(),
            eps,
        );

        let (dm, dv) = matvec::reverse(&cx, (&m, &v), &dr).unwrap();

        for (analytical, numerical) in flatten(&dm).iter().zip(&numerical_dm) {
            assert_relative_eq!(analytical, numerical, epsilon = 1e-6);
        }
        for (analytical, numerical) in dv.iter().zip(&numerical_dv) {
            assert_relative_eq!(analytical, numerical, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_numerical_gradient_maximum_reverse() {
    let eps = 1e-7;
    let mut rng = StdRng::seed_from_u64(77);
    let max_of = |x: &[f64]| {
        let arena = Arena::new();
        maximum::primal(&Vector::from_vec_in(&arena, x.to_vec()).unwrap()).unwrap()
    };

    for len in [1, 2, 6, 15] {
        let arena = Arena::new();
        let cx = Context::with_sink(&arena, &NullSink);
        // Continuous samples have no ties almost surely.
        let v: Vector<f64> = Vector::randn_in(&arena, len, &mut rng).unwrap();

        let numerical = numerical_gradient(max_of, v.as_slice(), eps);
        let analytical = maximum::reverse(&cx, &v, 1.0).unwrap();

        for (a, n) in analytical.iter().zip(&numerical) {
            assert_relative_eq!(a, n, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_maximum_forward_matches_directional_derivative() {
    let eps = 1e-7;
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..10 {
        let arena = Arena::new();
        let cx = Context::with_sink(&arena, &NullSink);
        let v: Vector<f64> = Vector::randn_in(&arena, 8, &mut rng).unwrap();
        let dv: Vector<f64> = Vector::randn_in(&arena, 8, &mut rng).unwrap();

        let shifted = |t: f64| {
            let x = Vector::from_fn_in(&arena, v.len(), |i| v[i] + t * dv[i]).unwrap();
            maximum::primal(&x).unwrap()
        };
        let numerical = (shifted(eps) - shifted(-eps)) / (2.0 * eps);

        assert_relative_eq!(
            maximum::forward(&cx, &v, &dv).unwrap(),
            numerical,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_reverse_is_transpose_of_forward_for_matvec() {
    // <dr, M dv> == <M^T dr, dv> for the v-adjoint.
    let arena = Arena::new();
    let cx = Context::new(&arena);
    let mut rng = StdRng::seed_from_u64(9);
    let m: Matrix = randn_matrix_in(&arena, 3, 4, &mut rng).unwrap();
    let v: Vector<f64> = Vector::randn_in(&arena, 4, &mut rng).unwrap();
    let dv: Vector<f64> = Vector::randn_in(&arena, 4, &mut rng).unwrap();
    let dr: Vector<f64> = Vector::randn_in(&arena, 3, &mut rng).unwrap();

    let tangent = matvec::primal(&cx, &m, &dv).unwrap();
    let (_, v_adjoint) = matvec::reverse(&cx, (&m, &v), &dr).unwrap();

    assert_relative_eq!(
        adprims::dot(&dr, &tangent).unwrap(),
        adprims::dot(&v_adjoint, &dv).unwrap(),
        epsilon = 1e-12
    );
}
