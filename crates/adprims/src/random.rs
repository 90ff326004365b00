//! Random container construction.
//!
//! Used to drive finite-difference checks of the derivative rules with
//! reproducible inputs.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::arena::Arena;
use crate::container::{Matrix, Vector};
use crate::error::Result;
use crate::scalar::Scalar;

/// Trait for types that can be randomly sampled from a uniform distribution.
pub trait RandomUniform: Scalar {
    /// Sample a random value from the uniform distribution [0, 1).
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

/// Trait for types that can be randomly sampled from a normal distribution.
pub trait RandomNormal: Scalar {
    /// Sample a random value from the standard normal distribution.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for f32 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl<'a, T: RandomUniform> Vector<'a, T> {
    /// Vector with uniform random values in [0, 1).
    ///
    /// # Example
    ///
    /// ```
    /// use adprims::{Arena, Vector};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let arena = Arena::new();
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let v1: Vector<f64> = Vector::random_in(&arena, 5, &mut rng).unwrap();
    ///
    /// // Reset RNG with same seed for reproducible results
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let v2: Vector<f64> = Vector::random_in(&arena, 5, &mut rng).unwrap();
    ///
    /// assert_eq!(v1, v2);
    /// assert!(v1.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random_in<R: Rng>(arena: &'a Arena, len: usize, rng: &mut R) -> Result<Self> {
        Self::from_fn_in(arena, len, |_| T::sample_uniform(rng))
    }
}

impl<'a, T: RandomNormal> Vector<'a, T> {
    /// Vector with standard normal random values.
    pub fn randn_in<R: Rng>(arena: &'a Arena, len: usize, rng: &mut R) -> Result<Self> {
        Self::from_fn_in(arena, len, |_| T::sample_normal(rng))
    }
}

/// `rows × cols` matrix with standard normal entries.
pub fn randn_matrix_in<'a, T: RandomNormal, R: Rng>(
    arena: &'a Arena,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Matrix<'a, T>> {
    Vector::try_from_fn_in(arena, rows, |_| Vector::randn_in(arena, cols, rng))
}
