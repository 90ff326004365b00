//! Scalar trait for container element types.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Trait for numeric element types supported by the primitives.
///
/// Ordering is partial so that NaN inputs flow through comparisons
/// instead of panicking.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + 'static
{
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

impl Scalar for f64 {
    fn one() -> Self {
        1.0
    }
}

impl Scalar for f32 {
    fn one() -> Self {
        1.0
    }
}
