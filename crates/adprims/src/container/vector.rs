//! Arena-qualified ordered sequence.

use std::marker::PhantomData;
use std::ops::Index;

use crate::arena::Arena;
use crate::error::Result;
use crate::scalar::Scalar;

/// Ordered sequence of `T` constructed in an [`Arena`].
///
/// The lifetime `'a` is the borrow of the arena the vector was built in.
/// Cloning copies the elements without charging the arena again.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<'a, T> {
    data: Vec<T>,
    _arena: PhantomData<&'a Arena>,
}

impl<'a, T> Vector<'a, T> {
    /// Create a vector from existing elements, charging `data.len()` to the arena.
    ///
    /// # Example
    ///
    /// ```
    /// use adprims::{Arena, Vector};
    ///
    /// let arena = Arena::new();
    /// let v = Vector::from_vec_in(&arena, vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.len(), 3);
    /// assert_eq!(v[1], 2.0);
    /// ```
    pub fn from_vec_in(arena: &'a Arena, data: Vec<T>) -> Result<Self> {
        arena.charge(data.len())?;
        Ok(Self {
            data,
            _arena: PhantomData,
        })
    }

    /// Create a vector of length `len` whose element `i` is `f(i)`.
    pub fn from_fn_in(arena: &'a Arena, len: usize, f: impl FnMut(usize) -> T) -> Result<Self> {
        arena.charge(len)?;
        Ok(Self {
            data: (0..len).map(f).collect(),
            _arena: PhantomData,
        })
    }

    /// Like [`Vector::from_fn_in`] but for fallible element construction.
    ///
    /// The arena is charged before any element is built.
    pub fn try_from_fn_in(
        arena: &'a Arena,
        len: usize,
        f: impl FnMut(usize) -> Result<T>,
    ) -> Result<Self> {
        arena.charge(len)?;
        let data = (0..len).map(f).collect::<Result<Vec<T>>>()?;
        Ok(Self {
            data,
            _arena: PhantomData,
        })
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked element access.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Get immutable slice of data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume and return the underlying elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<'a, T: Scalar> Vector<'a, T> {
    /// Create a zero-initialized vector.
    pub fn zeros_in(arena: &'a Arena, len: usize) -> Result<Self> {
        Self::from_vec_in(arena, vec![T::zero(); len])
    }

    /// Return a new vector with every element multiplied by `s`.
    pub fn scaled_in<'b>(&self, arena: &'b Arena, s: T) -> Result<Vector<'b, T>> {
        Vector::from_fn_in(arena, self.len(), |i| self.data[i] * s)
    }
}

impl<'a, T: Scalar> Vector<'a, Vector<'a, T>> {
    /// Build a row-major matrix from nested rows.
    ///
    /// Rows may differ in length; operations that need a rectangular matrix
    /// check this themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use adprims::{Arena, Matrix};
    ///
    /// let arena = Arena::new();
    /// let m = Matrix::from_rows_in(&arena, vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.len(), 2);
    /// assert_eq!(m[1][0], 3.0);
    /// ```
    pub fn from_rows_in(arena: &'a Arena, rows: Vec<Vec<T>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(|row| Vector::from_vec_in(arena, row))
            .collect::<Result<Vec<_>>>()?;
        Vector::from_vec_in(arena, rows)
    }

    /// Length of the first row, or zero for a matrix with no rows.
    pub fn ncols(&self) -> usize {
        self.data.first().map_or(0, Vector::len)
    }
}

impl<T> Index<usize> for Vector<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<'v, T> IntoIterator for &'v Vector<'_, T> {
    type Item = &'v T;
    type IntoIter = std::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
