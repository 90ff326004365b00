//! Caller-owned allocation context for container construction.
//!
//! Every [`Vector`](crate::container::Vector) is built *in* an arena and
//! borrows it for its whole life, so the borrow checker enforces that the
//! arena outlives every container made from it. The primitives only ever hold
//! `&Arena`; they never own, reset or free one.
//!
//! An arena counts the elements charged to it and can be given a fixed
//! capacity, in which case construction past the limit fails with
//! [`PrimitiveError::ArenaExhausted`] instead of growing without bound.
//!
//! `Arena` uses interior `Cell` counters and is therefore `!Sync`: sharing one
//! between threads requires the host to wrap it in its own synchronization.

use std::cell::Cell;

use crate::error::{PrimitiveError, Result};

/// Element-counting allocation context.
#[derive(Debug, Default)]
pub struct Arena {
    capacity: Option<usize>,
    used: Cell<usize>,
    allocations: Cell<usize>,
}

impl Arena {
    /// Create an unbounded arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena that serves at most `elements` elements between resets.
    ///
    /// # Example
    ///
    /// ```
    /// use adprims::{Arena, Vector};
    ///
    /// let arena = Arena::with_capacity(4);
    /// let v: Vector<f64> = Vector::zeros_in(&arena, 3).unwrap();
    /// assert_eq!(arena.remaining(), Some(1));
    /// assert!(Vector::<f64>::zeros_in(&arena, 2).is_err());
    /// # drop(v);
    /// ```
    pub fn with_capacity(elements: usize) -> Self {
        Self {
            capacity: Some(elements),
            ..Self::default()
        }
    }

    /// Configured capacity, if any.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Elements charged since creation or the last reset.
    pub fn used(&self) -> usize {
        self.used.get()
    }

    /// Elements still available, or `None` for an unbounded arena.
    pub fn remaining(&self) -> Option<usize> {
        self.capacity.map(|cap| cap.saturating_sub(self.used.get()))
    }

    /// Number of container constructions served.
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    /// Release all accounting.
    ///
    /// Taking `&mut self` means no container built from this arena can still
    /// be alive when it is reset.
    pub fn reset(&mut self) {
        self.used.set(0);
        self.allocations.set(0);
    }

    /// Charge `len` elements for one container construction.
    pub(crate) fn charge(&self, len: usize) -> Result<()> {
        if let Some(remaining) = self.remaining() {
            if len > remaining {
                return Err(PrimitiveError::ArenaExhausted {
                    requested: len,
                    remaining,
                });
            }
        }
        self.used.set(self.used.get() + len);
        self.allocations.set(self.allocations.get() + 1);
        Ok(())
    }
}
