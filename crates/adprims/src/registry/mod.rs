//! Explicit tagged registry of primitive triads.
//!
//! Every primitive is addressed by an [`OpId`] and each of its three call
//! sites by a [`Mode`]. The registry maps `(OpId, Mode)` to an [`Entry`]
//! carrying the exact [`Signature`], the declared [`Status`] and the
//! [`Implementation`], which is either a kernel or an explicit unimplemented
//! marker.
//!
//! # Architecture
//!
//! ```text
//! RegistryBuilder ──register(op, mode, ...)──► BTreeMap<(OpId, Mode), Entry>
//!        │
//!        ▼ build(): every declared op has Primal, Forward and Reverse
//!   Registry ──call(cx, op, mode, args)──► Signature::check ──► Kernel
//!                                                        └──► NotImplemented
//! ```
//!
//! # Example
//!
//! ```
//! use adprims::{Arena, Context, Registry, Value};
//! use adprims::registry::{Mode, OpId};
//!
//! let registry = Registry::standard().unwrap();
//! let arena = Arena::new();
//! let cx = Context::new(&arena);
//!
//! let out = registry
//!     .call(&cx, OpId::Power, Mode::Primal, &[Value::Float(2.0), Value::Float(3.0)])
//!     .unwrap();
//! assert_eq!(out, Value::Float(8.0));
//!
//! let err = registry
//!     .call(&cx, OpId::Power, Mode::Reverse, &[Value::Float(2.0), Value::Float(3.0), Value::Float(1.0)])
//!     .unwrap_err();
//! assert!(err.is_not_implemented());
//! ```

mod op;
mod signature;
mod standard;
mod value;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::{debug, trace};

pub use op::{Mode, OpId, Status};
pub use signature::{EMPTY, Kind, Signature};
pub use value::Value;

use crate::context::Context;
use crate::error::{PrimitiveError, Result};

/// Function pointer type of a registry kernel.
///
/// Arguments have already been checked against the entry's signature.
pub type Kernel = for<'a> fn(&Context<'a>, &[Value<'a>]) -> Result<Value<'a>>;

/// What an entry dispatches to.
#[derive(Clone, Copy)]
pub enum Implementation {
    Kernel(Kernel),
    /// Declared slot with no rule; calls fail with `NotImplemented`.
    Unimplemented,
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Implementation::Kernel(_) => f.write_str("Kernel(..)"),
            Implementation::Unimplemented => f.write_str("Unimplemented"),
        }
    }
}

/// One `(OpId, Mode)` slot.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    op: OpId,
    mode: Mode,
    status: Status,
    signature: Signature,
    implementation: Implementation,
}

impl Entry {
    pub fn op(&self) -> OpId {
        self.op
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn implementation(&self) -> Implementation {
        self.implementation
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} ({})",
            self.op, self.mode, self.signature, self.status
        )
    }
}

/// The three entries of one primitive.
#[derive(Debug, Clone, Copy)]
pub struct Primitive<'r> {
    pub op: OpId,
    pub primal: &'r Entry,
    pub forward: &'r Entry,
    pub reverse: &'r Entry,
}

impl<'r> Primitive<'r> {
    pub fn entry(&self, mode: Mode) -> &'r Entry {
        match mode {
            Mode::Primal => self.primal,
            Mode::Forward => self.forward,
            Mode::Reverse => self.reverse,
        }
    }

    pub fn status(&self, mode: Mode) -> Status {
        self.entry(mode).status
    }
}

/// Collects entries and validates them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    declared: BTreeSet<OpId>,
    entries: BTreeMap<(OpId, Mode), Entry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a primitive without registering any of its entries yet.
    ///
    /// `build` fails unless all three modes are registered later.
    pub fn declare(&mut self, op: OpId) -> &mut Self {
        self.declared.insert(op);
        self
    }

    /// Register one entry.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntry` if `(op, mode)` is already registered.
    /// - `InconsistentStatus` if `status` is `Unimplemented` but a kernel is
    ///   given, or the implementation is the unimplemented marker but `status`
    ///   claims otherwise.
    pub fn register(
        &mut self,
        op: OpId,
        mode: Mode,
        status: Status,
        signature: Signature,
        implementation: Implementation,
    ) -> Result<&mut Self> {
        let has_kernel = matches!(implementation, Implementation::Kernel(_));
        if has_kernel == (status == Status::Unimplemented) {
            return Err(PrimitiveError::InconsistentStatus { op, mode, status });
        }
        if self.entries.contains_key(&(op, mode)) {
            return Err(PrimitiveError::DuplicateEntry { op, mode });
        }
        self.declared.insert(op);
        self.entries.insert(
            (op, mode),
            Entry {
                op,
                mode,
                status,
                signature,
                implementation,
            },
        );
        Ok(self)
    }

    /// Validate that every declared primitive has all three entries.
    ///
    /// # Errors
    ///
    /// Returns `MissingEntry` for the first absent `(op, mode)`, in
    /// declaration order.
    pub fn build(self) -> Result<Registry> {
        for &op in &self.declared {
            for mode in Mode::ALL {
                if !self.entries.contains_key(&(op, mode)) {
                    return Err(PrimitiveError::MissingEntry { op, mode });
                }
            }
        }
        debug!(
            "registry built: {} primitives, {} entries",
            self.declared.len(),
            self.entries.len()
        );
        Ok(Registry {
            entries: self.entries,
        })
    }
}

/// Validated mapping from `(OpId, Mode)` to entries.
///
/// Immutable once built; share it freely between passes.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: BTreeMap<(OpId, Mode), Entry>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding every primitive this crate provides.
    pub fn standard() -> Result<Self> {
        let mut builder = RegistryBuilder::new();
        standard::register_all(&mut builder)?;
        builder.build()
    }

    pub fn entry(&self, op: OpId, mode: Mode) -> Option<&Entry> {
        self.entries.get(&(op, mode))
    }

    pub fn status(&self, op: OpId, mode: Mode) -> Option<Status> {
        self.entry(op, mode).map(Entry::status)
    }

    pub fn signature(&self, op: OpId, mode: Mode) -> Option<&Signature> {
        self.entry(op, mode).map(Entry::signature)
    }

    /// All entries, ordered by primitive then mode.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Registered primitives in declaration order.
    pub fn ops(&self) -> impl Iterator<Item = OpId> + '_ {
        self.entries
            .keys()
            .filter(|(_, mode)| *mode == Mode::Primal)
            .map(|(op, _)| *op)
    }

    pub fn primitive(&self, op: OpId) -> Option<Primitive<'_>> {
        Some(Primitive {
            op,
            primal: self.entry(op, Mode::Primal)?,
            forward: self.entry(op, Mode::Forward)?,
            reverse: self.entry(op, Mode::Reverse)?,
        })
    }

    /// Entries that do not fully serve their contract, with their status.
    pub fn incomplete(&self) -> Vec<(OpId, Mode, Status)> {
        self.entries()
            .filter(|e| e.status != Status::Implemented)
            .map(|e| (e.op, e.mode, e.status))
            .collect()
    }

    /// Invoke `op` in `mode`.
    ///
    /// # Errors
    ///
    /// - `MissingEntry` if the primitive is not registered.
    /// - `ArityMismatch` / `TypeMismatch` if `args` violate the signature.
    /// - `NotImplemented` for unimplemented entries, and whatever the kernel
    ///   itself reports.
    pub fn call<'a>(
        &self,
        cx: &Context<'a>,
        op: OpId,
        mode: Mode,
        args: &[Value<'a>],
    ) -> Result<Value<'a>> {
        let entry = self
            .entry(op, mode)
            .ok_or(PrimitiveError::MissingEntry { op, mode })?;
        entry.signature.check(op, mode, args)?;
        trace!("dispatch {op} [{mode}]");
        match entry.implementation {
            Implementation::Kernel(kernel) => {
                let out = kernel(cx, args)?;
                debug_assert!(
                    entry.signature.output.accepts(&out),
                    "{op} [{mode}] returned {} for {}",
                    out.kind_name(),
                    entry.signature.output
                );
                Ok(out)
            }
            Implementation::Unimplemented => Err(PrimitiveError::not_implemented(op, mode)),
        }
    }

    /// Invoke a primitive by its base name.
    pub fn call_by_name<'a>(
        &self,
        cx: &Context<'a>,
        name: &str,
        mode: Mode,
        args: &[Value<'a>],
    ) -> Result<Value<'a>> {
        let op: OpId = name.parse()?;
        self.call(cx, op, mode, args)
    }
}
