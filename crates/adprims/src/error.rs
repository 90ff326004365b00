//! Error types for adprims.

use thiserror::Error;

use crate::registry::{Kind, Mode, OpId, Status};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrimitiveError>;

/// Errors raised by primitives and by the registry.
///
/// The variants fall into two tiers. Precondition violations
/// (`Precondition`, `LengthMismatch`, `ArityMismatch`, `TypeMismatch`) signal a
/// calling-convention bug in the caller. `NotImplemented` signals that the
/// requested differentiation mode has no rule; callers must treat it as fatal
/// for the current pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrimitiveError {
    /// A primitive was called with inputs outside its domain.
    #[error("{op}: precondition violated: {message}")]
    Precondition { op: OpId, message: String },

    /// Two sequences that must agree in length do not.
    #[error("{op}: length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        op: OpId,
        expected: usize,
        actual: usize,
    },

    /// The requested mode has no implementation.
    #[error("{op} [{mode}] is not implemented")]
    NotImplemented { op: OpId, mode: Mode },

    /// A capacity-limited arena cannot serve an allocation.
    #[error("arena exhausted: requested {requested} elements, {remaining} remaining")]
    ArenaExhausted { requested: usize, remaining: usize },

    /// Wrong number of arguments passed through the registry.
    #[error("{op} [{mode}]: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        op: OpId,
        mode: Mode,
        expected: usize,
        actual: usize,
    },

    /// Argument kind does not match the registered signature.
    #[error("{op} [{mode}]: argument {position} expected {expected}, got {actual}")]
    TypeMismatch {
        op: OpId,
        mode: Mode,
        position: usize,
        expected: Kind,
        actual: String,
    },

    /// A declared primitive lacks one of its three entries.
    #[error("registry has no {mode} entry for {op}")]
    MissingEntry { op: OpId, mode: Mode },

    /// The same entry was registered twice.
    #[error("{op} [{mode}] registered twice")]
    DuplicateEntry { op: OpId, mode: Mode },

    /// Declared status disagrees with the supplied implementation.
    #[error("{op} [{mode}] is declared {status} but its implementation disagrees")]
    InconsistentStatus { op: OpId, mode: Mode, status: Status },

    /// A primitive name did not resolve.
    #[error("unknown primitive `{name}`")]
    UnknownOp { name: String },
}

impl PrimitiveError {
    /// True for the "no rule for this mode" tier.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, PrimitiveError::NotImplemented { .. })
    }

    /// True for calling-convention violations (bad domain, lengths, arity or kinds).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PrimitiveError::Precondition { .. }
                | PrimitiveError::LengthMismatch { .. }
                | PrimitiveError::ArityMismatch { .. }
                | PrimitiveError::TypeMismatch { .. }
        )
    }

    pub(crate) fn not_implemented(op: OpId, mode: Mode) -> Self {
        PrimitiveError::NotImplemented { op, mode }
    }
}
