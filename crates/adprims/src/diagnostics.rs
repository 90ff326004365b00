//! Advisory diagnostics side channel.
//!
//! Some differentiation rules are served but not yet validated. Each time
//! one of them runs it emits an [`Advisory`] to the context's
//! [`DiagnosticSink`]. Advisories never change control flow or results.

use std::cell::RefCell;
use std::fmt;

use log::warn;

use crate::registry::{Mode, OpId};

/// Log target used by [`LogSink`].
pub const ADVISORY_TARGET: &str = "adprims::advisory";

/// A single non-fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub op: OpId,
    pub mode: Mode,
    pub message: &'static str,
}

impl Advisory {
    /// Advisory marking an unvalidated differentiation rule.
    pub const fn untested(op: OpId, mode: Mode) -> Self {
        Self {
            op,
            mode,
            message: "untested",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.mode, self.op, self.message)
    }
}

/// Receiver for advisories.
pub trait DiagnosticSink {
    fn advise(&self, advisory: Advisory);
}

/// Forwards advisories to the `log` facade at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn advise(&self, advisory: Advisory) {
        warn!(target: ADVISORY_TARGET, "{advisory}");
    }
}

/// Discards advisories.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn advise(&self, _advisory: Advisory) {}
}

/// Keeps every advisory in arrival order, for golden-output checks.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: RefCell<Vec<Advisory>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the advisories seen so far.
    pub fn records(&self) -> Vec<Advisory> {
        self.records.borrow().clone()
    }

    /// Advisories rendered with `Display`, one per entry.
    pub fn rendered(&self) -> Vec<String> {
        self.records.borrow().iter().map(ToString::to_string).collect()
    }

    /// Drain the recorded advisories.
    pub fn take(&self) -> Vec<Advisory> {
        self.records.take()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn advise(&self, advisory: Advisory) {
        self.records.borrow_mut().push(advisory);
    }
}
