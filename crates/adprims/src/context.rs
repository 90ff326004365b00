//! Per-call environment supplied by the caller.

use std::fmt;

use crate::arena::Arena;
use crate::diagnostics::{Advisory, DiagnosticSink, LogSink};

static LOG_SINK: LogSink = LogSink;

/// Arena and diagnostic sink borrowed for the duration of a differentiation pass.
///
/// Primitives that build containers allocate them in [`Context::arena`], so
/// their outputs carry the context's lifetime `'a`.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    arena: &'a Arena,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Context<'a> {
    /// Context whose advisories go to the `log` facade.
    pub fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            sink: &LOG_SINK,
        }
    }

    /// Context with an explicit advisory sink.
    pub fn with_sink(arena: &'a Arena, sink: &'a dyn DiagnosticSink) -> Self {
        Self { arena, sink }
    }

    /// Arena that outputs are allocated in.
    #[inline]
    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    pub(crate) fn advise(&self, advisory: Advisory) {
        self.sink.advise(advisory);
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("arena", self.arena)
            .finish_non_exhaustive()
    }
}
