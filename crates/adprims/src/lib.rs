//! adprims - primitive registry for automatic-differentiation code generators
//!
//! Generated programs call into this crate for operations the generator
//! cannot derive itself: dense linear algebra, order statistics, special
//! functions and comparisons. Every primitive is a triad:
//!
//! - **primal**: ordinary evaluation
//! - **forward**: tangent propagation (Jacobian-vector product)
//! - **reverse**: adjoint propagation (vector-Jacobian product)
//!
//! # Architecture
//!
//! ```text
//! Registry ── (OpId, Mode) ──► Entry { Signature, Status, Implementation }
//!    │                                                   │
//!    ▼ call(cx, ..)                                      ▼
//! Context { &Arena, &dyn DiagnosticSink }        prims::{dot, matvec, maximum,
//!    │                                                  lgamma, digamma, pow, gt}
//!    ▼
//! Vector<'a, T> / Matrix<'a, T>  (built in the caller's Arena)
//! ```
//!
//! The typed rules in [`prims`] can be called directly; [`Registry`] adds
//! explicit dispatch over dynamically-typed [`Value`]s with signature checks
//! and load-time validation that every primitive has all three entries.
//!
//! # Example
//!
//! ```
//! use adprims::{Arena, Context, Matrix, Vector};
//! use adprims::prims::{matvec, maximum};
//!
//! let arena = Arena::new();
//! let cx = Context::new(&arena);
//!
//! let m = Matrix::from_rows_in(&arena, vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let v = Vector::from_vec_in(&arena, vec![1.0, 1.0]).unwrap();
//! let o = matvec::primal(&cx, &m, &v).unwrap();
//! assert_eq!(o.as_slice(), &[3.0, 7.0]);
//!
//! // Reverse pass through the maximum, then through the product.
//! let d_o = maximum::reverse(&cx, &o, 1.0).unwrap();
//! let (d_m, d_v) = matvec::reverse(&cx, (&m, &v), &d_o).unwrap();
//! assert_eq!(d_m[1].as_slice(), &[1.0, 1.0]);
//! assert_eq!(d_v.as_slice(), &[3.0, 4.0]);
//! ```

pub mod arena;
pub mod container;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod prims;
pub mod random;
pub mod registry;
pub mod scalar;

mod special;

pub use arena::Arena;
pub use container::{Matrix, Vector, dot, size};
pub use context::Context;
pub use diagnostics::{Advisory, DiagnosticSink, LogSink, NullSink, RecordingSink};
pub use error::{PrimitiveError, Result};
pub use registry::{Mode, OpId, Registry, Status, Value};
pub use scalar::Scalar;
