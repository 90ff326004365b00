//! Typed primal, forward and reverse rules for each primitive.
//!
//! Each submodule exposes the call sites its primitive supports as plain
//! functions named `primal`, `forward` and `reverse`. Forward rules take the
//! primal inputs followed by one tangent per input; reverse rules take the
//! primal inputs (bundled as a tuple when the rule needs them together)
//! followed by the output adjoint, and return one adjoint per differentiable
//! input in input order.
//!
//! | Primitive | primal | forward | reverse |
//! |---|---|---|---|
//! | [`dot`] | yes | - | - |
//! | [`matvec`] | yes | - | yes |
//! | [`maximum`] | yes | yes (advisory) | yes (advisory) |
//! | [`lgamma`] | yes | `dx == 0` only | fails |
//! | [`digamma`] | fails | - | - |
//! | [`pow`] | yes | fails | fails |
//! | [`gt`] | yes | `()` | fails |
//! | `edef` | identity | identity | identity |
//!
//! Entries marked `-` exist only as unimplemented markers in the
//! [`Registry`](crate::registry::Registry).

pub mod digamma;
pub mod dot;
#[cfg(feature = "edef-example")]
pub mod edef;
pub mod gt;
pub mod lgamma;
pub mod matvec;
pub mod maximum;
pub mod pow;

mod util;
