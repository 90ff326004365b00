//! Calling conventions of registry entries.

use std::fmt;

use super::op::{Mode, OpId};
use super::value::Value;
use crate::error::{PrimitiveError, Result};

/// Shape family of a value crossing the registry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Float,
    Bool,
    Vector,
    Matrix,
    /// Fixed heterogeneous product. `Tuple(&[])` is the zero-dimensional value.
    Tuple(&'static [Kind]),
}

/// The zero-dimensional kind.
pub const EMPTY: Kind = Kind::Tuple(&[]);

impl Kind {
    /// Check whether `value` belongs to this kind, recursing into tuples.
    pub fn accepts(&self, value: &Value<'_>) -> bool {
        match (self, value) {
            (Kind::Float, Value::Float(_))
            | (Kind::Bool, Value::Bool(_))
            | (Kind::Vector, Value::Vector(_))
            | (Kind::Matrix, Value::Matrix(_)) => true,
            (Kind::Tuple(kinds), Value::Tuple(items)) => {
                kinds.len() == items.len() && kinds.iter().zip(items).all(|(k, v)| k.accepts(v))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Float => f.write_str("Float"),
            Kind::Bool => f.write_str("Bool"),
            Kind::Vector => f.write_str("Vector"),
            Kind::Matrix => f.write_str("Matrix"),
            Kind::Tuple(kinds) => {
                f.write_str("(")?;
                for (i, k) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Input kinds and output kind of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub inputs: &'static [Kind],
    pub output: Kind,
}

impl Signature {
    pub const fn new(inputs: &'static [Kind], output: Kind) -> Self {
        Self { inputs, output }
    }

    /// Validate arity and argument kinds for a call to `op` in `mode`.
    pub fn check(&self, op: OpId, mode: Mode, args: &[Value<'_>]) -> Result<()> {
        if args.len() != self.inputs.len() {
            return Err(PrimitiveError::ArityMismatch {
                op,
                mode,
                expected: self.inputs.len(),
                actual: args.len(),
            });
        }
        for (position, (kind, arg)) in self.inputs.iter().zip(args).enumerate() {
            if !kind.accepts(arg) {
                return Err(PrimitiveError::TypeMismatch {
                    op,
                    mode,
                    position,
                    expected: *kind,
                    actual: arg.kind_name(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", Kind::Tuple(self.inputs), self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(EMPTY.to_string(), "()");
        assert_eq!(
            Kind::Tuple(&[Kind::Matrix, Kind::Vector]).to_string(),
            "(Matrix, Vector)"
        );
    }

    #[test]
    fn test_signature_display() {
        let sig = Signature::new(&[Kind::Vector, Kind::Float], Kind::Vector);
        assert_eq!(sig.to_string(), "(Vector, Float) -> Vector");
    }

    #[test]
    fn test_check_arity() {
        let sig = Signature::new(&[Kind::Float, Kind::Float], Kind::Float);
        let err = sig
            .check(OpId::Power, Mode::Primal, &[Value::Float(1.0)])
            .unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::ArityMismatch {
                op: OpId::Power,
                mode: Mode::Primal,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_check_kind() {
        let sig = Signature::new(&[Kind::Float, Kind::Float], Kind::Float);
        let err = sig
            .check(
                OpId::Power,
                Mode::Primal,
                &[Value::Float(1.0), Value::Bool(true)],
            )
            .unwrap_err();
        match err {
            PrimitiveError::TypeMismatch {
                position,
                expected,
                actual,
                ..
            } => {
                assert_eq!(position, 1);
                assert_eq!(expected, Kind::Float);
                assert_eq!(actual, "Bool");
            }
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_accepts_only_empty_tuple() {
        assert!(EMPTY.accepts(&Value::empty()));
        assert!(!EMPTY.accepts(&Value::Tuple(vec![Value::Float(0.0)])));
        assert!(!EMPTY.accepts(&Value::Float(0.0)));
    }
}
