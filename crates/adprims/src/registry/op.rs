//! Primitive identities, differentiation modes and implementation status.

use std::fmt;
use std::str::FromStr;

use crate::error::PrimitiveError;

/// Identity of a registered primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpId {
    /// Inner product of two equal-length vectors.
    Dot,
    /// Dense matrix times vector.
    MatrixVector,
    /// Largest element of a non-empty vector (first occurrence wins).
    Maximum,
    /// Natural log of the absolute gamma function.
    LogGamma,
    /// Derivative of `LogGamma`.
    Digamma,
    /// Scalar `x^e`.
    Power,
    /// Scalar `a > b`.
    GreaterThan,
    /// Identity used to exercise the triad end-to-end.
    #[cfg(feature = "edef-example")]
    EdefExample,
}

impl OpId {
    /// Every primitive, in declaration order.
    pub const ALL: &'static [OpId] = &[
        OpId::Dot,
        OpId::MatrixVector,
        OpId::Maximum,
        OpId::LogGamma,
        OpId::Digamma,
        OpId::Power,
        OpId::GreaterThan,
        #[cfg(feature = "edef-example")]
        OpId::EdefExample,
    ];

    /// Stable base name shared by the three entries.
    pub const fn name(self) -> &'static str {
        match self {
            OpId::Dot => "dot",
            OpId::MatrixVector => "mul_mat_vec",
            OpId::Maximum => "maximum",
            OpId::LogGamma => "lgamma",
            OpId::Digamma => "digamma",
            OpId::Power => "pow",
            OpId::GreaterThan => "gt",
            #[cfg(feature = "edef-example")]
            OpId::EdefExample => "edef_example",
        }
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpId {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpId::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| PrimitiveError::UnknownOp {
                name: s.to_string(),
            })
    }
}

/// Which of the three call sites of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Ordinary evaluation.
    Primal,
    /// Tangent propagation (Jacobian-vector product).
    Forward,
    /// Adjoint propagation (vector-Jacobian product).
    Reverse,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Primal, Mode::Forward, Mode::Reverse];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Primal => "primal",
            Mode::Forward => "forward",
            Mode::Reverse => "reverse",
        })
    }
}

/// How much of an entry's contract is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Implemented,
    /// Serves a subset of inputs and reports `NotImplemented` for the rest.
    Partial,
    Unimplemented,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Implemented => "implemented",
            Status::Partial => "partial",
            Status::Unimplemented => "unimplemented",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for &op in OpId::ALL {
            assert_eq!(op.name().parse::<OpId>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "conv2d".parse::<OpId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown primitive `conv2d`");
    }

    #[test]
    fn test_mode_order() {
        assert!(Mode::Primal < Mode::Forward);
        assert!(Mode::Forward < Mode::Reverse);
    }
}
