//! Registration table for the built-in primitives.
//!
//! Kernels here only unpack [`Value`]s and forward to the typed rules in
//! [`crate::prims`].

use super::signature::{EMPTY, Kind, Signature};
use super::{Implementation, Mode, OpId, RegistryBuilder, Status, Value};
use crate::container::{Matrix, Vector};
use crate::context::Context;
use crate::error::{PrimitiveError, Result};
use crate::prims::{dot, gt, lgamma, matvec, maximum, pow};

use Implementation::{Kernel, Unimplemented};
use Kind::{Float, Matrix as MatrixK, Vector as VectorK};

/// Positional view over kernel arguments.
struct Args<'v, 'a> {
    op: OpId,
    mode: Mode,
    values: &'v [Value<'a>],
}

impl<'v, 'a> Args<'v, 'a> {
    fn new(op: OpId, mode: Mode, values: &'v [Value<'a>]) -> Self {
        Self { op, mode, values }
    }

    fn mismatch(&self, position: usize, expected: Kind) -> PrimitiveError {
        PrimitiveError::TypeMismatch {
            op: self.op,
            mode: self.mode,
            position,
            expected,
            actual: self
                .values
                .get(position)
                .map_or_else(|| "nothing".to_string(), Value::kind_name),
        }
    }

    fn float(&self, i: usize) -> Result<f64> {
        self.values
            .get(i)
            .and_then(Value::as_float)
            .ok_or_else(|| self.mismatch(i, Float))
    }

    fn vector(&self, i: usize) -> Result<&'v Vector<'a, f64>> {
        match self.values.get(i) {
            Some(Value::Vector(v)) => Ok(v),
            _ => Err(self.mismatch(i, VectorK)),
        }
    }

    fn matrix(&self, i: usize) -> Result<&'v Matrix<'a, f64>> {
        match self.values.get(i) {
            Some(Value::Matrix(m)) => Ok(m),
            _ => Err(self.mismatch(i, MatrixK)),
        }
    }

    /// Arguments bundled in the tuple at position `i`.
    fn bundle(&self, i: usize, expected: Kind) -> Result<Args<'v, 'a>> {
        match self.values.get(i) {
            Some(Value::Tuple(items)) => Ok(Args::new(self.op, self.mode, items)),
            _ => Err(self.mismatch(i, expected)),
        }
    }
}

const VEC_VEC: Kind = Kind::Tuple(&[VectorK, VectorK]);
const MAT_VEC: Kind = Kind::Tuple(&[MatrixK, VectorK]);
const FLOAT_FLOAT: Kind = Kind::Tuple(&[Float, Float]);

fn dot_primal<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::Dot, Mode::Primal, args);
    Ok(Value::Float(dot::primal(args.vector(0)?, args.vector(1)?)?))
}

fn matvec_primal<'a>(cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::MatrixVector, Mode::Primal, args);
    Ok(matvec::primal(cx, args.matrix(0)?, args.vector(1)?)?.into())
}

fn matvec_reverse<'a>(cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::MatrixVector, Mode::Reverse, args);
    let bundle = args.bundle(0, MAT_VEC)?;
    let (dm, dv) = matvec::reverse(
        cx,
        (bundle.matrix(0)?, bundle.vector(1)?),
        args.vector(1)?,
    )?;
    Ok(Value::Tuple(vec![dm.into(), dv.into()]))
}

fn maximum_primal<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::Maximum, Mode::Primal, args);
    Ok(Value::Float(maximum::primal(args.vector(0)?)?))
}

fn maximum_forward<'a>(cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::Maximum, Mode::Forward, args);
    Ok(Value::Float(maximum::forward(
        cx,
        args.vector(0)?,
        args.vector(1)?,
    )?))
}

fn maximum_reverse<'a>(cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::Maximum, Mode::Reverse, args);
    Ok(maximum::reverse(cx, args.vector(0)?, args.float(1)?)?.into())
}

fn lgamma_primal<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::LogGamma, Mode::Primal, args);
    Ok(Value::Float(lgamma::primal(args.float(0)?)))
}

fn lgamma_forward<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::LogGamma, Mode::Forward, args);
    Ok(Value::Float(lgamma::forward(args.float(0)?, args.float(1)?)?))
}

fn pow_primal<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::Power, Mode::Primal, args);
    Ok(Value::Float(pow::primal(args.float(0)?, args.float(1)?)))
}

fn gt_primal<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::GreaterThan, Mode::Primal, args);
    Ok(Value::Bool(gt::primal(args.float(0)?, args.float(1)?)))
}

fn gt_forward<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
    let args = Args::new(OpId::GreaterThan, Mode::Forward, args);
    let () = gt::forward(
        args.float(0)?,
        args.float(1)?,
        args.float(2)?,
        args.float(3)?,
    );
    Ok(Value::empty())
}

#[cfg(feature = "edef-example")]
mod edef_kernels {
    use super::*;
    use crate::prims::edef;

    pub(super) fn primal<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
        let args = Args::new(OpId::EdefExample, Mode::Primal, args);
        Ok(Value::Float(edef::primal(args.float(0)?)))
    }

    pub(super) fn forward<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
        let args = Args::new(OpId::EdefExample, Mode::Forward, args);
        Ok(Value::Float(edef::forward(args.float(0)?, args.float(1)?)))
    }

    pub(super) fn reverse<'a>(_cx: &Context<'a>, args: &[Value<'a>]) -> Result<Value<'a>> {
        let args = Args::new(OpId::EdefExample, Mode::Reverse, args);
        Ok(Value::Float(edef::reverse(args.float(0)?, args.float(1)?)))
    }
}

/// Register every built-in primitive.
pub(super) fn register_all(b: &mut RegistryBuilder) -> Result<()> {
    use Mode::{Forward, Primal, Reverse};
    use Status::{Implemented, Partial, Unimplemented as Missing};

    b.register(
        OpId::Dot,
        Primal,
        Implemented,
        Signature::new(&[VectorK, VectorK], Float),
        Kernel(dot_primal),
    )?
    .register(
        OpId::Dot,
        Forward,
        Missing,
        Signature::new(&[VectorK, VectorK, VectorK, VectorK], Float),
        Unimplemented,
    )?
    .register(
        OpId::Dot,
        Reverse,
        Missing,
        Signature::new(&[VEC_VEC, Float], VEC_VEC),
        Unimplemented,
    )?;

    b.register(
        OpId::MatrixVector,
        Primal,
        Implemented,
        Signature::new(&[MatrixK, VectorK], VectorK),
        Kernel(matvec_primal),
    )?
    .register(
        OpId::MatrixVector,
        Forward,
        Missing,
        Signature::new(&[MatrixK, VectorK, MatrixK, VectorK], VectorK),
        Unimplemented,
    )?
    .register(
        OpId::MatrixVector,
        Reverse,
        Implemented,
        Signature::new(&[MAT_VEC, VectorK], MAT_VEC),
        Kernel(matvec_reverse),
    )?;

    b.register(
        OpId::Maximum,
        Primal,
        Implemented,
        Signature::new(&[VectorK], Float),
        Kernel(maximum_primal),
    )?
    .register(
        OpId::Maximum,
        Forward,
        Implemented,
        Signature::new(&[VectorK, VectorK], Float),
        Kernel(maximum_forward),
    )?
    .register(
        OpId::Maximum,
        Reverse,
        Implemented,
        Signature::new(&[VectorK, Float], VectorK),
        Kernel(maximum_reverse),
    )?;

    b.register(
        OpId::LogGamma,
        Primal,
        Implemented,
        Signature::new(&[Float], Float),
        Kernel(lgamma_primal),
    )?
    .register(
        OpId::LogGamma,
        Forward,
        Partial,
        Signature::new(&[Float, Float], Float),
        Kernel(lgamma_forward),
    )?
    .register(
        OpId::LogGamma,
        Reverse,
        Missing,
        Signature::new(&[Float, Float], Float),
        Unimplemented,
    )?;

    b.register(
        OpId::Digamma,
        Primal,
        Missing,
        Signature::new(&[Float], Float),
        Unimplemented,
    )?
    .register(
        OpId::Digamma,
        Forward,
        Missing,
        Signature::new(&[Float, Float], Float),
        Unimplemented,
    )?
    .register(
        OpId::Digamma,
        Reverse,
        Missing,
        Signature::new(&[Float, Float], Float),
        Unimplemented,
    )?;

    b.register(
        OpId::Power,
        Primal,
        Implemented,
        Signature::new(&[Float, Float], Float),
        Kernel(pow_primal),
    )?
    .register(
        OpId::Power,
        Forward,
        Missing,
        Signature::new(&[Float, Float, Float, Float], Float),
        Unimplemented,
    )?
    .register(
        OpId::Power,
        Reverse,
        Missing,
        Signature::new(&[Float, Float, Float], FLOAT_FLOAT),
        Unimplemented,
    )?;

    b.register(
        OpId::GreaterThan,
        Primal,
        Implemented,
        Signature::new(&[Float, Float], Kind::Bool),
        Kernel(gt_primal),
    )?
    .register(
        OpId::GreaterThan,
        Forward,
        Implemented,
        Signature::new(&[Float, Float, Float, Float], EMPTY),
        Kernel(gt_forward),
    )?
    .register(
        OpId::GreaterThan,
        Reverse,
        Missing,
        Signature::new(&[Float, Float, EMPTY], FLOAT_FLOAT),
        Unimplemented,
    )?;

    #[cfg(feature = "edef-example")]
    b.register(
        OpId::EdefExample,
        Primal,
        Implemented,
        Signature::new(&[Float], Float),
        Kernel(edef_kernels::primal),
    )?
    .register(
        OpId::EdefExample,
        Forward,
        Implemented,
        Signature::new(&[Float, Float], Float),
        Kernel(edef_kernels::forward),
    )?
    .register(
        OpId::EdefExample,
        Reverse,
        Implemented,
        Signature::new(&[Float, Float], Float),
        Kernel(edef_kernels::reverse),
    )?;

    Ok(())
}
