//! Dynamically-typed values passed through [`Registry::call`](super::Registry::call).

use crate::container::{Matrix, Vector};

/// A primal, tangent or adjoint value of one of the registry's kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Float(f64),
    Bool(bool),
    Vector(Vector<'a, f64>),
    Matrix(Matrix<'a, f64>),
    Tuple(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
    /// The zero-dimensional value: carries no derivative information.
    pub fn empty() -> Self {
        Value::Tuple(Vec::new())
    }

    /// True only for the zero-dimensional value.
    ///
    /// A zero-filled vector is *not* empty: it is differentiable and flat.
    pub fn is_empty_tuple(&self) -> bool {
        matches!(self, Value::Tuple(items) if items.is_empty())
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector<'a, f64>> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix<'a, f64>> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Rendered kind of this value, in the same format as [`Kind`](super::Kind)'s `Display`.
    pub fn kind_name(&self) -> String {
        match self {
            Value::Float(_) => "Float".to_string(),
            Value::Bool(_) => "Bool".to_string(),
            Value::Vector(_) => "Vector".to_string(),
            Value::Matrix(_) => "Matrix".to_string(),
            Value::Tuple(items) => {
                let inner: Vec<String> = items.iter().map(Value::kind_name).collect();
                format!("({})", inner.join(", "))
            }
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<Vector<'a, f64>> for Value<'a> {
    fn from(v: Vector<'a, f64>) -> Self {
        Value::Vector(v)
    }
}

impl<'a> From<Matrix<'a, f64>> for Value<'a> {
    fn from(m: Matrix<'a, f64>) -> Self {
        Value::Matrix(m)
    }
}

impl From<()> for Value<'_> {
    fn from(_: ()) -> Self {
        Value::empty()
    }
}
