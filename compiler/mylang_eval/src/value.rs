//! Runtime values.

use std::fmt;

use crate::EvalError;

/// The kind of a value, used in runtime type errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Int,
    Bool,
    Pair,
    Vector,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Int => "INT",
            ValueKind::Bool => "BOOL",
            ValueKind::Pair => "PAIR",
            ValueKind::Vector => "VECTOR",
        })
    }
}

/// A fixed-length vector of integers.
///
/// The length is set at construction. Elements are written only while a
/// result vector is being built.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct VectorValue {
    elems: Box<[i32]>,
}

impl VectorValue {
    pub fn zeros(length: usize) -> Self {
        VectorValue {
            elems: vec![0; length].into_boxed_slice(),
        }
    }

    /// `length` zeros with a `1` at `index`.
    ///
    /// Fails when `length` is negative or `index` is outside `0..length`.
    pub fn one_hot(length: i32, index: i32) -> Result<Self, EvalError> {
        let len = usize::try_from(length).map_err(|_| EvalError::NegativeLength { length })?;
        let slot = usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(EvalError::IndexOutOfBounds { index, length })?;
        let mut vector = VectorValue::zeros(len);
        vector.set(slot, 1);
        Ok(vector)
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub(crate) fn set(&mut self, index: usize, value: i32) {
        if let Some(slot) = self.elems.get_mut(index) {
            *slot = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.elems.iter().copied()
    }
}

impl From<Vec<i32>> for VectorValue {
    fn from(elems: Vec<i32>) -> Self {
        VectorValue {
            elems: elems.into_boxed_slice(),
        }
    }
}

impl FromIterator<i32> for VectorValue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        VectorValue {
            elems: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for VectorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.elems.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("]")
    }
}

/// A runtime value.
///
/// Equality is structural across all kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i32),
    Bool(bool),
    Pair(Box<Value>, Box<Value>),
    Vector(VectorValue),
}

impl Value {
    pub fn pair(first: Value, second: Value) -> Self {
        Value::Pair(Box::new(first), Box::new(second))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Pair(..) => ValueKind::Pair,
            Value::Vector(_) => ValueKind::Vector,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> EvalError {
        EvalError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn as_int(&self) -> Result<i32, EvalError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Int)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_pair(&self) -> Result<(&Value, &Value), EvalError> {
        match self {
            Value::Pair(first, second) => Ok((first, second)),
            other => Err(other.mismatch(ValueKind::Pair)),
        }
    }

    pub fn as_vector(&self) -> Result<&VectorValue, EvalError> {
        match self {
            Value::Vector(vector) => Ok(vector),
            other => Err(other.mismatch(ValueKind::Vector)),
        }
    }

    /// Take the pair apart without cloning its components.
    pub fn into_pair(self) -> Result<(Value, Value), EvalError> {
        match self {
            Value::Pair(first, second) => Ok((*first, *second)),
            other => Err(other.mismatch(ValueKind::Pair)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Pair(first, second) => write!(f, "({first},{second})"),
            Value::Vector(vector) => vector.fmt(f),
        }
    }
}

impl From<VectorValue> for Value {
    fn from(vector: VectorValue) -> Self {
        Value::Vector(vector)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_matches_print_format() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(
            Value::pair(Value::Int(1), Value::pair(Value::Bool(false), Value::Int(2))).to_string(),
            "(1,(false,2))"
        );
        assert_eq!(Value::from(VectorValue::from(vec![1, 0, -4])).to_string(), "[1;0;-4]");
        assert_eq!(Value::from(VectorValue::zeros(0)).to_string(), "[]");
    }

    #[test]
    fn one_hot_vectors() {
        assert_eq!(VectorValue::one_hot(3, 1), Ok(VectorValue::from(vec![0, 1, 0])));
        assert_eq!(VectorValue::one_hot(1, 0), Ok(VectorValue::from(vec![1])));
    }

    #[test]
    fn one_hot_rejects_bad_shapes() {
        assert_eq!(
            VectorValue::one_hot(-1, 0),
            Err(EvalError::NegativeLength { length: -1 })
        );
        assert_eq!(
            VectorValue::one_hot(3, 3),
            Err(EvalError::IndexOutOfBounds { index: 3, length: 3 })
        );
        assert_eq!(
            VectorValue::one_hot(3, -1),
            Err(EvalError::IndexOutOfBounds { index: -1, length: 3 })
        );
        assert_eq!(
            VectorValue::one_hot(0, 0),
            Err(EvalError::IndexOutOfBounds { index: 0, length: 0 })
        );
    }

    #[test]
    fn narrowing() {
        assert_eq!(Value::Int(4).as_int(), Ok(4));
        assert_eq!(
            Value::Int(4).as_bool(),
            Err(EvalError::TypeMismatch {
                expected: ValueKind::Bool,
                found: ValueKind::Int
            })
        );
        let pair = Value::pair(Value::Int(1), Value::Bool(true));
        assert_eq!(pair.as_pair(), Ok((&Value::Int(1), &Value::Bool(true))));
        assert_eq!(
            Value::Bool(true).as_vector(),
            Err(EvalError::TypeMismatch {
                expected: ValueKind::Vector,
                found: ValueKind::Bool
            })
        );
    }

    #[test]
    fn structural_equality() {
        let a = Value::pair(Value::Int(1), VectorValue::from(vec![0, 1]).into());
        let b = Value::pair(Value::Int(1), VectorValue::from(vec![0, 1]).into());
        assert_eq!(a, b);
        assert_ne!(
            Value::from(VectorValue::from(vec![0, 1])),
            Value::from(VectorValue::from(vec![0, 1, 0]))
        );
    }
}
