//! Static types.

use std::fmt;

use crate::{Expected, TypeError};

/// The type of a MyLang expression.
///
/// Equality is structural. Vectors carry no element type or length: every
/// vector holds integers, so all `Vector` types are equal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Int,
    Bool,
    Pair(Box<Type>, Box<Type>),
    Vector,
}

impl Type {
    pub fn pair(first: Type, second: Type) -> Self {
        Type::Pair(Box::new(first), Box::new(second))
    }

    /// Require `found` to be exactly `self`.
    pub fn check_equal(&self, found: &Type) -> Result<(), TypeError> {
        if self == found {
            Ok(())
        } else {
            Err(TypeError::mismatch(self.clone(), found.clone()))
        }
    }

    /// Narrow to a pair, returning its component types.
    pub fn check_is_pair(&self) -> Result<(&Type, &Type), TypeError> {
        match self {
            Type::Pair(first, second) => Ok((first, second)),
            other => Err(TypeError::TypeMismatch {
                expected: Expected::Pair,
                found: other.clone(),
            }),
        }
    }

    pub fn first_pair_type(&self) -> Result<&Type, TypeError> {
        self.check_is_pair().map(|(first, _)| first)
    }

    pub fn second_pair_type(&self) -> Result<&Type, TypeError> {
        self.check_is_pair().map(|(_, second)| second)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => f.write_str("INT"),
            Type::Bool => f.write_str("BOOL"),
            Type::Pair(first, second) => write!(f, "({first}*{second})"),
            Type::Vector => f.write_str("VECTOR"),
        }
    }
}
