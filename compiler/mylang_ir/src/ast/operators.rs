//! Unary and binary operators.

use std::fmt;

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-e`, integer negation.
    Neg,
    /// `!e`, boolean negation.
    Not,
    /// `fst e`, first component of a pair.
    Fst,
    /// `snd e`, second component of a pair.
    Snd,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::Fst => "fst",
            Self::Snd => "snd",
        }
    }
}

/// Infix operators, lowest precedence last.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `*`: int product, dot product, or scalar scaling.
    Mul,
    /// `+`: int sum or pointwise vector sum.
    Add,
    /// `==`: structural equality.
    Eq,
    /// `&&`: boolean and (both sides always evaluated).
    And,
    /// `,`: pair construction.
    Pair,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Add => "+",
            Self::Eq => "==",
            Self::And => "&&",
            Self::Pair => ",",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
