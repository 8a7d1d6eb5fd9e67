//! Runtime errors.

use mylang_diagnostic::{Diagnostic, ErrorCode};
use mylang_env::EnvError;
use mylang_ir::Name;

use crate::ValueKind;

/// Runtime failure. Evaluation stops at the first one.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum EvalError {
    #[error("undeclared variable `{name}`")]
    UndeclaredVariable { name: Name },
    #[error("variable `{name}` already declared")]
    AlreadyDeclared { name: Name },
    /// A value did not have the kind its context requires.
    #[error("expecting dynamic type {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },
    #[error("vectors must have the same dimension, found {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("vector length must not be negative, found {length}")]
    NegativeLength { length: i32 },
    #[error("index {index} out of bounds for vector of length {length}")]
    IndexOutOfBounds { index: i32, length: i32 },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::TypeMismatch { .. } => ErrorCode::E6001,
            EvalError::UndeclaredVariable { .. } => ErrorCode::E6002,
            EvalError::AlreadyDeclared { .. } => ErrorCode::E6003,
            EvalError::DimensionMismatch { .. } => ErrorCode::E6004,
            EvalError::NegativeLength { .. } => ErrorCode::E6005,
            EvalError::IndexOutOfBounds { .. } => ErrorCode::E6006,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::TypeMismatch { .. } => {
                diag.with_note("run with type checking enabled to catch this before execution")
            }
            EvalError::IndexOutOfBounds { length, .. } if *length > 0 => {
                diag.with_suggestion(format!("valid indices are 0 to {}", length.saturating_sub(1)))
            }
            _ => diag,
        }
    }
}

impl From<EnvError> for EvalError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::UndeclaredVariable(name) => EvalError::UndeclaredVariable { name },
            EnvError::AlreadyDeclared(name) => EvalError::AlreadyDeclared { name },
        }
    }
}
