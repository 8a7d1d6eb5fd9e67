//! Type errors and diagnostics.

use std::fmt;

use mylang_diagnostic::{Diagnostic, ErrorCode};
use mylang_env::EnvError;
use mylang_ir::Name;

use crate::Type;

/// What a context required.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expected {
    /// Exactly this type.
    Type(Type),
    /// Any pair type.
    Pair,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Type(ty) => ty.fmt(f),
            Expected::Pair => f.write_str("PAIR"),
        }
    }
}

/// Static error. Checking stops at the first one.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TypeError {
    #[error("found `{found}`, expected `{expected}`")]
    TypeMismatch { expected: Expected, found: Type },
    #[error("undeclared variable `{name}`")]
    UndeclaredVariable { name: Name },
    #[error("variable `{name}` already declared")]
    AlreadyDeclared { name: Name },
}

impl TypeError {
    pub fn mismatch(expected: Type, found: Type) -> Self {
        TypeError::TypeMismatch {
            expected: Expected::Type(expected),
            found,
        }
    }

    /// Convert to a diagnostic with a hint for common mistakes.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TypeError::TypeMismatch { expected, found } => {
                let diag = Diagnostic::error(ErrorCode::E2001).with_message(format!(
                    "type mismatch: expected `{expected}`, found `{found}`"
                ));
                match (expected, found) {
                    (Expected::Type(Type::Bool), Type::Int) => diag.with_suggestion(
                        "use a comparison (e.g. `x == 0`) to turn an integer into a boolean",
                    ),
                    (Expected::Type(Type::Vector), Type::Int) => {
                        diag.with_suggestion("build a vector with `[length; index]`")
                    }
                    (Expected::Type(Type::Int), Type::Bool) => {
                        diag.with_note("booleans are not integers; there is no implicit conversion")
                    }
                    _ => diag,
                }
            }
            TypeError::UndeclaredVariable { name } => Diagnostic::error(ErrorCode::E2003)
                .with_message(format!("undeclared variable `{name}`"))
                .with_suggestion(format!("declare it first with `var {name} = ...`")),
            TypeError::AlreadyDeclared { name } => Diagnostic::error(ErrorCode::E2006)
                .with_message(format!("variable `{name}` already declared in this scope"))
                .with_suggestion(format!("assign with `{name} = ...` instead")),
        }
    }
}

impl From<EnvError> for TypeError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::UndeclaredVariable(name) => TypeError::UndeclaredVariable { name },
            EnvError::AlreadyDeclared(name) => TypeError::AlreadyDeclared { name },
        }
    }
}
