use mylang_diagnostic::{Diagnostic, ErrorCode};
use mylang_lexer::LexError;

/// Parser failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A specific token or construct was required.
    #[error("on line {line}: expected {expected}, found {found}")]
    Expected {
        expected: String,
        found: String,
        line: u32,
    },
    /// The token cannot start the construct being parsed.
    #[error("on line {line}: unexpected {found}")]
    Unexpected { found: String, line: u32 },
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    pub fn line(&self) -> u32 {
        match self {
            ParseError::Expected { line, .. } | ParseError::Unexpected { line, .. } => *line,
            ParseError::Lex(err) => err.line(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Expected {
                expected,
                found,
                line,
            } => Diagnostic::error(ErrorCode::E1001)
                .with_message(format!("expected {expected}, found {found}"))
                .with_line(*line),
            ParseError::Unexpected { found, line } => Diagnostic::error(ErrorCode::E1001)
                .with_message(format!("unexpected {found}"))
                .with_line(*line),
            ParseError::Lex(err) => err.to_diagnostic(),
        }
    }
}
