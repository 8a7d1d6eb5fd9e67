use mylang_diagnostic::{Diagnostic, ErrorCode};

/// Tokenizer failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("on line {line}: invalid character `{text}`")]
    InvalidCharacter { text: String, line: u32 },
    #[error("on line {line}: integer literal `{text}` does not fit in 32 bits")]
    InvalidNumber { text: String, line: u32 },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::InvalidCharacter { line, .. } | LexError::InvalidNumber { line, .. } => *line,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::InvalidCharacter { text, line } => Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("invalid character `{text}`"))
                .with_line(*line),
            LexError::InvalidNumber { text, line } => Diagnostic::error(ErrorCode::E0003)
                .with_message(format!("integer literal `{text}` is out of range"))
                .with_line(*line)
                .with_note(format!("the largest integer literal is {}", i32::MAX)),
        }
    }
}
