//! Tokenizer for MyLang source text.
//!
//! [`lex`] turns source into a flat list of [`SpannedToken`]s, each tagged
//! with its byte range and 1-based line. Whitespace and `//` comments are
//! dropped. Lexing stops at the first invalid character.

mod lex_error;
mod token;

pub use lex_error::LexError;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// A token with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Range<usize>,
    /// 1-based line the token starts on.
    pub line: u32,
}

/// Tokenize `source`.
pub fn lex(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut line: u32 = 1;
    let mut scanned = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        line = line.saturating_add(newlines_in(source, scanned..span.start));
        scanned = span.start;
        match result {
            Ok(token) => tokens.push(SpannedToken { token, span, line }),
            Err(()) => {
                let text = lexer.slice().to_string();
                return Err(if text.bytes().all(|b| b.is_ascii_digit()) {
                    LexError::InvalidNumber { text, line }
                } else {
                    LexError::InvalidCharacter { text, line }
                });
            }
        }
    }

    Ok(tokens)
}

/// Newlines in the skipped text between two tokens.
fn newlines_in(source: &str, gap: Range<usize>) -> u32 {
    let count = source.get(gap).map_or(0, |text| text.matches('\n').count());
    u32::try_from(count).unwrap_or(u32::MAX)
}
