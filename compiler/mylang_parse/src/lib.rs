//! Parser for MyLang.
//!
//! Builds a [`Program`] from source text or from a token list. The grammar
//! is small enough that there is no recovery: the first unexpected token
//! ends parsing with a [`ParseError`] carrying its line.
//!
//! ```text
//! Prog    ::= StmtSeq EOF
//! StmtSeq ::= Stmt (';' StmtSeq)?
//! Stmt    ::= 'var' IDENT '=' Exp | IDENT '=' Exp | 'print' Exp
//!           | 'if' '(' Exp ')' Block ('else' Block)?
//!           | 'foreach' IDENT 'in' Exp Block
//! Block   ::= '{' StmtSeq '}'
//! Exp     ::= And (',' And)*
//! And     ::= Eq ('&&' Eq)*
//! Eq      ::= Add ('==' Add)*
//! Add     ::= Mul ('+' Mul)*
//! Mul     ::= Atom ('*' Atom)*
//! Atom    ::= 'fst' Atom | 'snd' Atom | '-' Atom | '!' Atom | BOOL | NUM
//!           | IDENT | '(' Exp ')' | '[' Exp ';' Exp ']'
//! ```

mod error;
mod parser;

pub use error::ParseError;
pub use parser::Parser;

use mylang_ir::Program;
use mylang_lexer::SpannedToken;

/// Lex and parse `source`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = mylang_lexer::lex(source)?;
    tracing::debug!(tokens = tokens.len(), "lexed");
    parse_tokens(&tokens)
}

/// Parse an already lexed token list.
pub fn parse_tokens(tokens: &[SpannedToken]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
