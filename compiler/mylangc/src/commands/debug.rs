//! Debug commands: `parse` and `lex` for inspecting the front end.

use mylang_lexer::lex;

use crate::parse_source;

use super::{read_source, CommandError};

/// Parse a file and dump its AST.
pub fn parse_file(path: &str) -> Result<(), CommandError> {
    let source = read_source(Some(path))?;
    let program = parse_source(&source)?;
    println!("Parse result for '{path}' ({} statements):", program.stmts.len());
    println!("{program:#?}");
    Ok(())
}

/// Lex a file and list its tokens with their lines.
pub fn lex_file(path: &str) -> Result<(), CommandError> {
    let source = read_source(Some(path))?;
    let tokens = lex(&source).map_err(|err| err.to_diagnostic())?;
    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    for tok in &tokens {
        println!("  {:>4}  {} @ {:?}", tok.line, tok.token, tok.span);
    }
    Ok(())
}
