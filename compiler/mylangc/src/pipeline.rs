//! Source-to-output pipeline.

use mylang_diagnostic::Diagnostic;
use mylang_eval::{execute, SharedPrintHandler};
use mylang_ir::Program;
use mylang_types::typecheck;

/// Options for [`run_source`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Type check before evaluating. When off, type errors surface at
    /// runtime instead.
    pub typecheck: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions { typecheck: true }
    }
}

/// Lex and parse `source`.
pub fn parse_source(source: &str) -> Result<Program, Diagnostic> {
    mylang_parse::parse(source).map_err(|err| err.to_diagnostic())
}

/// Parse and type check `source`.
pub fn check_source(source: &str) -> Result<(), Diagnostic> {
    let program = parse_source(source)?;
    typecheck(&program).map_err(|err| err.to_diagnostic())
}

/// Parse, optionally type check, and evaluate `source`, printing to
/// `handler`.
///
/// A static error stops the run before anything is printed. Output written
/// before a runtime error stays in `handler`.
#[tracing::instrument(level = "debug", skip(source, handler))]
pub fn run_source(
    source: &str,
    handler: SharedPrintHandler,
    options: RunOptions,
) -> Result<(), Diagnostic> {
    let program = parse_source(source)?;
    if options.typecheck {
        typecheck(&program).map_err(|err| err.to_diagnostic())?;
    }
    execute(&program, handler).map_err(|err| err.to_diagnostic())
}

#[cfg(test)]
mod tests {
    use mylang_diagnostic::ErrorCode;
    use mylang_eval::buffer_handler;
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(source: &str, options: RunOptions) -> (Result<(), Diagnostic>, String) {
        let handler = buffer_handler();
        let result = run_source(source, handler.clone(), options);
        (result, handler.get_output())
    }

    #[test]
    fn typecheck_is_on_by_default() {
        assert!(RunOptions::default().typecheck);
    }

    #[test]
    fn static_error_prevents_output() {
        let (result, output) = run("print 1; print 1 + true", RunOptions::default());
        assert_eq!(result.map_err(|d| d.code), Err(ErrorCode::E2001));
        assert_eq!(output, "");
    }

    #[test]
    fn unchecked_run_fails_at_runtime_after_earlier_output() {
        let (result, output) = run("print 1; print 1 + true", RunOptions { typecheck: false });
        assert_eq!(result.map_err(|d| d.code), Err(ErrorCode::E6001));
        assert_eq!(output, "1\n");
    }

    #[test]
    fn parse_errors_carry_their_line() {
        let diag = check_source("var a = 1;\nvar = 2").err();
        assert_eq!(diag.as_ref().map(|d| d.code), Some(ErrorCode::E1001));
        assert_eq!(diag.and_then(|d| d.line), Some(2));
    }

    #[test]
    fn lex_errors_surface_through_parse() {
        let diag = parse_source("print 1 # 2").err();
        assert_eq!(diag.map(|d| d.code), Some(ErrorCode::E0002));
    }
}
