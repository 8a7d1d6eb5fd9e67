//! Command handlers for the `mylang` CLI.
//!
//! Each submodule implements one command. Handlers return
//! [`CommandError`]; `main` renders it on stderr and exits with status 1.

use std::io::{self, ErrorKind};
use std::path::Path;

use mylang_diagnostic::Diagnostic;

mod check;
mod debug;
mod explain;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{run_file, run_program, RunArgs};

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The program itself is faulty.
    #[error("{0}")]
    Diagnostic(Diagnostic),
    #[error("{0}")]
    Io(String),
    /// Bad command line.
    #[error("error: {0}")]
    Usage(String),
}

impl CommandError {
    fn read(path: &str, err: &io::Error) -> Self {
        CommandError::Io(match err.kind() {
            ErrorKind::NotFound => format!("cannot find file '{path}'"),
            ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {err}"),
        })
    }

    fn write(path: &Path, err: &io::Error) -> Self {
        CommandError::Io(format!("error writing '{}': {err}", path.display()))
    }
}

impl From<Diagnostic> for CommandError {
    fn from(diag: Diagnostic) -> Self {
        CommandError::Diagnostic(diag)
    }
}

/// Read program text from `path`, or from stdin when `path` is `None` or
/// `-`.
pub fn read_source(path: Option<&str>) -> Result<String, CommandError> {
    match path {
        None | Some("-") => {
            io::read_to_string(io::stdin()).map_err(|err| CommandError::read("<stdin>", &err))
        }
        Some(path) => std::fs::read_to_string(path).map_err(|err| CommandError::read(path, &err)),
    }
}
