//! The `run` command: evaluate a program.

use std::path::PathBuf;

use crate::{buffer_handler, run_source, stdout_handler, RunOptions};

use super::{read_source, CommandError};

/// Parsed arguments of `mylang run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Source path; `None` or `-` reads stdin.
    pub input: Option<String>,
    /// Write program output here instead of stdout.
    pub output: Option<PathBuf>,
    pub options: RunOptions,
}

impl RunArgs {
    /// Parse the arguments following `run`.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let mut run = RunArgs::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-o" => {
                    let Some(path) = iter.next() else {
                        return Err(CommandError::Usage("missing file path after -o".into()));
                    };
                    run.output = Some(PathBuf::from(path));
                }
                "--no-typecheck" | "-ntc" => run.options.typecheck = false,
                path if path == "-" || !path.starts_with('-') => {
                    if run.input.is_some() {
                        return Err(CommandError::Usage(format!("unexpected argument '{path}'")));
                    }
                    run.input = Some(path.to_string());
                }
                other => return Err(CommandError::Usage(format!("unknown option '{other}'"))),
            }
        }
        Ok(run)
    }
}

/// Read the program named by `args` and run it.
pub fn run_file(args: &RunArgs) -> Result<(), CommandError> {
    let source = read_source(args.input.as_deref())?;
    run_program(&source, args)
}

/// Run `source` with the output destination and options from `args`.
///
/// With an output file, everything printed before a failure is still
/// written to it. A program error takes precedence over a failed write; the
/// write failure then rides along as a note.
pub fn run_program(source: &str, args: &RunArgs) -> Result<(), CommandError> {
    let Some(path) = &args.output else {
        return run_source(source, stdout_handler(), args.options).map_err(CommandError::from);
    };

    let handler = buffer_handler();
    let result = run_source(source, handler.clone(), args.options);
    let written = std::fs::write(path, handler.get_output());
    match (result, written) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(err)) => Err(CommandError::write(path, &err)),
        (Err(diag), Ok(())) => Err(diag.into()),
        (Err(diag), Err(err)) => {
            tracing::warn!(path = %path.display(), error = %err, "output file not written");
            Err(diag
                .with_note(format!("output was not written to '{}': {err}", path.display()))
                .into())
        }
    }
}
