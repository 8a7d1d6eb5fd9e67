// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! `mylang run` argument handling and output files.

use std::path::PathBuf;

use mylangc::commands::{run_file, run_program, CommandError, RunArgs};
use mylangc::RunOptions;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn parses_input_output_and_flags() {
    let run = RunArgs::parse(&args(&["prog.txt", "-o", "out.txt", "-ntc"])).unwrap();
    assert_eq!(
        run,
        RunArgs {
            input: Some("prog.txt".into()),
            output: Some(PathBuf::from("out.txt")),
            options: RunOptions { typecheck: false },
        }
    );

    let run = RunArgs::parse(&args(&["--no-typecheck", "-"])).unwrap();
    assert_eq!(run.input.as_deref(), Some("-"));
    assert!(!run.options.typecheck);
}

#[test]
fn no_arguments_means_stdin_with_type_checking() {
    let run = RunArgs::parse(&[]).unwrap();
    assert_eq!(run, RunArgs::default());
    assert!(run.options.typecheck);
}

#[test]
fn rejects_bad_command_lines() {
    for bad in [&["-o"][..], &["a.txt", "b.txt"][..], &["--fast"][..]] {
        let err = RunArgs::parse(&args(bad)).unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)), "{bad:?}: {err}");
    }
}

#[test]
fn output_file_receives_program_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let run = RunArgs {
        output: Some(out.clone()),
        ..RunArgs::default()
    };

    run_program("var a = 3; var b = 4; print a + b;", &run).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "7\n");
}

#[test]
fn output_file_keeps_output_before_runtime_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let run = RunArgs {
        output: Some(out.clone()),
        options: RunOptions { typecheck: false },
        ..RunArgs::default()
    };

    let err = run_program("print (1, 2); print fst 3", &run).unwrap_err();
    let CommandError::Diagnostic(diag) = err else {
        panic!("expected a diagnostic, got {err:?}");
    };
    assert_eq!(diag.code.as_str(), "E6001");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "(1,2)\n");
}

#[test]
fn runtime_error_wins_over_unwritable_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("out.txt");
    let run = RunArgs {
        output: Some(out.clone()),
        options: RunOptions { typecheck: false },
        ..RunArgs::default()
    };

    let err = run_program("print 1; print fst 3", &run).unwrap_err();
    let CommandError::Diagnostic(diag) = err else {
        panic!("expected a diagnostic, got {err:?}");
    };
    assert_eq!(diag.code.as_str(), "E6001");
    assert!(diag
        .notes
        .iter()
        .any(|note| note.starts_with("output was not written to")));
    assert!(!out.exists());
}

#[test]
fn unwritable_output_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let run = RunArgs {
        output: Some(dir.path().join("missing").join("out.txt")),
        ..RunArgs::default()
    };

    let err = run_program("print 1", &run).unwrap_err();
    assert!(matches!(err, CommandError::Io(ref msg) if msg.starts_with("error writing")));
}

#[test]
fn reads_program_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let prog = dir.path().join("prog.txt");
    let out = dir.path().join("out.txt");
    std::fs::write(&prog, "foreach x in 3 * [2;1] { print x }").unwrap();

    let run = RunArgs {
        input: Some(prog.to_string_lossy().into_owned()),
        output: Some(out.clone()),
        ..RunArgs::default()
    };
    run_file(&run).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "0\n3\n");
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let run = RunArgs {
        input: Some(dir.path().join("missing.txt").to_string_lossy().into_owned()),
        ..RunArgs::default()
    };
    let err = run_file(&run).unwrap_err();
    assert!(matches!(err, CommandError::Io(ref msg) if msg.starts_with("cannot find file")));
}
