//! The `check` command: parse and type check without running.

use crate::check_source;

use super::{read_source, CommandError};

pub fn check_file(path: &str) -> Result<(), CommandError> {
    let source = read_source(Some(path))?;
    check_source(&source)?;
    println!("{path}: no errors found");
    Ok(())
}
