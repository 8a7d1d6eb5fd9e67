//! The `explain` command: print the documentation for an error code.

use mylang_diagnostic::{ErrorCode, ErrorDocs};

use super::CommandError;

pub fn explain_error(code_str: &str) -> Result<(), CommandError> {
    let code = code_str.parse::<ErrorCode>().map_err(|_| {
        let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        CommandError::Usage(format!(
            "unknown error code '{code_str}'\nknown codes: {}",
            known.join(", ")
        ))
    })?;

    match ErrorDocs::get(code) {
        Some(doc) => {
            println!("{doc}");
            Ok(())
        }
        None => Err(CommandError::Usage(format!(
            "no documentation available for {code}"
        ))),
    }
}
