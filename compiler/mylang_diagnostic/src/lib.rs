//! Diagnostic reporting for MyLang.
//!
//! Each phase keeps its own typed error enum and converts it into a
//! [`Diagnostic`] at the boundary where errors are shown to a user:
//! - an [`ErrorCode`] for searchability (`mylang explain E2001`)
//! - a one-line message saying what went wrong
//! - the source line, when the phase knows it
//! - optional notes and suggestions

mod diagnostic;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
