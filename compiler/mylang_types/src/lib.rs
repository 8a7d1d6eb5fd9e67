//! Static semantics for MyLang.
//!
//! - [`Type`]: `INT`, `BOOL`, pairs and vectors
//! - [`TypeChecker`]: a [`Visitor`](mylang_ir::Visitor) giving every
//!   expression a type and validating every statement
//! - [`typecheck`]: check a whole program, stopping at the first error

mod checker;
mod error;
mod ty;

pub use checker::TypeChecker;
pub use error::{Expected, TypeError};
pub use ty::Type;

use mylang_ir::Program;

/// Type-check `program` in a fresh environment.
#[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
pub fn typecheck(program: &Program) -> Result<(), TypeError> {
    let result = TypeChecker::new().check_program(program);
    match &result {
        Ok(()) => tracing::debug!("type checking complete"),
        Err(err) => tracing::debug!(%err, "type checking failed"),
    }
    result
}
