#![deny(clippy::arithmetic_side_effects)]
//! Tree-walking interpreter for MyLang.
//!
//! # Architecture
//!
//! - [`Interpreter`]: a [`Visitor`](mylang_ir::Visitor) over the AST,
//!   owning an `Environment<Value>` and a print handler
//! - `evaluate_binary` / `evaluate_unary`: direct enum dispatch on operand
//!   values
//! - [`Value`]: runtime values; integer arithmetic wraps on overflow
//!
//! Evaluation is fail-fast. Output already written when an error occurs
//! stays written.

mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use errors::EvalError;
pub use interpreter::Interpreter;
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use value::{Value, ValueKind, VectorValue};

use mylang_ir::Program;

/// Run `program` in a fresh environment, writing output to `handler`.
#[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
pub fn execute(program: &Program, handler: SharedPrintHandler) -> Result<(), EvalError> {
    let result = Interpreter::new(handler).run(program);
    if let Err(err) = &result {
        tracing::debug!(%err, "evaluation failed");
    }
    result
}
