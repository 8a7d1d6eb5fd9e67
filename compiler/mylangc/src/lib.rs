//! MyLang pipeline and CLI support.
//!
//! The pipeline is lex → parse → typecheck → evaluate. Each stage is
//! fail-fast and reports its first error as a [`Diagnostic`].
//!
//! - [`parse_source`]: lex and parse
//! - [`check_source`]: parse and type check
//! - [`run_source`]: parse, optionally type check, then evaluate

pub mod commands;
mod pipeline;

pub use mylang_diagnostic::Diagnostic;
pub use mylang_eval::{buffer_handler, stdout_handler, SharedPrintHandler};
pub use pipeline::{check_source, parse_source, run_source, RunOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=mylang_eval=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
