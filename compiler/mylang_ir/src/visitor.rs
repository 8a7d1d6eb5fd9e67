//! Pass dispatch.
//!
//! Every semantic pass over the AST implements [`Visitor`]. Nodes expose an
//! `accept` method that forwards to the matching `visit_*` method, so a pass
//! never needs to know which concrete node it was handed until it matches
//! on it.
//!
//! `Output` is what a pass produces for an expression (a static type for
//! the checker, a runtime value for the interpreter). Statements, blocks
//! and sequences are run for effect only.
//!
//! # Example
//!
//! ```text
//! struct CountPrints(usize);
//!
//! impl Visitor for CountPrints {
//!     type Output = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_block(&mut self, block: &Block) -> Result<(), Self::Error> {
//!         block.stmts.accept(self)
//!     }
//!     fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Error> {
//!         if let Stmt::Print(_) = stmt { self.0 += 1; }
//!         Ok(())
//!     }
//!     fn visit_expr(&mut self, _: &Expr) -> Result<(), Self::Error> { Ok(()) }
//! }
//! ```

use crate::ast::{Block, Expr, Program, Stmt, StmtSeq};

/// A semantic pass over the AST.
pub trait Visitor {
    /// Per-expression result.
    type Output;
    /// First failure; passes are fail-fast.
    type Error;

    /// Visit the root. Defaults to visiting its statement sequence.
    fn visit_program(&mut self, program: &Program) -> Result<(), Self::Error> {
        program.stmts.accept(self)
    }

    /// Visit a sequence. Defaults to each statement in order, stopping at
    /// the first error.
    fn visit_stmt_seq(&mut self, seq: &StmtSeq) -> Result<(), Self::Error> {
        for stmt in seq {
            stmt.accept(self)?;
        }
        Ok(())
    }

    fn visit_block(&mut self, block: &Block) -> Result<(), Self::Error>;

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryOp, Name};

    /// Records the order nodes are visited in.
    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        depth: usize,
    }

    impl Visitor for Trace {
        type Output = usize;
        type Error = String;

        fn visit_block(&mut self, block: &Block) -> Result<(), String> {
            self.depth += 1;
            self.events.push(format!("enter {}", self.depth));
            block.stmts.accept(self)?;
            self.events.push(format!("exit {}", self.depth));
            self.depth -= 1;
            Ok(())
        }

        fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), String> {
            match stmt {
                Stmt::VarDecl { name, init } | Stmt::Assign { name, value: init } => {
                    let size = init.accept(self)?;
                    self.events.push(format!("{name}:{size}"));
                    Ok(())
                }
                Stmt::Print(expr) => {
                    let size = expr.accept(self)?;
                    self.events.push(format!("print:{size}"));
                    Ok(())
                }
                Stmt::If { then_block, .. } => then_block.accept(self),
                Stmt::Foreach { name, .. } => Err(format!("foreach {name}")),
            }
        }

        fn visit_expr(&mut self, expr: &Expr) -> Result<usize, String> {
            Ok(match expr {
                Expr::Int(_) | Expr::Bool(_) | Expr::Variable(_) => 1,
                Expr::Unary { operand, .. } => 1 + operand.accept(self)?,
                Expr::Binary { left, right, .. } | Expr::Vector { length: left, index: right } => {
                    1 + left.accept(self)? + right.accept(self)?
                }
            })
        }
    }

    #[test]
    fn accept_dispatches_in_source_order() {
        let program = Program::new(
            vec![
                Stmt::VarDecl {
                    name: Name::from("a"),
                    init: Expr::binary(BinaryOp::Add, Expr::Int(1), Expr::Int(2)),
                },
                Stmt::If {
                    cond: Expr::Bool(true),
                    then_block: Block::new(
                        vec![Stmt::Print(Expr::var("a"))].into_iter().collect(),
                    ),
                    else_block: None,
                },
            ]
            .into_iter()
            .collect(),
        );

        let mut trace = Trace::default();
        program.accept(&mut trace).unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(trace.events, vec!["a:3", "enter 1", "print:1", "exit 1"]);
    }

    #[test]
    fn default_sequence_stops_at_first_error() {
        let seq: StmtSeq = vec![
            Stmt::Print(Expr::Int(1)),
            Stmt::Foreach {
                name: Name::from("x"),
                iter: Expr::var("v"),
                body: Block::default(),
            },
            Stmt::Print(Expr::Int(2)),
        ]
        .into_iter()
        .collect();

        let mut trace = Trace::default();
        let err = seq.accept(&mut trace);

        assert_eq!(err, Err("foreach x".to_string()));
        assert_eq!(trace.events, vec!["print:1"]);
    }
}
