//! MyLang IR - the tree both semantic passes walk.
//!
//! This crate contains:
//! - `Name` for variable identifiers
//! - The AST: `Program`, `StmtSeq`, `Block`, `Stmt`, `Expr`
//! - The `Visitor` trait each pass implements
//! - `ensure_sufficient_stack` for the recursive walkers
//!
//! # Design
//!
//! Node kinds are closed enums. A pass matches exhaustively on them, so a
//! new node variant does not compile until every pass handles it. Nodes
//! never carry semantic logic; `accept` only forwards to the visitor.

pub mod ast;
mod name;
mod stack;
pub mod visitor;

pub use ast::{BinaryOp, Block, Expr, Program, Stmt, StmtSeq, StmtSeqIter, UnaryOp};
pub use name::Name;
pub use stack::ensure_sufficient_stack;
pub use visitor::Visitor;
