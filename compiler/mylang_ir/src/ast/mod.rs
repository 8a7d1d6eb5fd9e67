//! AST node types.
//!
//! The tree is immutable once built and owns all of its children. There are
//! no back-references, so a `Program` can be shared freely between the type
//! checker and the interpreter.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use crate::visitor::Visitor;
use crate::Name;

/// Root of a parsed program.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Program {
    pub stmts: StmtSeq,
}

impl Program {
    pub fn new(stmts: StmtSeq) -> Self {
        Program { stmts }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_program(self)
    }
}

/// A possibly empty, right-leaning list of statements.
///
/// Order is significant: statements run left to right and each one sees the
/// effects of those before it.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub enum StmtSeq {
    #[default]
    Empty,
    NonEmpty(Box<Stmt>, Box<StmtSeq>),
}

impl StmtSeq {
    /// Prepend `stmt` to `rest`.
    pub fn cons(stmt: Stmt, rest: StmtSeq) -> Self {
        StmtSeq::NonEmpty(Box::new(stmt), Box::new(rest))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StmtSeq::Empty)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Statements in execution order.
    pub fn iter(&self) -> StmtSeqIter<'_> {
        StmtSeqIter { cursor: self }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_stmt_seq(self)
    }
}

impl FromIterator<Stmt> for StmtSeq {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        let stmts: Vec<Stmt> = iter.into_iter().collect();
        stmts
            .into_iter()
            .rev()
            .fold(StmtSeq::Empty, |rest, stmt| StmtSeq::cons(stmt, rest))
    }
}

// Sequences nest one box per statement, and blocks nest sequences inside
// statements. Tear the whole tree down through a work list so that dropping
// a long or deeply nested program never recurses per statement or per block.
impl Drop for StmtSeq {
    fn drop(&mut self) {
        let StmtSeq::NonEmpty(first, rest) = self else {
            return;
        };
        let mut pending = Vec::new();
        first.detach_blocks(&mut pending);
        if !rest.is_empty() {
            pending.push(std::mem::take(&mut **rest));
        }

        while let Some(mut seq) = pending.pop() {
            loop {
                let next = match &mut seq {
                    StmtSeq::NonEmpty(stmt, rest) => {
                        stmt.detach_blocks(&mut pending);
                        std::mem::take(&mut **rest)
                    }
                    StmtSeq::Empty => break,
                };
                // The replaced node now holds no blocks and an empty tail.
                seq = next;
            }
        }
    }
}

impl<'a> IntoIterator for &'a StmtSeq {
    type Item = &'a Stmt;
    type IntoIter = StmtSeqIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the statements of a [`StmtSeq`].
#[derive(Clone, Debug)]
pub struct StmtSeqIter<'a> {
    cursor: &'a StmtSeq,
}

impl<'a> Iterator for StmtSeqIter<'a> {
    type Item = &'a Stmt;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            StmtSeq::Empty => None,
            StmtSeq::NonEmpty(stmt, rest) => {
                self.cursor = rest;
                Some(stmt)
            }
        }
    }
}

/// A braced statement sequence. Entering a block opens a new scope.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Block {
    pub stmts: StmtSeq,
}

impl Block {
    pub fn new(stmts: StmtSeq) -> Self {
        Block { stmts }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_block(self)
    }
}

/// Statements.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Stmt {
    /// `var name = init`
    VarDecl { name: Name, init: Expr },
    /// `name = value`
    Assign { name: Name, value: Expr },
    /// `print expr`
    Print(Expr),
    /// `if (cond) { ... } else { ... }`
    If {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    /// `foreach name in iter { ... }`
    Foreach { name: Name, iter: Expr, body: Block },
}

impl Stmt {
    /// Move the bodies of nested blocks into `out`, leaving them empty.
    fn detach_blocks(&mut self, out: &mut Vec<StmtSeq>) {
        let blocks = match self {
            Stmt::If {
                then_block,
                else_block,
                ..
            } => [Some(then_block), else_block.as_mut()],
            Stmt::Foreach { body, .. } => [Some(body), None],
            Stmt::VarDecl { .. } | Stmt::Assign { .. } | Stmt::Print(_) => [None, None],
        };
        out.extend(
            blocks
                .into_iter()
                .flatten()
                .filter(|block| !block.stmts.is_empty())
                .map(|block| std::mem::take(&mut block.stmts)),
        );
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_stmt(self)
    }
}

/// Expressions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    Int(i32),
    Bool(bool),
    Variable(Name),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `[length; index]`: a one-hot vector.
    Vector {
        length: Box<Expr>,
        index: Box<Expr>,
    },
}

impl Expr {
    pub fn var(name: impl Into<Name>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn vector(length: Expr, index: Expr) -> Self {
        Expr::Vector {
            length: Box::new(length),
            index: Box::new(index),
        }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_expr(self)
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Expr::Int(_) | Expr::Bool(_) | Expr::Variable(_))
    }

    /// Move boxed sub-expressions that have children of their own into
    /// `out`, leaving leaves in their place.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        let children = match self {
            Expr::Unary { operand, .. } => [Some(operand), None],
            Expr::Binary { left, right, .. } => [Some(left), Some(right)],
            Expr::Vector { length, index } => [Some(length), Some(index)],
            Expr::Int(_) | Expr::Bool(_) | Expr::Variable(_) => [None, None],
        };
        out.extend(
            children
                .into_iter()
                .flatten()
                .filter(|child| !child.is_leaf())
                .map(|child| std::mem::replace(&mut **child, Expr::Int(0))),
        );
    }
}

// `------...1` nests one box per operator; drop it through a work list.
impl Drop for Expr {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
