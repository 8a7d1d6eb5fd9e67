//! The type checker.
//!
//! Walks the AST once, top to bottom, tracking the static type of every
//! variable in lexically scoped [`Environment`]. A variable's type is fixed
//! by its declaration: assignments must preserve it.

use mylang_env::Environment;
use mylang_ir::{ensure_sufficient_stack, BinaryOp, Block, Expr, Program, Stmt, UnaryOp, Visitor};

use crate::{Type, TypeError};

/// Static checker over a single program.
pub struct TypeChecker {
    env: Environment<Type>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            env: Environment::new(),
        }
    }

    pub fn check_program(&mut self, program: &Program) -> Result<(), TypeError> {
        program.accept(self)
    }

    /// Type of `expr` in the current environment.
    pub fn type_of(&mut self, expr: &Expr) -> Result<Type, TypeError> {
        expr.accept(self)
    }

    fn expect(&mut self, expected: &Type, expr: &Expr) -> Result<(), TypeError> {
        let found = expr.accept(self)?;
        expected.check_equal(&found)
    }

    /// Run `f` inside a fresh scope. The scope is closed on error too.
    fn with_scope<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, TypeError>,
    ) -> Result<R, TypeError> {
        self.env.enter_scope();
        let result = f(self);
        self.env.exit_scope();
        result
    }

    fn check_unary(&mut self, op: UnaryOp, operand: &Expr) -> Result<Type, TypeError> {
        match op {
            UnaryOp::Neg => {
                self.expect(&Type::Int, operand)?;
                Ok(Type::Int)
            }
            UnaryOp::Not => {
                self.expect(&Type::Bool, operand)?;
                Ok(Type::Bool)
            }
            UnaryOp::Fst => Ok(self.type_of(operand)?.first_pair_type()?.clone()),
            UnaryOp::Snd => Ok(self.type_of(operand)?.second_pair_type()?.clone()),
        }
    }

    fn check_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> Result<Type, TypeError> {
        match op {
            BinaryOp::And => {
                self.expect(&Type::Bool, left)?;
                self.expect(&Type::Bool, right)?;
                Ok(Type::Bool)
            }
            BinaryOp::Eq => {
                let left = self.type_of(left)?;
                let right = self.type_of(right)?;
                left.check_equal(&right)?;
                Ok(Type::Bool)
            }
            BinaryOp::Pair => {
                let left = self.type_of(left)?;
                let right = self.type_of(right)?;
                Ok(Type::pair(left, right))
            }
            BinaryOp::Add => {
                let left = self.type_of(left)?;
                let right = self.type_of(right)?;
                match (left, right) {
                    (Type::Int, Type::Int) => Ok(Type::Int),
                    (Type::Vector, Type::Vector) => Ok(Type::Vector),
                    (Type::Int, found) => Err(TypeError::mismatch(Type::Int, found)),
                    (Type::Vector, found) => Err(TypeError::mismatch(Type::Vector, found)),
                    (found, _) => Err(TypeError::mismatch(Type::Int, found)),
                }
            }
            BinaryOp::Mul => {
                let left = self.type_of(left)?;
                let right = self.type_of(right)?;
                match (left, right) {
                    (Type::Int, Type::Int) | (Type::Vector, Type::Vector) => Ok(Type::Int),
                    (Type::Int, Type::Vector) | (Type::Vector, Type::Int) => Ok(Type::Vector),
                    (Type::Int, found) => Err(TypeError::mismatch(Type::Int, found)),
                    (Type::Vector, found) => Err(TypeError::mismatch(Type::Vector, found)),
                    (found, _) => Err(TypeError::mismatch(Type::Int, found)),
                }
            }
        }
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for TypeChecker {
    type Output = Type;
    type Error = TypeError;

    fn visit_block(&mut self, block: &Block) -> Result<(), TypeError> {
        ensure_sufficient_stack(|| self.with_scope(|checker| block.stmts.accept(checker)))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), TypeError> {
        match stmt {
            Stmt::VarDecl { name, init } => {
                let ty = self.type_of(init)?;
                tracing::trace!(%name, %ty, "declare");
                self.env.declare(name, ty)?;
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let found = self.type_of(value)?;
                self.env.lookup(name)?.check_equal(&found)?;
                self.env.update(name, found)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                self.type_of(expr)?;
                Ok(())
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                self.expect(&Type::Bool, cond)?;
                then_block.accept(self)?;
                if let Some(else_block) = else_block {
                    else_block.accept(self)?;
                }
                Ok(())
            }
            Stmt::Foreach { name, iter, body } => {
                self.expect(&Type::Vector, iter)?;
                self.with_scope(|checker| {
                    checker.env.declare(name, Type::Int)?;
                    body.accept(checker)
                })
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<Type, TypeError> {
        ensure_sufficient_stack(|| match expr {
            Expr::Int(_) => Ok(Type::Int),
            Expr::Bool(_) => Ok(Type::Bool),
            Expr::Variable(name) => Ok(self.env.lookup(name)?.clone()),
            Expr::Unary { op, operand } => self.check_unary(*op, operand),
            Expr::Binary { op, left, right } => self.check_binary(*op, left, right),
            Expr::Vector { length, index } => {
                self.expect(&Type::Int, length)?;
                self.expect(&Type::Int, index)?;
                Ok(Type::Vector)
            }
        })
    }
}
