//! The interpreter.
//!
//! A [`Visitor`] that evaluates every expression to a [`Value`] and runs
//! statements against a lexically scoped `Environment<Value>`. No static
//! checking is assumed: every operation narrows its operands itself.

use mylang_env::Environment;
use mylang_ir::{ensure_sufficient_stack, Block, Expr, Name, Program, Stmt, Visitor};

use crate::{evaluate_binary, evaluate_unary, EvalError, SharedPrintHandler, Value, VectorValue};

pub struct Interpreter {
    env: Environment<Value>,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    pub fn new(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print_handler,
        }
    }

    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        program.accept(self)
    }

    pub fn eval(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        expr.accept(self)
    }

    /// Current value of `name`, if declared.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.env.lookup(&Name::from(name)).ok()
    }

    /// Run `f` inside a fresh scope. The scope is closed on error too.
    fn with_scope<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, EvalError>,
    ) -> Result<R, EvalError> {
        self.env.enter_scope();
        let result = f(self);
        self.env.exit_scope();
        result
    }

    fn exec_foreach(
        &mut self,
        name: &Name,
        vector: &VectorValue,
        body: &Block,
    ) -> Result<(), EvalError> {
        self.with_scope(|interp| {
            interp.env.declare(name, Value::Int(0))?;
            for elem in vector.iter() {
                interp.env.update(name, Value::Int(elem))?;
                body.accept(interp)?;
            }
            Ok(())
        })
    }
}

impl Visitor for Interpreter {
    type Output = Value;
    type Error = EvalError;

    fn visit_block(&mut self, block: &Block) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| self.with_scope(|interp| block.stmts.accept(interp)))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match stmt {
            Stmt::VarDecl { name, init } => {
                let value = self.eval(init)?;
                tracing::trace!(%name, %value, "declare");
                self.env.declare(name, value)?;
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env.update(name, value)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.eval(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(())
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                if self.eval(cond)?.as_bool()? {
                    then_block.accept(self)
                } else if let Some(else_block) = else_block {
                    else_block.accept(self)
                } else {
                    Ok(())
                }
            }
            Stmt::Foreach { name, iter, body } => {
                let iter = self.eval(iter)?;
                let vector = iter.as_vector()?;
                tracing::trace!(%name, len = vector.len(), "foreach");
                self.exec_foreach(name, vector, body)
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        ensure_sufficient_stack(|| match expr {
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Variable(name) => Ok(self.env.lookup(name)?.clone()),
            Expr::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(operand, *op)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(left, right, *op)
            }
            Expr::Vector { length, index } => {
                let length = self.eval(length)?.as_int()?;
                let index = self.eval(index)?.as_int()?;
                VectorValue::one_hot(length, index).map(Value::Vector)
            }
        })
    }
}
