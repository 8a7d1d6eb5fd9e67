//! Operator implementations for the evaluator.
//!
//! Direct enum dispatch on the operand values. The value set is closed, so
//! matching on `(left, right)` covers every combination explicitly.
//! Integer arithmetic wraps on overflow.

use mylang_ir::{BinaryOp, UnaryOp};

use crate::{EvalError, Value, ValueKind, VectorValue};

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => eval_add(&left, &right),
        BinaryOp::Mul => eval_mul(&left, &right),
        BinaryOp::And => Ok(Value::Bool(left.as_bool()? && right.as_bool()?)),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::Pair => Ok(Value::pair(left, right)),
    }
}

/// Evaluate a unary operation on an already-evaluated operand.
pub fn evaluate_unary(operand: Value, op: UnaryOp) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Neg => Ok(Value::Int(operand.as_int()?.wrapping_neg())),
        UnaryOp::Not => Ok(Value::Bool(!operand.as_bool()?)),
        UnaryOp::Fst => operand.into_pair().map(|(first, _)| first),
        UnaryOp::Snd => operand.into_pair().map(|(_, second)| second),
    }
}

/// The error for an arithmetic operand combination with no rule. The
/// left operand decides what was expected of the right one.
fn arith_mismatch(left: &Value, right: &Value) -> EvalError {
    match left {
        Value::Int(_) => EvalError::TypeMismatch {
            expected: ValueKind::Int,
            found: right.kind(),
        },
        Value::Vector(_) => EvalError::TypeMismatch {
            expected: ValueKind::Vector,
            found: right.kind(),
        },
        other => EvalError::TypeMismatch {
            expected: ValueKind::Int,
            found: other.kind(),
        },
    }
}

fn same_dimension(left: &VectorValue, right: &VectorValue) -> Result<(), EvalError> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(EvalError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}

fn eval_add(left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
        (Value::Vector(a), Value::Vector(b)) => {
            same_dimension(a, b)?;
            let sum = a.iter().zip(b.iter()).map(|(x, y)| x.wrapping_add(y));
            Ok(Value::Vector(sum.collect()))
        }
        _ => Err(arith_mismatch(left, right)),
    }
}

fn eval_mul(left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_mul(*b))),
        (Value::Vector(a), Value::Vector(b)) => {
            same_dimension(a, b)?;
            let dot = a
                .iter()
                .zip(b.iter())
                .fold(0i32, |acc, (x, y)| acc.wrapping_add(x.wrapping_mul(y)));
            Ok(Value::Int(dot))
        }
        (Value::Int(k), Value::Vector(v)) | (Value::Vector(v), Value::Int(k)) => {
            Ok(Value::Vector(scale(v, *k)))
        }
        _ => Err(arith_mismatch(left, right)),
    }
}

fn scale(vector: &VectorValue, factor: i32) -> VectorValue {
    let mut scaled = VectorValue::zeros(vector.len());
    for (i, elem) in vector.iter().enumerate() {
        scaled.set(i, elem.wrapping_mul(factor));
    }
    scaled
}
