//! Pure evaluation of parsed expressions against named variables.

use std::collections::BTreeMap;

use ghg_core::{ErrorInfo, GhgError};

use crate::ast::{BinaryOp, Expr};
use crate::parser::parse;

/// Evaluates a parsed expression against the given variable bindings.
///
/// Deterministic and side-effect free: the same `(expr, vars)` pair always
/// yields the same number. Fails with an `unknown-variable` error when the
/// expression references a name absent from `vars`, and with
/// `division-by-zero` when a division or remainder has a zero divisor.
pub fn eval(expr: &Expr, vars: &BTreeMap<String, f64>) -> Result<f64, GhgError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Var(name) => vars.get(name).copied().ok_or_else(|| {
            GhgError::Formula(
                ErrorInfo::new(
                    "unknown-variable",
                    format!("variable '{name}' is not bound"),
                )
                .with_context("variable", name.clone()),
            )
        }),
        Expr::Neg(inner) => Ok(-eval(inner, vars)?),
        Expr::Binary { op, left, right } => {
            let lhs = eval(left, vars)?;
            let rhs = eval(right, vars)?;
            match op {
                BinaryOp::Add => Ok(lhs + rhs),
                BinaryOp::Sub => Ok(lhs - rhs),
                BinaryOp::Mul => Ok(lhs * rhs),
                BinaryOp::Div => {
                    if rhs == 0.0 {
                        Err(division_by_zero())
                    } else {
                        Ok(lhs / rhs)
                    }
                }
                BinaryOp::Rem => {
                    if rhs == 0.0 {
                        Err(division_by_zero())
                    } else {
                        Ok(lhs % rhs)
                    }
                }
                BinaryOp::Pow => Ok(lhs.powf(rhs)),
            }
        }
    }
}

fn division_by_zero() -> GhgError {
    GhgError::Formula(ErrorInfo::new(
        "division-by-zero",
        "division by zero while evaluating expression",
    ))
}

/// Parses and evaluates an expression string in one step.
pub fn evaluate(expression: &str, vars: &BTreeMap<String, f64>) -> Result<f64, GhgError> {
    let expr = parse(expression)?;
    eval(&expr, vars)
}
