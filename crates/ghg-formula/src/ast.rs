//! Expression tree for the formula language.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Remainder.
    Rem,
    /// Exponentiation.
    Pow,
}

/// Parsed formula expression.
///
/// The operator set is closed by construction: an `Expr` can only ever be
/// arithmetic over literals and variable references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Variable reference, resolved against the caller's bindings.
    Var(String),
    /// Unary negation.
    Neg(Box<Expr>),
    /// Binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Returns the set of variable names referenced by this expression.
    ///
    /// Boundary layers use this to cross-check a factor's `required` field
    /// list against its formula before accepting a record.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Number(_) => {}
            Expr::Var(name) => {
                names.insert(name.clone());
            }
            Expr::Neg(inner) => inner.collect_variables(names),
            Expr::Binary { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}
