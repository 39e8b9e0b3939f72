#![deny(missing_docs)]
#![doc = "Arithmetic formula language used for data-driven quantity \
derivation. The grammar is closed: literals, variable references, the six \
arithmetic operators and parentheses. Formulas originate from data entry \
and are never treated as trusted code."]

mod ast;
mod eval;
mod lexer;
mod parser;

pub use ast::{BinaryOp, Expr};
pub use eval::{eval, evaluate};
pub use lexer::{tokenize, SpannedToken, Token};
pub use parser::parse;
