//! Propositional boolean expressions.
//!
//! - [`lexer`] - splits text into keyword, identifier and parenthesis tokens
//! - [`parser`] - recursive descent into an [`Node`] tree
//! - [`BooleanExpr`] - parsed expression with evaluation and analysis
//! - [`TruthTable`] - every assignment of an expression's variables, and
//!   [`StepTable`] with a column per sub-expression
//!
//! Precedence from loosest to tightest: `OR`, `AND`, `NOT`.

mod ast;
pub mod lexer;
pub mod parser;
mod expr;
mod truth_table;

pub use ast::Node;
pub use expr::BooleanExpr;
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse_expression, MAX_EXPRESSION_LEN};
pub use truth_table::{StepRow, StepTable, TruthRow, TruthTable, MAX_TRUTH_TABLE_VARS};
