//! Parsed boolean expression.

use super::ast::Node;
use super::lexer::{tokenize, TokenKind};
use super::parser::parse_expression;
use super::truth_table::{assignments, check_size, StepTable, TruthTable, MAX_TRUTH_TABLE_VARS};
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

/// A boolean expression over named variables, parsed at construction.
///
/// # Examples
/// ```
/// use calckit::boolean_algebra::BooleanExpr;
/// use std::collections::HashMap;
///
/// let expr = BooleanExpr::new("A AND NOT (B OR C)").unwrap();
/// let env = HashMap::from([("A", true), ("B", false), ("C", false)]);
/// assert!(expr.evaluate(&env).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanExpr {
    source: String,
    ast: Node,
    variables: Vec<String>,
}

impl BooleanExpr {
    pub fn new(source: &str) -> Result<Self> {
        let ast = parse_expression(source)?;
        let variables = ast.variables().into_iter().collect();
        Ok(BooleanExpr {
            source: source.to_string(),
            ast,
            variables,
        })
    }

    /// Wrap an already built tree; the source is its normalized text.
    pub fn from_ast(ast: Node) -> Self {
        let variables = ast.variables().into_iter().collect();
        BooleanExpr {
            source: ast.to_string(),
            ast,
            variables,
        }
    }

    /// Sum-of-products expression with the given truth table.
    ///
    /// `results[i]` is the value for assignment `i` in the order of
    /// [`BooleanExpr::truth_table`], first variable most significant, so
    /// `results` needs exactly `2^n` entries. No true row gives `FALSE` and
    /// all true rows give `TRUE`.
    ///
    /// # Examples
    /// ```
    /// use calckit::boolean_algebra::BooleanExpr;
    /// let xor = BooleanExpr::from_truth_table(&["A", "B"], &[false, true, true, false]).unwrap();
    /// assert_eq!(xor.to_string(), "NOT A AND B OR A AND NOT B");
    /// ```
    pub fn from_truth_table<S: AsRef<str>>(variables: &[S], results: &[bool]) -> Result<Self> {
        let names: Vec<&str> = variables.iter().map(AsRef::as_ref).collect();
        check_size(names.len())?;
        let expected = 1usize << names.len();
        if results.len() != expected {
            return Err(Error::range(format!(
                "{} variables need {expected} results, got {}",
                names.len(),
                results.len()
            )));
        }
        for (i, name) in names.iter().enumerate() {
            check_variable_name(name)?;
            if names[..i].contains(name) {
                return Err(Error::parse(name, "variable listed twice"));
            }
        }

        let ast = if results.iter().all(|r| *r) {
            Node::Constant(true)
        } else {
            assignments(names.len())
                .zip(results)
                .filter(|(_, result)| **result)
                .map(|(values, _)| minterm(&names, &values))
                .reduce(Node::or)
                .unwrap_or(Node::Constant(false))
        };
        log::debug!("truth table [{}] -> {ast}", names.join(", "));
        Ok(BooleanExpr::from_ast(ast))
    }

    /// The text the expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Node {
        &self.ast
    }

    /// Unique variable names, sorted.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Evaluate with every variable taken from `env`.
    ///
    /// Fails with [`Error::UndefinedVariable`] naming the leftmost variable
    /// that `env` does not define.
    pub fn evaluate<K>(&self, env: &HashMap<K, bool>) -> Result<bool>
    where
        K: Borrow<str> + Eq + Hash,
    {
        self.ast.evaluate(&|name: &str| env.get(name).copied())
    }

    /// Evaluate, substituting `default` for variables missing from `env`.
    pub fn evaluate_with_defaults<K>(&self, env: &HashMap<K, bool>, default: bool) -> bool
    where
        K: Borrow<str> + Eq + Hash,
    {
        self.ast
            .evaluate(&|name: &str| Some(env.get(name).copied().unwrap_or(default)))
            .unwrap_or(default)
    }

    pub fn complexity(&self) -> usize {
        self.ast.complexity()
    }

    pub fn to_prefix_notation(&self) -> String {
        self.ast.to_prefix_notation()
    }

    pub fn truth_table(&self) -> Result<TruthTable> {
        TruthTable::build(&self.ast, &self.variables)
    }

    /// Truth table with a column per intermediate sub-expression.
    pub fn step_table(&self) -> Result<StepTable> {
        StepTable::build(&self.ast, &self.variables)
    }

    /// True for every assignment.
    pub fn is_tautology(&self) -> Result<bool> {
        Ok(self.truth_table()?.rows.iter().all(|row| row.result))
    }

    /// False for every assignment.
    pub fn is_contradiction(&self) -> Result<bool> {
        Ok(self.truth_table()?.rows.iter().all(|row| !row.result))
    }

    /// Same value as `other` for every assignment of the union of both
    /// variable sets.
    pub fn equivalent_to(&self, other: &BooleanExpr) -> Result<bool> {
        let all: BTreeSet<&String> = self.variables.iter().chain(&other.variables).collect();
        let n = all.len();
        if n > MAX_TRUTH_TABLE_VARS {
            return Err(Error::range(format!(
                "equivalence over {n} variables, at most {MAX_TRUTH_TABLE_VARS} supported"
            )));
        }
        let names: Vec<&str> = all.into_iter().map(String::as_str).collect();

        for i in 0..(1usize << n) {
            let env: HashMap<&str, bool> = names
                .iter()
                .enumerate()
                .map(|(j, name)| (*name, (i >> (n - 1 - j)) & 1 == 1))
                .collect();
            if self.evaluate(&env)? != other.evaluate(&env)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Conjunction of every variable, negated where `values` is false.
fn minterm(names: &[&str], values: &[bool]) -> Node {
    names
        .iter()
        .zip(values)
        .map(|(name, value)| {
            let var = Node::var(name);
            if *value {
                var
            } else {
                Node::not(var)
            }
        })
        .reduce(Node::and)
        .unwrap_or(Node::Constant(true))
}

fn check_variable_name(name: &str) -> Result<()> {
    let tokens = tokenize(name)?;
    match tokens.as_slice() {
        [token] if token.kind == TokenKind::Ident(name.to_string()) => Ok(()),
        _ => Err(Error::parse(name, "not a variable name")),
    }
}

impl FromStr for BooleanExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BooleanExpr::new(s)
    }
}

/// Normalized rendering, see [`Node`]'s `Display`.
impl fmt::Display for BooleanExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ast)
    }
}

impl BitAnd for BooleanExpr {
    type Output = BooleanExpr;

    fn bitand(self, rhs: BooleanExpr) -> BooleanExpr {
        BooleanExpr::from_ast(Node::and(self.ast, rhs.ast))
    }
}

impl BitAnd for &BooleanExpr {
    type Output = BooleanExpr;

    fn bitand(self, rhs: &BooleanExpr) -> BooleanExpr {
        BooleanExpr::from_ast(Node::and(self.ast.clone(), rhs.ast.clone()))
    }
}

impl BitOr for BooleanExpr {
    type Output = BooleanExpr;

    fn bitor(self, rhs: BooleanExpr) -> BooleanExpr {
        BooleanExpr::from_ast(Node::or(self.ast, rhs.ast))
    }
}

impl BitOr for &BooleanExpr {
    type Output = BooleanExpr;

    fn bitor(self, rhs: &BooleanExpr) -> BooleanExpr {
        BooleanExpr::from_ast(Node::or(self.ast.clone(), rhs.ast.clone()))
    }
}

impl Not for BooleanExpr {
    type Output = BooleanExpr;

    fn not(self) -> BooleanExpr {
        BooleanExpr::from_ast(Node::not(self.ast))
    }
}

impl Not for &BooleanExpr {
    type Output = BooleanExpr;

    fn not(self) -> BooleanExpr {
        BooleanExpr::from_ast(Node::not(self.ast.clone()))
    }
}
