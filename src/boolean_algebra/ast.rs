//! Abstract syntax tree for boolean expressions.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    Constant(bool),
    Variable(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}

impl Node {
    pub fn var(name: &str) -> Self {
        Node::Variable(name.to_string())
    }

    pub fn not(inner: Node) -> Self {
        Node::Not(Box::new(inner))
    }

    pub fn and(left: Node, right: Node) -> Self {
        Node::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Node, right: Node) -> Self {
        Node::Or(Box::new(left), Box::new(right))
    }

    /// Unique variable names, sorted.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Node::Constant(_) => {}
            Node::Variable(name) => {
                names.insert(name.clone());
            }
            Node::Not(inner) => inner.collect_variables(names),
            Node::And(left, right) | Node::Or(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }

    /// Reduce the tree bottom-up, resolving variables through `lookup`.
    ///
    /// Both operands of `AND`/`OR` are always evaluated, so the reported
    /// missing variable is the leftmost one.
    pub fn evaluate<F>(&self, lookup: &F) -> Result<bool>
    where
        F: Fn(&str) -> Option<bool>,
    {
        match self {
            Node::Constant(value) => Ok(*value),
            Node::Variable(name) => {
                lookup(name).ok_or_else(|| Error::UndefinedVariable(name.clone()))
            }
            Node::Not(inner) => Ok(!inner.evaluate(lookup)?),
            Node::And(left, right) => {
                let l = left.evaluate(lookup)?;
                let r = right.evaluate(lookup)?;
                Ok(l & r)
            }
            Node::Or(left, right) => {
                let l = left.evaluate(lookup)?;
                let r = right.evaluate(lookup)?;
                Ok(l | r)
            }
        }
    }

    /// Distinct compound sub-expressions, operands before the operators that
    /// use them. Leaves and the node itself are left out.
    pub fn subexpressions(&self) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_subexpressions(&mut found);
        // self is always collected last
        found.pop();
        found
    }

    fn collect_subexpressions<'a>(&'a self, found: &mut Vec<&'a Node>) {
        match self {
            Node::Constant(_) | Node::Variable(_) => return,
            Node::Not(inner) => inner.collect_subexpressions(found),
            Node::And(left, right) | Node::Or(left, right) => {
                left.collect_subexpressions(found);
                right.collect_subexpressions(found);
            }
        }
        if !found.contains(&self) {
            found.push(self);
        }
    }

    /// Number of operators in the tree.
    pub fn complexity(&self) -> usize {
        match self {
            Node::Constant(_) | Node::Variable(_) => 0,
            Node::Not(inner) => 1 + inner.complexity(),
            Node::And(left, right) | Node::Or(left, right) => {
                1 + left.complexity() + right.complexity()
            }
        }
    }

    /// Function-call rendering, e.g. `AND(A, NOT(B))`.
    pub fn to_prefix_notation(&self) -> String {
        match self {
            Node::Constant(value) => constant_name(*value).to_string(),
            Node::Variable(name) => name.clone(),
            Node::Not(inner) => format!("NOT({})", inner.to_prefix_notation()),
            Node::And(left, right) => format!(
                "AND({}, {})",
                left.to_prefix_notation(),
                right.to_prefix_notation()
            ),
            Node::Or(left, right) => format!(
                "OR({}, {})",
                left.to_prefix_notation(),
                right.to_prefix_notation()
            ),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Node::Or(..) => 1,
            Node::And(..) => 2,
            Node::Not(_) => 3,
            Node::Constant(_) | Node::Variable(_) => 4,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, needs_parens: bool) -> fmt::Result {
        if needs_parens {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

fn constant_name(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Normalized infix form with uppercase keywords and only the parentheses
/// needed to keep the tree shape when parsed again.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let own = self.precedence();
        match self {
            Node::Constant(value) => write!(f, "{}", constant_name(*value)),
            Node::Variable(name) => write!(f, "{name}"),
            Node::Not(inner) => {
                write!(f, "NOT ")?;
                inner.fmt_child(f, inner.precedence() < own)
            }
            Node::And(left, right) | Node::Or(left, right) => {
                let op = if matches!(self, Node::And(..)) { "AND" } else { "OR" };
                // left-associative: a right operand of equal precedence keeps its parens
                left.fmt_child(f, left.precedence() < own)?;
                write!(f, " {op} ")?;
                right.fmt_child(f, right.precedence() <= own)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_variables() {
        let expr = Node::and(Node::var("C"), Node::or(Node::var("A"), Node::var("C")));
        let vars: Vec<String> = expr.variables().into_iter().collect();
        assert_eq!(vars, vec!["A", "C"]);
        assert!(Node::Constant(true).variables().is_empty());
    }

    #[test]
    fn test_subexpressions() {
        let not_b = Node::not(Node::var("B"));
        let expr = Node::or(Node::and(Node::var("A"), not_b.clone()), not_b.clone());
        let subs: Vec<String> = expr.subexpressions().iter().map(|n| n.to_string()).collect();
        assert_eq!(subs, vec!["NOT B", "A AND NOT B"]);
        assert!(Node::var("A").subexpressions().is_empty());
        assert!(not_b.subexpressions().is_empty());
    }

    #[test]
    fn test_evaluate() {
        let expr = Node::and(Node::var("A"), Node::not(Node::var("B")));
        let values = HashMap::from([("A", true), ("B", false)]);
        assert!(expr.evaluate(&|name: &str| values.get(name).copied()).unwrap());
    }

    #[test]
    fn test_evaluate_reports_leftmost_missing() {
        let expr = Node::or(Node::var("X"), Node::var("Y"));
        let err = expr.evaluate(&|_: &str| None).unwrap_err();
        assert_eq!(err, Error::UndefinedVariable("X".to_string()));
    }

    #[test]
    fn test_complexity() {
        assert_eq!(Node::var("A").complexity(), 0);
        let expr = Node::and(
            Node::var("A"),
            Node::or(Node::var("B"), Node::not(Node::var("C"))),
        );
        assert_eq!(expr.complexity(), 3);
    }

    #[test]
    fn test_display_minimal_parentheses() {
        let expr = Node::and(Node::or(Node::var("A"), Node::var("B")), Node::not(Node::var("C")));
        assert_eq!(expr.to_string(), "(A OR B) AND NOT C");

        let expr = Node::or(Node::and(Node::var("A"), Node::var("B")), Node::var("C"));
        assert_eq!(expr.to_string(), "A AND B OR C");

        let expr = Node::and(Node::var("A"), Node::and(Node::var("B"), Node::var("C")));
        assert_eq!(expr.to_string(), "A AND (B AND C)");

        let expr = Node::not(Node::not(Node::and(Node::var("A"), Node::Constant(true))));
        assert_eq!(expr.to_string(), "NOT NOT (A AND TRUE)");
    }

    #[test]
    fn test_prefix_notation() {
        let expr = Node::or(Node::var("A"), Node::not(Node::Constant(false)));
        assert_eq!(expr.to_prefix_notation(), "OR(A, NOT(FALSE))");
    }
}
