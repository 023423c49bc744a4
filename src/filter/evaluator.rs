//! Filter expression evaluator

use super::ast::Expr;

/// Evaluate a filter expression against a collection of labels
///
/// `||` and `&&` short-circuit, so the right subtree of an `Or`/`And` is
/// skipped whenever the left already decides the result. A `Label` leaf
/// scans the collection and stops at the first match. Evaluation never
/// mutates the tree; the same tree may be checked against any number of
/// label collections.
pub fn evaluate<T: PartialEq>(expr: &Expr<T>, labels: &[T]) -> bool {
    match expr {
        Expr::Or(left, right) => evaluate(left, labels) || evaluate(right, labels),
        Expr::And(left, right) => evaluate(left, labels) && evaluate(right, labels),
        Expr::Not(inner) => !evaluate(inner, labels),
        Expr::Label(value) => labels.iter().any(|label| label == value),
    }
}
