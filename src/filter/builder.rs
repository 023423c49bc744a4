//! Tree construction from postfix token sequences

use super::ast::Expr;
use super::token::Token;
use crate::error::FilterError;

/// Build an expression tree from a postfix token sequence
///
/// Operands become [`Expr::Label`] leaves: the digit run is parsed as a
/// `u64`, then narrowed with `T::try_from`, and an operand that fits
/// neither is rejected rather than wrapped. Binary operators pop the right
/// operand first (stack order), `!` pops one. After the last token exactly
/// one node must remain; anything else is a [`FilterError::MalformedExpression`].
pub fn build_tree<T>(postfix: Vec<Token>) -> Result<Expr<T>, FilterError>
where
    T: TryFrom<u64>,
{
    let mut nodes: Vec<Expr<T>> = Vec::new();

    for token in postfix {
        match token {
            Token::Operand(digits) => {
                let raw: u64 = digits.parse().map_err(|_| {
                    FilterError::malformed(format!("operand '{}' is out of range", digits))
                })?;
                let value = T::try_from(raw).map_err(|_| {
                    FilterError::malformed(format!(
                        "operand '{}' does not fit the label type",
                        digits
                    ))
                })?;
                nodes.push(Expr::Label(value));
            }
            Token::Or => {
                let (left, right) = pop_operands(&mut nodes, "|")?;
                nodes.push(Expr::Or(Box::new(left), Box::new(right)));
            }
            Token::And => {
                let (left, right) = pop_operands(&mut nodes, "&")?;
                nodes.push(Expr::And(Box::new(left), Box::new(right)));
            }
            Token::Not => {
                let child = nodes
                    .pop()
                    .ok_or_else(|| FilterError::malformed("operator '!' is missing its operand"))?;
                nodes.push(Expr::Not(Box::new(child)));
            }
            misplaced @ (Token::LParen | Token::RParen) => {
                return Err(FilterError::malformed(format!(
                    "misplaced '{}' in expression",
                    misplaced
                )));
            }
        }
    }

    let root = nodes
        .pop()
        .ok_or_else(|| FilterError::malformed("expression is empty"))?;
    if !nodes.is_empty() {
        return Err(FilterError::malformed(
            "extra operand with no connecting operator",
        ));
    }
    Ok(root)
}

/// Pop both operands of a binary operator; the most recent node is the
/// right-hand side.
fn pop_operands<T>(nodes: &mut Vec<Expr<T>>, op: &str) -> Result<(Expr<T>, Expr<T>), FilterError> {
    let right = nodes.pop().ok_or_else(|| {
        FilterError::malformed(format!("operator '{}' is missing its right operand", op))
    })?;
    let left = nodes.pop().ok_or_else(|| {
        FilterError::malformed(format!("operator '{}' is missing its left operand", op))
    })?;
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::parser::to_postfix;
    use crate::filter::token::tokenize;

    fn build(input: &str) -> Result<Expr<u32>, FilterError> {
        build_tree(to_postfix(tokenize(input).unwrap()))
    }

    #[test]
    fn test_build_single_label() {
        assert_eq!(build("7").unwrap(), Expr::Label(7));
    }

    #[test]
    fn test_build_keeps_textual_operand_order() {
        // Stack order: right is popped first, left second
        let expr = build("1&2").unwrap();
        assert_eq!(
            expr,
            Expr::And(Box::new(Expr::Label(1)), Box::new(Expr::Label(2)))
        );
    }

    #[test]
    fn test_build_or_of_and() {
        let expr = build("1|2&3").unwrap();
        match expr {
            Expr::Or(left, right) => {
                assert_eq!(*left, Expr::Label(1));
                assert_eq!(
                    *right,
                    Expr::And(Box::new(Expr::Label(2)), Box::new(Expr::Label(3)))
                );
            }
            other => panic!("Expected Or at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_build_left_associative_chain() {
        let expr = build("1&2&3").unwrap();
        match expr {
            Expr::And(left, right) => {
                assert_eq!(
                    *left,
                    Expr::And(Box::new(Expr::Label(1)), Box::new(Expr::Label(2)))
                );
                assert_eq!(*right, Expr::Label(3));
            }
            other => panic!("Expected And at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_build_negated_group() {
        let expr = build("!(1&2)").unwrap();
        match expr {
            Expr::Not(inner) => assert_eq!(
                *inner,
                Expr::And(Box::new(Expr::Label(1)), Box::new(Expr::Label(2)))
            ),
            other => panic!("Expected Not at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_extra_operand() {
        let result = build("1 2");
        match result {
            Err(FilterError::MalformedExpression(msg)) => {
                assert!(msg.contains("extra operand"), "unexpected message: {}", msg)
            }
            other => panic!("Expected MalformedExpression, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_missing_operand() {
        assert!(matches!(
            build("1&"),
            Err(FilterError::MalformedExpression(_))
        ));
        assert!(matches!(
            build("|2"),
            Err(FilterError::MalformedExpression(_))
        ));
        assert!(matches!(build("!"), Err(FilterError::MalformedExpression(_))));
    }

    #[test]
    fn test_build_rejects_empty_expression() {
        assert!(matches!(build(""), Err(FilterError::MalformedExpression(_))));
        assert!(matches!(
            build("()"),
            Err(FilterError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_build_rejects_unmatched_lparen() {
        let result = build("(1");
        match result {
            Err(FilterError::MalformedExpression(msg)) => {
                assert!(msg.contains("misplaced"), "unexpected message: {}", msg)
            }
            other => panic!("Expected MalformedExpression, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_double_not() {
        // "!!1" reorders so the first '!' underflows; spell it "!(!1)" instead
        assert!(matches!(
            build("!!1"),
            Err(FilterError::MalformedExpression(_))
        ));
        assert!(build("!(!1)").is_ok());
    }

    #[test]
    fn test_build_rejects_operand_beyond_u64() {
        let result = build("99999999999999999999999999");
        match result {
            Err(FilterError::MalformedExpression(msg)) => {
                assert!(msg.contains("out of range"), "unexpected message: {}", msg)
            }
            other => panic!("Expected MalformedExpression, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_operand_beyond_label_type() {
        let result: Result<Expr<u8>, _> = build_tree(to_postfix(tokenize("300").unwrap()));
        match result {
            Err(FilterError::MalformedExpression(msg)) => {
                assert!(
                    msg.contains("does not fit"),
                    "unexpected message: {}",
                    msg
                )
            }
            other => panic!("Expected MalformedExpression, got {:?}", other),
        }
    }
}
