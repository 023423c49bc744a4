//! Infix-to-postfix conversion (shunting-yard)
//!
//! Reorders a token sequence into reverse-Polish form so the tree builder
//! never has to think about precedence:
//! - `1|2&3` -> `1 2 3 & |`
//! - `(1|2)&3` -> `1 2 | 3 &`

use super::token::Token;

/// Convert an infix token sequence into postfix (RPN) order
///
/// Operands pass straight through. `(` is pushed unconditionally; `)` pops
/// operators into the output until the matching `(`, which is discarded. An
/// unmatched `)` on an empty stack is absorbed without error. Any other
/// operator first pops every stacked operator of equal or higher precedence
/// (stopping at `(`), which makes equal-precedence chains group left to
/// right. `!` is ordered purely by precedence here; its unary arity only
/// matters to the tree builder.
///
/// The conversion never fails. Note that an unmatched `(` is drained into
/// the output at end of input and left for the builder to reject.
pub fn to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::LParen => stack.push(token),
            Token::RParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            }
            op => {
                while let Some(top) = stack.pop() {
                    if top == Token::LParen || top.precedence() < op.precedence() {
                        stack.push(top);
                        break;
                    }
                    output.push(top);
                }
                stack.push(op);
            }
        }
    }

    while let Some(op) = stack.pop() {
        output.push(op);
    }

    output
}
