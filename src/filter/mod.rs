// SPDX-License-Identifier: MIT

//! Boolean label filters
//!
//! This module compiles and evaluates filter expressions over numeric
//! labels. Expressions are infix, for example:
//! - `1&2`
//! - `!(3|4)`
//! - `1|2&3`
//!
//! An expression is compiled once, string -> tokens -> postfix -> tree,
//! and the resulting [`Filter`] answers membership queries any number of
//! times without re-parsing.

pub mod ast;
pub mod builder;
pub mod evaluator;
pub mod parser;
pub mod token;

pub use ast::Expr;
pub use builder::build_tree;
pub use evaluator::evaluate;
pub use parser::to_postfix;
pub use token::{tokenize, Token};

use crate::error::FilterError;

/// A compiled label filter: parse once, check many times
///
/// The tree behind a `Filter` is immutable, so a single instance can be
/// shared across threads (e.g. in an `Arc`) and checked against independent
/// label collections concurrently.
#[derive(Debug, Clone)]
pub struct Filter<T> {
    root: Expr<T>,
}

impl<T> Filter<T>
where
    T: PartialEq + TryFrom<u64>,
{
    /// Compile an expression string into a filter
    ///
    /// Fails with [`FilterError::InvalidToken`] on a character outside the
    /// language, or [`FilterError::MalformedExpression`] when the expression
    /// does not reduce to a single tree. No partial filter is ever returned.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let tokens = token::tokenize(input)?;
        let postfix = parser::to_postfix(tokens);
        let root = builder::build_tree(postfix)?;
        log::debug!("compiled filter expression '{}'", input);
        Ok(Self { root })
    }

    /// Does this collection of labels satisfy the filter?
    pub fn check(&self, labels: &[T]) -> bool {
        evaluator::evaluate(&self.root, labels)
    }

    /// The root of the compiled expression tree
    pub fn root(&self) -> &Expr<T> {
        &self.root
    }
}
