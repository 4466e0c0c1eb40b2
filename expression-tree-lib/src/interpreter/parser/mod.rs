mod infix_builder;
mod postfix_builder;

use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::Operator;
use crate::interpreter::parser::infix_builder::InfixBuilder;
use crate::interpreter::parser::postfix_builder::PostfixBuilder;
use crate::interpreter::syntax::expression_tree::{ExpressionTree, Node};
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// The order in which the tokens of an expression are written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Operators between their operands, e.g. `( 3 + 4 ) * 2`.
    Infix,
    /// Operators after their operands, e.g. `3 4 + 2 *`.
    Postfix,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "infix"),
            Notation::Postfix => write!(f, "postfix"),
        }
    }
}

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate and re-serialize than the original tokens.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse.
/// * `notation`: The order the tokens are written in.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::parser::{parse, Notation};
/// use expression_tree::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Literal("2".to_string()),
///     Token::Caret,
///     Token::Literal("3".to_string()),
/// ];
/// let tree = parse(infix_tokens, Notation::Infix).unwrap();
/// assert_eq!(tree.evaluate(), Ok(8.0));
/// ```
pub fn parse(tokens: Vec<Token>, notation: Notation) -> Result<ExpressionTree, ExpressionError> {
    let root = match notation {
        Notation::Infix => InfixBuilder::new().build(tokens)?,
        Notation::Postfix => PostfixBuilder::new().build(tokens)?,
    };
    Ok(ExpressionTree::new(root))
}

/// How many operations may be nested inside one another. Deeper trees would
/// exhaust the stack when they are evaluated, serialized or dropped.
pub const MAX_NESTING_DEPTH: usize = 1000;

/// Finished subtrees waiting to become operands, each with its nesting depth.
pub(super) struct OperandStack {
    entries: Vec<(Node, usize)>,
}

impl OperandStack {
    pub(super) fn new() -> OperandStack {
        OperandStack { entries: vec![] }
    }

    pub(super) fn push_literal(&mut self, text: String) {
        self.entries.push((Node::new_literal(text), 0));
    }

    /// Builds the node for `operator` out of the topmost subtrees and pushes it.
    ///
    /// The first pop becomes the right child and, for binary operators, the
    /// second pop becomes the left child.
    pub(super) fn apply(&mut self, operator: Operator) -> Result<(), ExpressionError> {
        let (right_operand, right_depth) = self
            .entries
            .pop()
            .ok_or_else(|| ExpressionError::missing_operand(operator))?;
        let (node, depth) = match operator {
            Operator::Unary(operator) => (
                Node::new_unary_operation(operator, right_operand),
                right_depth + 1,
            ),
            Operator::Binary(operator) => {
                let (left_operand, left_depth) = self
                    .entries
                    .pop()
                    .ok_or_else(|| ExpressionError::missing_operand(operator))?;
                (
                    Node::new_binary_operation(operator, left_operand, right_operand),
                    left_depth.max(right_depth) + 1,
                )
            }
        };
        if depth > MAX_NESTING_DEPTH {
            return Err(ExpressionError::MalformedExpression(format!(
                "operations are nested deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }
        log::trace!("reduced `{}` with arity {}", operator, operator.arity());
        self.entries.push((node, depth));
        Ok(())
    }

    /// Takes the single tree left over once every token has been consumed.
    pub(super) fn into_root(mut self) -> Result<Node, ExpressionError> {
        let (root, _) = self
            .entries
            .pop()
            .ok_or_else(|| ExpressionError::MalformedExpression("expression is empty".into()))?;
        if !self.entries.is_empty() {
            return Err(ExpressionError::MalformedExpression(format!(
                "{} operands are not combined by any operator",
                self.entries.len() + 1
            )));
        }
        Ok(root)
    }
}
