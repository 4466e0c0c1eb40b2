use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::Operator;
use crate::interpreter::parser::OperandStack;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// Reduces a postfix expression to a tree using a single stack of nodes.
pub(super) struct PostfixBuilder {
    operands: OperandStack,
}

impl PostfixBuilder {
    pub(super) fn new() -> PostfixBuilder {
        PostfixBuilder {
            operands: OperandStack::new(),
        }
    }

    /// Generates an expression tree based off of the given tokens.
    ///
    /// An operator that arrives before enough operands fails the whole
    /// expression instead of being skipped.
    ///
    /// # Arguments
    ///
    /// * `tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
    ///
    /// returns: The root of the generated expression tree.
    pub(super) fn build(mut self, tokens: Vec<Token>) -> Result<Node, ExpressionError> {
        for token in tokens {
            self.push_token(token)?;
        }
        self.operands.into_root()
    }

    fn push_token(&mut self, token: Token) -> Result<(), ExpressionError> {
        match token {
            Token::Literal(text) => self.operands.push_literal(text),
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ExpressionError::MalformedExpression(
                    "parentheses are not allowed in postfix notation".into(),
                ))
            }
            token => {
                let operator = Operator::from_token(&token)
                    .ok_or_else(|| ExpressionError::UnknownToken(token.to_string()))?;
                self.operands.apply(operator)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use crate::interpreter::operator::BinaryOperator;
    use pretty_assertions::assert_eq;

    fn build(expression: &str) -> Result<Node, ExpressionError> {
        PostfixBuilder::new().build(tokenize(expression).unwrap())
    }

    #[test]
    fn simple_expression_returns_correct_tree() {
        let expected_tree = Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_literal("3"),
            Node::new_literal("4"),
        );

        let actual_tree = build("3 4 +").unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn complex_expression_returns_correct_tree() {
        // 1 + ((2 + 3) * 4)
        let expected_tree = Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_literal("1"),
            Node::new_binary_operation(
                BinaryOperator::Multiply,
                Node::new_binary_operation(
                    BinaryOperator::Add,
                    Node::new_literal("2"),
                    Node::new_literal("3"),
                ),
                Node::new_literal("4"),
            ),
        );

        let actual_tree = build("1 2 3 + 4 * +").unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn first_pop_becomes_right_operand() {
        let tree = build("8 2 -").unwrap();

        assert_eq!(tree.left(), Some(&Node::new_literal("8")));
        assert_eq!(tree.right(), Some(&Node::new_literal("2")));
    }

    #[test]
    fn negation_consumes_a_single_operand() {
        let expected_tree = Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_literal("1"),
            Node::new_negation(Node::new_literal("5")),
        );

        let actual_tree = build("1 5 ! +").unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn single_operand_is_a_leaf() {
        assert_eq!(build("5").unwrap(), Node::new_literal("5"));
    }

    #[test]
    fn leading_operator_is_malformed() {
        let error = build("+ 3 4").unwrap_err();
        assert_eq!(
            error,
            ExpressionError::MalformedExpression("operator `+` is missing an operand".into())
        );
    }

    #[test]
    fn leading_negation_is_malformed() {
        let error = build("! 5").unwrap_err();
        assert!(matches!(error, ExpressionError::MalformedExpression(_)));
    }

    #[test]
    fn operator_with_one_operand_is_malformed() {
        let error = build("3 *").unwrap_err();
        assert!(matches!(error, ExpressionError::MalformedExpression(_)));
    }

    #[test]
    fn missing_operator_is_malformed() {
        let error = build("3 4").unwrap_err();
        assert!(matches!(error, ExpressionError::MalformedExpression(_)));
    }

    #[test]
    fn parentheses_are_malformed() {
        let error = build("( 3 4 + )").unwrap_err();
        assert!(matches!(error, ExpressionError::MalformedExpression(_)));
    }
}
