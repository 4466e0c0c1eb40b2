use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::Operator;
use crate::interpreter::parser::OperandStack;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// An entry on the operator stack that has not been applied yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    LeftParenthesis,
}

/// Builds a tree from an infix expression with one stack of finished
/// subtrees and one stack of operators waiting for their right operand.
pub(super) struct InfixBuilder {
    operands: OperandStack,
    operators: Vec<Pending>,
}

impl InfixBuilder {
    pub(super) fn new() -> InfixBuilder {
        InfixBuilder {
            operands: OperandStack::new(),
            operators: vec![],
        }
    }

    pub(super) fn build(mut self, tokens: Vec<Token>) -> Result<Node, ExpressionError> {
        for token in tokens {
            match token {
                Token::Literal(text) => self.operands.push_literal(text),
                token => self.resolve(token)?,
            }
        }
        self.transfer_leftover_operators()?;
        self.operands.into_root()
    }

    fn resolve(&mut self, token: Token) -> Result<(), ExpressionError> {
        match token {
            Token::LeftParentheses => {
                self.operators.push(Pending::LeftParenthesis);
                Ok(())
            }
            Token::RightParentheses => self.close_parenthesis(),
            token => {
                let operator = Operator::from_token(&token)
                    .ok_or_else(|| ExpressionError::UnknownToken(token.to_string()))?;
                self.push_operator(operator)
            }
        }
    }

    /// Applies every pending operator that must bind before `operator`,
    /// then leaves `operator` waiting on the stack.
    fn push_operator(&mut self, operator: Operator) -> Result<(), ExpressionError> {
        while let Some(Pending::Operator(top_of_operator_stack)) = self.operators.last().copied() {
            if operator.binds_tighter_than(&top_of_operator_stack) {
                break;
            }
            self.operators.pop();
            self.reduce(top_of_operator_stack)?;
        }
        self.operators.push(Pending::Operator(operator));
        Ok(())
    }

    fn close_parenthesis(&mut self) -> Result<(), ExpressionError> {
        loop {
            match self.operators.pop() {
                None => return Err(ExpressionError::UnbalancedParentheses),
                // Discard the open parenthesis.
                Some(Pending::LeftParenthesis) => return Ok(()),
                Some(Pending::Operator(operator)) => self.reduce(operator)?,
            }
        }
    }

    fn transfer_leftover_operators(&mut self) -> Result<(), ExpressionError> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::LeftParenthesis => return Err(ExpressionError::UnbalancedParentheses),
                Pending::Operator(operator) => self.reduce(operator)?,
            }
        }
        Ok(())
    }

    fn reduce(&mut self, operator: Operator) -> Result<(), ExpressionError> {
        self.operands.apply(operator)
    }
}
