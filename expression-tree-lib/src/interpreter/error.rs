use thiserror::Error;

/// Everything that can go wrong while building or evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// Too few or too many operands for the operators in the expression.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
    #[error("unknown token `{0}`")]
    UnknownToken(String),
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("division by zero")]
    DivisionByZero,
    /// The result of the named operation is not a finite number.
    #[error("numeric overflow in `{0}`")]
    NumericOverflow(String),
    #[error("`{0}` is not a numeric literal")]
    NonNumericLiteral(String),
}

impl ExpressionError {
    pub(crate) fn missing_operand(symbol: impl std::fmt::Display) -> ExpressionError {
        ExpressionError::MalformedExpression(format!("operator `{}` is missing an operand", symbol))
    }
}
