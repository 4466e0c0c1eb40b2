use crate::interpreter::error::ExpressionError;
use crate::interpreter::syntax::expression_tree::Node;

/// Computes the numeric value of an expression tree.
///
/// Operands are evaluated before the operation that combines them, using
/// `f64` arithmetic.
///
/// # Arguments
///
/// * `node`: The root of the tree to evaluate.
///
/// returns: The value of the expression, or the first arithmetic fault found.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::evaluator::evaluate;
/// use expression_tree::interpreter::syntax::expression_tree::Node;
///
/// let negated_five = Node::new_negation(Node::new_literal("5"));
/// assert_eq!(evaluate(&negated_five), Ok(-5.0));
/// ```
pub fn evaluate(node: &Node) -> Result<f64, ExpressionError> {
    match node {
        Node::Literal(text) => parse_literal(text),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let a = evaluate(left_operand)?;
            let b = evaluate(right_operand)?;
            operator.evaluate(a, b)
        }
        Node::UnaryOperation { operator, operand } => Ok(operator.evaluate(evaluate(operand)?)),
    }
}

fn parse_literal(text: &str) -> Result<f64, ExpressionError> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ExpressionError::NonNumericLiteral(text.to_string()));
    }
    let value = text
        .parse::<f64>()
        .map_err(|_| ExpressionError::NonNumericLiteral(text.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::NumericOverflow(text.to_string()))
    }
}
