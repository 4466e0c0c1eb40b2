use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use crate::interpreter::token::Token;

/// Renders a tree in infix order, wrapping every operation in parentheses.
///
/// # Arguments
///
/// * `node`: The root of the (sub)tree to render.
///
/// returns: The tokens of the fully parenthesized expression. A lone literal
/// is returned without parentheses.
pub fn to_infix(node: &Node) -> Vec<Token> {
    match node {
        Node::Literal(_) => vec![node.token()],
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => parenthesize(|tokens| {
            tokens.append(&mut to_infix(left_operand));
            tokens.push(operator.token());
            tokens.append(&mut to_infix(right_operand));
        }),
        Node::UnaryOperation { operator, operand } => parenthesize(|tokens| {
            tokens.push(operator.token());
            tokens.append(&mut to_infix(operand));
        }),
    }
}

/// Renders a tree in postfix order: children first, then the operator.
pub fn to_postfix(node: &Node) -> Vec<Token> {
    let mut visitor = PostfixVisitor { tokens: vec![] };
    node.accept(&mut visitor);
    visitor.tokens
}

fn parenthesize(build_interior: impl FnOnce(&mut Vec<Token>)) -> Vec<Token> {
    let mut tokens = vec![Token::LeftParentheses];
    build_interior(&mut tokens);
    tokens.push(Token::RightParentheses);
    tokens
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_literal(&mut self, text: &str) {
        self.tokens.push(Token::Literal(text.to_string()));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand);
        self.tokens.push(operator.token());
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        walk_unary_operation(self, operand);
        self.tokens.push(operator.token());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_renders_without_parentheses() {
        let node = Node::new_literal("5");

        assert_eq!(to_infix(&node), vec![Token::Literal("5".into())]);
        assert_eq!(to_postfix(&node), vec![Token::Literal("5".into())]);
    }

    #[test]
    fn complex_tree_converts_to_fully_parenthesized_infix() {
        let tree = create_complex_tree();

        let actual_tokens = to_infix(&tree);

        assert_eq!(actual_tokens, create_complex_infix_tokens());
    }

    #[test]
    fn complex_tree_converts_to_postfix() {
        let tree = create_complex_tree();

        let actual_tokens = to_postfix(&tree);

        assert_eq!(actual_tokens, create_complex_postfix_tokens());
    }

    #[test]
    fn negation_renders_before_its_operand_in_infix() {
        let node = Node::new_negation(Node::new_literal("5"));

        assert_eq!(
            to_infix(&node),
            vec![
                Token::LeftParentheses,
                Token::Bang,
                Token::Literal("5".into()),
                Token::RightParentheses,
            ]
        );
        assert_eq!(to_postfix(&node), vec![Token::Literal("5".into()), Token::Bang]);
    }

    #[test]
    fn literal_starting_with_zero_is_not_parenthesized() {
        let node = Node::new_literal("0");
        assert_eq!(to_infix(&node), vec![Token::Literal("0".into())]);
    }

    fn create_complex_tree() -> Node {
        // 1 + ((2 + 3) * 4)
        let x = Node::new_literal("1");
        let y = Node::new_literal("2");
        let z = Node::new_literal("3");
        let a = Node::new_literal("4");
        let second_plus = Node::new_binary_operation(BinaryOperator::Add, y, z);
        let star = Node::new_binary_operation(BinaryOperator::Multiply, second_plus, a);
        Node::new_binary_operation(BinaryOperator::Add, x, star)
    }

    fn create_complex_infix_tokens() -> Vec<Token> {
        // ( 1 + ( ( 2 + 3 ) * 4 ) )
        vec![
            Token::LeftParentheses,
            Token::Literal("1".into()),
            Token::Plus,
            Token::LeftParentheses,
            Token::LeftParentheses,
            Token::Literal("2".into()),
            Token::Plus,
            Token::Literal("3".into()),
            Token::RightParentheses,
            Token::Asterisk,
            Token::Literal("4".into()),
            Token::RightParentheses,
            Token::RightParentheses,
        ]
    }

    fn create_complex_postfix_tokens() -> Vec<Token> {
        // 1 2 3 + 4 * +
        vec![
            Token::Literal("1".into()),
            Token::Literal("2".into()),
            Token::Literal("3".into()),
            Token::Plus,
            Token::Literal("4".into()),
            Token::Asterisk,
            Token::Plus,
        ]
    }
}
