use crate::interpreter::error::ExpressionError;
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::parser::{self, Notation};
use crate::interpreter::syntax::serializer;
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use crate::interpreter::token::Token;
use crate::interpreter::{lexer, tokens_to_string};
use anyhow::Result;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// A node of an expression tree. Children are owned exclusively by their parent,
/// and a node is never changed once the builder has produced it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    Literal(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal(text: impl Into<String>) -> Node {
        Node::Literal(text.into())
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_negation(operand: Node) -> Node {
        Self::new_unary_operation(UnaryOperator::Negate, operand)
    }

    /// The left child. Always absent for literals and unary operations.
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::BinaryOperation { left_operand, .. } => Some(left_operand),
            Node::Literal(_) | Node::UnaryOperation { .. } => None,
        }
    }

    /// The right child. Holds the sole operand of a unary operation.
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::BinaryOperation { right_operand, .. } => Some(right_operand),
            Node::UnaryOperation { operand, .. } => Some(operand),
            Node::Literal(_) => None,
        }
    }

    /// The token this node contributes when serialized.
    pub fn token(&self) -> Token {
        match self {
            Node::Literal(text) => Token::Literal(text.clone()),
            Node::BinaryOperation { operator, .. } => operator.token(),
            Node::UnaryOperation { operator, .. } => operator.token(),
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Literal(text) => visitor.visit_literal(text),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(text) => write!(f, "{:?}", text),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => write!(f, "{:?}({:?}, {:?})", operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                write!(f, "{:?}({:?})", operator, operand)
            }
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal(&mut self, text: &str) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
}

/// An expression tree built from a single line of input. It owns its root,
/// and is read-only once constructed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExpressionTree {
    root: Node,
}

impl ExpressionTree {
    pub fn new(root: Node) -> ExpressionTree {
        ExpressionTree { root }
    }

    /// Builds a tree from tokens given in the chosen notation.
    ///
    /// # Arguments
    ///
    /// * `tokens`: The already-split words of the expression, e.g. `["3", "4", "+"]`.
    /// * `notation`: Whether the words are ordered in infix or postfix notation.
    ///
    /// returns: The tree, or the reason the words do not form an expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_tree::interpreter::parser::Notation;
    /// use expression_tree::interpreter::syntax::expression_tree::ExpressionTree;
    ///
    /// let tree = ExpressionTree::construct(["3", "4", "+"], Notation::Postfix).unwrap();
    /// assert_eq!(tree.evaluate(), Ok(7.0));
    /// ```
    pub fn construct<S: AsRef<str>>(
        tokens: impl IntoIterator<Item = S>,
        notation: Notation,
    ) -> Result<ExpressionTree, ExpressionError> {
        let tokens = lexer::tokenize_words(tokens)?;
        parser::parse(tokens, notation)
    }

    /// Builds a tree from a whitespace-separated expression.
    pub fn parse(expression: &str, notation: Notation) -> Result<ExpressionTree, ExpressionError> {
        Self::construct(expression.split_whitespace(), notation)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        evaluate(&self.root)
    }

    pub fn to_infix_tokens(&self) -> Vec<Token> {
        serializer::to_infix(&self.root)
    }

    pub fn to_postfix_tokens(&self) -> Vec<Token> {
        serializer::to_postfix(&self.root)
    }

    /// Fully parenthesized infix form, every token followed by a space.
    pub fn to_infix(&self) -> Result<String> {
        tokens_to_string(&self.to_infix_tokens())
    }

    /// Postfix form, every token followed by a space.
    pub fn to_postfix(&self) -> Result<String> {
        tokens_to_string(&self.to_postfix_tokens())
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.root, f)
    }
}

impl Debug for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.root, f)
    }
}
