pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::parser::Notation;
use crate::interpreter::syntax::expression_tree::ExpressionTree;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Everything the driver reports about a single expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub infix: String,
    pub postfix: String,
    pub value: f64,
}

/// Builds the tree of an expression, then renders and evaluates it.
///
/// # Arguments
///
/// * `expression`: Whitespace-separated tokens.
/// * `notation`: Whether `expression` is written in infix or postfix order.
///
/// returns: Both renderings of the tree along with its value.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::interpret;
/// use expression_tree::interpreter::parser::Notation;
///
/// let interpretation = interpret("3 4 + 2 *", Notation::Postfix).unwrap();
/// assert_eq!(interpretation.infix, "( ( 3 + 4 ) * 2 ) ");
/// assert_eq!(interpretation.value, 14.0);
/// ```
pub fn interpret(expression: &str, notation: Notation) -> Result<Interpretation> {
    let tree = convert(expression, notation)?;
    log::debug!("built tree from {} expression `{}`\n{}", notation, expression, tree);
    Interpretation::of(&tree).with_context(|| format!("could not interpret `{}`", expression))
}

impl Interpretation {
    /// Renders and evaluates a tree that has already been built.
    pub fn of(tree: &ExpressionTree) -> Result<Interpretation> {
        let interpretation = Interpretation {
            infix: tree.to_infix()?,
            postfix: tree.to_postfix()?,
            value: tree.evaluate().context("could not evaluate expression")?,
        };
        log::debug!("{:?}", interpretation);
        Ok(interpretation)
    }
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the expression.
/// * `notation`: The order the tokens of `expression` are written in.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::convert;
/// use expression_tree::interpreter::parser::Notation;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("2 ^ 3 ^ 2", Notation::Infix)?;
/// let regenerated_tokens = tree.to_postfix_tokens();
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str, notation: Notation) -> Result<ExpressionTree> {
    let tokens = lexer::tokenize(expression)
        .with_context(|| format!("could not tokenize `{}`", expression))?;
    let expression_tree = parser::parse(tokens, notation)
        .with_context(|| format!("could not parse {} expression `{}`", notation, expression))?;
    Ok(expression_tree)
}

/// Writes tokens out as text, each followed by a single space.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: The space-separated text of the tokens.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::tokens_to_string;
/// use expression_tree::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Literal("5".to_string()),
///     Token::Bang,
/// ];
/// let text = tokens_to_string(&tokens)?;
/// assert_eq!(text, "5 ! ");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for token in tokens {
        builder.append(token.to_string());
        builder.append(" ");
    }

    builder.string().context("Failed to build token string")
}
