use crate::interpreter::error::ExpressionError;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// The verbatim text of a numeral, e.g. `"42"`.
    Literal(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    Caret,
    Bang,
    LeftParentheses,
    RightParentheses,
}

impl Token {
    /// Any word starting with a decimal digit is treated as an operand.
    pub fn is_numeral(text: &str) -> bool {
        text.starts_with(|character: char| character.is_ascii_digit())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::Bang => write!(f, "!"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Plus),
            "-" => Ok(Token::Dash),
            "*" => Ok(Token::Asterisk),
            "/" => Ok(Token::ForwardSlash),
            "^" => Ok(Token::Caret),
            "!" => Ok(Token::Bang),
            "(" => Ok(Token::LeftParentheses),
            ")" => Ok(Token::RightParentheses),
            input if Token::is_numeral(input) => Ok(Token::Literal(input.to_string())),
            input => Err(ExpressionError::UnknownToken(input.to_string())),
        }
    }
}
