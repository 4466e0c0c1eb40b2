use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

/// An unary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

/// Any operator that can sit on the operator stack of the infix builder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Looks up the precedence rank of an operator symbol.
///
/// # Arguments
///
/// * `symbol`: The textual form of an operator, e.g. `"^"`.
///
/// returns: The rank of the operator, or -1 if the symbol is not an operator.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::operator::precedence;
///
/// assert_eq!(precedence("*"), 1);
/// assert_eq!(precedence("("), -1);
/// ```
pub fn precedence(symbol: &str) -> i32 {
    match symbol.parse::<Token>() {
        Ok(token) => match Operator::from_token(&token) {
            Some(operator) => i32::from(operator.precedence()),
            None => -1,
        },
        Err(_) => -1,
    }
}

impl UnaryOperator {
    pub fn token(&self) -> Token {
        match self {
            UnaryOperator::Negate => Token::Bang,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        3
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -x,
        }
    }
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
            BinaryOperator::Exponentiate => Token::Caret,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
            BinaryOperator::Exponentiate => 2,
        }
    }

    /// Applies the operator using `f64` arithmetic.
    ///
    /// Division is exact (not truncated) and a zero divisor is rejected.
    /// Any result that is not a finite number is reported as an overflow.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, ExpressionError> {
        let result = match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => {
                if b == 0.0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                a / b
            }
            BinaryOperator::Exponentiate => f64::powf(a, b),
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(ExpressionError::NumericOverflow(format!("{} {} {}", a, self, b)))
        }
    }
}

impl Operator {
    pub fn from_token(token: &Token) -> Option<Operator> {
        match token {
            Token::Plus => Some(Operator::Binary(BinaryOperator::Add)),
            Token::Dash => Some(Operator::Binary(BinaryOperator::Subtract)),
            Token::Asterisk => Some(Operator::Binary(BinaryOperator::Multiply)),
            Token::ForwardSlash => Some(Operator::Binary(BinaryOperator::Divide)),
            Token::Caret => Some(Operator::Binary(BinaryOperator::Exponentiate)),
            Token::Bang => Some(Operator::Unary(UnaryOperator::Negate)),
            Token::Literal(_) | Token::LeftParentheses | Token::RightParentheses => None,
        }
    }

    pub fn token(&self) -> Token {
        match self {
            Operator::Binary(operator) => operator.token(),
            Operator::Unary(operator) => operator.token(),
        }
    }

    /// How many operands the operator consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Binary(_) => 2,
            Operator::Unary(_) => 1,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::Binary(operator) => operator.precedence(),
            Operator::Unary(operator) => operator.precedence(),
        }
    }

    /// Everything ranked above multiplication groups from the right.
    pub(crate) fn associativity(&self) -> Associativity {
        if self.precedence() > 1 {
            Associativity::Right
        } else {
            Associativity::Left
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Whether this operator, arriving after `pending`, must wait on the
    /// stack rather than letting `pending` be applied first.
    pub(crate) fn binds_tighter_than(&self, pending: &Self) -> bool {
        self.precedence_gt(pending)
            || (self.precedence_eq(pending) && self.associativity() == Associativity::Right)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
