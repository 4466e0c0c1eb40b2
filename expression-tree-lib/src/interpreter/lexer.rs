use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;

/// Splits an expression on whitespace and classifies every word as a token.
///
/// # Arguments
///
/// * `expression`: Space-separated tokens, e.g. `"( 3 + 4 ) * 2"`.
///
/// returns: The tokens in their original order.
///
/// # Examples
///
/// ```
/// use expression_tree::interpreter::lexer::tokenize;
/// use expression_tree::interpreter::token::Token;
///
/// let tokens = tokenize("5 !").unwrap();
/// assert_eq!(tokens, vec![Token::Literal("5".into()), Token::Bang]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    tokenize_words(expression.split_whitespace())
}

/// Classifies words that have already been split apart.
pub fn tokenize_words<S: AsRef<str>>(
    words: impl IntoIterator<Item = S>,
) -> Result<Vec<Token>, ExpressionError> {
    words
        .into_iter()
        .map(|word| word.as_ref().parse::<Token>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arbitrary_whitespace_separates_tokens() {
        let tokens = tokenize("  12\t+\n 3  ").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Literal("12".into()),
                Token::Plus,
                Token::Literal("3".into()),
            ]
        );
    }

    #[test]
    fn parenthesized_expression_is_tokenized() {
        let tokens = tokenize("( 3 + 4 ) * 2").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::LeftParentheses,
                Token::Literal("3".into()),
                Token::Plus,
                Token::Literal("4".into()),
                Token::RightParentheses,
                Token::Asterisk,
                Token::Literal("2".into()),
            ]
        );
    }

    #[test]
    fn blank_expression_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn unknown_word_stops_tokenization() {
        let error = tokenize("1 + x").unwrap_err();
        assert_eq!(error, ExpressionError::UnknownToken("x".into()));
    }

    #[test]
    fn pre_split_words_are_tokenized() {
        let tokens = tokenize_words(vec!["2".to_string(), "^".to_string()]).unwrap();
        assert_eq!(tokens, vec![Token::Literal("2".into()), Token::Caret]);
    }
}
