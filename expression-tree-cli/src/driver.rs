use anyhow::{Context, Result};
use expression_tree::interpreter::parser::Notation;
use expression_tree::interpreter::{convert, Interpretation};
use std::io::Write;

/// Pairs every expression in the source with its notation.
///
/// Lines are postfix expressions up to the first blank line, and infix
/// expressions from there up to the next blank line or the end of input.
pub fn split_batches(source: &str) -> Vec<(Notation, &str)> {
    let mut expressions = vec![];
    let mut notation = Notation::Postfix;

    for line in source.lines().map(str::trim) {
        if !line.is_empty() {
            expressions.push((notation, line));
            continue;
        }
        match notation {
            Notation::Postfix => notation = Notation::Infix,
            Notation::Infix => break,
        }
    }

    expressions
}

/// Interprets every expression in the source, reporting each one to `output`.
///
/// returns: The number of expressions that failed. A failure is logged and
/// does not stop the remaining expressions.
pub fn run_batches(source: &str, show_tree: bool, output: &mut impl Write) -> Result<usize> {
    let mut failures = 0;
    for (notation, expression) in split_batches(source) {
        if let Err(error) = interpret_line(expression, notation, show_tree, output) {
            log::error!("{:#}", error);
            failures += 1;
        }
    }
    Ok(failures)
}

pub fn interpret_line(
    expression: &str,
    notation: Notation,
    show_tree: bool,
    output: &mut impl Write,
) -> Result<()> {
    let tree = convert(expression, notation)?;
    if show_tree {
        write!(output, "{}", tree)?;
    }
    let interpretation = Interpretation::of(&tree)
        .with_context(|| format!("could not interpret `{}`", expression))?;
    write!(output, "{}", report(&interpretation))?;
    Ok(())
}

fn report(interpretation: &Interpretation) -> String {
    // Adding zero turns a negated zero into a plain one.
    let value = interpretation.value + 0.0;
    format!(
        "Infix format: {}\nPostfix format: {}\nExpression value: {}\n\n",
        interpretation.infix, interpretation.postfix, value
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_line_switches_from_postfix_to_infix() {
        let source = "3 4 +\n5 !\n\n( 3 + 4 ) * 2\n";

        let expressions = split_batches(source);

        assert_eq!(
            expressions,
            vec![
                (Notation::Postfix, "3 4 +"),
                (Notation::Postfix, "5 !"),
                (Notation::Infix, "( 3 + 4 ) * 2"),
            ]
        );
    }

    #[test]
    fn second_blank_line_ends_the_infix_batch() {
        let source = "1\n\n2\n\n3\n";

        let expressions = split_batches(source);

        assert_eq!(
            expressions,
            vec![(Notation::Postfix, "1"), (Notation::Infix, "2")]
        );
    }

    #[test]
    fn report_lists_both_renderings_and_the_value() {
        let mut output = Vec::new();

        interpret_line("3 4 + 2 *", Notation::Postfix, false, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Infix format: ( ( 3 + 4 ) * 2 ) \nPostfix format: 3 4 + 2 * \nExpression value: 14\n\n"
        );
    }

    #[test]
    fn failing_line_does_not_stop_the_batch() {
        let source = "3 +\n2 2 ^\n\n1 / 0\n2 ^ 3 ^ 2\n";
        let mut output = Vec::new();

        let failures = run_batches(source, false, &mut output).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(failures, 2);
        assert!(printed.contains("Expression value: 4\n"));
        assert!(printed.contains("Expression value: 512\n"));
    }

    #[test]
    fn tree_is_printed_on_request() {
        let mut output = Vec::new();

        interpret_line("1 + 2", Notation::Infix, true, &mut output).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("expression"));
        assert!(printed.ends_with("Expression value: 3\n\n"));
    }

    #[test]
    fn tree_is_not_printed_when_the_line_fails_to_parse() {
        let mut output = Vec::new();

        let result = interpret_line("1 +", Notation::Infix, true, &mut output);

        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn negated_zero_is_reported_as_zero() {
        let mut output = Vec::new();

        interpret_line("0 !", Notation::Postfix, false, &mut output).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Expression value: 0\n"));
        assert!(!printed.contains("-0"));
    }
}
