//! Placeholder substitution
//!
//! A template is literal text with `{N}` placeholders, where `N` is a 1-based
//! index into the argument list. The template is validated and substituted in
//! one left-to-right pass over the token stream. Escaped braces are not
//! supported: `{{` is always a nesting error.

use std::borrow::Cow;

use crate::error::{Diagnostic, FormatError};
use crate::lexer::{lex, Span, Token};
use crate::value::Value;

/// Scanner position relative to placeholders
enum State {
    Outside,
    /// Holds the span of the opening brace
    InsideBrace(Span),
}

/// What the scanner hands to its consumer
enum Piece<'t> {
    Literal(&'t str),
    /// A syntactically valid, non-zero, 1-based index
    Index(usize),
}

/// Walk the template once, passing literal text and placeholder indices to
/// `emit`. An error from `emit` is attributed to the current placeholder.
fn scan<'t>(
    template: &'t str,
    mut emit: impl FnMut(Piece<'t>) -> Result<(), FormatError>,
) -> Result<(), Diagnostic> {
    let mut state = State::Outside;
    let mut digits = String::with_capacity(3);

    for (token, span) in lex(template) {
        match token {
            Token::BraceOpen => {
                if let State::InsideBrace(_) = state {
                    return Err(Diagnostic::new(FormatError::NestedBrace, span));
                }
                state = State::InsideBrace(span);
                digits.clear();
            }
            Token::BraceClose => {
                let State::InsideBrace(open) = &state else {
                    return Err(Diagnostic::new(FormatError::UnmatchedCloseBrace, span));
                };
                let placeholder = open.start..span.end;
                let index = parse_index(&digits)
                    .map_err(|e| Diagnostic::new(e, placeholder.clone()))?;
                emit(Piece::Index(index)).map_err(|e| Diagnostic::new(e, placeholder))?;
                state = State::Outside;
            }
            Token::Digits(run) => match state {
                State::Outside => {
                    emit(Piece::Literal(run)).map_err(|e| Diagnostic::new(e, span))?
                }
                State::InsideBrace(_) => digits.push_str(run),
            },
            Token::Text(text) => match state {
                State::Outside => {
                    emit(Piece::Literal(text)).map_err(|e| Diagnostic::new(e, span))?
                }
                State::InsideBrace(_) => {
                    let width = text.chars().next().map_or(1, char::len_utf8);
                    return Err(Diagnostic::new(
                        FormatError::NonDigitInBraces,
                        span.start..span.start + width,
                    ));
                }
            },
        }
    }

    match state {
        State::Outside => Ok(()),
        State::InsideBrace(open) => Err(Diagnostic::new(FormatError::UnclosedBrace, open)),
    }
}

/// Turn the collected placeholder characters into a 1-based index.
///
/// Decimal digits from other scripts are accepted by the lexer but fail
/// here, as do indices that overflow `usize`.
fn parse_index(digits: &str) -> Result<usize, FormatError> {
    if digits.is_empty() {
        return Err(FormatError::EmptyBraces);
    }
    let index: usize = digits.parse().map_err(|_| FormatError::NonNumericIndex)?;
    if index < 1 {
        return Err(FormatError::IndexOutOfRange);
    }
    Ok(index)
}

/// Substitute every `{N}` in `template` with the N-th argument.
///
/// # Example
///
/// ```rust
/// use interpol::{format, values, FormatError};
///
/// assert_eq!(format("Hello {1}", &values!["Denis"]).unwrap(), "Hello Denis");
/// assert_eq!(format("{2}", &values!["only-one"]), Err(FormatError::IndexOutOfRange));
/// ```
pub fn format(template: &str, args: &[Value]) -> Result<String, FormatError> {
    format_spanned(template, args).map_err(FormatError::from)
}

/// Like [`format`], but the error records where in the template it occurred.
pub fn format_spanned(template: &str, args: &[Value]) -> Result<String, Diagnostic> {
    let mut out = String::with_capacity(template.len());
    scan(template, |piece| {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Index(index) => {
                let arg = args.get(index - 1).ok_or(FormatError::IndexOutOfRange)?;
                out.push_str(&arg.to_string());
            }
        }
        Ok(())
    })?;
    Ok(out)
}

/// Substitute placeholders, handing back the untouched template on failure.
///
/// ```rust
/// use interpol::{format_or_original, values, FormatError};
///
/// let (out, err) = format_or_original("{1", &values!["x"]);
/// assert_eq!(out, "{1");
/// assert_eq!(err, Some(FormatError::UnclosedBrace));
/// ```
pub fn format_or_original<'t>(
    template: &'t str,
    args: &[Value],
) -> (Cow<'t, str>, Option<FormatError>) {
    match format(template, args) {
        Ok(out) => (Cow::Owned(out), None),
        Err(e) => (Cow::Borrowed(template), Some(e)),
    }
}

/// Validate a template without arguments and list the indices it references,
/// in order of appearance. Upper bounds are not checked.
pub fn placeholders(template: &str) -> Result<Vec<usize>, Diagnostic> {
    let mut indices = Vec::new();
    scan(template, |piece| {
        if let Piece::Index(index) = piece {
            indices.push(index);
        }
        Ok(())
    })?;
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    fn fails(template: &str, args: &[Value]) -> FormatError {
        format(template, args).expect_err("template should be rejected")
    }

    #[test]
    fn test_simple_substitution() {
        assert_eq!(format("Hello {1}", &values!["Denis"]).unwrap(), "Hello Denis");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(format("", &[]).unwrap(), "");
    }

    #[test]
    fn test_no_placeholders_verbatim() {
        assert_eq!(format("plain text", &values![1, 2]).unwrap(), "plain text");
    }

    #[test]
    fn test_consecutive_placeholders() {
        assert_eq!(format("{1}{2}", &values!["a", "b"]).unwrap(), "ab");
    }

    #[test]
    fn test_repeated_and_reordered() {
        assert_eq!(format("{2}-{1}-{2}", &values!["a", "b"]).unwrap(), "b-a-b");
    }

    #[test]
    fn test_last_valid_index() {
        assert_eq!(format("{3}", &values!["a", "b", "c"]).unwrap(), "c");
    }

    #[test]
    fn test_multi_digit_index() {
        let args: Vec<Value> = (1..=10).map(Value::from).collect();
        assert_eq!(format("{10}", &args).unwrap(), "10");
        assert_eq!(fails("{10}", &args[..9]), FormatError::IndexOutOfRange);
    }

    #[test]
    fn test_leading_zeros_parse() {
        assert_eq!(format("{01}", &values!["x"]).unwrap(), "x");
    }

    #[test]
    fn test_mixed_value_kinds() {
        let out = format("{1} {2} {3} {4}", &values!["s", 7, 3.0, true]).unwrap();
        assert_eq!(out, "s 7 3 true");
    }

    #[test]
    fn test_argument_text_is_not_rescanned() {
        assert_eq!(format("{1}", &values!["{2}"]).unwrap(), "{2}");
    }

    #[test]
    fn test_unicode_literals() {
        assert_eq!(format("héllo {1} ✓", &values!["wörld"]).unwrap(), "héllo wörld ✓");
    }

    #[test]
    fn test_index_zero() {
        assert_eq!(fails("{0}", &values!["x"]), FormatError::IndexOutOfRange);
    }

    #[test]
    fn test_index_too_large() {
        assert_eq!(fails("{2}", &values!["only-one"]), FormatError::IndexOutOfRange);
    }

    #[test]
    fn test_empty_braces() {
        assert_eq!(fails("{}", &[]), FormatError::EmptyBraces);
    }

    #[test]
    fn test_unclosed_brace() {
        assert_eq!(fails("{1", &values!["x"]), FormatError::UnclosedBrace);
        assert_eq!(fails("{", &[]), FormatError::UnclosedBrace);
    }

    #[test]
    fn test_unmatched_close() {
        assert_eq!(fails("}", &[]), FormatError::UnmatchedCloseBrace);
        assert_eq!(fails("{1}}", &values!["x"]), FormatError::UnmatchedCloseBrace);
    }

    #[test]
    fn test_nested_brace() {
        assert_eq!(fails("{{1}}", &values!["x"]), FormatError::NestedBrace);
    }

    #[test]
    fn test_non_digit() {
        assert_eq!(fails("{1a}", &values!["x"]), FormatError::NonDigitInBraces);
        assert_eq!(fails("{ 1}", &values!["x"]), FormatError::NonDigitInBraces);
        assert_eq!(fails("{-1}", &values!["x"]), FormatError::NonDigitInBraces);
    }

    #[test]
    fn test_non_ascii_decimal_digits_are_non_numeric() {
        assert_eq!(fails("{١}", &values!["x"]), FormatError::NonNumericIndex);
        assert_eq!(fails("{1٢}", &values!["x", "y"]), FormatError::NonNumericIndex);
    }

    #[test]
    fn test_non_decimal_numerals_are_non_digits() {
        assert_eq!(fails("{½}", &values!["x"]), FormatError::NonDigitInBraces);
        assert_eq!(fails("{Ⅻ}", &values!["x"]), FormatError::NonDigitInBraces);
        assert_eq!(fails("{²}", &values!["x"]), FormatError::NonDigitInBraces);

        let diag = format_spanned("{1½}", &values!["x"]).unwrap_err();
        assert_eq!(diag.span, 2..4);
    }

    #[test]
    fn test_overflowing_index_is_non_numeric() {
        let template = "{99999999999999999999999999}";
        assert_eq!(fails(template, &values!["x"]), FormatError::NonNumericIndex);
    }

    #[test]
    fn test_first_error_wins() {
        // The non-digit is seen before the nested brace
        assert_eq!(fails("{a{", &[]), FormatError::NonDigitInBraces);
        // Range is only checked once the placeholder closes
        assert_eq!(fails("{5}{", &[]), FormatError::IndexOutOfRange);
    }

    #[test]
    fn test_spans() {
        let diag = format_spanned("ab{1x}", &values!["x"]).unwrap_err();
        assert_eq!(diag.span, 4..5);

        let diag = format_spanned("ab {7} cd", &values!["x"]).unwrap_err();
        assert_eq!(diag.error, FormatError::IndexOutOfRange);
        assert_eq!(diag.span, 3..6);

        let diag = format_spanned("x {1", &values!["x"]).unwrap_err();
        assert_eq!(diag.error, FormatError::UnclosedBrace);
        assert_eq!(diag.span, 2..3);

        let diag = format_spanned("é}", &[]).unwrap_err();
        assert_eq!(diag.span, 2..3);
    }

    #[test]
    fn test_format_or_original() {
        let (out, err) = format_or_original("Hi {1}", &values!["there"]);
        assert_eq!(out, "Hi there");
        assert_eq!(err, None);

        for template in ["{0}", "{}", "}", "{{1}}", "{1a}", "{1"] {
            let (out, err) = format_or_original(template, &values!["x"]);
            assert_eq!(out, template);
            assert!(err.is_some());
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders("{3} and {1}{3}").unwrap(), vec![3, 1, 3]);
        assert!(placeholders("none").unwrap().is_empty());
        assert_eq!(
            placeholders("{0}").unwrap_err().error,
            FormatError::IndexOutOfRange
        );
        assert_eq!(placeholders("{x}").unwrap_err().error, FormatError::NonDigitInBraces);
    }

    #[test]
    fn test_deterministic() {
        let args = values!["a", 2.5, false];
        let first = format("{3}/{2}/{1}", &args).unwrap();
        let second = format("{3}/{2}/{1}", &args).unwrap();
        assert_eq!(first, second);
    }
}
