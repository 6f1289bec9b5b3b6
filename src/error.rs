//! Error types for template formatting

use std::io;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::lexer::Span;

/// Why a template was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// A `{` appeared while a placeholder was already open
    #[error("invalid format string: nested braces")]
    NestedBrace,

    /// A `}` appeared with no open placeholder
    #[error("invalid format string: unmatched closing brace")]
    UnmatchedCloseBrace,

    /// `{}` with nothing between the braces
    #[error("invalid format string: empty braces")]
    EmptyBraces,

    /// The placeholder digits do not form a usable integer
    #[error("invalid format string: non-numeric value in braces")]
    NonNumericIndex,

    /// Something other than a digit between the braces
    #[error("invalid format string: non-digit character in braces")]
    NonDigitInBraces,

    /// Index is zero or larger than the number of arguments
    #[error("invalid argument index")]
    IndexOutOfRange,

    /// The template ended inside a placeholder
    #[error("invalid format string: unclosed brace")]
    UnclosedBrace,
}

impl FormatError {
    /// Short label attached to the offending span in reports
    fn label(&self) -> &'static str {
        match self {
            Self::NestedBrace => "a placeholder is already open here",
            Self::UnmatchedCloseBrace => "no placeholder to close",
            Self::EmptyBraces => "placeholder needs an argument index",
            Self::NonNumericIndex => "index is not a usable number",
            Self::NonDigitInBraces => "only digits are allowed in a placeholder",
            Self::IndexOutOfRange => "no argument at this position",
            Self::UnclosedBrace => "placeholder opened here is never closed",
        }
    }
}

/// A [`FormatError`] together with where in the template it happened
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error} at {span:?}")]
pub struct Diagnostic {
    pub error: FormatError,
    /// Byte range of the offending character or placeholder
    pub span: Span,
}

impl Diagnostic {
    pub fn new(error: FormatError, span: Span) -> Self {
        Self { error, span }
    }

    /// Format the diagnostic with template context using ariadne
    pub fn render(&self, source: &str, filename: &str, color: bool) -> io::Result<String> {
        let span = char_span(source, &self.span);
        let mut buf = Vec::new();

        Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(color))
            .with_message(self.error.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.error.label())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)?;

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl From<Diagnostic> for FormatError {
    fn from(diagnostic: Diagnostic) -> Self {
        diagnostic.error
    }
}

/// ariadne indexes by character, the lexer by byte
fn char_span(source: &str, span: &Span) -> Span {
    let to_char = |byte: usize| source[..byte.min(source.len())].chars().count();
    to_char(span.start)..to_char(span.end)
}
