//! Lexer for placeholder templates using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Template tokens. Brace context is tracked by the formatter, so digit
/// runs outside placeholders are still lexed as `Digits`.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'s> {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,

    // Unicode decimal digits (general category Nd), not only ASCII
    #[regex(r"\p{Nd}+", |lex| lex.slice())]
    Digits(&'s str),

    #[regex(r"[^{}\p{Nd}]+", |lex| lex.slice())]
    Text(&'s str),
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token<'_>, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
