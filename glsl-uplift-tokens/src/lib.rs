//! Tokenizer and stringifier for GLSL ES 1.00 shader source.
//!
//! This crate is the lexical collaborator of the `glsl-uplift` rewriting
//! engine. It converts raw shader text into a flat sequence of typed
//! tokens and back, and deliberately does nothing else:
//!
//! - [`tokenize`]: split source text into [`Token`]s, losslessly
//! - [`stringify`]: concatenate a token sequence back into source text
//! - [`vocab`]: the GLSL ES 1.00 keyword and builtin vocabulary
//!
//! # Token contract
//!
//! The token stream is lossless: `stringify(&tokenize(src)) == src` for
//! any input, because every byte of the source lands in exactly one
//! token's `text`. Whitespace tokens preserve original line breaks, and
//! the stringifier performs no reformatting; consumers that insert or
//! remove tokens own all newline bookkeeping themselves.

mod lexer;
pub mod vocab;

pub use lexer::tokenize;

/// Lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Language keyword, including ES 1.00 reserved-future words.
    Keyword,
    /// Predefined identifier: `gl_*` variables and builtin functions.
    Builtin,
    /// User-declared identifier.
    Ident,
    /// A `#...` directive, one token per logical line (backslash-newline
    /// continuations included, terminating newline excluded).
    Preprocessor,
    /// Operator or punctuation.
    Operator,
    /// Decimal or hexadecimal integer literal.
    Integer,
    /// Floating-point literal.
    Float,
    /// Run of whitespace, line breaks included verbatim.
    Whitespace,
    /// `// ...` comment, without the terminating newline.
    LineComment,
    /// `/* ... */` comment.
    BlockComment,
}

/// Smallest lexical unit of shader source: a kind tag plus the literal
/// text as it appeared in (or will appear in) the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// A keyword token, for synthesized declarations.
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, text)
    }

    /// An identifier token, for synthesized declarations.
    pub fn ident(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Ident, text)
    }

    /// An operator token, for synthesized declarations.
    pub fn operator(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, text)
    }

    /// A whitespace token with the given text.
    pub fn whitespace(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Whitespace, text)
    }

    /// A preprocessor directive token with the given text.
    pub fn preprocessor(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Preprocessor, text)
    }

    /// A single `\n` whitespace token.
    pub fn newline() -> Self {
        Self::new(TokenKind::Whitespace, "\n")
    }

    /// True for word-shaped tokens (keyword, builtin, identifier).
    pub fn is_word(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Keyword | TokenKind::Builtin | TokenKind::Ident
        )
    }
}

/// Concatenate a token sequence back into shader source text.
///
/// Performs no reformatting: the output is exactly the `text` fields in
/// order, so whatever newline structure the tokens carry is what the
/// caller gets.
pub fn stringify(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for token in tokens {
        out.push_str(&token.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringify_concatenates_in_order() {
        let tokens = vec![
            Token::keyword("void"),
            Token::whitespace(" "),
            Token::ident("main"),
            Token::operator("("),
            Token::operator(")"),
        ];
        assert_eq!(stringify(&tokens), "void main()");
    }

    #[test]
    fn test_stringify_empty() {
        assert_eq!(stringify(&[]), "");
    }

    #[test]
    fn test_newline_token() {
        let newline = Token::newline();
        assert_eq!(newline.kind, TokenKind::Whitespace);
        assert_eq!(newline.text, "\n");
    }

    #[test]
    fn test_is_word() {
        assert!(Token::keyword("attribute").is_word());
        assert!(Token::ident("position").is_word());
        assert!(Token::new(TokenKind::Builtin, "gl_FragColor").is_word());
        assert!(!Token::operator(";").is_word());
        assert!(!Token::whitespace(" ").is_word());
    }
}
