//! Hand-rolled scanner producing the flat token stream.
//!
//! The scanner is a single forward pass over the source bytes. Every
//! byte ends up in exactly one token, which is what makes the
//! tokenize/stringify pair lossless: there is no normalization, no
//! skipped trivia, and unknown punctuation degrades to a one-character
//! operator token instead of being dropped.

use crate::vocab;
use crate::{Token, TokenKind};

/// Multi-character operators, longest first so maximal munch works by
/// probing the 3-character table before the 2-character one.
const THREE_CHAR_OPERATORS: &[&str] = &["<<=", ">>="];

const TWO_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "^^", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<", ">>", "++", "--",
];

/// Split shader source into typed tokens.
///
/// The concatenation of the returned tokens' `text` fields reproduces
/// `source` byte-for-byte.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    src: &'a str,
    /// Byte offset of the next unread character; always a char boundary.
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => self.whitespace(),
                '/' if self.peek_at(1) == Some('/') => self.line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.block_comment(),
                '#' => self.preprocessor(),
                c if c.is_ascii_digit() => self.number(),
                '.' if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => self.number(),
                c if c == '_' || c.is_alphabetic() => self.word(),
                _ => self.operator(),
            }
        }
        self.tokens
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn bump_while(&mut self, keep: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&keep) {
            self.bump();
        }
    }

    /// Push a token spanning from `start` to the current position.
    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, &self.src[start..self.pos]));
    }

    fn whitespace(&mut self) {
        let start = self.pos;
        self.bump_while(char::is_whitespace);
        self.push(TokenKind::Whitespace, start);
    }

    fn line_comment(&mut self) {
        let start = self.pos;
        self.bump_while(|c| c != '\n' && c != '\r');
        self.push(TokenKind::LineComment, start);
    }

    fn block_comment(&mut self) {
        let start = self.pos;
        self.bump(); // '/'
        self.bump(); // '*'
        while let Some(c) = self.peek() {
            if c == '*' && self.peek_at(1) == Some('/') {
                self.bump();
                self.bump();
                break;
            }
            self.bump();
        }
        self.push(TokenKind::BlockComment, start);
    }

    /// A `#` directive runs to the end of the physical line, except that
    /// a backslash immediately before the line break continues the
    /// directive onto the next line. The terminating newline itself is
    /// left for the following whitespace token.
    fn preprocessor(&mut self) {
        let start = self.pos;
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.bump();
                    if self.peek() == Some('\r') {
                        self.bump();
                    }
                    if self.peek() == Some('\n') {
                        self.bump();
                    }
                }
                '\n' | '\r' => break,
                _ => self.bump(),
            }
        }
        self.push(TokenKind::Preprocessor, start);
    }

    fn number(&mut self) {
        let start = self.pos;
        if self.peek() == Some('0') && matches!(self.peek_at(1), Some('x') | Some('X')) {
            self.bump();
            self.bump();
            self.bump_while(|c| c.is_ascii_hexdigit());
            self.push(TokenKind::Integer, start);
            return;
        }

        let mut is_float = false;
        self.bump_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            is_float = true;
            self.bump();
            self.bump_while(|c| c.is_ascii_digit());
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            let after_sign = match self.peek_at(1) {
                Some('+') | Some('-') => self.peek_at(2),
                other => other,
            };
            if after_sign.is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.bump(); // 'e'
                if matches!(self.peek(), Some('+') | Some('-')) {
                    self.bump();
                }
                self.bump_while(|c| c.is_ascii_digit());
            }
        }
        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.push(kind, start);
    }

    fn word(&mut self) {
        let start = self.pos;
        self.bump_while(|c| c == '_' || c.is_alphanumeric());
        let text = &self.src[start..self.pos];
        let kind = if vocab::is_keyword(text) {
            TokenKind::Keyword
        } else if vocab::is_builtin(text) {
            TokenKind::Builtin
        } else {
            TokenKind::Ident
        };
        self.push(kind, start);
    }

    fn operator(&mut self) {
        let rest = &self.src[self.pos..];
        for op in THREE_CHAR_OPERATORS {
            if rest.starts_with(op) {
                self.pos += op.len();
                self.tokens.push(Token::operator(*op));
                return;
            }
        }
        for op in TWO_CHAR_OPERATORS {
            if rest.starts_with(op) {
                self.pos += op.len();
                self.tokens.push(Token::operator(*op));
                return;
            }
        }
        let start = self.pos;
        self.bump();
        self.push(TokenKind::Operator, start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stringify;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_roundtrip_is_lossless() {
        let source = "#version 100\nprecision highp float;\n\nattribute vec4 position; // input\nuniform mat4 mvp;\n/* block\n   comment */\nvoid main() {\n\tgl_Position = mvp * position;\n}\n";
        assert_eq!(stringify(&tokenize(source)), source);
    }

    #[test]
    fn test_roundtrip_odd_spacing() {
        let source = "  \r\n\tvoid   main ( ) {gl_FragColor=vec4(1.);}";
        assert_eq!(stringify(&tokenize(source)), source);
    }

    #[test]
    fn test_word_classification() {
        let tokens = tokenize("attribute vec4 position");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[2].kind, TokenKind::Keyword);
        assert_eq!(tokens[4].kind, TokenKind::Ident);
        assert_eq!(tokens[4].text, "position");
    }

    #[test]
    fn test_builtin_classification() {
        let tokens = tokenize("gl_FragColor = texture2D(map, uv);");
        assert_eq!(tokens[0].kind, TokenKind::Builtin);
        assert_eq!(tokens[0].text, "gl_FragColor");
        let texture = tokens.iter().find(|t| t.text == "texture2D").expect("texture2D token");
        assert_eq!(texture.kind, TokenKind::Builtin);
    }

    #[test]
    fn test_preprocessor_is_one_token_without_newline() {
        let tokens = tokenize("#version 100\nvoid");
        assert_eq!(tokens[0].kind, TokenKind::Preprocessor);
        assert_eq!(tokens[0].text, "#version 100");
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].text, "\n");
    }

    #[test]
    fn test_preprocessor_line_continuation() {
        let source = "#define LIGHT(i) \\\n  (lights[i])\nfloat x;";
        let tokens = tokenize(source);
        assert_eq!(tokens[0].kind, TokenKind::Preprocessor);
        assert_eq!(tokens[0].text, "#define LIGHT(i) \\\n  (lights[i])");
        assert_eq!(stringify(&tokens), source);
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("// line\n/* block */");
        assert_eq!(tokens[0].kind, TokenKind::LineComment);
        assert_eq!(tokens[0].text, "// line");
        assert_eq!(tokens[2].kind, TokenKind::BlockComment);
        assert_eq!(tokens[2].text, "/* block */");
    }

    #[test]
    fn test_unterminated_block_comment_keeps_text() {
        let source = "/* no end";
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(stringify(&tokens), source);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("1 42 0xFF 1.0 .5 2. 1e3 1.5e-4"),
            vec![
                TokenKind::Integer,
                TokenKind::Whitespace,
                TokenKind::Integer,
                TokenKind::Whitespace,
                TokenKind::Integer,
                TokenKind::Whitespace,
                TokenKind::Float,
                TokenKind::Whitespace,
                TokenKind::Float,
                TokenKind::Whitespace,
                TokenKind::Float,
                TokenKind::Whitespace,
                TokenKind::Float,
                TokenKind::Whitespace,
                TokenKind::Float,
            ]
        );
    }

    #[test]
    fn test_exponent_requires_digits() {
        // `e` followed by a non-digit is an identifier, not an exponent
        let tokens = tokenize("2e");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].text, "2");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "e");
    }

    #[test]
    fn test_operator_maximal_munch() {
        let tokens = tokenize("a<<=b");
        assert_eq!(tokens[1].text, "<<=");
        let tokens = tokenize("a<=b");
        assert_eq!(tokens[1].text, "<=");
        let tokens = tokenize("a<b");
        assert_eq!(tokens[1].text, "<");
    }

    #[test]
    fn test_field_access_is_not_a_float() {
        let tokens = tokenize("color.rgb");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, ".");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
    }

    #[test]
    fn test_unknown_punctuation_survives() {
        let source = "a @ b";
        assert_eq!(stringify(&tokenize(source)), source);
    }
}
