//! Injection-point resolution for synthesized top-level declarations.
//!
//! New declarations may only be inserted after the header region of the
//! shader: the version/extension directives, any leading conditional
//! blocks, and any `precision` statements. The resolver computes that
//! index from token structure alone; the insertion helper owns the
//! newline bookkeeping, since the stringifier downstream never
//! reformats anything.

use crate::error::TranspileError;
use glsl_uplift_tokens::{Token, TokenKind};
use regex::Regex;
use std::sync::OnceLock;

static EXTENSION_OR_VERSION: OnceLock<Regex> = OnceLock::new();
static CONDITIONAL_START: OnceLock<Regex> = OnceLock::new();
static CONDITIONAL_END: OnceLock<Regex> = OnceLock::new();

fn extension_or_version() -> &'static Regex {
    EXTENSION_OR_VERSION.get_or_init(|| {
        Regex::new(r"^#(extension|version)\b").expect("Failed to compile header directive regex")
    })
}

fn conditional_start() -> &'static Regex {
    CONDITIONAL_START
        .get_or_init(|| Regex::new(r"^#ifn?def\b").expect("Failed to compile #ifdef regex"))
}

fn conditional_end() -> &'static Regex {
    CONDITIONAL_END.get_or_init(|| Regex::new(r"^#endif\b").expect("Failed to compile #endif regex"))
}

/// True for `#ifdef` / `#ifndef` directive tokens.
pub(crate) fn is_conditional_start(token: &Token) -> bool {
    token.kind == TokenKind::Preprocessor && conditional_start().is_match(&token.text)
}

/// Index of the `#endif` matching the conditional that opened just
/// before `from`, handling nested conditionals recursively.
pub(crate) fn matching_endif(tokens: &[Token], from: usize) -> Result<usize, TranspileError> {
    let mut index = from;
    while index < tokens.len() {
        let token = &tokens[index];
        if token.kind == TokenKind::Preprocessor {
            if conditional_start().is_match(&token.text) {
                index = matching_endif(tokens, index + 1)?;
            } else if conditional_end().is_match(&token.text) {
                return Ok(index);
            }
        }
        index += 1;
    }
    Err(TranspileError::UnterminatedConditional)
}

/// Compute the index at which a new top-level declaration can be
/// inserted without breaking the header region.
///
/// Version and extension directives, whole conditional blocks and
/// complete `precision` statements are skipped; other preprocessor
/// directives (`#define`, `#pragma`, ...) are stepped over without
/// moving the insertion point. The first token that is none of those
/// stops the scan, and the insertion index is one past the last
/// header token (0 when there is no header at all).
pub(crate) fn resolve_injection_point(tokens: &[Token]) -> Result<usize, TranspileError> {
    let mut last_header: Option<usize> = None;
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        match token.kind {
            TokenKind::Preprocessor => {
                if extension_or_version().is_match(&token.text) {
                    last_header = Some(index);
                } else if conditional_start().is_match(&token.text) {
                    let end = matching_endif(tokens, index + 1)?;
                    last_header = Some(end);
                    index = end;
                }
            }
            TokenKind::Keyword if token.text == "precision" => {
                let semi = next_semicolon(tokens, index)
                    .ok_or(TranspileError::MalformedPrecisionStatement)?;
                last_header = Some(semi);
                index = semi;
            }
            TokenKind::Whitespace => {}
            _ => break,
        }
        index += 1;
    }
    Ok(last_header.map_or(0, |index| index + 1))
}

/// Insert a synthesized declaration at the resolved injection point,
/// adding newline tokens on either side where the neighbours do not
/// already end a line.
pub(crate) fn inject_declaration(
    tokens: &mut Vec<Token>,
    declaration: Vec<Token>,
) -> Result<(), TranspileError> {
    let mut at = resolve_injection_point(tokens)?;
    if at > 0 && !ends_with_line_break(&tokens[at - 1]) {
        tokens.insert(at, Token::newline());
        at += 1;
    }
    let end = at + declaration.len();
    tokens.splice(at..at, declaration);
    if end < tokens.len() && !ends_with_line_break(&tokens[end]) {
        tokens.insert(end, Token::newline());
    }
    Ok(())
}

fn next_semicolon(tokens: &[Token], from: usize) -> Option<usize> {
    tokens[from..]
        .iter()
        .position(|t| t.kind == TokenKind::Operator && t.text == ";")
        .map(|offset| from + offset)
}

fn ends_with_line_break(token: &Token) -> bool {
    token.text.ends_with(['\n', '\r'])
}
