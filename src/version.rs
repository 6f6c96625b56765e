//! Version directive normalization.
//!
//! Runs before every other pass and decides whether any rewriting is
//! needed at all: a shader that already declares the target version (or
//! the ES profile alias, which is rewritten in place) only receives the
//! mandatory core extension declarations and is otherwise left alone.

use crate::error::TranspileError;
use crate::inject;
use glsl_uplift_tokens::{Token, TokenKind};
use regex::Regex;
use std::sync::OnceLock;

/// Extension declarations every core-profile output carries, in order,
/// inserted directly after the version directive.
const CORE_PROFILE_EXTENSIONS: &[&str] = &["GL_ARB_separate_shader_objects"];

/// The legacy dialect this engine rewrites from.
const LEGACY_VERSION: &str = "100";

/// ES profile alias treated as already core-compatible.
const ES_PROFILE_ALIAS: &str = "300 es";

static VERSION_DIRECTIVE: OnceLock<Regex> = OnceLock::new();

fn version_directive() -> &'static Regex {
    VERSION_DIRECTIVE.get_or_init(|| {
        Regex::new(r"^\s*#version\s+([0-9]+(?:\s+[A-Za-z]+)?)\s*")
            .expect("Failed to compile version directive regex")
    })
}

/// What the normalizer found, which decides whether the remaining
/// passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VersionDisposition {
    /// The shader already declares the target version; skip all further
    /// rewriting.
    AlreadyTarget,
    /// A legacy directive was rewritten in place to the target.
    Rewritten,
    /// No version directive was present; one was inserted at the very
    /// start of the sequence.
    Missing,
}

/// Find and normalize the version directive, injecting the mandatory
/// core extension declarations right after it in every case.
pub(crate) fn normalize_version(
    tokens: &mut Vec<Token>,
    target: &str,
) -> Result<VersionDisposition, TranspileError> {
    let mut index = 0;
    while index < tokens.len() {
        if tokens[index].kind != TokenKind::Preprocessor {
            index += 1;
            continue;
        }
        // a directive inside a conditional block is not the program's
        // version declaration
        if inject::is_conditional_start(&tokens[index]) {
            index = inject::matching_endif(tokens, index + 1)? + 1;
            continue;
        }
        let declared = match version_directive().captures(&tokens[index].text) {
            Some(caps) => collapse_whitespace(caps.get(1).expect("version capture").as_str()),
            None => {
                index += 1;
                continue;
            }
        };

        return if declared == ES_PROFILE_ALIAS || declared == target {
            if declared == ES_PROFILE_ALIAS {
                log::debug!("rewriting #version {ES_PROFILE_ALIAS} -> #version {target}");
                tokens[index] = Token::preprocessor(format!("#version {target}"));
            }
            insert_core_extensions(tokens, index + 1);
            Ok(VersionDisposition::AlreadyTarget)
        } else if declared == LEGACY_VERSION {
            log::debug!("rewriting #version {LEGACY_VERSION} -> #version {target}");
            tokens[index] = Token::preprocessor(format!("#version {target}"));
            insert_core_extensions(tokens, index + 1);
            Ok(VersionDisposition::Rewritten)
        } else {
            Err(TranspileError::UnsupportedVersion { version: declared })
        };
    }

    // no directive anywhere: the target version goes at the very start,
    // even when the file opens with a conditional block
    log::debug!("no #version directive found; inserting #version {target}");
    tokens.insert(0, Token::preprocessor(format!("#version {target}")));
    insert_core_extensions(tokens, 1);
    Ok(VersionDisposition::Missing)
}

/// Collapse inner whitespace runs so `300   es` compares as `300 es`.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Insert the mandatory extension declarations, each flanked by single
/// newline tokens. Extensions the shader already declares are skipped,
/// which keeps a second pass over already-normalized output from piling
/// up duplicates.
fn insert_core_extensions(tokens: &mut Vec<Token>, at: usize) {
    let missing: Vec<&str> = CORE_PROFILE_EXTENSIONS
        .iter()
        .copied()
        .filter(|name| !declares_extension(tokens, name))
        .collect();
    if missing.is_empty() {
        return;
    }
    let mut run = Vec::with_capacity(missing.len() * 2 + 2);
    run.push(Token::newline());
    for name in missing {
        run.push(Token::preprocessor(format!("#extension {name} : enable")));
        run.push(Token::newline());
    }
    run.push(Token::newline());
    tokens.splice(at..at, run);
}

fn declares_extension(tokens: &[Token], name: &str) -> bool {
    tokens.iter().any(|token| {
        token.kind == TokenKind::Preprocessor
            && token.text.starts_with("#extension")
            && token.text.contains(name)
    })
}
