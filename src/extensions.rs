//! Pruning of `#extension` declarations promoted to core features.
//!
//! Capabilities that needed an opt-in under dialect 100 are standard in
//! the core profiles, and leaving the declarations in place makes
//! strict drivers reject the shader. The pass rebuilds the sequence in
//! one filtering sweep, dropping each promoted directive together with
//! the whitespace token that followed it.

use glsl_uplift_tokens::{Token, TokenKind};
use regex::Regex;
use std::sync::OnceLock;

/// Extensions that are core features in the target dialects.
const PROMOTED_EXTENSIONS: &[&str] = &[
    "GL_OES_standard_derivatives",
    "GL_EXT_draw_buffers",
    "GL_EXT_shader_texture_lod",
];

static EXTENSION_DIRECTIVE: OnceLock<Regex> = OnceLock::new();

fn extension_directive() -> &'static Regex {
    EXTENSION_DIRECTIVE.get_or_init(|| {
        Regex::new(r"#extension\s+([^:]+):").expect("Failed to compile extension directive regex")
    })
}

/// Remove every `#extension` declaration for a promoted capability,
/// along with its trailing whitespace token when present.
pub(crate) fn prune_promoted_extensions(tokens: &mut Vec<Token>) {
    let source = std::mem::take(tokens);
    let mut drain = source.into_iter().peekable();
    while let Some(token) = drain.next() {
        if is_promoted(&token) {
            log::debug!("pruning promoted extension directive: {}", token.text.trim());
            if drain
                .peek()
                .is_some_and(|next| next.kind == TokenKind::Whitespace)
            {
                drain.next();
            }
            continue;
        }
        tokens.push(token);
    }
}

fn is_promoted(token: &Token) -> bool {
    if token.kind != TokenKind::Preprocessor {
        return false;
    }
    extension_directive()
        .captures(&token.text)
        .is_some_and(|caps| {
            let name = caps.get(1).expect("extension name capture").as_str().trim();
            PROMOTED_EXTENSIONS.contains(&name)
        })
}
