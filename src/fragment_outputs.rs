//! Synthesized output declarations for implicit fragment builtins.
//!
//! Core-profile fragment shaders have no `gl_FragColor`; the output is
//! a user-declared `out` variable. This pass rewrites every reference
//! to an implicit output builtin to a freshly synthesized name and then
//! injects a single matching declaration per builtin at the resolved
//! injection point. References are rewritten before anything is
//! inserted, so the forward scan never has to compensate for its own
//! insertions.

use crate::error::TranspileError;
use crate::inject;
use crate::names::RenameRegistry;
use crate::transpiler::TranspileOptions;
use glsl_uplift_tokens::{Token, TokenKind};

/// Replace implicit fragment outputs with synthesized `out` variables.
///
/// Fragment color is always rewritten; fragment depth only when the
/// options ask for it.
pub(crate) fn synthesize_fragment_outputs(
    tokens: &mut Vec<Token>,
    registry: &mut RenameRegistry,
    options: &TranspileOptions,
) -> Result<(), TranspileError> {
    let mut color_name: Option<String> = None;
    let mut depth_name: Option<String> = None;

    for token in tokens.iter_mut() {
        if token.kind != TokenKind::Builtin {
            continue;
        }
        if token.text == "gl_FragColor" {
            let name = color_name.get_or_insert_with(|| registry.fresh("fragColor"));
            token.text = name.clone();
        } else if options.synthesize_frag_depth
            && (token.text == "gl_FragDepth" || token.text == "gl_FragDepthEXT")
        {
            let name = depth_name.get_or_insert_with(|| registry.fresh("fragDepth"));
            token.text = name.clone();
        }
    }

    if let Some(name) = color_name {
        log::debug!("synthesizing fragment color output {name}");
        inject::inject_declaration(tokens, output_declaration("vec4", &name))?;
    }
    if let Some(name) = depth_name {
        log::debug!("synthesizing fragment depth output {name}");
        inject::inject_declaration(tokens, output_declaration("float", &name))?;
    }
    Ok(())
}

fn output_declaration(data_type: &str, name: &str) -> Vec<Token> {
    vec![
        Token::keyword("out"),
        Token::whitespace(" "),
        Token::keyword(data_type),
        Token::whitespace(" "),
        Token::ident(name),
        Token::operator(";"),
    ]
}
