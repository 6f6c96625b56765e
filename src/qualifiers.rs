//! Stage-qualifier remapping and deprecated texture-builtin renaming.
//!
//! `attribute` and `varying` disappeared from the core profiles in
//! favour of `in`/`out`, and the dimensionality-suffixed texture lookup
//! family (`texture2D`, `textureCube`, their `Lod` and vendor-`EXT`
//! variants) collapsed into overloaded `texture`/`textureLod`. Both are
//! pure token-text substitutions: only the callee name changes, never
//! the argument list, so no arity reasoning is needed.

use crate::transpiler::ShaderStage;
use glsl_uplift_tokens::{Token, TokenKind};
use regex::Regex;
use std::sync::OnceLock;

static TEXTURE_LOOKUP: OnceLock<Regex> = OnceLock::new();

/// Matches a deprecated texture lookup name: base, optional
/// dimensionality, optional `Lod`, optional vendor suffix. The
/// replacement keeps base and `Lod` only.
fn texture_lookup() -> &'static Regex {
    TEXTURE_LOOKUP.get_or_init(|| {
        Regex::new(r"(texture)(?:2D|Cube)?(Lod)?(?:EXT)?")
            .expect("Failed to compile texture lookup regex")
    })
}

/// Remap stage qualifiers and rename deprecated texture builtins in a
/// single forward pass.
pub(crate) fn rewrite_qualifiers(tokens: &mut [Token], stage: ShaderStage) {
    for token in tokens.iter_mut() {
        match token.kind {
            TokenKind::Keyword if token.text == "attribute" => {
                token.text = "in".to_string();
            }
            TokenKind::Keyword if token.text == "varying" => {
                token.text = if stage.is_vertex() { "out" } else { "in" }.to_string();
            }
            // macro bodies may alias the deprecated names, so #define
            // directives get the same substitution as raw builtins
            TokenKind::Preprocessor if token.text.starts_with("#define") => {
                rename_texture_lookups(token);
            }
            TokenKind::Builtin if token.text.starts_with("texture") => {
                rename_texture_lookups(token);
            }
            _ => {}
        }
    }
}

fn rename_texture_lookups(token: &mut Token) {
    let renamed = texture_lookup().replace_all(&token.text, "${1}${2}");
    if renamed != token.text {
        log::debug!("renaming texture lookup: {} -> {renamed}", token.text);
        token.text = renamed.into_owned();
    }
}
