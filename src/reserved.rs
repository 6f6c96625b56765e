//! Reserved-word collision handling.
//!
//! The words listed here are ordinary identifiers under GLSL ES 1.00
//! but keywords or builtin functions under the core-profile targets, so
//! a shader that uses one as a variable or function name stops
//! compiling after the version directive is rewritten. The renaming
//! pass walks the token stream and rewrites such identifiers through
//! the per-call [`RenameRegistry`], except vertex attributes, whose
//! names are externally bound and must fail loudly instead.

use crate::error::TranspileError;
use crate::names::RenameRegistry;
use crate::transpiler::ShaderStage;
use glsl_uplift_tokens::{Token, TokenKind};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Identifiers that are legal under dialect 100 but reserved (as
/// keywords or builtins) under the 150/330 core profiles.
pub(crate) const RESERVED_WORDS: &[&str] = &[
    // the core texture lookup family that replaced texture2D/textureCube
    "texture",
    "textureProj",
    "textureLod",
    "textureOffset",
    "texelFetch",
    "texelFetchOffset",
    "textureProjOffset",
    "textureLodOffset",
    "textureProjLod",
    "textureProjLodOffset",
    "textureGrad",
    "textureGradOffset",
    "textureProjGrad",
    "textureProjGradOffset",
    "textureSize",
    // math builtins introduced with the core profiles
    "round",
    "roundEven",
    "trunc",
    "modf",
    "isnan",
    "isinf",
    "sinh",
    "cosh",
    "tanh",
    "asinh",
    "acosh",
    "atanh",
    "floatBitsToInt",
    "floatBitsToUint",
    "intBitsToFloat",
    "uintBitsToFloat",
    // matrix builtins
    "outerProduct",
    "transpose",
    "determinant",
    "inverse",
    // qualifier and type words that gained meaning
    "smooth",
    "layout",
    "centroid",
    "uint",
    "uvec2",
    "uvec3",
    "uvec4",
    "isampler2D",
    "isampler3D",
    "isamplerCube",
    "usampler2D",
    "usampler3D",
    "usamplerCube",
    "sampler2DArray",
    "sampler2DArrayShadow",
    "samplerCubeShadow",
];

static RESERVED_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// True when `name` is reserved in the target dialects.
pub(crate) fn is_reserved(name: &str) -> bool {
    RESERVED_SET
        .get_or_init(|| RESERVED_WORDS.iter().copied().collect())
        .contains(name)
}

/// Rename every identifier that collides with a target-dialect reserved
/// word, refusing to touch vertex attributes.
pub(crate) fn rename_reserved_identifiers(
    tokens: &mut [Token],
    stage: ShaderStage,
    registry: &mut RenameRegistry,
    target: &str,
) -> Result<(), TranspileError> {
    for index in 0..tokens.len() {
        if tokens[index].kind != TokenKind::Ident || !is_reserved(&tokens[index].text) {
            continue;
        }
        if stage.is_vertex() && in_attribute_declaration(tokens, index) {
            // the host binds attributes by name; renaming here would
            // silently detach them
            return Err(TranspileError::ReservedAttributeCollision {
                name: tokens[index].text.clone(),
                target: target.to_string(),
            });
        }
        let renamed = registry.rename(&tokens[index].text);
        log::debug!(
            "renaming reserved identifier {} -> {renamed}",
            tokens[index].text
        );
        tokens[index].text = renamed;
    }
    Ok(())
}

/// Classify the identifier at `index` as an attribute declaration by
/// scanning backwards: an `attribute` or `in` keyword reached before
/// any operator, literal, identifier or builtin means the identifier is
/// the declared attribute name. Type and precision keywords in between
/// do not stop the scan; reaching the start of the sequence yields
/// false.
fn in_attribute_declaration(tokens: &[Token], index: usize) -> bool {
    for token in tokens[..index].iter().rev() {
        match token.kind {
            TokenKind::Keyword if token.text == "attribute" || token.text == "in" => return true,
            TokenKind::Operator
            | TokenKind::Float
            | TokenKind::Integer
            | TokenKind::Ident
            | TokenKind::Builtin => return false,
            _ => {}
        }
    }
    false
}
