//! Transpile orchestration: the ordered pass sequence over the token
//! stream.
//!
//! The version normalizer always runs first and decides everything: a
//! shader already at the target version is returned with only the
//! mandatory extension declarations added, while legacy (or
//! version-less) shaders flow through the remaining passes exactly
//! once, each pass a single bounded scan.

use crate::error::TranspileError;
use crate::names::RenameRegistry;
use crate::version::VersionDisposition;
use crate::{extensions, fragment_outputs, qualifiers, reserved, version};
use glsl_uplift_tokens::{stringify, tokenize};

/// Default target dialect when the caller does not pick one.
pub const DEFAULT_TARGET_VERSION: &str = "330";

/// Shader pipeline stage the source is written for.
///
/// The stage changes two rewrites: `varying` maps to `out` in vertex
/// programs and `in` in fragment programs, and only fragment programs
/// get synthesized output declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// True for vertex-stage programs.
    pub fn is_vertex(self) -> bool {
        matches!(self, ShaderStage::Vertex)
    }
}

/// Options controlling a transpile call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Dialect version written into the rewritten `#version` directive.
    pub target_version: String,

    /// Also replace `gl_FragDepth`/`gl_FragDepthEXT` with a synthesized
    /// `out float` declaration. Depth writes stay valid in some target
    /// configurations, so this is opt-in.
    pub synthesize_frag_depth: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            target_version: DEFAULT_TARGET_VERSION.to_string(),
            synthesize_frag_depth: false,
        }
    }
}

/// Transpile a dialect-100 vertex shader using default options.
pub fn vertex(source: &str) -> Result<String, TranspileError> {
    transpile(source, ShaderStage::Vertex, &TranspileOptions::default())
}

/// Transpile a dialect-100 fragment shader using default options.
pub fn fragment(source: &str) -> Result<String, TranspileError> {
    transpile(source, ShaderStage::Fragment, &TranspileOptions::default())
}

/// Rewrite `source` from GLSL dialect 100 to the configured
/// core-profile target, preserving runtime semantics.
///
/// On failure the input is structurally defective (see
/// [`TranspileError`]) and no output is produced; re-running with the
/// same input reproduces the same error.
pub fn transpile(
    source: &str,
    stage: ShaderStage,
    options: &TranspileOptions,
) -> Result<String, TranspileError> {
    let target = options.target_version.as_str();
    let mut tokens = tokenize(source);

    let disposition = version::normalize_version(&mut tokens, target)?;
    if disposition == VersionDisposition::AlreadyTarget {
        log::debug!("shader already declares #version {target}; skipping rewrite");
        return Ok(stringify(&tokens));
    }

    extensions::prune_promoted_extensions(&mut tokens);
    qualifiers::rewrite_qualifiers(&mut tokens, stage);

    // rename and output-synthesis caches live exactly as long as this
    // call; nothing is shared across invocations
    let mut registry = RenameRegistry::new(&tokens);
    if stage == ShaderStage::Fragment {
        fragment_outputs::synthesize_fragment_outputs(&mut tokens, &mut registry, options)?;
    }
    reserved::rename_reserved_identifiers(&mut tokens, stage, &mut registry, target)?;

    Ok(stringify(&tokens))
}
