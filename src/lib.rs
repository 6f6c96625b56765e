//! Rewrites GLSL ES 1.00 shader source into core-profile dialects.
//!
//! Renderers that target both mobile/ES and desktop core contexts need
//! the same shader source to compile under both dialects. This crate
//! takes source written for `#version 100` and produces an equivalent
//! `#version 330` (or any configured target) program by transforming
//! the raw token stream:
//!
//! - Version directive normalization and mandatory extension injection
//! - Pruning of `#extension` declarations promoted to core features
//! - `attribute`/`varying` remapping to `in`/`out`
//! - Deprecated texture builtin renaming (`texture2D` → `texture`, ...)
//! - Synthesized `out` declarations replacing `gl_FragColor`
//! - Renaming of identifiers that became reserved words in the target
//!
//! No syntax tree is ever built: every transformation is a bounded scan
//! over the token sequence produced by [`glsl_uplift_tokens`], which
//! keeps the engine robust on shaders a full parser would reject.
//!
//! ```
//! let vert = glsl_uplift::vertex(
//!     "#version 100\nattribute vec4 position;\nvoid main() { gl_Position = position; }",
//! )?;
//! assert!(vert.contains("#version 330"));
//! assert!(vert.contains("in vec4 position;"));
//! # Ok::<(), glsl_uplift::TranspileError>(())
//! ```

pub mod error;
mod extensions;
mod fragment_outputs;
mod inject;
mod names;
mod qualifiers;
mod reserved;
mod transpiler;
mod version;

pub use error::TranspileError;
pub use names::{map_name, unmap_name};
pub use transpiler::{
    DEFAULT_TARGET_VERSION, ShaderStage, TranspileOptions, fragment, transpile, vertex,
};

// Re-export the token contract so hosts can inspect sequences without
// depending on the tokens crate directly.
pub use glsl_uplift_tokens::{Token, TokenKind, stringify, tokenize};
