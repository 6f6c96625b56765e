//! Typed error types for the rewriting engine.
//!
//! Every failure here is a deterministic structural defect in the input
//! shader: re-running the same call with the same source reproduces the
//! identical error, and no partial output is ever returned alongside
//! one. Callers at the crate boundary can match on specific variants
//! instead of parsing message strings.

use thiserror::Error;

/// Top-level error type for a transpile call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranspileError {
    /// The declared `#version` is neither the legacy dialect (`100`),
    /// the ES profile alias (`300 es`), nor the requested target.
    #[error("unsupported #version {version}: only 100, 300 es, and the target version are handled")]
    UnsupportedVersion {
        /// The version value as written in the source, inner whitespace
        /// collapsed.
        version: String,
    },

    /// A vertex shader attribute's name is a reserved word in the
    /// target dialect.
    ///
    /// Attribute names are externally bound by the host application, so
    /// renaming one here would silently break those bindings; the
    /// attribute has to be renamed upstream instead.
    #[error(
        "unable to transpile to GLSL {target}: vertex attribute \"{name}\" uses a reserved {target} keyword"
    )]
    ReservedAttributeCollision {
        /// The offending attribute name.
        name: String,
        /// The target dialect version.
        target: String,
    },

    /// An `#ifdef`/`#ifndef` block has no matching `#endif`.
    #[error("unterminated conditional: #ifdef/#ifndef with no matching #endif")]
    UnterminatedConditional,

    /// A `precision` statement has no terminating semicolon.
    #[error("malformed precision statement: no terminating semicolon")]
    MalformedPrecisionStatement,
}
