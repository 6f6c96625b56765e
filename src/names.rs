//! Identifier mapping and per-call rename bookkeeping.
//!
//! Two public helpers let host applications recognize identifiers this
//! crate synthesized and map shader-reflection data back to the names
//! the shader author wrote:
//!
//! - [`map_name`]: the deterministic marker-prefix mapping applied to
//!   reserved identifiers and synthesized output names
//! - [`unmap_name`]: its inverse
//!
//! The [`RenameRegistry`] adds the collision guarantees on top: within
//! one transpile call the same original always maps to the same renamed
//! form, and a renamed form never collides with any identifier already
//! present in the token sequence (a numeric suffix is appended until
//! the candidate is free, which also covers user code that happens to
//! use the marker prefix itself).

use crate::reserved;
use glsl_uplift_tokens::Token;
use std::collections::{HashMap, HashSet};

/// Marker prefixed onto renamed and synthesized identifiers.
const NAME_MARKER: &str = "unique_";

/// Base names of synthesized fragment outputs; these get the marker
/// even though they are not reserved words.
const SYNTHESIZED_BASES: &[&str] = &["fragColor", "fragDepth"];

/// Derive the collision-avoiding spelling for `name`.
///
/// Reserved identifiers and synthesized-output base names get the fixed
/// marker prefix; anything else is returned unchanged.
pub fn map_name(name: &str) -> String {
    if reserved::is_reserved(name) || SYNTHESIZED_BASES.contains(&name) {
        format!("{NAME_MARKER}{name}")
    } else {
        name.to_string()
    }
}

/// Strip the marker applied by [`map_name`], if present.
pub fn unmap_name(name: &str) -> &str {
    name.strip_prefix(NAME_MARKER).unwrap_or(name)
}

/// Per-call rename state.
///
/// Created fresh inside every transpile call and dropped on return;
/// nothing here outlives the call (shared scratch state across calls
/// would make concurrent transpiles corrupt each other's names).
pub(crate) struct RenameRegistry {
    /// Every word-shaped token text in the sequence, the reserved set,
    /// and every name handed out so far.
    taken: HashSet<String>,
    /// Original identifier -> renamed form, stable within the call.
    renames: HashMap<String, String>,
}

impl RenameRegistry {
    /// Harvest the name universe from the token sequence.
    pub(crate) fn new(tokens: &[Token]) -> Self {
        let mut taken: HashSet<String> =
            reserved::RESERVED_WORDS.iter().map(|w| w.to_string()).collect();
        for token in tokens {
            if token.is_word() {
                taken.insert(token.text.clone());
            }
        }
        Self {
            taken,
            renames: HashMap::new(),
        }
    }

    /// Stable rename for a reserved identifier: repeated calls with the
    /// same original return the same result.
    pub(crate) fn rename(&mut self, original: &str) -> String {
        if let Some(renamed) = self.renames.get(original) {
            return renamed.clone();
        }
        let renamed = self.fresh(original);
        self.renames.insert(original.to_string(), renamed.clone());
        renamed
    }

    /// Allocate a name guaranteed absent from the token sequence, the
    /// reserved set, and everything allocated before it.
    pub(crate) fn fresh(&mut self, base: &str) -> String {
        let mapped = map_name(base);
        let mut candidate = mapped.clone();
        let mut counter = 1u32;
        while self.taken.contains(&candidate) {
            counter += 1;
            candidate = format!("{mapped}_{counter}");
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
