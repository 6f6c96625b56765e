//! GLSL ES 1.00 vocabulary tables.
//!
//! Word classification happens against the *source* dialect: a word is a
//! keyword or builtin if ES 1.00 says so, and an identifier otherwise.
//! Words that only become reserved in later dialects (e.g. `texture`,
//! `layout`) are plain identifiers here; deciding what to do about them
//! is the rewriting engine's job, not the lexer's.

use std::collections::HashSet;
use std::sync::OnceLock;

/// GLSL ES 1.00 keywords, including the spec's reserved-future words
/// (`switch`, `enum`, ...) which may not be used as identifiers either.
pub const KEYWORDS: &[&str] = &[
    // storage / precision / parameter qualifiers
    "attribute",
    "const",
    "uniform",
    "varying",
    "invariant",
    "precision",
    "highp",
    "mediump",
    "lowp",
    "in",
    "out",
    "inout",
    // control flow
    "break",
    "continue",
    "do",
    "for",
    "while",
    "if",
    "else",
    "discard",
    "return",
    // types
    "void",
    "bool",
    "int",
    "float",
    "vec2",
    "vec3",
    "vec4",
    "bvec2",
    "bvec3",
    "bvec4",
    "ivec2",
    "ivec3",
    "ivec4",
    "mat2",
    "mat3",
    "mat4",
    "sampler2D",
    "samplerCube",
    "struct",
    // literals
    "true",
    "false",
    // reserved for future use by the ES 1.00 spec
    "asm",
    "class",
    "union",
    "enum",
    "typedef",
    "template",
    "this",
    "packed",
    "goto",
    "switch",
    "default",
    "inline",
    "noinline",
    "volatile",
    "public",
    "static",
    "extern",
    "external",
    "interface",
    "flat",
    "long",
    "short",
    "double",
    "half",
    "fixed",
    "unsigned",
    "superp",
    "input",
    "output",
    "hvec2",
    "hvec3",
    "hvec4",
    "dvec2",
    "dvec3",
    "dvec4",
    "fvec2",
    "fvec3",
    "fvec4",
    "sampler1D",
    "sampler3D",
    "sampler1DShadow",
    "sampler2DShadow",
    "sampler2DRect",
    "sampler3DRect",
    "sampler2DRectShadow",
    "sizeof",
    "cast",
    "namespace",
    "using",
];

/// GLSL ES 1.00 predefined identifiers: `gl_*` variables and constants
/// plus the builtin function set, including the vendor-extension texture
/// lookup variants the rewriting engine cares about.
pub const BUILTINS: &[&str] = &[
    // vertex stage outputs
    "gl_Position",
    "gl_PointSize",
    // fragment stage inputs/outputs
    "gl_FragCoord",
    "gl_FrontFacing",
    "gl_PointCoord",
    "gl_FragColor",
    "gl_FragData",
    "gl_FragDepth",
    "gl_FragDepthEXT",
    // builtin uniform state and constants
    "gl_DepthRange",
    "gl_DepthRangeParameters",
    "gl_MaxVertexAttribs",
    "gl_MaxVertexUniformVectors",
    "gl_MaxVaryingVectors",
    "gl_MaxVertexTextureImageUnits",
    "gl_MaxCombinedTextureImageUnits",
    "gl_MaxTextureImageUnits",
    "gl_MaxFragmentUniformVectors",
    "gl_MaxDrawBuffers",
    // angle and trigonometry
    "radians",
    "degrees",
    "sin",
    "cos",
    "tan",
    "asin",
    "acos",
    "atan",
    // exponential
    "pow",
    "exp",
    "log",
    "exp2",
    "log2",
    "sqrt",
    "inversesqrt",
    // common
    "abs",
    "sign",
    "floor",
    "ceil",
    "fract",
    "mod",
    "min",
    "max",
    "clamp",
    "mix",
    "step",
    "smoothstep",
    // geometric
    "length",
    "distance",
    "dot",
    "cross",
    "normalize",
    "faceforward",
    "reflect",
    "refract",
    // matrix and vector relational
    "matrixCompMult",
    "lessThan",
    "lessThanEqual",
    "greaterThan",
    "greaterThanEqual",
    "equal",
    "notEqual",
    "any",
    "all",
    "not",
    // texture lookup, base and Lod forms
    "texture2D",
    "texture2DProj",
    "texture2DLod",
    "texture2DProjLod",
    "textureCube",
    "textureCubeLod",
    // vendor extension texture lookups
    "texture2DLodEXT",
    "texture2DProjLodEXT",
    "textureCubeLodEXT",
    "texture2DGradEXT",
    "texture2DProjGradEXT",
    "textureCubeGradEXT",
    // derivatives (GL_OES_standard_derivatives)
    "dFdx",
    "dFdy",
    "fwidth",
];

static KEYWORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static BUILTIN_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// True when `word` is a GLSL ES 1.00 keyword or reserved-future word.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET
        .get_or_init(|| KEYWORDS.iter().copied().collect())
        .contains(word)
}

/// True when `word` is a GLSL ES 1.00 predefined identifier.
pub fn is_builtin(word: &str) -> bool {
    BUILTIN_SET
        .get_or_init(|| BUILTINS.iter().copied().collect())
        .contains(word)
}
