//! End-to-end tests for the dialect 100 -> core profile rewrite.
//!
//! These drive the public API the way a renderer would: raw source in,
//! raw source out, one call per shader stage.

use glsl_uplift::{
    ShaderStage, TranspileError, TranspileOptions, fragment, map_name, transpile, unmap_name,
    vertex,
};

const EXTENSION_LINE: &str = "#extension GL_ARB_separate_shader_objects : enable";

/// The worked vertex example: version rewritten, extensions injected,
/// `attribute` gone.
#[test]
fn test_vertex_example() {
    let out = vertex("#version 100\nattribute vec4 position;\nvoid main(){gl_Position=position;}")
        .expect("vertex transpile should succeed");

    assert!(out.starts_with("#version 330\n"));
    assert!(out.contains(EXTENSION_LINE));
    assert!(out.contains("in vec4 position;"));
    assert!(!out.contains("attribute"));
    assert!(!out.contains("#version 100"));
}

/// The worked fragment example: exactly one synthesized output
/// declaration, and the body references the synthesized name.
#[test]
fn test_fragment_example() {
    let out = fragment("void main(){gl_FragColor=vec4(1.0);}")
        .expect("fragment transpile should succeed");

    assert_eq!(out.matches("out vec4 unique_fragColor;").count(), 1);
    assert!(out.contains("unique_fragColor=vec4(1.0);"));
    assert!(!out.contains("gl_FragColor"));
}

/// N references to the implicit output still produce a single
/// declaration, all rewritten to the same name.
#[test]
fn test_fragment_output_reference_count() {
    let source = "#version 100\nvoid main(){gl_FragColor=vec4(1.0);gl_FragColor.a=0.5;gl_FragColor.r=0.1;gl_FragColor.g=0.2;}";
    let out = fragment(source).expect("fragment transpile should succeed");

    assert_eq!(out.matches("out vec4 unique_fragColor;").count(), 1);
    assert_eq!(out.matches("unique_fragColor").count(), 5);
}

/// Transpiling output a second time only re-runs the version check and
/// finds the mandatory extensions already in place, so twice equals
/// once.
#[test]
fn test_transpile_is_idempotent() {
    let once = fragment("#version 100\nvarying vec2 uv;\nvoid main(){gl_FragColor=vec4(uv,0.,1.);}")
        .expect("first transpile should succeed");
    let twice = fragment(&once).expect("second transpile should succeed");
    assert_eq!(twice, once);
}

/// A shader already at the target version is returned unchanged except
/// for mandatory extension injection.
#[test]
fn test_already_target_version_is_left_alone() {
    let source = "#version 330\nin vec2 uv;\nout vec4 color;\nvoid main(){color=vec4(uv,0.,1.);}";
    let out = fragment(source).expect("transpile should succeed");

    assert!(out.contains(EXTENSION_LINE));
    assert!(out.contains("in vec2 uv;\nout vec4 color;"));
    // none of the rewriting passes ran
    assert!(out.contains("color=vec4(uv,0.,1.)"));
}

/// The ES profile alias is rewritten in place and otherwise treated as
/// already at target.
#[test]
fn test_es_profile_alias() {
    let source = "#version 300 es\nin vec2 uv;\nvoid main(){}";
    let out = fragment(source).expect("transpile should succeed");

    assert!(out.starts_with("#version 330\n"));
    assert!(!out.contains("300 es"));
}

#[test]
fn test_unsupported_version_fails() {
    let err = fragment("#version 120\nvoid main(){}").expect_err("120 must be rejected");
    assert_eq!(
        err,
        TranspileError::UnsupportedVersion {
            version: "120".to_string()
        }
    );
}

/// A version directive hidden in a conditional block does not count;
/// the real directive is inserted at the very start of the file.
#[test]
fn test_version_inside_conditional_block() {
    let out = fragment("#ifdef FOO\n#version 100\n#endif\nvoid main(){gl_FragColor=vec4(1.);}")
        .expect("transpile should succeed");

    assert!(out.starts_with("#version 330\n"));
    assert!(out.contains("#ifdef FOO\n#version 100\n#endif"));
    // the synthesized output lands after the conditional block, not
    // inside it
    let endif = out.find("#endif").expect("endif survives");
    let decl = out.find("out vec4 unique_fragColor;").expect("declaration exists");
    assert!(decl > endif);
}

#[test]
fn test_promoted_extensions_are_pruned() {
    let source = "#version 100\n#extension GL_OES_standard_derivatives : enable\nvoid main(){gl_FragColor=vec4(fwidth(0.5));}";
    let out = fragment(source).expect("transpile should succeed");

    assert!(!out.contains("GL_OES_standard_derivatives"));
    // the mandatory core extension is injected regardless
    assert!(out.contains(EXTENSION_LINE));
}

#[test]
fn test_varying_direction() {
    let vert = vertex("#version 100\nvarying vec2 uv;\nvoid main(){}")
        .expect("vertex transpile should succeed");
    assert!(vert.contains("out vec2 uv;"));

    let frag = fragment("#version 100\nvarying vec2 uv;\nvoid main(){}")
        .expect("fragment transpile should succeed");
    assert!(frag.contains("in vec2 uv;"));
}

#[test]
fn test_texture_builtins_renamed() {
    let source = "#version 100\nuniform sampler2D map;\nvarying vec2 uv;\nvoid main(){gl_FragColor=texture2D(map,uv)+texture2DLod(map,uv,0.0);}";
    let out = fragment(source).expect("transpile should succeed");

    assert!(out.contains("texture(map,uv)"));
    assert!(out.contains("textureLod(map,uv,0.0)"));
    assert!(!out.contains("texture2D"));
}

/// Reserved-word identifiers are renamed consistently, and the reserved
/// spelling never survives as a standalone identifier.
#[test]
fn test_reserved_identifier_renamed_everywhere() {
    let source = "#version 100\nuniform float texture;\nvoid main(){gl_FragColor=vec4(texture,texture,texture,1.0);}";
    let out = fragment(source).expect("transpile should succeed");

    assert_eq!(out.matches("unique_texture").count(), 4);
    assert!(!out.contains(" texture;"));
    assert!(!out.contains("(texture,"));
}

/// A vertex attribute named by a reserved word cannot be fixed here:
/// the call fails and produces no output.
#[test]
fn test_reserved_attribute_collision_fails() {
    let err = vertex("#version 100\nattribute vec2 texture;\nvoid main(){}")
        .expect_err("attribute collision must fail");

    assert_eq!(
        err,
        TranspileError::ReservedAttributeCollision {
            name: "texture".to_string(),
            target: "330".to_string(),
        }
    );
}

#[test]
fn test_unterminated_conditional_fails() {
    let err = fragment("#ifdef FOO\nvoid main(){}").expect_err("must fail");
    assert_eq!(err, TranspileError::UnterminatedConditional);
}

#[test]
fn test_malformed_precision_fails() {
    // the missing statement terminator only bites once a declaration
    // has to be injected past the precision statement
    let err = fragment("#version 100\nprecision mediump float\nvoid main(){gl_FragColor=vec4(1.)}")
        .expect_err("must fail");
    assert_eq!(err, TranspileError::MalformedPrecisionStatement);
}

#[test]
fn test_custom_target_version() {
    let options = TranspileOptions {
        target_version: "150".to_string(),
        ..TranspileOptions::default()
    };
    let out = transpile(
        "#version 100\nattribute vec4 position;\nvoid main(){gl_Position=position;}",
        ShaderStage::Vertex,
        &options,
    )
    .expect("transpile should succeed");

    assert!(out.starts_with("#version 150\n"));
    assert!(out.contains("in vec4 position;"));
}

#[test]
fn test_custom_target_reported_in_collision_error() {
    let options = TranspileOptions {
        target_version: "150".to_string(),
        ..TranspileOptions::default()
    };
    let err = transpile(
        "#version 100\nattribute vec2 smooth;\nvoid main(){}",
        ShaderStage::Vertex,
        &options,
    )
    .expect_err("collision must fail");

    assert_eq!(
        err,
        TranspileError::ReservedAttributeCollision {
            name: "smooth".to_string(),
            target: "150".to_string(),
        }
    );
}

#[test]
fn test_frag_depth_flag() {
    let options = TranspileOptions {
        synthesize_frag_depth: true,
        ..TranspileOptions::default()
    };
    let out = transpile(
        "#version 100\nvoid main(){gl_FragDepthEXT=0.5;}",
        ShaderStage::Fragment,
        &options,
    )
    .expect("transpile should succeed");

    assert_eq!(out.matches("out float unique_fragDepth;").count(), 1);
    assert!(out.contains("unique_fragDepth=0.5;"));
    assert!(!out.contains("gl_FragDepthEXT"));
}

#[test]
fn test_map_unmap_roundtrip() {
    for name in ["texture", "round", "fragColor", "position", "uv"] {
        assert_eq!(unmap_name(&map_name(name)), name);
    }
}

/// Shader with no version directive at all: the directive is inserted
/// at the start and the rest is rewritten as legacy source.
#[test]
fn test_missing_version_directive() {
    let out = fragment("precision mediump float;\nvoid main(){gl_FragColor=vec4(1.0);}")
        .expect("transpile should succeed");

    assert!(out.starts_with("#version 330\n"));
    assert!(out.contains("precision mediump float;"));
    assert!(out.contains("out vec4 unique_fragColor;"));
}

/// Comments and macro aliases survive the rewrite.
#[test]
fn test_defines_and_comments() {
    let source = "#version 100\n// sample helper\n#define SAMPLE(s,uv) texture2D(s,uv)\nuniform sampler2D map;\nvarying vec2 uv;\nvoid main(){gl_FragColor=SAMPLE(map,uv);}";
    let out = fragment(source).expect("transpile should succeed");

    assert!(out.contains("// sample helper"));
    assert!(out.contains("#define SAMPLE(s,uv) texture(s,uv)"));
}
