use pretty_assertions::assert_eq;
use splinter::{registry, Dispatch, Float3, ShaderType};

#[test_log::test]
fn lookup_by_identity() {
    let xy = registry::lookup("Float3.xy").unwrap();

    assert_eq!(xy, Float3::member("xy").unwrap());
    assert_eq!(xy.dispatch, Dispatch::Intrinsic);

    assert!(registry::lookup("Float4x4[usize]").is_some());
    assert!(registry::lookup("UInt2.From<Int2>").is_some());
    assert!(registry::lookup("Float3.xq").is_none());
    assert!(registry::lookup("Float5.x").is_none());
}

#[test_log::test]
fn lowering_by_identity() {
    assert_eq!(
        registry::lower("Float4.-", &["a", "b"]).as_deref(),
        Some("(a - b)")
    );
    assert_eq!(registry::lower("Int2.yx", &["p"]).as_deref(), Some("p.yx"));
    assert_eq!(registry::lower("Float4.new", &[]), None);
}

#[test_log::test]
fn indexes_every_type() {
    let members = registry::members().collect::<Vec<_>>();

    // 12 vector types and 16 matrix types
    for name in ["Float1", "Int4", "UInt3", "Float1x1", "Float4x4", "Float2x3"] {
        assert!(
            members
                .iter()
                .any(|member| member.identity.starts_with(&format!("{}.", name))),
            "{}",
            name
        );
    }

    let swizzles = members
        .iter()
        .filter(|member| member.identity.starts_with("Float4.") && member.is_intrinsic())
        .count();
    assert!(swizzles >= 2 * (4 + 16 + 64 + 256));
}
