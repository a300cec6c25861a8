//! Intrinsic members executed without the translation pass.

#![cfg(feature = "shader")]

use splinter::*;

#[test]
#[should_panic(expected = "Float3.xy")]
fn swizzle_getter() {
    let _ = Float3::new(1.0, 2.0, 3.0).xy();
}

#[test]
#[should_panic(expected = "Float3.xy")]
fn swizzle_setter_shares_identity() {
    let mut v = Float3::ZERO;

    v.set_xy(Float2::new(1.0, 2.0));
}

#[test]
#[should_panic(expected = "Float3.+")]
fn operator() {
    let _ = Float3::splat(1.0) + Float3::splat(2.0);
}

#[test]
#[should_panic(expected = "Int2.unary-")]
fn negation() {
    let _ = -Int2::new(1, 2);
}

#[test]
#[should_panic(expected = "Float4[usize]")]
fn indexer() {
    let v = Float4::ZERO;
    let _component: f32 = v[2];
}

#[test]
#[should_panic(expected = "Float3x2[Cell, Cell]")]
fn gather() {
    let _ = Float3x2::ZERO.gather2(Cell::new(0, 0), Cell::new(2, 1));
}

#[test]
#[should_panic(expected = "Float2.From<Int2>")]
fn cross_kind_cast() {
    let _ = Float2::from(Int2::new(1, 2));
}

#[test]
fn native_members_still_run() {
    assert_eq!(dispatch::CONTEXT, Context::Shader);
    assert_eq!(Float3::new(1.0, 2.0, 3.0).to_string(), "<1, 2, 3>");
}

#[test]
fn error_is_uniform() {
    let result = std::panic::catch_unwind(|| Float4::ZERO.wzyx());
    let message = result.unwrap_err();
    let message = message.downcast_ref::<String>().unwrap();

    assert_eq!(
        message,
        &IntrinsicError {
            identity: "Float4.wzyx"
        }
        .to_string()
    );
}
