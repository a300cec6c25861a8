//! Vector types of every element kind and width.
//!
//! Fields are the positional labels. Swizzles, indexing, arithmetic and
//! cross-kind casts are intrinsic and only exist with the `shader` feature.

splinter_macro::vectors! {
    Float(f32) { 2 => glam::Vec2, 3 => glam::Vec3, 4 => glam::Vec4 },
    Int(i32) { 2 => glam::IVec2, 3 => glam::IVec3, 4 => glam::IVec4 },
    UInt(u32) { 2 => glam::UVec2, 3 => glam::UVec3, 4 => glam::UVec4 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compositions_fill_in_order() {
        let expected = Float4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(Float4::from_1_1_2(1.0, 2.0, Float2::new(3.0, 4.0)), expected);
        assert_eq!(Float4::from_1_2_1(1.0, Float2::new(2.0, 3.0), 4.0), expected);
        assert_eq!(Float4::from_2_1_1(Float2::new(1.0, 2.0), 3.0, 4.0), expected);
        assert_eq!(Float3::from_2_1(Float2::new(1.0, 2.0), 3.0), Float3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn zero_and_splat() {
        assert_eq!(Int3::ZERO, Int3::new(0, 0, 0));
        assert_eq!(UInt2::splat(7), UInt2 { x: 7, y: 7 });
        assert_eq!(Float2::default(), Float2::ZERO);
    }

    #[test]
    fn views_alias_fields() {
        let mut v = Int4::new(1, 2, 3, 4);

        v.as_array_mut()[2] = 30;

        assert_eq!(v.z, 30);
        assert_eq!(v.as_array(), &[1, 2, 30, 4]);
    }
}
