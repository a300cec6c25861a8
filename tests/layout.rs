use std::mem::{align_of, offset_of, size_of};

use pretty_assertions::assert_eq;
use splinter::*;

#[test]
fn vectors_are_packed() {
    let layout = Float3::LAYOUT;

    assert_eq!(layout.shape, Shape::Vector(3));
    assert_eq!(layout.size, 12);
    assert_eq!(layout.offsets, &[0, 4, 8]);
    assert_eq!(size_of::<Float3>(), 12);
    assert_eq!(offset_of!(Float3, z), 8);

    assert_eq!(Int4::LAYOUT.size, 16);
    assert_eq!(UInt1::LAYOUT.offsets, &[0]);
}

#[test]
fn every_vector_width() {
    fn check<T: ShaderType>(arity: usize) {
        assert_eq!(size_of::<T>(), 4 * arity, "{}", T::NAME);
        assert_eq!(align_of::<T>(), 4, "{}", T::NAME);
        assert_eq!(T::LAYOUT.size, 4 * arity);
        assert_eq!(T::LAYOUT.shape.components(), arity);

        for index in 0..arity {
            assert_eq!(T::LAYOUT.offset(index), Some(4 * index));
        }

        assert_eq!(T::LAYOUT.offset(arity), None);
    }

    check::<Float1>(1);
    check::<Float2>(2);
    check::<Float3>(3);
    check::<Float4>(4);
    check::<Int2>(2);
    check::<UInt3>(3);
}

#[test]
fn matrices_are_row_major() {
    let layout = Float3x2::LAYOUT;

    assert_eq!(layout.shape, Shape::Matrix { rows: 3, cols: 2 });
    assert_eq!(layout.size, 24);
    assert_eq!(size_of::<Float3x2>(), 24);

    for row in 0..3 {
        for col in 0..2 {
            assert_eq!(layout.cell_offset(row, col), Some(4 * (2 * row + col)));
        }
    }

    assert_eq!(layout.cell_offset(2, 1), Some(20));
    assert_eq!(offset_of!(Float3x2, m21), 20);
    assert_eq!(layout.cell_offset(3, 0), None);
    assert_eq!(layout.cell_offset(0, 2), None);
    assert_eq!(Float3::LAYOUT.cell_offset(0, 0), None);
}

#[test]
fn every_matrix_shape() {
    fn check<T: ShaderType>(rows: usize, cols: usize) {
        assert_eq!(size_of::<T>(), 4 * rows * cols, "{}", T::NAME);
        assert_eq!(T::LAYOUT.size, 4 * rows * cols);
        assert_eq!(T::TARGET, format!("float{}x{}", rows, cols));
    }

    check::<Float1x1>(1, 1);
    check::<Float1x4>(1, 4);
    check::<Float2x3>(2, 3);
    check::<Float4x1>(4, 1);
    check::<Float4x4>(4, 4);
    assert_eq!(offset_of!(Float4x4, m33), 60);
}

#[test]
fn layout_survives_buffer_upload() {
    let m = Float2x2::new(1.0, 2.0, 3.0, 4.0);
    let bytes = bytemuck::bytes_of(&m);

    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[8..12], &3.0f32.to_ne_bytes());
}
