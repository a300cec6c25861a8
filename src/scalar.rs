use std::fmt::Display;

use bytemuck::Pod;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Float,
    Int,
    UInt,
}

impl ScalarKind {
    /// Scalar name in shader code.
    pub const fn target(self) -> &'static str {
        match self {
            ScalarKind::Float => "float",
            ScalarKind::Int => "int",
            ScalarKind::UInt => "uint",
        }
    }
}

/// A 4-byte element type of the generated vectors and matrices.
pub trait Scalar: Pod + Display + PartialEq {
    const KIND: ScalarKind;
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Float;
}

impl Scalar for i32 {
    const KIND: ScalarKind = ScalarKind::Int;
}

impl Scalar for u32 {
    const KIND: ScalarKind = ScalarKind::UInt;
}
