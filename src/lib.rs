#![deny(unsafe_op_in_unsafe_fn)]

extern crate self as splinter;

pub mod dispatch;
pub mod format;
mod layout;
mod matrix;
pub mod registry;
mod scalar;
mod vector;

pub use dispatch::{Context, Dispatch, IntrinsicError, LabelSet, Member, MemberKind, Mutability, Swizzle};
pub use format::Locale;
pub use layout::*;
pub use matrix::*;
pub use scalar::*;
pub use vector::*;

pub use bytemuck;
pub use glam;

/// A vector or matrix whose memory layout matches its shader counterpart.
///
/// # Safety
/// The type must be laid out exactly as [`ShaderType::LAYOUT`] describes.
/// Implemented by the generated types only.
pub unsafe trait ShaderType: bytemuck::Pod {
    type Scalar: Scalar;

    /// Name of the type, the prefix of every member identity.
    const NAME: &'static str;
    /// Name of the type in shader code.
    const TARGET: &'static str;
    const LAYOUT: Layout;
    const MEMBERS: &'static [Member];

    /// Looks up a member of this type by name, `xy` or `+`.
    fn member(name: &str) -> Option<&'static Member> {
        Self::MEMBERS.iter().find(|member| member.name() == name)
    }
}
