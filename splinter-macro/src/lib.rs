mod alphabet;
mod compose;
mod error;
mod layout;
mod matrix;
mod member;
mod schema;
mod surface;
mod swizzle;
mod vector;

use proc_macro_error::{Diagnostic, Level};

use crate::schema::Families;

fn parse_families(input: proc_macro::TokenStream) -> Families {
    syn::parse::<Families>(input).unwrap_or_else(|err| {
        Diagnostic::spanned(err.span(), Level::Error, err.to_string()).abort()
    })
}

/// Generates `Family1..Family4` for every declared family.
///
/// ```ignore
/// vectors! {
///     Float(f32) { 2 => glam::Vec2, 3 => glam::Vec3, 4 => glam::Vec4 },
///     Int(i32) { 2 => glam::IVec2, 3 => glam::IVec3, 4 => glam::IVec4 },
/// }
/// ```
#[proc_macro_error::proc_macro_error]
#[proc_macro]
pub fn vectors(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let families = parse_families(input);

    vector::gen_vectors(&families).into()
}

/// Generates `Family1x1..Family4x4` for every declared family. The vectors of
/// the same family must be in scope.
#[proc_macro_error::proc_macro_error]
#[proc_macro]
pub fn matrices(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let families = parse_families(input);

    matrix::gen_matrices(&families).into()
}
