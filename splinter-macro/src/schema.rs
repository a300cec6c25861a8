//! The declarative input of the `vectors!` and `matrices!` macros.
//!
//! ```text
//! vectors! {
//!     Float(f32) { 2 => glam::Vec2, 3 => glam::Vec3, 4 => glam::Vec4 },
//!     Int(i32),
//! }
//! ```

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    braced, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, LitInt, Token, Type,
};

use crate::{alphabet::MAX_ARITY, error::SchemaError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    Float,
    Int,
    UInt,
}

impl ScalarKind {
    pub fn from_name(name: &str) -> Result<Self, SchemaError> {
        match name {
            "f32" => Ok(ScalarKind::Float),
            "i32" => Ok(ScalarKind::Int),
            "u32" => Ok(ScalarKind::UInt),
            other => Err(SchemaError::Scalar(String::from(other))),
        }
    }

    pub fn tokens(self) -> TokenStream {
        match self {
            ScalarKind::Float => quote!(::core::primitive::f32),
            ScalarKind::Int => quote!(::core::primitive::i32),
            ScalarKind::UInt => quote!(::core::primitive::u32),
        }
    }

    pub fn zero(self) -> TokenStream {
        match self {
            ScalarKind::Float => quote!(0.0),
            ScalarKind::Int | ScalarKind::UInt => quote!(0),
        }
    }

    /// Target-language scalar name, the prefix of every vector and matrix
    /// type name.
    pub fn target(self) -> &'static str {
        match self {
            ScalarKind::Float => "float",
            ScalarKind::Int => "int",
            ScalarKind::UInt => "uint",
        }
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        !matches!(self, ScalarKind::Float)
    }
}

/// A host-native vector type that shares the layout of a generated vector.
pub struct Native {
    pub width: usize,
    pub ty: Type,
}

/// One element kind and the host-native vectors it reinterprets to.
pub struct Family {
    pub name: Ident,
    pub scalar: ScalarKind,
    pub natives: Vec<Native>,
}

impl Family {
    pub fn vector_name(&self, arity: usize) -> String {
        format!("{}{}", self.name, arity)
    }

    pub fn matrix_name(&self, rows: usize, cols: usize) -> String {
        format!("{}{}x{}", self.name, rows, cols)
    }

    pub fn native(&self, width: usize) -> Option<&Type> {
        self.natives
            .iter()
            .find(|native| native.width == width)
            .map(|native| &native.ty)
    }
}

fn error(span: Span, error: SchemaError) -> syn::Error {
    syn::Error::new(span, error)
}

impl Parse for Native {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let width: LitInt = input.parse()?;
        input.parse::<Token![=>]>()?;
        let ty: Type = input.parse()?;

        let value = width.base10_parse::<usize>()?;

        // width 1 is always the bare scalar
        if !(2..=MAX_ARITY).contains(&value) {
            return Err(error(width.span(), SchemaError::NativeWidth(value)));
        }

        Ok(Self { width: value, ty })
    }
}

impl Parse for Family {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;

        let content;
        parenthesized!(content in input);
        let scalar: Ident = content.parse()?;
        let scalar = ScalarKind::from_name(&scalar.to_string())
            .map_err(|err| error(scalar.span(), err))?;

        let mut natives = Vec::new();

        if input.peek(syn::token::Brace) {
            let content;
            braced!(content in input);

            let entries = Punctuated::<Native, Token![,]>::parse_terminated(&content)?;
            let mut widths = HashSet::new();

            for native in entries {
                if !widths.insert(native.width) {
                    return Err(error(
                        name.span(),
                        SchemaError::DuplicateNative(native.width),
                    ));
                }

                natives.push(native);
            }
        }

        Ok(Self {
            name,
            scalar,
            natives,
        })
    }
}

pub struct Families(pub Vec<Family>);

impl Parse for Families {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let families = Punctuated::<Family, Token![,]>::parse_terminated(input)?;
        let mut names = HashSet::new();

        for family in families.iter() {
            if !names.insert(family.name.to_string()) {
                return Err(error(
                    family.name.span(),
                    SchemaError::DuplicateFamily(family.name.to_string()),
                ));
            }
        }

        Ok(Self(families.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_families_and_natives() {
        let families: Families = syn::parse_str(
            "Float(f32) { 2 => glam::Vec2, 3 => glam::Vec3 }, Int(i32), UInt(u32)",
        )
        .unwrap();

        assert_eq!(families.0.len(), 3);

        let float = &families.0[0];
        assert_eq!(float.name, "Float");
        assert_eq!(float.scalar, ScalarKind::Float);
        assert_eq!(float.vector_name(3), "Float3");
        assert_eq!(float.matrix_name(3, 2), "Float3x2");
        assert!(float.native(2).is_some());
        assert!(float.native(4).is_none());

        assert_eq!(families.0[2].scalar.target(), "uint");
    }

    #[test]
    fn rejects_wide_scalars() {
        let err = syn::parse_str::<Families>("Double(f64)").err().unwrap();

        assert!(err.to_string().contains("`f64`"));
    }

    #[test]
    fn rejects_invalid_native_widths() {
        let err = syn::parse_str::<Families>("Float(f32) { 5 => Foo }")
            .err()
            .unwrap();
        assert_eq!(err.to_string(), SchemaError::NativeWidth(5).to_string());

        let err = syn::parse_str::<Families>("Float(f32) { 1 => f32 }")
            .err()
            .unwrap();
        assert_eq!(err.to_string(), SchemaError::NativeWidth(1).to_string());
    }

    #[test]
    fn rejects_duplicates() {
        let err = syn::parse_str::<Families>("Float(f32) { 2 => A, 2 => B }")
            .err()
            .unwrap();
        assert_eq!(err.to_string(), SchemaError::DuplicateNative(2).to_string());

        let err = syn::parse_str::<Families>("Float(f32), Float(f32)")
            .err()
            .unwrap();
        assert!(err.to_string().contains("more than once"));
    }
}
