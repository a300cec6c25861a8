use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::{alphabet::check_arity, error::SchemaError};

/// Every element kind is a 4-byte scalar.
pub const SCALAR_SIZE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Vector(usize),
    Matrix { rows: usize, cols: usize },
}

impl Shape {
    pub fn tokens(self) -> TokenStream {
        match self {
            Shape::Vector(arity) => {
                let arity = arity as u8;

                quote!(::splinter::Shape::Vector(#arity))
            }
            Shape::Matrix { rows, cols } => {
                let rows = rows as u8;
                let cols = cols as u8;

                quote!(::splinter::Shape::Matrix { rows: #rows, cols: #cols })
            }
        }
    }
}

/// Byte offsets of every component and the total size, packed without
/// padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub shape: Shape,
    pub size: usize,
    pub offsets: Vec<usize>,
}

impl Layout {
    pub fn vector(arity: usize) -> Result<Self, SchemaError> {
        let arity = check_arity(arity)?;

        Ok(Self {
            shape: Shape::Vector(arity),
            size: SCALAR_SIZE * arity,
            offsets: (0..arity).map(|index| SCALAR_SIZE * index).collect(),
        })
    }

    /// Row-major: cell (r, c) lives at `4 * (r * cols + c)`.
    pub fn matrix(rows: usize, cols: usize) -> Result<Self, SchemaError> {
        if check_arity(rows).is_err() || check_arity(cols).is_err() {
            return Err(SchemaError::Shape { rows, cols });
        }

        let offsets = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| SCALAR_SIZE * (row * cols + col)))
            .collect();

        Ok(Self {
            shape: Shape::Matrix { rows, cols },
            size: SCALAR_SIZE * rows * cols,
            offsets,
        })
    }

    pub fn tokens(&self) -> TokenStream {
        let shape = self.shape.tokens();
        let size = self.size;
        let offsets = &self.offsets;

        quote! {
            ::splinter::Layout {
                shape: #shape,
                size: #size,
                align: #SCALAR_SIZE,
                offsets: &[#(#offsets),*],
            }
        }
    }

    /// Compile-time assertions pinning the emitted struct to this layout.
    pub fn assertions(&self, ty: &Ident, fields: &[Ident]) -> TokenStream {
        let size = self.size;

        let offsets = fields.iter().zip(&self.offsets).map(|(field, offset)| {
            quote!(::core::assert!(::core::mem::offset_of!(#ty, #field) == #offset);)
        });

        quote! {
            const _: () = {
                ::core::assert!(::core::mem::size_of::<#ty>() == #size);
                ::core::assert!(::core::mem::align_of::<#ty>() == #SCALAR_SIZE);
                #(#offsets)*
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proc_macro2::Span;

    use super::*;

    #[test]
    fn vector_layout_is_packed() {
        let layout = Layout::vector(3).unwrap();

        assert_eq!(layout.size, 12);
        assert_eq!(layout.offsets, vec![0, 4, 8]);
        assert_eq!(layout.shape, Shape::Vector(3));
    }

    #[test]
    fn matrix_layout_is_row_major() {
        let layout = Layout::matrix(3, 2).unwrap();

        assert_eq!(layout.size, 24);
        assert_eq!(layout.offsets, vec![0, 4, 8, 12, 16, 20]);
        // offset(2, 1) = 4 * (2 * 2 + 1)
        assert_eq!(layout.offsets[2 * 2 + 1], 20);
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        assert_eq!(Layout::vector(5), Err(SchemaError::Arity(5)));
        assert_eq!(
            Layout::matrix(0, 3),
            Err(SchemaError::Shape { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn assertions_cover_every_field() {
        let layout = Layout::vector(2).unwrap();
        let ty = Ident::new("Float2", Span::call_site());
        let fields = [
            Ident::new("x", Span::call_site()),
            Ident::new("y", Span::call_site()),
        ];

        let tokens = layout.assertions(&ty, &fields).to_string();

        assert_eq!(tokens.matches("offset_of").count(), 2);
        assert!(tokens.contains("8usize"));
    }
}
