use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::{
    alphabet::MAX_ARITY,
    error::SchemaResult,
    layout::Layout,
    member::{Dispatch, Kind, Member},
    schema::{Families, Family},
    surface::Surface,
    vector::{gen_reinterpret, gen_views, ident},
};

pub fn gen_matrices(families: &Families) -> TokenStream {
    let mut names = Vec::new();
    let mut types = Vec::new();

    for family in families.0.iter() {
        for rows in 1..=MAX_ARITY {
            for cols in 1..=MAX_ARITY {
                names.push(ident(&family.matrix_name(rows, cols)));
                types.push(gen_matrix(family, rows, cols));
            }
        }
    }

    quote! {
        #(#types)*

        #[doc(hidden)]
        pub const MATRIX_TABLES: &[&[::splinter::Member]] = &[
            #(<#names as ::splinter::ShaderType>::MEMBERS),*
        ];
    }
}

fn gen_matrix(family: &Family, rows: usize, cols: usize) -> TokenStream {
    let span = family.name.span();

    let mut surface = Surface::new(&family.matrix_name(rows, cols));
    let name = surface.name.clone();
    let scalar = family.scalar.tokens();
    let layout = Layout::matrix(rows, cols).or_abort(span);
    let fields = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| ident(&format!("m{}{}", row, col))))
        .collect::<Vec<_>>();
    let target = format!("{}{}x{}", family.scalar.target(), rows, cols);

    let derives = if family.scalar.is_integer() {
        quote!(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)
    } else {
        quote!(Clone, Copy, Debug, Default, PartialEq)
    };

    let doc = format!(
        "A row-major {}x{} matrix, `{}` in shader code.",
        rows, cols, target
    );
    let assertions = layout.assertions(&name, &fields);

    let definition = quote! {
        #[doc = #doc]
        #[repr(C)]
        #[derive(#derives)]
        pub struct #name {
            #(pub #fields: #scalar),*
        }

        #assertions
    };

    gen_constructors(&mut surface, family, rows, cols, &fields);
    gen_native_casts(&mut surface, family, rows, cols);
    gen_rows(&mut surface, family, cols);
    gen_gathers(&mut surface, family);
    surface.operators();

    surface.finish(definition, &scalar, &target, &layout)
}

fn gen_constructors(
    surface: &mut Surface,
    family: &Family,
    rows: usize,
    cols: usize,
    fields: &[proc_macro2::Ident],
) {
    let ty = surface.type_name();
    let name = surface.name.clone();
    let scalar = family.scalar.tokens();
    let zero = family.scalar.zero();
    let row_ty = ident(&family.vector_name(cols));

    surface.method(
        Member::native(&ty, "ZERO", Kind::Constructor),
        quote!(pub const ZERO: Self = Self::splat(#zero);),
    );

    surface.method(
        Member::native(&ty, "new", Kind::Constructor),
        quote! {
            /// Builds the matrix from its cells in row-major order.
            #[allow(clippy::too_many_arguments)]
            #[inline]
            pub const fn new(#(#fields: #scalar),*) -> Self {
                Self { #(#fields),* }
            }
        },
    );

    surface.method(
        Member::native(&ty, "splat", Kind::Constructor),
        quote! {
            #[inline]
            pub const fn splat(value: #scalar) -> Self {
                Self { #(#fields: value),* }
            }
        },
    );

    let row_params = (0..rows)
        .map(|row| ident(&format!("row{}", row)))
        .collect::<Vec<_>>();
    let components = row_params.iter().flat_map(|row| {
        crate::alphabet::fields(cols)
            .or_abort(family.name.span())
            .into_iter()
            .map(move |field| {
                let field = ident(&field);

                quote!(#row.#field)
            })
    });

    surface.method(
        Member::native(&ty, "from_rows", Kind::Constructor),
        quote! {
            #[inline]
            pub const fn from_rows(#(#row_params: #row_ty),*) -> Self {
                Self::new(#(#components),*)
            }
        },
    );

    surface.item(
        Member::native(
            &ty,
            &format!("From<{}>", crate::vector::type_string(&scalar)),
            Kind::Constructor,
        ),
        quote! {
            impl ::core::convert::From<#scalar> for #name {
                #[inline]
                fn from(value: #scalar) -> Self {
                    Self::splat(value)
                }
            }
        },
    );
}

/// A single row or a single column is contiguous, so `Nx1` and `1xN`
/// reinterpret to the `N`-vector. `1x1` is both and casts once.
fn gen_native_casts(surface: &mut Surface, family: &Family, rows: usize, cols: usize) {
    let ty = surface.type_name();
    let scalar = family.scalar.tokens();

    let vector = if rows == 1 {
        Some(family.vector_name(cols))
    } else if cols == 1 {
        Some(family.vector_name(rows))
    } else {
        None
    };

    if let Some(vector) = vector {
        let vector = ident(&vector);

        gen_reinterpret(surface, &quote!(#vector));
    }

    let len = Literal::usize_unsuffixed(rows * cols);

    gen_reinterpret(surface, &quote!([#scalar; #len]));
    gen_views(surface, &ty, &scalar, rows * cols);
}

fn gen_rows(surface: &mut Surface, family: &Family, cols: usize) {
    let ty = surface.type_name();
    let name = surface.name.clone();
    let row_ty = ident(&family.vector_name(cols));

    let member = Member::index(&ty, &["usize"], Kind::Index, String::from("$0[$1]"));
    let trap = member.trap();

    surface.item(
        member,
        quote! {
            impl ::core::ops::Index<usize> for #name {
                type Output = #row_ty;

                fn index(&self, _row: usize) -> &#row_ty {
                    #trap
                }
            }
        },
    );

    // rows never overlap, so every row is writable
    surface.companion_item(
        Dispatch::Intrinsic,
        quote! {
            impl ::core::ops::IndexMut<usize> for #name {
                fn index_mut(&mut self, _row: usize) -> &mut #row_ty {
                    #trap
                }
            }
        },
    );
}

/// Read-only gathers of 2, 3 or 4 arbitrary cells. Selectors are run-time
/// values, so whether they are distinct is unknown here and no writable
/// form is emitted.
fn gen_gathers(surface: &mut Surface, family: &Family) {
    let ty = surface.type_name();

    for cells in 2..=MAX_ARITY {
        let method = ident(&format!("gather{}", cells));
        let output = ident(&family.vector_name(cells));
        let params = (0..cells)
            .map(|cell| ident(&format!("_cell{}", cell)))
            .collect::<Vec<_>>();
        let syntax = (1..=cells).fold(String::from("$0."), |syntax, arg| {
            format!("{}${}", syntax, arg)
        });

        let member = Member::index(&ty, &vec!["Cell"; cells], Kind::Gather(cells), syntax);
        let trap = member.trap();

        surface.method(
            member,
            quote! {
                pub fn #method(&self, #(#params: ::splinter::Cell),*) -> #output {
                    #trap
                }
            },
        );
    }
}
