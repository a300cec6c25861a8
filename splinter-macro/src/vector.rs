use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::{
    alphabet::{self, MAX_ARITY},
    compose::{self, Composition},
    error::SchemaResult,
    layout::Layout,
    member::{Dispatch, Kind, Member},
    schema::{Families, Family},
    surface::Surface,
    swizzle::{self, Mutability},
};

pub(crate) fn ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}

/// Renders a type the way it appears in member identities, `glam::Vec3`.
pub(crate) fn type_string(tokens: &TokenStream) -> String {
    tokens
        .to_string()
        .replace(' ', "")
        .replace("::core::primitive::", "")
}

pub fn gen_vectors(families: &Families) -> TokenStream {
    let mut names = Vec::new();
    let mut types = Vec::new();

    for family in families.0.iter() {
        for arity in 1..=MAX_ARITY {
            names.push(ident(&family.vector_name(arity)));
            types.push(gen_vector(families, family, arity));
        }
    }

    quote! {
        #(#types)*

        #[doc(hidden)]
        pub const VECTOR_TABLES: &[&[::splinter::Member]] = &[
            #(<#names as ::splinter::ShaderType>::MEMBERS),*
        ];
    }
}

fn gen_vector(families: &Families, family: &Family, arity: usize) -> TokenStream {
    let span = family.name.span();

    let mut surface = Surface::new(&family.vector_name(arity));
    let name = surface.name.clone();
    let scalar = family.scalar.tokens();
    let layout = Layout::vector(arity).or_abort(span);
    let fields = alphabet::fields(arity)
        .or_abort(span)
        .iter()
        .map(|field| ident(field))
        .collect::<Vec<_>>();
    let target = format!("{}{}", family.scalar.target(), arity);

    let derives = if family.scalar.is_integer() {
        quote!(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)
    } else {
        quote!(Clone, Copy, Debug, Default, PartialEq)
    };

    let doc = format!(
        "A {}-component `{}` vector, `{}` in shader code.",
        arity,
        type_string(&scalar),
        target
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

    gen_constructors(&mut surface, family, arity, &fields);
    gen_native_casts(&mut surface, family, arity);
    gen_format(&mut surface, &scalar);
    gen_index(&mut surface, &scalar);
    gen_swizzles(&mut surface, family, arity);
    gen_conversions(&mut surface, families, family, arity);
    surface.operators();

    surface.finish(definition, &scalar, &target, &layout)
}

/// Argument type of one composition part: the scalar or a smaller vector.
fn part_type(family: &Family, part: usize) -> TokenStream {
    if part == 1 {
        family.scalar.tokens()
    } else {
        let ty = ident(&family.vector_name(part));

        quote!(#ty)
    }
}

fn part_type_name(family: &Family, part: usize) -> String {
    if part == 1 {
        type_string(&family.scalar.tokens())
    } else {
        family.vector_name(part)
    }
}

fn gen_constructors(surface: &mut Surface, family: &Family, arity: usize, fields: &[Ident]) {
    let ty = surface.type_name();
    let name = surface.name.clone();
    let scalar = family.scalar.tokens();
    let zero = family.scalar.zero();

    surface.method(
        Member::native(&ty, "ZERO", Kind::Constructor),
        quote!(pub const ZERO: Self = Self::splat(#zero);),
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

    let span = family.name.span();

    for composition in compose::constructors(arity).or_abort(span) {
        gen_composition(surface, family, fields, &composition);
    }

    // a 1-vector's broadcast is its native cast from the scalar
    if arity > 1 {
        let scalar_name = part_type_name(family, 1);

        surface.item(
            Member::native(&ty, &format!("From<{}>", scalar_name), Kind::Constructor),
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
}

fn gen_composition(
    surface: &mut Surface,
    family: &Family,
    fields: &[Ident],
    composition: &Composition,
) {
    let ty = surface.type_name();
    let name = surface.name.clone();
    let constructor = composition.constructor_name();
    let constructor_ident = ident(&constructor);

    let mut params = Vec::new();
    let mut types = Vec::new();
    let mut type_names = Vec::new();
    let mut components = Vec::new();

    for (&part, range) in composition.parts().iter().zip(composition.ranges()) {
        let param = ident(
            &fields[range]
                .iter()
                .map(|field| field.to_string())
                .collect::<String>(),
        );

        if part == 1 {
            components.push(quote!(#param));
        } else {
            for field in &fields[..part] {
                components.push(quote!(#param.#field));
            }
        }

        params.push(param);
        types.push(part_type(family, part));
        type_names.push(part_type_name(family, part));
    }

    let body = if composition.is_scalars() {
        quote!(Self { #(#fields),* })
    } else {
        quote!(Self::new(#(#components),*))
    };

    surface.method(
        Member::native(&ty, &constructor, Kind::Constructor),
        quote! {
            #[inline]
            pub const fn #constructor_ident(#(#params: #types),*) -> Self {
                #body
            }
        },
    );

    if composition.parts().len() > 1 {
        surface.item(
            Member::native(
                &ty,
                &format!("From<({})>", type_names.join(", ")),
                Kind::Constructor,
            ),
            quote! {
                impl ::core::convert::From<(#(#types),*)> for #name {
                    #[inline]
                    fn from((#(#params),*): (#(#types),*)) -> Self {
                        Self::#constructor_ident(#(#params),*)
                    }
                }
            },
        );
    }
}

/// Bit-reinterpreting casts between `name` and `other`, which must have the
/// same size and layout.
pub(crate) fn gen_reinterpret(surface: &mut Surface, other: &TokenStream) {
    let ty = surface.type_name();
    let name = surface.name.clone();
    let other_name = type_string(other);

    surface.companion_item(
        Dispatch::Native,
        quote! {
            const _: () = ::core::assert!(
                ::core::mem::size_of::<#name>() == ::core::mem::size_of::<#other>()
            );
        },
    );

    surface.item(
        Member::native(&ty, &format!("From<{}>", other_name), Kind::Cast),
        quote! {
            impl ::core::convert::From<#other> for #name {
                #[inline]
                fn from(value: #other) -> Self {
                    ::splinter::bytemuck::cast(value)
                }
            }
        },
    );

    surface.item(
        Member::native(&ty, &format!("Into<{}>", other_name), Kind::Cast),
        quote! {
            impl ::core::convert::From<#name> for #other {
                #[inline]
                fn from(value: #name) -> Self {
                    ::splinter::bytemuck::cast(value)
                }
            }
        },
    );
}

fn gen_native_casts(surface: &mut Surface, family: &Family, arity: usize) {
    let scalar = family.scalar.tokens();
    let ty = surface.type_name();

    if arity == 1 {
        gen_reinterpret(surface, &scalar);
    } else if let Some(native) = family.native(arity) {
        gen_reinterpret(surface, &quote!(#native));
    }

    let len = Literal::usize_unsuffixed(arity);

    gen_reinterpret(surface, &quote!([#scalar; #len]));
    gen_views(surface, &ty, &scalar, arity);
}

/// `as_array` and `as_array_mut`, shared with matrices.
pub(crate) fn gen_views(surface: &mut Surface, ty: &str, scalar: &TokenStream, len: usize) {
    let len = Literal::usize_unsuffixed(len);

    surface.method(
        Member::native(ty, "as_array", Kind::View),
        quote! {
            #[inline]
            pub fn as_array(&self) -> &[#scalar; #len] {
                ::splinter::bytemuck::cast_ref(self)
            }
        },
    );

    surface.method(
        Member::native(ty, "as_array_mut", Kind::View),
        quote! {
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [#scalar; #len] {
                ::splinter::bytemuck::cast_mut(self)
            }
        },
    );
}

fn gen_format(surface: &mut Surface, scalar: &TokenStream) {
    let ty = surface.type_name();
    let name = surface.name.clone();

    surface.method(
        Member::native(&ty, "display_in", Kind::Format),
        quote! {
            /// Renders `<c0, c1, ...>` using the group separator of `locale`.
            #[inline]
            pub fn display_in(
                &self,
                locale: ::splinter::Locale,
            ) -> ::splinter::format::Localized<'_, #scalar> {
                ::splinter::format::Localized::new(self.as_array(), locale)
            }
        },
    );

    surface.item(
        Member::native(&ty, "fmt", Kind::Format),
        quote! {
            impl ::core::fmt::Display for #name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(&self.display_in(::splinter::Locale::INVARIANT), f)
                }
            }
        },
    );
}

fn gen_index(surface: &mut Surface, scalar: &TokenStream) {
    let ty = surface.type_name();
    let name = surface.name.clone();

    let member = Member::index(&ty, &["usize"], Kind::Index, String::from("$0[$1]"));
    let trap = member.trap();

    surface.item(
        member,
        quote! {
            impl ::core::ops::Index<usize> for #name {
                type Output = #scalar;

                fn index(&self, _index: usize) -> &#scalar {
                    #trap
                }
            }
        },
    );

    surface.companion_item(
        Dispatch::Intrinsic,
        quote! {
            impl ::core::ops::IndexMut<usize> for #name {
                fn index_mut(&mut self, _index: usize) -> &mut #scalar {
                    #trap
                }
            }
        },
    );
}

fn gen_swizzles(surface: &mut Surface, family: &Family, arity: usize) {
    let ty = surface.type_name();

    for accessor in swizzle::accessors(arity).or_abort(family.name.span()) {
        let member = Member::swizzle(&ty, &accessor);
        let trap = member.trap();
        let getter = ident(&accessor.name);
        let output = part_type(family, accessor.pattern.len());

        surface.method(
            member,
            quote! {
                pub fn #getter(&self) -> #output {
                    #trap
                }
            },
        );

        // repeated components have no single slot to write to
        if accessor.mutability() == Mutability::Mutable {
            let setter = ident(&format!("set_{}", accessor.name));

            surface.companion(
                Dispatch::Intrinsic,
                quote! {
                    pub fn #setter(&mut self, _value: #output) {
                        #trap
                    }
                },
            );
        }
    }
}

/// Casts from every other element kind of the same width; element
/// conversion is left to the shader compiler.
fn gen_conversions(surface: &mut Surface, families: &Families, family: &Family, arity: usize) {
    let ty = surface.type_name();
    let name = surface.name.clone();
    let target = format!("{}{}", family.scalar.target(), arity);

    for other in families.0.iter().filter(|other| other.name != family.name) {
        let from = other.vector_name(arity);
        let member = Member::conversion(&ty, &from, &target);
        let trap = member.trap();
        let from = ident(&from);

        surface.item(
            member,
            quote! {
                impl ::core::convert::From<#from> for #name {
                    fn from(_value: #from) -> Self {
                        #trap
                    }
                }
            },
        );
    }
}
