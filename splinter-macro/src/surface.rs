use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::{
    layout::Layout,
    member::{Dispatch, Member, Operator},
};

/// Collects the emitted members of one type together with its member table.
///
/// Intrinsic items are gated behind the `shader` feature, so on a host build
/// reaching one is a compile error rather than a run-time failure.
pub struct Surface {
    pub name: Ident,
    methods: Vec<TokenStream>,
    items: Vec<TokenStream>,
    members: Vec<Member>,
}

fn gate(dispatch: Dispatch, tokens: TokenStream) -> TokenStream {
    match dispatch {
        Dispatch::Native => tokens,
        Dispatch::Intrinsic => quote! {
            #[cfg(feature = "shader")]
            #tokens
        },
    }
}

impl Surface {
    pub fn new(name: &str) -> Self {
        Self {
            name: Ident::new(name, Span::call_site()),
            methods: Vec::new(),
            items: Vec::new(),
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn type_name(&self) -> String {
        self.name.to_string()
    }

    /// Adds an inherent method.
    pub fn method(&mut self, member: Member, tokens: TokenStream) {
        self.methods.push(gate(member.dispatch, tokens));
        self.members.push(member);
    }

    /// Adds an inherent method that shares its table entry with another one,
    /// such as the setter of a writable swizzle.
    pub fn companion(&mut self, dispatch: Dispatch, tokens: TokenStream) {
        self.methods.push(gate(dispatch, tokens));
    }

    /// Adds a free-standing item, usually a trait implementation. `tokens`
    /// must be a single item.
    pub fn item(&mut self, member: Member, tokens: TokenStream) {
        self.items.push(gate(member.dispatch, tokens));
        self.members.push(member);
    }

    /// Adds a free-standing item without a table entry of its own. `tokens`
    /// must be a single item, since gating only covers the first one.
    pub fn companion_item(&mut self, dispatch: Dispatch, tokens: TokenStream) {
        self.items.push(gate(dispatch, tokens));
    }

    #[cfg(test)]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Elementwise `Neg`, `Add`, `Sub`, `Mul` and `Div`, all intrinsic.
    pub fn operators(&mut self) {
        let name = self.name.clone();
        let ty = self.type_name();

        let neg = Member::operator(&ty, Operator::Neg);
        let trap = neg.trap();

        self.item(
            neg,
            quote! {
                impl ::core::ops::Neg for #name {
                    type Output = #name;

                    fn neg(self) -> #name {
                        #trap
                    }
                }
            },
        );

        for op in Operator::BINARY {
            let member = Member::operator(&ty, op);
            let trap = member.trap();
            let (op_trait, op_method) = op.trait_method();
            let op_trait = Ident::new(op_trait, Span::call_site());
            let op_method = Ident::new(op_method, Span::call_site());

            self.item(
                member,
                quote! {
                    impl ::core::ops::#op_trait for #name {
                        type Output = #name;

                        fn #op_method(self, _rhs: #name) -> #name {
                            #trap
                        }
                    }
                },
            );
        }
    }

    /// Assembles the type: its struct definition, inherent methods, items and
    /// the `ShaderType` implementation carrying the member table.
    pub fn finish(
        self,
        definition: TokenStream,
        scalar: &TokenStream,
        target: &str,
        layout: &Layout,
    ) -> TokenStream {
        let Surface {
            name,
            methods,
            items,
            members,
        } = self;

        let type_name = name.to_string();
        let layout = layout.tokens();

        quote! {
            #definition

            unsafe impl ::splinter::bytemuck::Zeroable for #name {}

            unsafe impl ::splinter::bytemuck::Pod for #name {}

            impl #name {
                #(#methods)*
            }

            #(#items)*

            unsafe impl ::splinter::ShaderType for #name {
                type Scalar = #scalar;

                const NAME: &'static ::core::primitive::str = #type_name;
                const TARGET: &'static ::core::primitive::str = #target;
                const LAYOUT: ::splinter::Layout = #layout;
                const MEMBERS: &'static [::splinter::Member] = &[#(#members),*];
            }
        }
    }
}
