//! Generator half of the dual-context dispatch contract.
//!
//! Every member the emitter produces is described by a [`Member`], which
//! decides whether the member is compiled on the host and what the
//! translation pass must lower it to.

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    alphabet::LabelSet,
    swizzle::{Accessor, Mutability},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Host-executable: construction or bit reinterpretation between
    /// equal-size, equal-layout representations.
    Native,
    /// Only meaningful after the external translation pass rewrote the call
    /// site.
    Intrinsic,
}

impl Dispatch {
    pub fn tokens(self) -> TokenStream {
        match self {
            Dispatch::Native => quote!(::splinter::Dispatch::Native),
            Dispatch::Intrinsic => quote!(::splinter::Dispatch::Intrinsic),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Constructor,
    Cast,
    View,
    Format,
    Index,
    Gather(usize),
    Swizzle {
        pattern: Vec<u8>,
        labels: LabelSet,
        mutability: Mutability,
    },
    Operator,
}

impl Kind {
    fn tokens(&self) -> TokenStream {
        match self {
            Kind::Constructor => quote!(::splinter::MemberKind::Constructor),
            Kind::Cast => quote!(::splinter::MemberKind::Cast),
            Kind::View => quote!(::splinter::MemberKind::View),
            Kind::Format => quote!(::splinter::MemberKind::Format),
            Kind::Index => quote!(::splinter::MemberKind::Index),
            Kind::Gather(cells) => {
                let cells = *cells as u8;

                quote!(::splinter::MemberKind::Gather { cells: #cells })
            }
            Kind::Swizzle {
                pattern,
                labels,
                mutability,
            } => {
                let labels = labels.tokens();
                let mutability = mutability.tokens();

                quote! {
                    ::splinter::MemberKind::Swizzle(::splinter::Swizzle {
                        pattern: &[#(#pattern),*],
                        labels: #labels,
                        mutability: #mutability,
                    })
                }
            }
            Kind::Operator => quote!(::splinter::MemberKind::Operator),
        }
    }
}

/// A single emitted member and its entry in the type's member table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub identity: String,
    pub dispatch: Dispatch,
    pub kind: Kind,
    /// Target-language template, `$0` being the receiver.
    pub syntax: Option<String>,
}

impl Member {
    pub fn native(ty: &str, name: &str, kind: Kind) -> Self {
        Self {
            identity: format!("{}.{}", ty, name),
            dispatch: Dispatch::Native,
            kind,
            syntax: None,
        }
    }

    pub fn intrinsic(identity: String, kind: Kind, syntax: String) -> Self {
        Self {
            identity,
            dispatch: Dispatch::Intrinsic,
            kind,
            syntax: Some(syntax),
        }
    }

    pub fn swizzle(ty: &str, accessor: &Accessor) -> Self {
        Self::intrinsic(
            format!("{}.{}", ty, accessor.name),
            Kind::Swizzle {
                pattern: accessor.pattern.indices().to_vec(),
                labels: accessor.labels,
                mutability: accessor.mutability(),
            },
            format!("$0.{}", accessor.name),
        )
    }

    /// Indexers are identified by their parameter kinds, `Float3[usize]`.
    pub fn index(ty: &str, params: &[&str], kind: Kind, syntax: String) -> Self {
        Self::intrinsic(format!("{}[{}]", ty, params.join(", ")), kind, syntax)
    }

    pub fn operator(ty: &str, op: Operator) -> Self {
        Self::intrinsic(
            format!("{}.{}", ty, op.symbol()),
            Kind::Operator,
            String::from(op.syntax()),
        )
    }

    /// Cross-kind conversions into `ty`, lowered to a target-language cast.
    pub fn conversion(ty: &str, from: &str, target: &str) -> Self {
        Self::intrinsic(
            format!("{}.From<{}>", ty, from),
            Kind::Cast,
            format!("({})($0)", target),
        )
    }

    /// The body of an intrinsic member outside the translation pass.
    pub fn trap(&self) -> TokenStream {
        let identity = &self.identity;

        quote!(::splinter::dispatch::unrewritten(#identity))
    }
}

impl quote::ToTokens for Member {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let identity = &self.identity;
        let dispatch = self.dispatch.tokens();
        let kind = self.kind.tokens();
        let syntax = match self.syntax {
            Some(ref syntax) => quote!(::core::option::Option::Some(#syntax)),
            None => quote!(::core::option::Option::None),
        };

        tokens.extend(quote! {
            ::splinter::Member {
                identity: #identity,
                dispatch: #dispatch,
                kind: #kind,
                syntax: #syntax,
            }
        });
    }
}

/// Elementwise operators shared by vectors and matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Neg,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const BINARY: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Neg => "unary-",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    pub fn syntax(self) -> &'static str {
        match self {
            Operator::Neg => "(-$0)",
            Operator::Add => "($0 + $1)",
            Operator::Sub => "($0 - $1)",
            Operator::Mul => "($0 * $1)",
            Operator::Div => "($0 / $1)",
        }
    }

    /// `(trait, method)` of the `core::ops` implementation.
    pub fn trait_method(self) -> (&'static str, &'static str) {
        match self {
            Operator::Neg => ("Neg", "neg"),
            Operator::Add => ("Add", "add"),
            Operator::Sub => ("Sub", "sub"),
            Operator::Mul => ("Mul", "mul"),
            Operator::Div => ("Div", "div"),
        }
    }
}
