use proc_macro2::TokenStream;
use quote::quote;

use crate::error::SchemaError;

pub const MAX_ARITY: usize = 4;

/// One of the two synonymous naming schemes for component indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelSet {
    Position,
    Color,
}

impl LabelSet {
    pub const ALL: [LabelSet; 2] = [LabelSet::Position, LabelSet::Color];

    pub const fn alphabet(self) -> [char; MAX_ARITY] {
        match self {
            LabelSet::Position => ['x', 'y', 'z', 'w'],
            LabelSet::Color => ['r', 'g', 'b', 'a'],
        }
    }

    #[inline]
    pub fn label(self, index: u8) -> char {
        self.alphabet()[index as usize]
    }

    /// Labels of the first `arity` components, index-synchronized with every
    /// other label set.
    pub fn labels(self, arity: usize) -> Result<Vec<char>, SchemaError> {
        let arity = check_arity(arity)?;

        Ok(self.alphabet()[..arity].to_vec())
    }

    pub fn tokens(self) -> TokenStream {
        match self {
            LabelSet::Position => quote!(::splinter::LabelSet::Position),
            LabelSet::Color => quote!(::splinter::LabelSet::Color),
        }
    }
}

pub fn check_arity(arity: usize) -> Result<usize, SchemaError> {
    if (1..=MAX_ARITY).contains(&arity) {
        Ok(arity)
    } else {
        Err(SchemaError::Arity(arity))
    }
}

/// Field names of a vector, which always use the positional labels.
pub fn fields(arity: usize) -> Result<Vec<String>, SchemaError> {
    Ok(LabelSet::Position
        .labels(arity)?
        .into_iter()
        .map(String::from)
        .collect())
}
