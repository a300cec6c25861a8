use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    alphabet::{check_arity, LabelSet, MAX_ARITY},
    error::SchemaError,
};

/// An ordered selection of component indices, repetition allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn mutability(&self) -> Mutability {
        Mutability::classify(&self.0)
    }

    pub fn name(&self, labels: LabelSet) -> String {
        self.0.iter().map(|&index| labels.label(index)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    Mutable,
    ReadOnly,
}

impl Mutability {
    /// A pattern is writable iff no index repeats, since a write through a
    /// repeated index has no single target slot.
    pub fn classify(indices: &[u8]) -> Self {
        let mut seen = 0u8;

        for &index in indices {
            let bit = 1 << index;

            if seen & bit != 0 {
                return Mutability::ReadOnly;
            }

            seen |= bit;
        }

        Mutability::Mutable
    }

    pub fn tokens(self) -> TokenStream {
        match self {
            Mutability::Mutable => quote!(::splinter::Mutability::Mutable),
            Mutability::ReadOnly => quote!(::splinter::Mutability::ReadOnly),
        }
    }
}

/// Every pattern of `len` indices drawn from `0..arity`, in lexicographic
/// order with the first position most significant.
pub struct Patterns {
    arity: u32,
    len: u32,
    next: u32,
    total: u32,
}

impl Iterator for Patterns {
    type Item = Pattern;

    fn next(&mut self) -> Option<Pattern> {
        if self.next == self.total {
            return None;
        }

        let mut value = self.next;
        let mut indices = vec![0; self.len as usize];

        for slot in indices.iter_mut().rev() {
            *slot = (value % self.arity) as u8;
            value /= self.arity;
        }

        self.next += 1;

        Some(Pattern(indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Patterns {}

pub fn enumerate(arity: usize, len: usize) -> Result<Patterns, SchemaError> {
    let arity = check_arity(arity)? as u32;

    if !(1..=MAX_ARITY).contains(&len) {
        return Err(SchemaError::Length(len));
    }

    let len = len as u32;

    Ok(Patterns {
        arity,
        len,
        next: 0,
        total: arity.pow(len),
    })
}

/// A named swizzle accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessor {
    pub pattern: Pattern,
    pub labels: LabelSet,
    pub name: String,
}

impl Accessor {
    #[inline]
    pub fn mutability(&self) -> Mutability {
        self.pattern.mutability()
    }
}

/// All accessors of a vector of `arity` components, ordered by length, then
/// label set, then pattern.
///
/// Fails if two accessors would share a name, which would make the emitted
/// surface ambiguous.
pub fn accessors(arity: usize) -> Result<Vec<Accessor>, SchemaError> {
    let mut accessors = Vec::new();
    let mut names = HashMap::new();

    for len in 1..=MAX_ARITY {
        for labels in LabelSet::ALL {
            for pattern in enumerate(arity, len)? {
                let name = pattern.name(labels);

                if names.insert(name.clone(), pattern.clone()).is_some() {
                    return Err(SchemaError::Collision(name));
                }

                accessors.push(Accessor {
                    pattern,
                    labels,
                    name,
                });
            }
        }
    }

    Ok(accessors)
}
