use std::collections::HashSet;

use crate::{alphabet::check_arity, error::SchemaError};

/// Sub-block sizes a vector can be composed from. There is no 4-wide
/// sub-block below arity 4.
pub const PARTS: [usize; 3] = [1, 2, 3];

/// An ordered split of an arity into sub-blocks, e.g. `[1, 3]` builds a
/// 4-vector from a scalar followed by a 3-vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Composition(Vec<usize>);

impl Composition {
    #[inline]
    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn is_scalars(&self) -> bool {
        self.0.iter().all(|&part| part == 1)
    }

    /// `new` for the all-scalar composition, `from_<parts>` otherwise.
    pub fn constructor_name(&self) -> String {
        if self.is_scalars() {
            return String::from("new");
        }

        let parts = self
            .0
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>();

        format!("from_{}", parts.join("_"))
    }

    /// Component index ranges covered by each part.
    pub fn ranges(&self) -> Vec<std::ops::Range<usize>> {
        let mut start = 0;

        self.0
            .iter()
            .map(|&part| {
                let range = start..start + part;
                start += part;
                range
            })
            .collect()
    }
}

fn compose(remaining: usize, prefix: &mut Vec<usize>, out: &mut Vec<Composition>) {
    if remaining == 0 {
        out.push(Composition(prefix.clone()));
        return;
    }

    for part in PARTS {
        if part <= remaining {
            prefix.push(part);
            compose(remaining - part, prefix, out);
            prefix.pop();
        }
    }
}

/// Every ordered composition of `arity` from [`PARTS`], including the
/// single-part one when `arity` is itself a part.
pub fn compositions(arity: usize) -> Vec<Composition> {
    let mut out = Vec::new();

    compose(arity, &mut Vec::new(), &mut out);

    out
}

/// Number of ordered compositions of `arity` from [`PARTS`].
fn count(arity: usize) -> usize {
    let mut counts = vec![0usize; arity + 1];
    counts[0] = 1;

    for n in 1..=arity {
        counts[n] = PARTS
            .iter()
            .filter(|&&part| part <= n)
            .map(|&part| counts[n - part])
            .sum();
    }

    counts[arity]
}

/// The composition constructors of a vector of `arity` components.
///
/// The single-part composition of a vector into itself is a copy, not a
/// constructor, and is left out unless it is the scalar `new` of a 1-vector.
pub fn constructors(arity: usize) -> Result<Vec<Composition>, SchemaError> {
    let arity = check_arity(arity)?;

    let constructors = compositions(arity)
        .into_iter()
        .filter(|composition| composition.parts().len() > 1 || arity == 1)
        .collect::<Vec<_>>();

    check_coverage(arity, &constructors)?;

    Ok(constructors)
}

/// Verifies that `constructors` is exactly the set of constructor
/// compositions of `arity`, each once.
pub fn check_coverage(arity: usize, constructors: &[Composition]) -> Result<(), SchemaError> {
    let expected = if arity > 1 && PARTS.contains(&arity) {
        count(arity) - 1
    } else {
        count(arity)
    };

    let unique = constructors
        .iter()
        .filter(|composition| composition.parts().iter().sum::<usize>() == arity)
        .filter(|composition| composition.parts().len() > 1 || arity == 1)
        .collect::<HashSet<_>>();

    if unique.len() != expected || constructors.len() != expected {
        return Err(SchemaError::Composition {
            arity,
            expected,
            found: unique.len(),
        });
    }

    Ok(())
}
