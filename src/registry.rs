//! Process-wide index of every generated member, keyed by identity.
//!
//! Built once on first use and never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{matrix, vector, Member};

static MEMBERS: Lazy<HashMap<&'static str, &'static Member>> = Lazy::new(|| {
    let tables = vector::VECTOR_TABLES.iter().chain(matrix::MATRIX_TABLES.iter());
    let mut members = HashMap::new();

    for table in tables.clone() {
        for member in table.iter() {
            members.insert(member.identity, member);
        }
    }

    log::debug!(
        "indexed {} members of {} types",
        members.len(),
        tables.count()
    );

    members
});

/// Looks up a member by its qualified identity, `Float3.xy`.
pub fn lookup(identity: &str) -> Option<&'static Member> {
    let member = MEMBERS.get(identity).copied();

    if member.is_none() {
        log::trace!("no member `{}`", identity);
    }

    member
}

/// Lowers an intrinsic invocation to target-language syntax.
pub fn lower(identity: &str, args: &[&str]) -> Option<String> {
    lookup(identity)?.lower(args)
}

/// Every member of every generated type.
pub fn members() -> impl Iterator<Item = &'static Member> {
    MEMBERS.values().copied()
}
