//! The dual-context dispatch contract.
//!
//! Every member of a generated type is either [`Dispatch::Native`], and runs
//! on the host, or [`Dispatch::Intrinsic`], and only has meaning once the
//! shader translation pass rewrote its call site. Intrinsic members are
//! compiled only with the `shader` feature, so host code cannot reach them.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dispatch {
    Native,
    Intrinsic,
}

/// One of the two synonymous naming schemes of vector components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelSet {
    /// `x`, `y`, `z`, `w`
    Position,
    /// `r`, `g`, `b`, `a`
    Color,
}

impl LabelSet {
    pub const fn alphabet(self) -> [char; 4] {
        match self {
            LabelSet::Position => ['x', 'y', 'z', 'w'],
            LabelSet::Color => ['r', 'g', 'b', 'a'],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Every selected component is distinct; the swizzle has a setter.
    Mutable,
    ReadOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swizzle {
    pub pattern: &'static [u8],
    pub labels: LabelSet,
    pub mutability: Mutability,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Constructor,
    Cast,
    /// Reinterpreting borrow, `as_array`.
    View,
    Format,
    Index,
    /// Generalized matrix indexer over `cells` selectors.
    Gather { cells: u8 },
    Swizzle(Swizzle),
    Operator,
}

/// An entry of a generated type's member table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Member {
    /// `Type.member`, `Type.symbol` or `Type[ParamKinds]`.
    pub identity: &'static str,
    pub dispatch: Dispatch,
    pub kind: MemberKind,
    /// Target-language template of intrinsic members. `$0` is the receiver,
    /// `$1` onwards the arguments.
    pub syntax: Option<&'static str>,
}

impl Member {
    /// The member name without its type, `xy` for `Float3.xy`.
    pub fn name(&self) -> &'static str {
        match self.identity.find(|c| c == '.' || c == '[') {
            Some(at) if self.identity.as_bytes()[at] == b'.' => &self.identity[at + 1..],
            Some(at) => &self.identity[at..],
            None => self.identity,
        }
    }

    #[inline]
    pub fn is_intrinsic(&self) -> bool {
        self.dispatch == Dispatch::Intrinsic
    }

    /// Whether the member is compiled in the current context.
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.is_intrinsic() || CONTEXT == Context::Shader
    }

    /// Lowers an invocation to target-language syntax.
    ///
    /// Returns `None` for native members. Placeholders without a matching
    /// argument are left as they are.
    pub fn lower(&self, args: &[&str]) -> Option<String> {
        let syntax = self.syntax?;
        let mut lowered = String::with_capacity(syntax.len());
        let mut chars = syntax.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            let digit = match chars.peek() {
                Some(&(_, next)) if c == '$' => next.to_digit(10),
                _ => None,
            };

            match digit.and_then(|digit| args.get(digit as usize)) {
                Some(arg) => {
                    chars.next();
                    lowered.push_str(arg);
                }
                None => lowered.push(c),
            }
        }

        Some(lowered)
    }
}

/// Raised when an intrinsic member runs without the translation pass having
/// rewritten it. Always a tooling failure; never retried.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("intrinsic `{identity}` executed without shader translation")]
pub struct IntrinsicError {
    pub identity: &'static str,
}

/// Body of every intrinsic member on a shader build.
#[cold]
#[track_caller]
pub fn unrewritten(identity: &'static str) -> ! {
    let error = IntrinsicError { identity };

    log::error!("{}", error);

    panic!("{}", error)
}

/// The build context this crate was compiled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Context {
    /// Ordinary host compilation: only native members exist.
    Host,
    /// Compilation consumed by the shader translation pass: intrinsic members
    /// exist too.
    Shader,
}

/// Intrinsic members are not compiled on the host:
///
/// ```compile_fail
/// use splinter::Float3;
///
/// let v = Float3::new(1.0, 2.0, 3.0);
/// let _ = v.xy();
/// ```
///
/// ```compile_fail
/// use splinter::Float2;
///
/// let _ = Float2::splat(1.0) + Float2::splat(2.0);
/// ```
#[cfg(not(feature = "shader"))]
pub const CONTEXT: Context = Context::Host;

#[cfg(feature = "shader")]
pub const CONTEXT: Context = Context::Shader;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const XY: Member = Member {
        identity: "Float3.xy",
        dispatch: Dispatch::Intrinsic,
        kind: MemberKind::Swizzle(Swizzle {
            pattern: &[0, 1],
            labels: LabelSet::Position,
            mutability: Mutability::Mutable,
        }),
        syntax: Some("$0.xy"),
    };

    #[test]
    fn names() {
        assert_eq!(XY.name(), "xy");

        let index = Member {
            identity: "Float3x2[Cell, Cell]",
            ..XY
        };
        assert_eq!(index.name(), "[Cell, Cell]");

        let op = Member {
            identity: "Float3.+",
            ..XY
        };
        assert_eq!(op.name(), "+");
    }

    #[test]
    fn lowering_substitutes_arguments() {
        assert_eq!(XY.lower(&["v"]).as_deref(), Some("v.xy"));

        let add = Member {
            syntax: Some("($0 + $1)"),
            ..XY
        };
        assert_eq!(add.lower(&["a", "b"]).as_deref(), Some("(a + b)"));
        assert_eq!(add.lower(&["a"]).as_deref(), Some("(a + $1)"));
    }

    #[test]
    fn native_members_do_not_lower() {
        let new = Member {
            identity: "Float3.new",
            dispatch: Dispatch::Native,
            kind: MemberKind::Constructor,
            syntax: None,
        };

        assert_eq!(new.lower(&["1", "2", "3"]), None);
        assert!(new.is_available());
    }

    #[test]
    fn error_carries_identity() {
        let error = IntrinsicError {
            identity: "Float3.xy",
        };

        assert_eq!(
            error.to_string(),
            "intrinsic `Float3.xy` executed without shader translation"
        );
    }
}
