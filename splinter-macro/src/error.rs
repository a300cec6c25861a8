use proc_macro2::Span;
use proc_macro_error::{Diagnostic, Level};
use thiserror::Error;

/// Errors raised while generating a type surface.
///
/// None of these ever reach run time: the macro entry points abort
/// compilation with a diagnostic spanned at the offending schema entry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("arity {0} is outside of 1..=4")]
    Arity(usize),
    #[error("swizzle length {0} is outside of 1..=4")]
    Length(usize),
    #[error("matrix shape {rows}x{cols} is outside of 1x1..=4x4")]
    Shape { rows: usize, cols: usize },
    #[error("element type `{0}` is not a 32-bit scalar, expected one of `f32`, `i32` or `u32`")]
    Scalar(String),
    #[error("no native vector type of width {0} exists, native widths are 2..=4")]
    NativeWidth(usize),
    #[error("native vector type of width {0} is declared more than once")]
    DuplicateNative(usize),
    #[error("family `{0}` is declared more than once")]
    DuplicateFamily(String),
    #[error("composition constructors of arity {arity} are incomplete: expected {expected}, found {found}")]
    Composition {
        arity: usize,
        expected: usize,
        found: usize,
    },
    #[error("accessor `{0}` is named by more than one pattern")]
    Collision(String),
}

pub trait SchemaResult {
    type Ok;

    fn or_abort(self, span: Span) -> Self::Ok;
}

impl<T> SchemaResult for Result<T, SchemaError> {
    type Ok = T;

    fn or_abort(self, span: Span) -> T {
        match self {
            Ok(value) => value,
            Err(error) => Diagnostic::spanned(span, Level::Error, error.to_string()).abort(),
        }
    }
}
