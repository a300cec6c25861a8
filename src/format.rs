//! Diagnostic rendering of vectors, `<1, 2, 3>`. Not a wire format.

use std::fmt::{self, Display, Formatter};

/// Numeric formatting conventions used when rendering vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Placed between components, followed by a space.
    pub group_separator: char,
}

impl Locale {
    pub const INVARIANT: Locale = Locale::new(',');

    #[inline]
    pub const fn new(group_separator: char) -> Self {
        Self { group_separator }
    }
}

impl Default for Locale {
    #[inline]
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Writes `<c0, c1, ...>`, forwarding the formatter's flags to every
/// component.
pub fn write_components<T: Display>(
    f: &mut Formatter<'_>,
    components: &[T],
    locale: Locale,
) -> fmt::Result {
    f.write_str("<")?;

    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            write!(f, "{} ", locale.group_separator)?;
        }

        component.fmt(f)?;
    }

    f.write_str(">")
}

/// A vector rendered with a specific [`Locale`], see `display_in`.
#[derive(Clone, Copy, Debug)]
pub struct Localized<'a, T> {
    components: &'a [T],
    locale: Locale,
}

impl<'a, T> Localized<'a, T> {
    #[inline]
    pub fn new(components: &'a [T], locale: Locale) -> Self {
        Self { components, locale }
    }
}

impl<T: Display> Display for Localized<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_components(f, self.components, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators() {
        let components = [1.0f32, 2.5, -3.0];

        assert_eq!(
            Localized::new(&components, Locale::INVARIANT).to_string(),
            "<1, 2.5, -3>"
        );
        assert_eq!(
            Localized::new(&components, Locale::new(';')).to_string(),
            "<1; 2.5; -3>"
        );
    }

    #[test]
    fn flags_reach_components() {
        let components = [1u32, 20];

        assert_eq!(
            format!("{:>3}", Localized::new(&components, Locale::INVARIANT)),
            "<  1,  20>"
        );
    }

    #[test]
    fn single_component() {
        assert_eq!(Localized::new(&[7i32], Locale::default()).to_string(), "<7>");
    }
}
