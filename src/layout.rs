/// Shape of a generated type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Vector(u8),
    Matrix { rows: u8, cols: u8 },
}

impl Shape {
    /// Number of scalar components.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            Shape::Vector(arity) => arity as usize,
            Shape::Matrix { rows, cols } => rows as usize * cols as usize,
        }
    }
}

/// Byte layout of a generated type, identical to the layout of the matching
/// shader type: 4-byte components, no padding, matrices row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    pub shape: Shape,
    pub size: usize,
    pub align: usize,
    /// Offset of every component, in field order.
    pub offsets: &'static [usize],
}

impl Layout {
    /// Offset of the component at `index`.
    #[inline]
    pub fn offset(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    /// Offset of the matrix cell at (`row`, `col`). `None` for vectors and
    /// out-of-range cells.
    pub fn cell_offset(&self, row: usize, col: usize) -> Option<usize> {
        match self.shape {
            Shape::Matrix { rows, cols } if row < rows as usize && col < cols as usize => {
                self.offset(row * cols as usize + col)
            }
            _ => None,
        }
    }
}
