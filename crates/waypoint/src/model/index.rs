//! Model index for addressing rows in flat models.
//!
//! A `ModelIndex` identifies one cell of an `ItemModel`. Waypoint models are
//! flat lists, so an index is just a row and column plus a validity bit.

/// Represents a position within an `ItemModel`.
///
/// Indices should be used immediately and not stored long-term: after the
/// model is reset, previously obtained indices may point at different data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index stands for the model root or an out-of-bounds item.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            valid: false,
        }
    }

    /// Creates a new valid model index.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            valid: true,
        }
    }

    /// Returns `true` if this is a valid index.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the row. 0 for invalid indices.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column. 0 for invalid indices.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index, ModelIndex::default());
    }

    #[test]
    fn test_valid_index() {
        let index = ModelIndex::new(3, 0);
        assert!(index.is_valid());
        assert_eq!(index.row(), 3);
        assert_eq!(index.column(), 0);
        assert_ne!(index, ModelIndex::invalid());
    }
}
