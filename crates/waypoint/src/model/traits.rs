//! Core traits for item models.
//!
//! Views (or any presentation layer) query an [`ItemModel`] by
//! [`ModelIndex`] and [`ItemRole`], and listen to [`ModelSignals`] to learn
//! when previously fetched data went stale.

use waypoint_core::Signal;

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// The core trait for flat item models.
///
/// # Example
///
/// ```ignore
/// use waypoint::model::{ItemData, ItemModel, ItemRole, ModelIndex, ModelSignals};
///
/// struct Floors {
///     names: Vec<String>,
///     signals: ModelSignals,
/// }
///
/// impl ItemModel for Floors {
///     fn row_count(&self) -> usize {
///         self.names.len()
///     }
///
///     fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
///         match role {
///             ItemRole::Display if index.is_valid() => self
///                 .names
///                 .get(index.row())
///                 .map(|name| ItemData::from(name.as_str()))
///                 .unwrap_or_default(),
///             _ => ItemData::None,
///         }
///     }
///
///     fn signals(&self) -> &ModelSignals {
///         &self.signals
///     }
/// }
/// ```
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the number of columns. Flat lists have one.
    fn column_count(&self) -> usize {
        1
    }

    /// Returns the data stored under the given role for the item at index.
    ///
    /// Return `ItemData::None` if the index is invalid or the role is not
    /// supported.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Returns the signals for this model.
    fn signals(&self) -> &ModelSignals;

    /// Creates a model index for the given position.
    ///
    /// Returns `ModelIndex::invalid()` if the position is out of bounds.
    fn index(&self, row: usize, column: usize) -> ModelIndex {
        if row >= self.row_count() || column >= self.column_count() {
            ModelIndex::invalid()
        } else {
            ModelIndex::new(row, column)
        }
    }

    /// Returns the display text for an item (convenience for `data(index, Display)`).
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).into_string()
    }
}

/// Signals emitted by item models.
///
/// - **Data changes**: `data_changed` for value modifications
/// - **Major restructuring**: `model_about_to_reset` / `model_reset`
pub struct ModelSignals {
    /// Emitted when data in existing items changes.
    /// Args: (top-left index, bottom-right index, changed roles)
    pub data_changed: Signal<(ModelIndex, ModelIndex, Vec<ItemRole>)>,

    /// Emitted before the model is reset.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the model has been reset.
    pub model_reset: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            data_changed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    /// Emits `data_changed` for every row in `first..=last` of column 0.
    pub fn emit_rows_changed(&self, first: usize, last: usize, roles: Vec<ItemRole>) {
        self.data_changed
            .emit((ModelIndex::new(first, 0), ModelIndex::new(last, 0), roles));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_model_signals_creation() {
        let signals = ModelSignals::new();
        assert_eq!(signals.model_reset.connection_count(), 0);
        assert_eq!(signals.data_changed.connection_count(), 0);
    }

    #[test]
    fn test_emit_reset() {
        let signals = ModelSignals::new();
        let counter = Arc::new(Mutex::new(0));

        let c1 = counter.clone();
        signals.model_about_to_reset.connect(move |_| {
            *c1.lock() += 1;
        });

        let c2 = counter.clone();
        signals.model_reset.connect(move |_| {
            *c2.lock() += 10;
        });

        let c3 = counter.clone();
        signals.emit_reset(|| {
            assert_eq!(*c3.lock(), 1);
        });
        assert_eq!(*counter.lock(), 11);
    }

    #[test]
    fn test_emit_rows_changed() {
        let signals = ModelSignals::new();
        let received = Arc::new(Mutex::new(None));

        let recv = received.clone();
        signals.data_changed.connect(move |(top, bottom, roles)| {
            *recv.lock() = Some((top.row(), bottom.row(), roles.clone()));
        });

        signals.emit_rows_changed(0, 4, vec![ItemRole::Display]);
        assert_eq!(*received.lock(), Some((0, 4, vec![ItemRole::Display])));
    }
}
