//! Route endpoint list model.
//!
//! A route list shows the stops of an indoor route: each row is a feature
//! (room) or an empty slot standing for the device's own position. Rows
//! alternate between a "start" and an "end" cell template.
//!
//! The free functions [`row_count`], [`lookup_row`] and [`row_content`] hold
//! the row logic; [`RouteListModel`] serves the same answers through
//! [`ItemModel`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use waypoint_core::logging::targets;

use super::feature::FeatureRow;
use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};
use super::traits::{ItemModel, ModelSignals};
use crate::settings::RouteSettings;

/// Primary text for an empty slot when location services are on.
pub const CURRENT_LOCATION: &str = "Current Location";

/// Primary text whenever a row cannot be resolved.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Which cell template a row uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRole {
    /// Even rows.
    Start,
    /// Odd rows.
    End,
}

impl RowRole {
    /// Role for the row at `row`.
    pub fn for_row(row: usize) -> Self {
        if row % 2 == 1 { RowRole::End } else { RowRole::Start }
    }

    /// Identifier of the cell template for this role.
    pub fn template_id(&self) -> &'static str {
        match self {
            RowRole::Start => "startCellID",
            RowRole::End => "endCellID",
        }
    }
}

/// The two strings shown for a row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayPayload {
    /// Main label.
    pub primary_text: String,
    /// Detail label (floor), empty for sentinel rows.
    pub secondary_text: String,
}

impl DisplayPayload {
    /// A payload with only a primary label.
    pub fn sentinel(text: &str) -> Self {
        Self {
            primary_text: text.to_string(),
            secondary_text: String::new(),
        }
    }
}

/// Why a row could not be resolved from its feature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeLookupError {
    /// The row is past the end of the list (or there is no list).
    #[error("row {row} is out of range for {len} items")]
    IndexOutOfRange { row: usize, len: usize },

    /// No locator field is configured for the primary label.
    #[error("no primary label field configured")]
    NoPrimaryField,

    /// The feature has no attribute with this key.
    #[error("feature has no attribute '{0}'")]
    MissingKey(String),

    /// The primary label attribute is null.
    #[error("attribute '{0}' is null")]
    NullValue(String),
}

/// Number of rows for `items`; `None` (no list) counts as empty.
pub fn row_count(items: Option<&[Option<FeatureRow>]>) -> usize {
    items.map_or(0, <[_]>::len)
}

/// Resolves the row at `row`.
///
/// Returns `Ok(None)` for an empty slot (no feature stored there) and
/// `Ok(Some(_))` with the feature's labels otherwise.
pub fn lookup_row(
    items: Option<&[Option<FeatureRow>]>,
    row: usize,
    settings: &RouteSettings,
) -> Result<Option<DisplayPayload>, AttributeLookupError> {
    let items = items.unwrap_or_default();
    let slot = items.get(row).ok_or(AttributeLookupError::IndexOutOfRange {
        row,
        len: items.len(),
    })?;

    let Some(feature) = slot else {
        return Ok(None);
    };

    let label_key = settings
        .primary_label_field()
        .ok_or(AttributeLookupError::NoPrimaryField)?;
    let label = feature
        .attribute(label_key)
        .ok_or_else(|| AttributeLookupError::MissingKey(label_key.to_string()))?;
    if label.is_null() {
        return Err(AttributeLookupError::NullValue(label_key.to_string()));
    }

    let floor_key = settings.floor_field();
    let floor = feature
        .attribute(floor_key)
        .ok_or_else(|| AttributeLookupError::MissingKey(floor_key.to_string()))?;

    Ok(Some(DisplayPayload {
        primary_text: label.to_string(),
        secondary_text: format!("Floor {floor}"),
    }))
}

/// Display payload for the row at `row`. Never fails.
///
/// - a feature: its label and `"Floor {n}"`
/// - an empty slot: [`CURRENT_LOCATION`] if `location_enabled`, else
///   [`UNKNOWN_LOCATION`]
/// - anything unresolvable: [`UNKNOWN_LOCATION`]
pub fn row_content(
    items: Option<&[Option<FeatureRow>]>,
    row: usize,
    settings: &RouteSettings,
    location_enabled: bool,
) -> DisplayPayload {
    match lookup_row(items, row, settings) {
        Ok(Some(payload)) => payload,
        Ok(None) if location_enabled => DisplayPayload::sentinel(CURRENT_LOCATION),
        Ok(None) => DisplayPayload::sentinel(UNKNOWN_LOCATION),
        Err(err) => {
            tracing::debug!(target: targets::MODEL, row, error = %err, "unresolvable route row");
            DisplayPayload::sentinel(UNKNOWN_LOCATION)
        }
    }
}

/// Item model over the stops of a route.
///
/// | role | data |
/// |------|------|
/// | `Display` | primary text |
/// | [`DETAIL_ROLE`](Self::DETAIL_ROLE) | secondary (floor) text |
/// | [`TEMPLATE_ROLE`](Self::TEMPLATE_ROLE) | cell template id |
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use waypoint::model::{FeatureRow, ItemModel, RouteListModel};
/// use waypoint::RouteSettings;
///
/// let settings = Arc::new(RouteSettings::default());
/// let model = RouteListModel::new(
///     Some(vec![None, Some(FeatureRow::new().with_attribute("LONGNAME", "Library").with_attribute("FLOOR", 2))]),
///     settings,
/// );
///
/// let end = model.row_content(1);
/// assert_eq!(end.primary_text, "Library");
/// assert_eq!(end.secondary_text, "Floor 2");
/// ```
pub struct RouteListModel {
    items: RwLock<Option<Vec<Option<FeatureRow>>>>,
    settings: Arc<RouteSettings>,
    location_enabled: AtomicBool,
    signals: ModelSignals,
}

impl RouteListModel {
    /// Role carrying the secondary (floor) text.
    pub const DETAIL_ROLE: ItemRole = ItemRole::User(0);

    /// Role carrying the cell template id.
    pub const TEMPLATE_ROLE: ItemRole = ItemRole::User(1);

    /// Creates a model. Location services start out as configured in
    /// `settings`.
    pub fn new(items: Option<Vec<Option<FeatureRow>>>, settings: Arc<RouteSettings>) -> Self {
        let location_enabled = settings.is_location_services_enabled;
        Self {
            items: RwLock::new(items),
            settings,
            location_enabled: AtomicBool::new(location_enabled),
            signals: ModelSignals::new(),
        }
    }

    /// Replaces the route stops and resets the model.
    pub fn set_items(&self, items: Option<Vec<Option<FeatureRow>>>) {
        self.signals.emit_reset(|| {
            *self.items.write() = items;
        });
    }

    /// Whether empty slots show as the current location.
    pub fn is_location_enabled(&self) -> bool {
        self.location_enabled.load(Ordering::SeqCst)
    }

    /// Updates location availability; empty-slot rows change text.
    pub fn set_location_enabled(&self, enabled: bool) {
        if self.location_enabled.swap(enabled, Ordering::SeqCst) == enabled {
            return;
        }
        let rows = self.row_count();
        if rows > 0 {
            self.signals
                .emit_rows_changed(0, rows - 1, vec![ItemRole::Display]);
        }
    }

    /// The settings the model reads attribute keys from.
    pub fn settings(&self) -> &RouteSettings {
        &self.settings
    }

    /// Display payload for `row`.
    pub fn row_content(&self, row: usize) -> DisplayPayload {
        let items = self.items.read();
        row_content(items.as_deref(), row, &self.settings, self.is_location_enabled())
    }

    /// Cell template role for `row`.
    pub fn row_role(&self, row: usize) -> RowRole {
        RowRole::for_row(row)
    }
}

impl ItemModel for RouteListModel {
    fn row_count(&self) -> usize {
        row_count(self.items.read().as_deref())
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if !index.is_valid() || index.column() > 0 {
            return ItemData::None;
        }

        match role {
            ItemRole::Display => ItemData::from(self.row_content(index.row()).primary_text),
            Self::DETAIL_ROLE => ItemData::from(self.row_content(index.row()).secondary_text),
            Self::TEMPLATE_ROLE => ItemData::from(self.row_role(index.row()).template_id()),
            _ => ItemData::None,
        }
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeValue;

    fn settings() -> RouteSettings {
        RouteSettings {
            locator_fields: vec!["LONGNAME".into(), "KNOWNAS".into()],
            rooms_layer_floor_column_name: "FLOOR".into(),
            is_location_services_enabled: false,
        }
    }

    fn room(name: &str, floor: i64) -> FeatureRow {
        FeatureRow::new()
            .with_attribute("LONGNAME", name)
            .with_attribute("FLOOR", floor)
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(None), 0);
        assert_eq!(row_count(Some(&[])), 0);

        let items: Vec<_> = (0..5).map(|n| Some(room("Room", n))).collect();
        assert_eq!(row_count(Some(&items)), 5);
    }

    #[test]
    fn test_row_roles_alternate() {
        assert_eq!(RowRole::for_row(0), RowRole::Start);
        assert_eq!(RowRole::for_row(1), RowRole::End);
        assert_eq!(RowRole::for_row(2), RowRole::Start);
        assert_eq!(RowRole::End.template_id(), "endCellID");
    }

    #[test]
    fn test_feature_row() {
        let items = vec![Some(room("Cafeteria", 1))];
        let payload = row_content(Some(&items), 0, &settings(), false);
        assert_eq!(payload.primary_text, "Cafeteria");
        assert_eq!(payload.secondary_text, "Floor 1");
    }

    #[test]
    fn test_empty_slot_sentinels() {
        let items = vec![None];
        assert_eq!(
            row_content(Some(&items), 0, &settings(), true),
            DisplayPayload::sentinel(CURRENT_LOCATION)
        );
        assert_eq!(
            row_content(Some(&items), 0, &settings(), false),
            DisplayPayload::sentinel(UNKNOWN_LOCATION)
        );
    }

    #[test]
    fn test_lookup_errors() {
        let items = vec![Some(FeatureRow::new().with_attribute("FLOOR", 1))];
        assert_eq!(
            lookup_row(Some(&items), 0, &settings()),
            Err(AttributeLookupError::MissingKey("LONGNAME".into()))
        );
        assert_eq!(
            lookup_row(Some(&items), 3, &settings()),
            Err(AttributeLookupError::IndexOutOfRange { row: 3, len: 1 })
        );
        assert_eq!(
            lookup_row(None, 0, &settings()),
            Err(AttributeLookupError::IndexOutOfRange { row: 0, len: 0 })
        );

        let mut no_locator = settings();
        no_locator.locator_fields.clear();
        assert_eq!(
            lookup_row(Some(&[Some(room("Lab", 2))]), 0, &no_locator),
            Err(AttributeLookupError::NoPrimaryField)
        );
    }

    #[test]
    fn test_null_values() {
        let null_label = vec![Some(
            FeatureRow::new()
                .with_attribute("LONGNAME", AttributeValue::Null)
                .with_attribute("FLOOR", 1),
        )];
        assert_eq!(
            lookup_row(Some(&null_label), 0, &settings()),
            Err(AttributeLookupError::NullValue("LONGNAME".into()))
        );
        assert_eq!(
            row_content(Some(&null_label), 0, &settings(), true),
            DisplayPayload::sentinel(UNKNOWN_LOCATION)
        );

        let null_floor = vec![Some(
            FeatureRow::new()
                .with_attribute("LONGNAME", "Atrium")
                .with_attribute("FLOOR", AttributeValue::Null),
        )];
        let payload = row_content(Some(&null_floor), 0, &settings(), false);
        assert_eq!(payload.primary_text, "Atrium");
        assert_eq!(payload.secondary_text, "Floor ");
    }

    #[test]
    fn test_out_of_range_ignores_location() {
        let payload = row_content(Some(&[]), 0, &settings(), true);
        assert_eq!(payload, DisplayPayload::sentinel(UNKNOWN_LOCATION));
    }
}
