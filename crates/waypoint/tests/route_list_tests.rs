//! Route list model tests.

use std::sync::Arc;

use parking_lot::Mutex;
use waypoint::RouteSettings;
use waypoint::model::{
    AttributeValue, CURRENT_LOCATION, DisplayPayload, FeatureRow, ItemData, ItemModel, ItemRole,
    ModelIndex, RouteListModel, UNKNOWN_LOCATION,
};

fn settings(location_enabled: bool) -> Arc<RouteSettings> {
    Arc::new(RouteSettings {
        locator_fields: vec!["LONGNAME".into()],
        rooms_layer_floor_column_name: "FLOOR".into(),
        is_location_services_enabled: location_enabled,
    })
}

fn room(name: &str, floor: impl Into<AttributeValue>) -> Option<FeatureRow> {
    Some(
        FeatureRow::new()
            .with_attribute("LONGNAME", name)
            .with_attribute("FLOOR", floor),
    )
}

#[test]
fn test_row_count() {
    let empty = RouteListModel::new(Some(Vec::new()), settings(false));
    assert_eq!(empty.row_count(), 0);

    let missing = RouteListModel::new(None, settings(false));
    assert_eq!(missing.row_count(), 0);

    let five = RouteListModel::new(
        Some((1..=5).map(|n| room("Room", n)).collect()),
        settings(false),
    );
    assert_eq!(five.row_count(), 5);
}

#[test]
fn test_values_stringified_as_stored() {
    let model = RouteListModel::new(
        Some(vec![room("Auditorium", 1), room("Room 2.14", "2M"), room("Lab", 3.5)]),
        settings(false),
    );

    assert_eq!(
        model.row_content(0),
        DisplayPayload {
            primary_text: "Auditorium".into(),
            secondary_text: "Floor 1".into(),
        }
    );
    assert_eq!(model.row_content(1).secondary_text, "Floor 2M");
    assert_eq!(model.row_content(2).secondary_text, "Floor 3.5");
}

#[test]
fn test_current_location_slot() {
    let model = RouteListModel::new(Some(vec![None, room("Library", 4)]), settings(true));

    assert_eq!(model.row_content(0), DisplayPayload::sentinel(CURRENT_LOCATION));
    assert_eq!(model.row_content(0).secondary_text, "");
    assert_eq!(model.row_content(1).primary_text, "Library");
}

#[test]
fn test_unknown_location_slot() {
    let model = RouteListModel::new(Some(vec![None]), settings(false));
    assert_eq!(model.row_content(0), DisplayPayload::sentinel(UNKNOWN_LOCATION));
}

#[test]
fn test_key_mismatch_degrades() {
    let other_keys = Arc::new(RouteSettings {
        locator_fields: vec!["NAME".into()],
        rooms_layer_floor_column_name: "LEVEL".into(),
        is_location_services_enabled: true,
    });
    let model = RouteListModel::new(Some(vec![room("Library", 4)]), other_keys);

    assert_eq!(model.row_content(0), DisplayPayload::sentinel(UNKNOWN_LOCATION));
    assert_eq!(model.row_content(7), DisplayPayload::sentinel(UNKNOWN_LOCATION));
}

#[test]
fn test_item_model_roles() {
    let model = RouteListModel::new(Some(vec![None, room("Cafeteria", 0)]), settings(true));

    let start = model.index(0, 0);
    let end = model.index(1, 0);
    assert!(start.is_valid() && end.is_valid());
    assert!(!model.index(2, 0).is_valid());
    assert!(!model.index(0, 1).is_valid());

    assert_eq!(model.display_text(&start).as_deref(), Some(CURRENT_LOCATION));
    assert_eq!(
        model.data(&end, RouteListModel::DETAIL_ROLE),
        ItemData::from("Floor 0")
    );
    assert_eq!(
        model.data(&start, RouteListModel::TEMPLATE_ROLE).as_string(),
        Some("startCellID")
    );
    assert_eq!(
        model.data(&end, RouteListModel::TEMPLATE_ROLE).as_string(),
        Some("endCellID")
    );
    assert!(model.data(&end, ItemRole::User(7)).is_none());
    assert!(model.data(&ModelIndex::invalid(), ItemRole::Display).is_none());
}

#[test]
fn test_set_items_resets_model() {
    let model = RouteListModel::new(None, settings(false));
    let resets = Arc::new(Mutex::new(0));

    let recv = resets.clone();
    model.signals().model_reset.connect(move |_| {
        *recv.lock() += 1;
    });

    model.set_items(Some(vec![room("Gym", 1), None]));
    assert_eq!(*resets.lock(), 1);
    assert_eq!(model.row_count(), 2);
}

#[test]
fn test_location_toggle_refreshes_rows() {
    let model = RouteListModel::new(Some(vec![None, None]), settings(false));
    let changes = Arc::new(Mutex::new(Vec::new()));

    let recv = changes.clone();
    model.signals().data_changed.connect(move |(top, bottom, _)| {
        recv.lock().push((top.row(), bottom.row()));
    });

    model.set_location_enabled(false);
    assert!(changes.lock().is_empty());

    model.set_location_enabled(true);
    assert_eq!(*changes.lock(), vec![(0, 1)]);
    assert_eq!(model.row_content(1).primary_text, CURRENT_LOCATION);
}
