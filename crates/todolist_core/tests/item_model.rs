use todolist_core::{Coordinate, ItemValidationError, Location, ToDoItem};

#[test]
fn new_item_sets_defaults() {
    let item = ToDoItem::new("buy milk").unwrap();

    assert_eq!(item.title, "buy milk");
    assert_eq!(item.description, None);
    assert_eq!(item.timestamp, None);
    assert_eq!(item.location, None);
}

#[test]
fn new_rejects_blank_title() {
    let err = ToDoItem::new("   ").unwrap_err();
    assert_eq!(err, ItemValidationError::BlankTitle);

    let err = ToDoItem::new("").unwrap_err();
    assert_eq!(err, ItemValidationError::BlankTitle);
}

#[test]
fn items_are_equal_iff_all_fields_match() {
    let mut first = ToDoItem::new("call mom").unwrap();
    let mut second = ToDoItem::new("call mom").unwrap();
    assert_eq!(first, second);

    first.description = Some("before noon".to_string());
    assert_ne!(first, second);

    second.description = Some("before noon".to_string());
    assert_eq!(first, second);

    first.timestamp = Some(1_500_000_000);
    assert_ne!(first, second);

    second.timestamp = Some(1_500_000_000);
    first.location = Some(Location::with_coordinate("home", Coordinate::new(1.0, 2.0)));
    second.location = Some(Location::new("home"));
    assert_ne!(first, second);
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let mut item = ToDoItem::new("ship release").unwrap();
    item.description = Some("tag and upload".to_string());
    item.timestamp = Some(1_700_000_000);
    item.location = Some(Location::with_coordinate("office", Coordinate::new(1.5, -2.5)));

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["title"], "ship release");
    assert_eq!(json["description"], "tag and upload");
    assert_eq!(json["timestamp"], 1_700_000_000_i64);
    assert_eq!(json["location"]["name"], "office");
    assert_eq!(json["location"]["coordinate"]["latitude"], 1.5);
    assert_eq!(json["location"]["coordinate"]["longitude"], -2.5);

    let decoded: ToDoItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn deserialize_fills_missing_optional_fields() {
    let decoded: ToDoItem = serde_json::from_value(serde_json::json!({
        "title": "minimal"
    }))
    .unwrap();

    assert_eq!(decoded, ToDoItem::new("minimal").unwrap());
}

#[test]
fn deserialize_rejects_blank_title() {
    let err = serde_json::from_value::<ToDoItem>(serde_json::json!({
        "title": "  ",
        "description": null,
        "timestamp": null,
        "location": null
    }))
    .unwrap_err();

    assert!(
        err.to_string().contains("title must not be blank"),
        "unexpected error: {err}"
    );
}
