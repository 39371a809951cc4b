use tetrikan_core::{Cell, ShapeFamily, Status, TaskId};

#[test]
fn test_status_uses_snake_case() {
    let json = serde_json::to_string(&Status::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");

    let status: Status = serde_json::from_str("\"done\"").unwrap();
    assert_eq!(status, Status::Done);
}

#[test]
fn test_task_id_is_transparent() {
    let json = serde_json::to_string(&TaskId::new("42")).unwrap();
    assert_eq!(json, "\"42\"");
}

#[test]
fn test_cell_shape() {
    let json = serde_json::to_string(&Cell::new(3, 9)).unwrap();
    assert_eq!(json, r#"{"x":3,"y":9}"#);
}

#[test]
fn test_shape_family_letters() {
    let json = serde_json::to_string(&ShapeFamily::T).unwrap();
    assert_eq!(json, "\"T\"");
    let shape: ShapeFamily = serde_json::from_str("\"O\"").unwrap();
    assert_eq!(shape, ShapeFamily::O);
}
