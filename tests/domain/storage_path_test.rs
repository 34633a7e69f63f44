use augmenta::domain::{SanitizedFilename, StoragePath};

#[test]
fn given_sanitized_filename_when_building_upload_path_then_under_uploads() {
    let filename = SanitizedFilename::new("robot arm.glb").unwrap();

    let path = StoragePath::upload(&filename);

    assert_eq!(path.as_str(), "uploads/robot_arm.glb");
}

#[test]
fn given_raw_path_when_displaying_then_path_is_unchanged() {
    let path = StoragePath::from_raw("uploads/flat.stl");

    assert_eq!(path.to_string(), "uploads/flat.stl");
}
