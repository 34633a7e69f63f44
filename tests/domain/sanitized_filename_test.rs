use augmenta::domain::SanitizedFilename;

fn sanitize(raw: &str) -> Option<String> {
    SanitizedFilename::new(raw).map(|f| f.as_str().to_string())
}

#[test]
fn given_spaces_when_sanitizing_then_replaced_by_underscores() {
    assert_eq!(sanitize("my cool  model.glb").as_deref(), Some("my_cool_model.glb"));
}

#[test]
fn given_directories_when_sanitizing_then_flattened() {
    assert_eq!(sanitize("/var/www/model.obj").as_deref(), Some("var_www_model.obj"));
    assert_eq!(sanitize(r"C:\models\cube.stl").as_deref(), Some("C_models_cube.stl"));
}

#[test]
fn given_accented_characters_when_sanitizing_then_ascii_base_letters_remain() {
    assert_eq!(sanitize("modèle.fbx").as_deref(), Some("modele.fbx"));
}

#[test]
fn given_leading_dots_when_sanitizing_then_hidden_prefix_is_removed() {
    assert_eq!(sanitize(".htaccess").as_deref(), Some("htaccess"));
}

#[test]
fn given_only_separators_when_sanitizing_then_none() {
    assert_eq!(sanitize(""), None);
    assert_eq!(sanitize("../"), None);
    assert_eq!(sanitize("???"), None);
}

#[test]
fn given_windows_device_name_when_sanitizing_then_prefixed() {
    assert_eq!(sanitize("con.obj").as_deref(), Some("_con.obj"));
}

#[test]
fn given_extension_when_reading_format_then_uppercased_suffix() {
    assert_eq!(SanitizedFilename::new("scene.gltf").unwrap().format(), "GLTF");
    assert_eq!(SanitizedFilename::new("a.b.c.ply").unwrap().format(), "PLY");
}

#[test]
fn given_no_extension_when_reading_format_then_whole_name_uppercased() {
    assert_eq!(SanitizedFilename::new("mesh").unwrap().format(), "MESH");
}
