use augmenta::infrastructure::observability::{preview_base64, preview_text};

#[test]
fn given_blank_text_when_previewing_then_empty_marker() {
    assert_eq!(preview_text("   "), "[EMPTY]");
}

#[test]
fn given_long_text_when_previewing_then_truncated_with_total() {
    let text = "é".repeat(150);

    let preview = preview_text(&text);

    assert!(preview.starts_with(&"é".repeat(100)));
    assert!(preview.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_previewing_then_values_are_redacted() {
    let preview = preview_text("call with Bearer abc.def and password=hunter2 now");

    assert_eq!(
        preview,
        "call with Bearer [REDACTED] and password=[REDACTED] now"
    );
}

#[test]
fn given_missing_or_empty_field_when_previewing_base64_then_markers() {
    assert_eq!(preview_base64(None), "[ABSENT]");
    assert_eq!(preview_base64(Some("")), "[EMPTY]");
}

#[test]
fn given_data_uri_when_previewing_base64_then_only_header_and_length_shown() {
    assert_eq!(
        preview_base64(Some("data:audio/wav;base64,UklGRg==")),
        "data:audio/wav;base64,<8 chars>"
    );
}

#[test]
fn given_bare_base64_when_previewing_then_only_length_shown() {
    assert_eq!(preview_base64(Some("iVBORw0KGgo=")), "<12 chars>");
}
