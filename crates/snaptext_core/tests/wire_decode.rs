use pretty_assertions::assert_eq;
use snaptext_core::{ExtractionResult, KeyValuePair, TextMarkers};

#[test]
fn full_response_decodes_in_order() {
    let body = r#"{
        "text": "Name: Ada\nRole: Engineer",
        "key_values": [
            {"key": "Name", "value": "Ada"},
            {"key": "Role", "value": "Engineer"},
            {"key": "Name", "value": "Lovelace"}
        ]
    }"#;

    let result: ExtractionResult = serde_json::from_str(body).expect("decode");
    assert_eq!(result.text.as_deref(), Some("Name: Ada\nRole: Engineer"));
    assert_eq!(
        result.key_values,
        Some(vec![
            KeyValuePair::new("Name", "Ada"),
            KeyValuePair::new("Role", "Engineer"),
            KeyValuePair::new("Name", "Lovelace"),
        ])
    );
    assert_eq!(result.application_error(), None);
    assert_eq!(result.warning(), None);
}

#[test]
fn missing_fields_degrade_to_empty() {
    let result: ExtractionResult =
        serde_json::from_str(r#"{"key_values": [{"key": "A"}, {}], "extra": 1}"#)
            .expect("decode");

    assert_eq!(result.text, None);
    assert_eq!(
        result.key_values,
        Some(vec![KeyValuePair::new("A", ""), KeyValuePair::new("", "")])
    );
}

#[test]
fn error_only_body_is_application_error() {
    let result: ExtractionResult =
        serde_json::from_str(r#"{"error": "File must be an image"}"#).expect("decode");

    assert_eq!(result.application_error(), Some("File must be an image"));
}

#[test]
fn null_key_or_value_decodes_as_empty() {
    let result: ExtractionResult = serde_json::from_str(
        r#"{"text":"t","key_values":[{"key":null,"value":"1"},{"key":"k","value":null}]}"#,
    )
    .expect("decode");

    assert_eq!(result.text.as_deref(), Some("t"));
    assert_eq!(
        result.key_values,
        Some(vec![KeyValuePair::new("", "1"), KeyValuePair::new("k", "")])
    );
}

#[test]
fn marker_classes_follow_flags() {
    assert_eq!(
        TextMarkers::default().classes(),
        [("loading", false), ("error", false)]
    );
    assert_eq!(
        TextMarkers {
            loading: true,
            error: false
        }
        .classes(),
        [("loading", true), ("error", false)]
    );
    assert_eq!(
        TextMarkers {
            loading: false,
            error: true
        }
        .classes(),
        [("loading", false), ("error", true)]
    );
}
