//! Tests for ums-model types.

use ums_model::{
    FieldValue, FormBuffer, FormField, Gender, ModelError, Selection, SelectionPolicy, UserRecord,
};

fn alice() -> UserRecord {
    UserRecord::new("Alice", "Smith", "a@x.com", Gender::Female, "555-1111")
}

#[test]
fn buffer_loaded_from_record_is_verbatim() {
    let record = alice();
    let buffer = FormBuffer::from(&record);
    for field in FormField::all() {
        assert_eq!(buffer.get(*field), record.display_value(*field));
    }
}

#[test]
fn string_keyed_field_parse_reports_unknown_gender() {
    let error = FieldValue::parse(FormField::Gender, "unicorn").unwrap_err();
    assert_eq!(error, ModelError::UnknownGender("unicorn".to_string()));
    assert_eq!(
        error.to_string(),
        "unknown gender: \"unicorn\" (expected male, female or other)"
    );
}

#[test]
fn text_aimed_at_gender_is_parsed() {
    let mut buffer = FormBuffer::new();
    buffer.set(FormField::Gender, FieldValue::Text("Other".to_string()));
    assert_eq!(buffer.gender, Some(Gender::Other));

    buffer.set(FormField::Gender, FieldValue::Text(String::new()));
    assert_eq!(buffer.gender, None);
}

#[test]
fn empty_buffer_is_missing_every_field() {
    let buffer = FormBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.missing_fields(), FormField::all().to_vec());
}

#[test]
fn selection_from_option() {
    assert_eq!(Selection::from(None), Selection::None);
    assert_eq!(Selection::from(Some(3)), Selection::Editing(3));
    assert!(Selection::Editing(3).is_selected(3));
    assert!(!Selection::None.is_editing());
}

#[test]
fn selection_policy_default_follows_record() {
    assert_eq!(SelectionPolicy::default(), SelectionPolicy::FollowRecord);
    let json = serde_json::to_string(&SelectionPolicy::KeepIndex).unwrap();
    assert_eq!(json, "\"keep-index\"");
}

#[test]
fn record_display_is_one_line() {
    assert_eq!(
        alice().to_string(),
        "Alice Smith <a@x.com> (female, 555-1111)"
    );
    assert_eq!(
        UserRecord::default().to_string(),
        " <> (unspecified, )"
    );
}
