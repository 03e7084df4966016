//! Tests for the application state wrapped around the dashboard.

use tempfile::tempdir;
use ums_core::{Action, Transition};
use ums_gui::settings::{Settings, load_settings_from, read_settings};
use ums_gui::state::{AppState, RunOverrides, StatusKind};
use ums_model::{FieldValue, FormField, Gender, Selection, SelectionPolicy};

fn text(field: FormField, value: &str) -> Action {
    Action::SetField(field, FieldValue::Text(value.to_string()))
}

fn fill_complete(state: &mut AppState, first: &str) {
    state.dispatch(text(FormField::FirstName, first));
    state.dispatch(text(FormField::LastName, "Smith"));
    state.dispatch(text(FormField::Email, "a@x.com"));
    state.dispatch(Action::SetField(
        FormField::Gender,
        FieldValue::Gender(Some(Gender::Female)),
    ));
    state.dispatch(text(FormField::PhoneNumber, "555-1111"));
}

fn in_memory() -> AppState {
    AppState::new("Alice", Settings::default(), None)
}

#[test]
fn test_save_blocked_until_required_fields_filled() {
    let mut state = in_memory();
    state.dispatch(text(FormField::FirstName, "Alice"));

    assert_eq!(state.dispatch(Action::Submit), None);
    assert!(state.dashboard.store().is_empty());
    assert_eq!(
        state.missing_fields,
        vec![
            FormField::LastName,
            FormField::Email,
            FormField::Gender,
            FormField::PhoneNumber
        ]
    );
    let status = state.status.clone().expect("blocked save sets a status");
    assert_eq!(status.kind, StatusKind::Warning);
    assert_eq!(
        status.text,
        "Please fill in: Last Name, Email, Gender, Phone Number"
    );
}

#[test]
fn test_whitespace_only_input_counts_as_missing() {
    let mut state = in_memory();
    fill_complete(&mut state, "   ");

    assert_eq!(state.dispatch(Action::Submit), None);
    assert_eq!(state.missing_fields, vec![FormField::FirstName]);
}

#[test]
fn test_editing_a_flagged_field_unflags_it() {
    let mut state = in_memory();
    state.dispatch(Action::Submit);
    assert_eq!(state.missing_fields.len(), FormField::all().len());

    state.dispatch(text(FormField::Email, "a@x.com"));
    assert!(!state.missing_fields.contains(&FormField::Email));
    assert_eq!(state.missing_fields.len(), FormField::all().len() - 1);
}

#[test]
fn test_successful_save_clears_flags_and_reports() {
    let mut state = in_memory();
    state.dispatch(Action::Submit);
    fill_complete(&mut state, "Alice");

    assert_eq!(
        state.dispatch(Action::Submit),
        Some(Transition::Appended { index: 0 })
    );
    assert!(state.missing_fields.is_empty());
    assert!(state.dashboard.buffer().is_empty());
    let status = state.status.clone().expect("save sets a status");
    assert_eq!(status.kind, StatusKind::Info);
    assert_eq!(status.text, "Saved user as row 1");
}

#[test]
fn test_update_while_idle_warns() {
    let mut state = in_memory();
    assert_eq!(
        state.dispatch(Action::CommitUpdate),
        Some(Transition::Ignored)
    );
    let status = state.status.clone().expect("ignored update sets a status");
    assert_eq!(status.kind, StatusKind::Warning);
    assert_eq!(status.text, "Nothing selected to update");
}

#[test]
fn test_update_is_not_gated() {
    let mut state = in_memory();
    fill_complete(&mut state, "Alice");
    state.dispatch(Action::Submit);
    state.dispatch(Action::SelectRow(0));
    state.dispatch(text(FormField::Email, ""));

    assert_eq!(
        state.dispatch(Action::CommitUpdate),
        Some(Transition::Replaced { index: 0 })
    );
    assert_eq!(state.dashboard.store()[0].email, "");
    assert_eq!(state.dashboard.selection(), Selection::None);
}

#[test]
fn test_selection_policy_reaches_dashboard_and_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.toml");
    let mut state = AppState::new("Alice", Settings::default(), Some(path.clone()));
    assert_eq!(state.dashboard.policy(), SelectionPolicy::FollowRecord);

    state.set_selection_policy(SelectionPolicy::KeepIndex);

    assert_eq!(state.dashboard.policy(), SelectionPolicy::KeepIndex);
    let saved = read_settings(&path).expect("settings written");
    assert_eq!(saved.editor.selection_policy, SelectionPolicy::KeepIndex);
}

#[test]
fn test_unchanged_preference_does_not_write() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let mut state = AppState::new("Alice", Settings::default(), Some(path.clone()));

    state.set_dark_mode(Settings::default().general.dark_mode);
    state.set_striped_rows(Settings::default().display.striped_rows);

    assert!(!path.exists());
}

#[test]
fn test_preferences_without_path_stay_in_memory() {
    let mut state = in_memory();
    state.set_dark_mode(true);
    state.set_striped_rows(false);

    assert!(state.settings.general.dark_mode);
    assert!(!state.settings.display.striped_rows);
    assert_eq!(state.status, None);
}

#[test]
fn test_command_line_overrides_are_not_saved() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let overrides = RunOverrides {
        dark_mode: Some(true),
        selection_policy: Some(SelectionPolicy::KeepIndex),
    };
    let mut state = AppState::new("Alice", load_settings_from(&path), Some(path.clone()))
        .with_overrides(overrides);
    assert!(state.dark_mode());
    assert_eq!(state.selection_policy(), SelectionPolicy::KeepIndex);
    assert_eq!(state.dashboard.policy(), SelectionPolicy::KeepIndex);

    state.set_striped_rows(false);

    let saved = read_settings(&path).expect("settings written");
    assert!(!saved.display.striped_rows);
    assert!(!saved.general.dark_mode);
    assert_eq!(saved.editor.selection_policy, SelectionPolicy::FollowRecord);
    assert!(state.dark_mode());
}

#[test]
fn test_in_app_choice_replaces_override_and_is_saved() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let mut state = AppState::new("Alice", Settings::default(), Some(path.clone()))
        .with_overrides(RunOverrides {
            dark_mode: Some(true),
            selection_policy: None,
        });

    state.set_dark_mode(false);
    assert!(!state.dark_mode());
    assert_eq!(state.overrides.dark_mode, None);
    assert!(!read_settings(&path).expect("settings written").general.dark_mode);

    state.set_dark_mode(true);
    assert!(read_settings(&path).expect("settings written").general.dark_mode);
}
