//! The dashboard controller: one record store, one form buffer, one
//! selection, and the transitions between them.
//!
//! States are `Idle` ([`Selection::None`]) and `Editing(i)`
//! ([`Selection::Editing`]). Every operation runs to completion and returns a
//! [`Transition`] describing its effect. No operation validates input; the
//! required-field gate belongs to the presentation layer
//! (see [`FormBuffer::missing_fields`]).

use std::fmt;

use tracing::{debug, trace};
use ums_model::{FieldValue, FormBuffer, FormField, ModelError, Selection, SelectionPolicy};

use crate::store::RecordStore;

/// A user intent, queued by the view and applied after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetField(FormField, FieldValue),
    Submit,
    SelectRow(usize),
    CommitUpdate,
    DeleteRow(usize),
    Clear,
}

/// What an operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FieldSet { field: FormField },
    Appended { index: usize },
    Selected { index: usize },
    Replaced { index: usize },
    Removed { index: usize, selection_cleared: bool },
    Cleared,
    /// The operation had nothing to act on (update while idle).
    Ignored,
}

impl Transition {
    /// True when the record store changed.
    pub fn changed_store(&self) -> bool {
        matches!(
            self,
            Self::Appended { .. } | Self::Replaced { .. } | Self::Removed { .. }
        )
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldSet { field } => write!(f, "Edited {}", field.label()),
            Self::Appended { index } => write!(f, "Saved user as row {}", index + 1),
            Self::Selected { index } => write!(f, "Editing row {}", index + 1),
            Self::Replaced { index } => write!(f, "Updated row {}", index + 1),
            Self::Removed {
                index,
                selection_cleared: true,
            } => write!(f, "Deleted row {} and cleared the form", index + 1),
            Self::Removed { index, .. } => write!(f, "Deleted row {}", index + 1),
            Self::Cleared => f.write_str("Cleared the form"),
            Self::Ignored => f.write_str("Nothing selected to update"),
        }
    }
}

/// Owns all state for one user-management page.
#[derive(Debug, Clone)]
pub struct Dashboard {
    display_name: String,
    store: RecordStore,
    buffer: FormBuffer,
    selection: Selection,
    policy: SelectionPolicy,
}

impl Dashboard {
    /// Mount a dashboard greeting `display_name`, with an empty store.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            store: RecordStore::new(),
            buffer: FormBuffer::new(),
            selection: Selection::None,
            policy: SelectionPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.display_name)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn buffer(&self) -> &FormBuffer {
        &self.buffer
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_idle(&self) -> bool {
        !self.selection.is_editing()
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: SelectionPolicy) {
        self.policy = policy;
    }

    /// Apply a queued action.
    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::SetField(field, value) => self.set_field(field, value),
            Action::Submit => self.submit(),
            Action::SelectRow(index) => self.select_row(index),
            Action::CommitUpdate => self.commit_update(),
            Action::DeleteRow(index) => self.delete_row(index),
            Action::Clear => self.clear(),
        }
    }

    /// Update one buffer field; the others are left as they are.
    pub fn set_field(&mut self, field: FormField, value: FieldValue) -> Transition {
        trace!(field = %field, "set field");
        let mut buffer = self.buffer.clone();
        buffer.set(field, value);
        self.buffer = buffer;
        Transition::FieldSet { field }
    }

    /// String-keyed variant of [`Dashboard::set_field`], as fed by control
    /// ids and raw values.
    pub fn set_field_str(&mut self, field_id: &str, raw: &str) -> Result<Transition, ModelError> {
        let field: FormField = field_id.parse()?;
        let value = FieldValue::parse(field, raw)?;
        Ok(self.set_field(field, value))
    }

    /// Reset every field to empty and return to `Idle`. Idempotent.
    pub fn clear(&mut self) -> Transition {
        self.buffer = FormBuffer::new();
        self.selection = Selection::None;
        debug!("cleared form");
        Transition::Cleared
    }

    /// Append the buffer as a new row, then clear.
    ///
    /// The selection is not consulted: saving while editing row `i` still
    /// appends and leaves row `i` untouched.
    pub fn submit(&mut self) -> Transition {
        let record = self.buffer.to_record();
        self.store.append(record);
        let index = self.store.len() - 1;
        debug!(index, len = self.store.len(), "appended record");
        self.clear();
        Transition::Appended { index }
    }

    /// Load row `index` into the buffer and enter `Editing(index)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn select_row(&mut self, index: usize) -> Transition {
        let Some(record) = self.store.get(index) else {
            panic!(
                "select_row: row index {index} out of range for store of {} rows",
                self.store.len()
            );
        };
        self.buffer = FormBuffer::from(record);
        self.selection = Selection::Editing(index);
        debug!(index, "selected row");
        Transition::Selected { index }
    }

    /// Replace the selected row with the buffer, then clear. A no-op while
    /// `Idle`.
    pub fn commit_update(&mut self) -> Transition {
        let Selection::Editing(index) = self.selection else {
            debug!("update ignored, no row selected");
            return Transition::Ignored;
        };
        self.store.replace_at(index, self.buffer.to_record());
        debug!(index, "replaced record");
        self.clear();
        Transition::Replaced { index }
    }

    /// Remove row `index`.
    ///
    /// Deleting the selected row clears the form. Deleting any other row
    /// adjusts the selection according to the [`SelectionPolicy`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn delete_row(&mut self, index: usize) -> Transition {
        self.store.remove_at(index);
        let len = self.store.len();
        debug!(index, len, "removed record");

        if self.selection.is_selected(index) {
            self.clear();
            return Transition::Removed {
                index,
                selection_cleared: true,
            };
        }

        let before = self.selection;
        self.selection = self.policy.adjust(before, index, len);
        if before != self.selection {
            debug!(
                policy = %self.policy,
                from = ?before.index(),
                to = ?self.selection.index(),
                "selection adjusted after delete"
            );
        }
        Transition::Removed {
            index,
            selection_cleared: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ums_model::{Gender, UserRecord};

    fn row(name: &str) -> UserRecord {
        UserRecord::new(name, "Doe", format!("{name}@x.com"), Gender::Male, "555-0000")
    }

    fn dashboard_with(rows: &[&str]) -> Dashboard {
        let mut dashboard = Dashboard::new("operator");
        for name in rows {
            dashboard.buffer = FormBuffer::from(&row(name));
            dashboard.submit();
        }
        dashboard
    }

    #[test]
    fn test_greeting() {
        assert_eq!(Dashboard::new("Sam").greeting(), "Hello, Sam!");
    }

    #[test]
    fn test_submit_clears_buffer() {
        let dashboard = dashboard_with(&["a"]);
        assert_eq!(dashboard.store().len(), 1);
        assert!(dashboard.buffer().is_empty());
        assert!(dashboard.is_idle());
    }

    #[test]
    fn test_select_loads_buffer() {
        let mut dashboard = dashboard_with(&["a", "b"]);
        assert_eq!(dashboard.select_row(1), Transition::Selected { index: 1 });
        assert_eq!(dashboard.buffer().to_record(), row("b"));
        assert_eq!(dashboard.selection(), Selection::Editing(1));
    }

    #[test]
    fn test_update_while_idle_is_ignored() {
        let mut dashboard = dashboard_with(&["a"]);
        dashboard.set_field(FormField::FirstName, FieldValue::Text("x".to_string()));
        assert_eq!(dashboard.commit_update(), Transition::Ignored);
        assert_eq!(dashboard.store()[0], row("a"));
        assert_eq!(dashboard.buffer().first_name, "x");
    }

    #[test]
    fn test_set_field_str_rejects_unknown_field() {
        let mut dashboard = Dashboard::new("operator");
        let error = dashboard.set_field_str("age", "42").unwrap_err();
        assert_eq!(error, ModelError::UnknownField("age".to_string()));
    }

    #[test]
    fn test_transition_display() {
        assert_eq!(Transition::Appended { index: 0 }.to_string(), "Saved user as row 1");
        assert_eq!(
            Transition::Removed {
                index: 2,
                selection_cleared: true
            }
            .to_string(),
            "Deleted row 3 and cleared the form"
        );
        assert!(Transition::Replaced { index: 0 }.changed_store());
        assert!(!Transition::Cleared.changed_store());
    }

    #[test]
    #[should_panic(expected = "select_row: row index 0 out of range")]
    fn test_select_out_of_range_panics() {
        Dashboard::new("operator").select_row(0);
    }
}
