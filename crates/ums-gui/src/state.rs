//! Application-level state
//!
//! Wraps the [`Dashboard`] with the presentation concerns around it: the
//! required-field gate on Save, the status line, and persisted preferences.

use std::path::PathBuf;

use tracing::{debug, info, warn};
use ums_core::{Action, Dashboard, Transition};
use ums_model::{FormField, SelectionPolicy};

use crate::logging::redact_value;
use crate::settings::{Settings, save_settings_to};

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// One-line feedback shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Preferences forced from the command line. They apply to this run only
/// and are never written to the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub dark_mode: Option<bool>,
    pub selection_policy: Option<SelectionPolicy>,
}

/// Top-level application state
pub struct AppState {
    pub dashboard: Dashboard,
    /// Preferences as stored on disk.
    pub settings: Settings,
    pub overrides: RunOverrides,
    /// Where preference changes are written; `None` keeps them in memory.
    pub settings_path: Option<PathBuf>,
    pub status: Option<StatusMessage>,
    /// Fields flagged by the last blocked Save, in form order.
    pub missing_fields: Vec<FormField>,
}

impl AppState {
    pub fn new(
        display_name: impl Into<String>,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let dashboard =
            Dashboard::new(display_name).with_policy(settings.editor.selection_policy);
        Self {
            dashboard,
            settings,
            overrides: RunOverrides::default(),
            settings_path,
            status: None,
            missing_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: RunOverrides) -> Self {
        self.overrides = overrides;
        self.dashboard.set_policy(self.selection_policy());
        self
    }

    /// Theme in effect, after command-line overrides.
    pub fn dark_mode(&self) -> bool {
        self.overrides
            .dark_mode
            .unwrap_or(self.settings.general.dark_mode)
    }

    /// Selection policy in effect, after command-line overrides.
    pub fn selection_policy(&self) -> SelectionPolicy {
        self.overrides
            .selection_policy
            .unwrap_or(self.settings.editor.selection_policy)
    }

    /// Apply a user action, enforcing the required-field gate on Save.
    ///
    /// Returns `None` when the action was blocked.
    pub fn dispatch(&mut self, action: Action) -> Option<Transition> {
        if action == Action::Submit {
            let missing = self.dashboard.buffer().missing_fields();
            if !missing.is_empty() {
                let labels: Vec<_> = missing.iter().map(FormField::label).collect();
                warn!(missing = ?labels, "save blocked by required fields");
                self.status = Some(StatusMessage::new(
                    StatusKind::Warning,
                    format!("Please fill in: {}", labels.join(", ")),
                ));
                self.missing_fields = missing;
                return None;
            }
        }

        let transition = self.dashboard.apply(action);
        self.log_transition(transition);

        match transition {
            Transition::FieldSet { field } => {
                self.missing_fields.retain(|missing| *missing != field);
            }
            Transition::Ignored => {
                self.status = Some(StatusMessage::new(StatusKind::Warning, transition.to_string()));
            }
            _ => {
                self.missing_fields.clear();
                self.status = Some(StatusMessage::new(StatusKind::Info, transition.to_string()));
            }
        }
        Some(transition)
    }

    fn log_transition(&self, transition: Transition) {
        if !transition.changed_store() {
            debug!("{}", transition);
            return;
        }
        let store = self.dashboard.store();
        match transition {
            Transition::Appended { index } | Transition::Replaced { index } => {
                let user = store.get(index).map(ToString::to_string).unwrap_or_default();
                info!(
                    row = index + 1,
                    rows = store.len(),
                    user = redact_value(&user),
                    "{}",
                    transition
                );
            }
            _ => info!(rows = store.len(), "{}", transition),
        }
    }

    /// Choosing a theme in the app replaces any command-line override and
    /// is saved.
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        if self.dark_mode() == dark_mode {
            return;
        }
        self.overrides.dark_mode = None;
        self.settings.general.dark_mode = dark_mode;
        info!(dark_mode, "theme changed");
        self.persist_settings();
    }

    pub fn set_selection_policy(&mut self, policy: SelectionPolicy) {
        if self.selection_policy() == policy {
            return;
        }
        self.overrides.selection_policy = None;
        self.settings.editor.selection_policy = policy;
        self.dashboard.set_policy(policy);
        info!(policy = %policy, "selection policy changed");
        self.persist_settings();
    }

    pub fn set_striped_rows(&mut self, striped: bool) {
        if self.settings.display.striped_rows == striped {
            return;
        }
        self.settings.display.striped_rows = striped;
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            debug!("no settings path, preference kept for this session");
            return;
        };
        if let Err(e) = save_settings_to(&self.settings, path) {
            tracing::error!("Failed to save settings: {}", e);
            self.status = Some(StatusMessage::new(
                StatusKind::Error,
                format!("Could not save preferences: {e}"),
            ));
        }
    }
}
