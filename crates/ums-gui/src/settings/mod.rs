//! Settings types for the User Management Studio GUI.
//!
//! Only application preferences are persisted. User records never are.

mod persistence;

pub use persistence::{
    SettingsError, load_settings_from, read_settings, save_settings_to, settings_path,
};

use serde::{Deserialize, Serialize};
use ums_model::SelectionPolicy;

// ============================================================================
// Main Settings Struct
// ============================================================================

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub editor: EditorSettings,
    pub display: DisplaySettings,
}

// ============================================================================
// General Settings
// ============================================================================

/// General application preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

// ============================================================================
// Editor Settings
// ============================================================================

/// How the form reacts to edits of the record table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Selection handling when a row other than the edited one is deleted.
    pub selection_policy: SelectionPolicy,
}

// ============================================================================
// Display Settings
// ============================================================================

/// Record table and window preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Alternate row shading in the user table.
    pub striped_rows: bool,
    /// Initial window width in logical points.
    pub window_width: f32,
    /// Initial window height in logical points.
    pub window_height: f32,
}

impl DisplaySettings {
    pub const MIN_WIDTH: f32 = 720.0;
    pub const MIN_HEIGHT: f32 = 480.0;

    /// Window size clamped to the minimum the layout supports.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.window_width.max(Self::MIN_WIDTH),
            self.window_height.max(Self::MIN_HEIGHT),
        ]
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            striped_rows: true,
            window_width: 1100.0,
            window_height: 720.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.general.dark_mode);
        assert_eq!(
            settings.editor.selection_policy,
            SelectionPolicy::FollowRecord
        );
        assert!(settings.display.striped_rows);
    }

    #[test]
    fn test_window_size_is_clamped() {
        let display = DisplaySettings {
            window_width: 100.0,
            window_height: 900.0,
            ..DisplaySettings::default()
        };
        assert_eq!(display.window_size(), [720.0, 900.0]);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [editor]
            selection_policy = "keep-index"
            "#,
        )
        .unwrap();
        assert_eq!(settings.editor.selection_policy, SelectionPolicy::KeepIndex);
        assert_eq!(settings.display, DisplaySettings::default());
        assert!(!settings.general.dark_mode);
    }
}
