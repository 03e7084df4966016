//! Edit-mode selection and how it reacts to row deletion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the form is drafting a new row or editing an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// The next save appends a new row.
    #[default]
    None,
    /// The next update replaces the row at this position.
    Editing(usize),
}

impl Selection {
    /// The selected position, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Editing(index) => Some(*index),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// True when `index` is the selected row.
    pub fn is_selected(&self, index: usize) -> bool {
        self.index() == Some(index)
    }
}

impl From<Option<usize>> for Selection {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::None, Self::Editing)
    }
}

/// What happens to the selection when a row other than the selected one is
/// deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Keep the stored position unchanged, even if it now names another row.
    ///
    /// A position that falls past the end of the shrunk store is dropped.
    KeepIndex,
    /// Shift the position so it keeps naming the same row.
    #[default]
    FollowRecord,
}

impl SelectionPolicy {
    pub const fn all() -> &'static [SelectionPolicy] {
        &[Self::FollowRecord, Self::KeepIndex]
    }

    /// Identifier used in the settings file.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KeepIndex => "keep-index",
            Self::FollowRecord => "follow-record",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::KeepIndex => "Keep position",
            Self::FollowRecord => "Follow selected row",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::KeepIndex => {
                "Deleting another row leaves the edit position unchanged, \
                 so it may point at a different user afterwards."
            }
            Self::FollowRecord => {
                "Deleting a row above the one being edited shifts the edit \
                 position so the same user stays selected."
            }
        }
    }

    /// Selection after row `removed` is deleted from a store that now holds
    /// `remaining_len` rows. `removed` must differ from the selected index.
    pub fn adjust(&self, selection: Selection, removed: usize, remaining_len: usize) -> Selection {
        let Selection::Editing(selected) = selection else {
            return Selection::None;
        };
        debug_assert_ne!(selected, removed, "deleting the selected row clears it");
        match self {
            Self::KeepIndex if selected < remaining_len => Selection::Editing(selected),
            Self::KeepIndex => Selection::None,
            Self::FollowRecord if removed < selected => Selection::Editing(selected - 1),
            Self::FollowRecord => Selection::Editing(selected),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep-index" | "keep_index" => Ok(Self::KeepIndex),
            "follow-record" | "follow_record" => Ok(Self::FollowRecord),
            _ => Err(format!("Unknown selection policy: {s}")),
        }
    }
}
