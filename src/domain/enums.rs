use serde::{Deserialize, Serialize};

/// What happens to uncommitted text when the user starts editing another task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchPolicy {
    /// Commit the pending title to the task being left
    #[default]
    Commit,
    /// Drop the pending title silently
    Discard,
}

impl SwitchPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Commit => "commit",
            Self::Discard => "discard",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    CreateList,
    DeleteLists,
    Alert,
}
