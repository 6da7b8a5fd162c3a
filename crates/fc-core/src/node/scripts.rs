use serde::{Deserialize, Serialize};

/// Tri-state report of the agent's script support.
///
/// `Unknown` is not `Disabled`: agents that do not report the flag must not
/// have anything restricted on their behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScriptsEnabled {
    Enabled,
    Disabled,
    #[default]
    Unknown,
}

impl ScriptsEnabled {
    pub const ALL: [ScriptsEnabled; 3] = [
        ScriptsEnabled::Enabled,
        ScriptsEnabled::Disabled,
        ScriptsEnabled::Unknown,
    ];

    /// True only when the agent explicitly reported scripts as disabled.
    pub fn is_explicitly_disabled(self) -> bool {
        self == ScriptsEnabled::Disabled
    }
}

impl From<Option<bool>> for ScriptsEnabled {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => ScriptsEnabled::Enabled,
            Some(false) => ScriptsEnabled::Disabled,
            None => ScriptsEnabled::Unknown,
        }
    }
}
