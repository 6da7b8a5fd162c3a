use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Management action offered on a node.
///
/// The string identifiers are a stable contract with the menu renderer and the
/// modal router; never rename them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeAction {
    Transfer,
    Query,
    RunScript,
    DiskEncryption,
    MdmOff,
    Lock,
    Wipe,
    Unlock,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("unknown node action: {0:?}")]
    UnknownAction(String),
}

impl NodeAction {
    /// Every action, in the order the menu lists them.
    pub const ALL: [NodeAction; 9] = [
        NodeAction::Transfer,
        NodeAction::Query,
        NodeAction::RunScript,
        NodeAction::DiskEncryption,
        NodeAction::MdmOff,
        NodeAction::Lock,
        NodeAction::Wipe,
        NodeAction::Unlock,
        NodeAction::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeAction::Transfer => "transfer",
            NodeAction::Query => "query",
            NodeAction::RunScript => "runScript",
            NodeAction::DiskEncryption => "diskEncryption",
            NodeAction::MdmOff => "mdmOff",
            NodeAction::Lock => "lock",
            NodeAction::Wipe => "wipe",
            NodeAction::Unlock => "unlock",
            NodeAction::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NodeAction::Transfer => "Transfer",
            NodeAction::Query => "Query",
            NodeAction::RunScript => "Run script",
            NodeAction::DiskEncryption => "Show disk encryption key",
            NodeAction::MdmOff => "Turn off MDM",
            NodeAction::Lock => "Lock",
            NodeAction::Wipe => "Wipe",
            NodeAction::Unlock => "Unlock",
            NodeAction::Delete => "Delete",
        }
    }

    /// Position in the canonical menu order.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl FromStr for NodeAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ActionParseError::UnknownAction(s.to_string()))
    }
}

impl Display for NodeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
