use serde::{Deserialize, Serialize};

use super::{NodeMdm, NodeStatus, Platform, ScriptsEnabled};
use crate::ids::{NodeId, TeamId};

/// Node detail as loaded from the server, already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub team_id: Option<TeamId>,
    pub platform: Platform,
    pub status: NodeStatus,
    pub mdm: NodeMdm,
    pub scripts_enabled: ScriptsEnabled,
    pub encryption_key_available: bool,
    /// A vitals refetch was requested and the agent has not reported back yet.
    pub refetch_requested: bool,
}

impl NodeRecord {
    /// A record carrying only an id and a platform; every other fact takes
    /// its most restrictive value.
    pub fn new(id: NodeId, platform: Platform) -> Self {
        Self {
            id,
            team_id: None,
            platform,
            status: NodeStatus::Offline,
            mdm: NodeMdm::default(),
            scripts_enabled: ScriptsEnabled::Unknown,
            encryption_key_available: false,
            refetch_requested: false,
        }
    }
}
