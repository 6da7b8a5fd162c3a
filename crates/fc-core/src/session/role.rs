use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::ids::TeamId;

/// Permission level of a user, either globally or within one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Maintainer,
    Observer,
    ObserverPlus,
    GitOps,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Maintainer,
        Role::Observer,
        Role::ObserverPlus,
        Role::GitOps,
    ];

    /// Returns `None` for values the console does not know about; callers
    /// treat that as "no role".
    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "maintainer" => Some(Role::Maintainer),
            "observer" => Some(Role::Observer),
            "observer_plus" => Some(Role::ObserverPlus),
            "gitops" => Some(Role::GitOps),
            _ => None,
        }
    }

    /// Admin and maintainer may change nodes; everything else is read-only.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Admin | Role::Maintainer)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Maintainer => write!(f, "maintainer"),
            Role::Observer => write!(f, "observer"),
            Role::ObserverPlus => write!(f, "observer_plus"),
            Role::GitOps => write!(f, "gitops"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub team_id: TeamId,
    pub role: Role,
}

/// The user the console acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActingUser {
    pub global_role: Option<Role>,
    pub teams: Vec<TeamMembership>,
}

impl ActingUser {
    pub fn global(role: Role) -> Self {
        Self {
            global_role: Some(role),
            teams: Vec::new(),
        }
    }

    pub fn team_member(team_id: TeamId, role: Role) -> Self {
        Self {
            global_role: None,
            teams: vec![TeamMembership { team_id, role }],
        }
    }
}

/// The single role that is authoritative for one node.
///
/// A global role applies to every node. A team role applies only to nodes of
/// that team. A user with neither has no role on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorRoles {
    Global(Role),
    Team(Role),
    NoRole,
}

impl ActorRoles {
    pub fn for_node(user: &ActingUser, node_team: Option<TeamId>) -> Self {
        if let Some(role) = user.global_role {
            return ActorRoles::Global(role);
        }

        let Some(team_id) = node_team else {
            return ActorRoles::NoRole;
        };

        user.teams
            .iter()
            .find(|membership| membership.team_id == team_id)
            .map(|membership| ActorRoles::Team(membership.role))
            .unwrap_or(ActorRoles::NoRole)
    }

    pub fn is_global_admin(self) -> bool {
        self == ActorRoles::Global(Role::Admin)
    }

    pub fn is_global_maintainer(self) -> bool {
        self == ActorRoles::Global(Role::Maintainer)
    }

    pub fn is_global_observer(self) -> bool {
        self == ActorRoles::Global(Role::Observer)
    }

    pub fn is_team_admin(self) -> bool {
        self == ActorRoles::Team(Role::Admin)
    }

    pub fn is_team_maintainer(self) -> bool {
        self == ActorRoles::Team(Role::Maintainer)
    }

    pub fn is_team_observer(self) -> bool {
        self == ActorRoles::Team(Role::Observer)
    }

    /// Global admin or global maintainer.
    pub fn is_global_elevated(self) -> bool {
        self.is_global_admin() || self.is_global_maintainer()
    }

    /// Admin or maintainer at whichever scope is authoritative.
    pub fn is_elevated(self) -> bool {
        self.is_global_elevated() || self.is_team_admin() || self.is_team_maintainer()
    }
}
