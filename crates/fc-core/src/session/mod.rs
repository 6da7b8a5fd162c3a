//! Who is acting, and under which license and server configuration.

pub mod role;
pub mod tier;

use serde::{Deserialize, Serialize};

use crate::node::MdmConfig;

pub use role::{ActingUser, ActorRoles, Role, TeamMembership};
pub use tier::SubscriptionTier;

/// Everything the console knows about the current session that is not tied
/// to one node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: ActingUser,
    pub tier: SubscriptionTier,
    pub mdm: MdmConfig,
}
