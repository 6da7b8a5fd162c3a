//! Node action authorization: which actions a node offers to an actor, and
//! which of them are disabled.

pub mod capability;
pub mod context;
pub mod descriptor;
pub mod eligibility;
pub mod node_action;
pub mod tooltip;

pub use context::{MdmContext, NodeActionContext};
pub use descriptor::{ActionDescriptor, TooltipContent};
pub use eligibility::ActionEligibilityEngine;
pub use node_action::{ActionParseError, NodeAction};
pub use tooltip::DisableReason;
