//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the collaborators this
//! workspace does not implement: the network layer and the modal router.

pub mod action_router;
pub mod node_detail;
pub mod node_mdm;

pub use action_router::ActionRouterPort;
pub use node_detail::{NodeDetailError, NodeDetailPort};
pub use node_mdm::{NodeMdmPort, NodeMutationError, UnlockResponse};
