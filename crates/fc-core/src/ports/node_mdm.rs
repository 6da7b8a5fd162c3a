//! MDM command port: lock, unlock and wipe a node on the server.

use async_trait::async_trait;

use crate::ids::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeMutationError {
    #[error("node {0} not found")]
    NotFound(NodeId),
    #[error("request rejected by server: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Server response to an unlock request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnlockResponse {
    /// PIN the end user types on an Apple device. Other platforms unlock
    /// remotely and get no PIN.
    pub unlock_pin: Option<String>,
}

#[async_trait]
pub trait NodeMdmPort: Send + Sync {
    async fn lock_node(&self, node_id: NodeId) -> Result<(), NodeMutationError>;

    async fn unlock_node(&self, node_id: NodeId) -> Result<UnlockResponse, NodeMutationError>;

    async fn wipe_node(&self, node_id: NodeId) -> Result<(), NodeMutationError>;
}
