//! Node-detail port: read a node and ask its agent to refetch vitals.

use async_trait::async_trait;

use crate::ids::NodeId;
use crate::node::NodeRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeDetailError {
    #[error("node {0} not found")]
    NotFound(NodeId),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed node record: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait NodeDetailPort: Send + Sync {
    async fn get_node(&self, node_id: NodeId) -> Result<NodeRecord, NodeDetailError>;

    /// Ask the agent to report fresh vitals. The server flags the node with
    /// `refetch_requested` until the agent does.
    async fn refetch_node(&self, node_id: NodeId) -> Result<(), NodeDetailError>;
}
