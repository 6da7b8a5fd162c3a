use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use fc_core::ports::{NodeDetailError, NodeDetailPort};
use fc_core::{NodeId, NodeRecord};

use crate::api::NodeDetailDto;

/// Node detail read from a JSON document on disk.
///
/// Whatever writes the file plays the agent: it clears `refetch_requested`
/// once fresh vitals are in. Every read goes back to disk.
pub struct JsonFileNodeDetail {
    path: PathBuf,
}

impl JsonFileNodeDetail {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NodeDetailPort for JsonFileNodeDetail {
    async fn get_node(&self, node_id: NodeId) -> Result<NodeRecord, NodeDetailError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(NodeDetailError::NotFound(node_id))
            }
            Err(err) => return Err(NodeDetailError::Transport(err.to_string())),
        };

        let node = NodeDetailDto::from_json(&json)
            .map_err(|err| NodeDetailError::Malformed(err.to_string()))?;
        if node.id != node_id {
            debug!(%node_id, found = %node.id, path = %self.path.display(), "node file holds another node");
            return Err(NodeDetailError::NotFound(node_id));
        }
        Ok(node)
    }

    async fn refetch_node(&self, node_id: NodeId) -> Result<(), NodeDetailError> {
        debug!(%node_id, path = %self.path.display(), "waiting for node file to report fresh vitals");
        Ok(())
    }
}
