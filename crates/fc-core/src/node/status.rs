use serde::{Deserialize, Serialize};

/// Whether the node is currently checking in.
///
/// The server reports `"online"` for live nodes; every other value (offline,
/// missing, new, ...) is treated as offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    Online,
    Offline,
}

impl NodeStatus {
    pub fn from_api(status: Option<&str>) -> Self {
        match status {
            Some("online") => NodeStatus::Online,
            _ => NodeStatus::Offline,
        }
    }

    pub fn is_online(self) -> bool {
        self == NodeStatus::Online
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_online_string_is_online() {
        assert_eq!(NodeStatus::from_api(Some("online")), NodeStatus::Online);
        assert_eq!(NodeStatus::from_api(Some("offline")), NodeStatus::Offline);
        assert_eq!(NodeStatus::from_api(Some("missing")), NodeStatus::Offline);
        assert_eq!(NodeStatus::from_api(None), NodeStatus::Offline);
    }
}
