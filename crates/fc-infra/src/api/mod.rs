//! Wire shapes returned by the fleet server and their mapping onto domain
//! records.
//!
//! Every field is optional on the wire. Missing facts take the most
//! restrictive value, except `scripts_enabled`, which stays unknown.

pub mod node;
pub mod user;

pub use node::{NodeDetailDto, NodeMdmDto, RecordMappingError};
pub use user::{TeamRoleDto, UserDto};

/// The inner object under the first of `keys` present, or the body itself.
fn unwrap_envelope(mut body: serde_json::Value, keys: &[&str]) -> serde_json::Value {
    let inner = body
        .as_object_mut()
        .and_then(|fields| keys.iter().find_map(|key| fields.remove(*key)));
    inner.unwrap_or(body)
}
