//! Device lock/wipe lifecycle.

pub mod state;
pub mod status_tag;
pub mod transition;

pub use state::DeviceLifecycleState;
pub use status_tag::DeviceStatusTag;
pub use transition::{LifecycleEvent, OptimisticTransition};
