//! Fleet Console Application Orchestration Layer
//!
//! This crate contains the node action use cases and the lifecycle slot the
//! node view owns.

pub mod lifecycle_slot;
pub mod usecases;

pub use lifecycle_slot::{LifecycleSlot, LifecycleView};
pub use usecases::{ChangeNodeLifecycle, DispatchNodeAction, ListNodeActions, RefetchNodeVitals};
