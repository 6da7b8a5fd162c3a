//! # fc-core
//!
//! Core domain models and node action authorization for Fleet Console.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod action;
pub mod config;
pub mod ids;
pub mod lifecycle;
pub mod node;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use action::{ActionDescriptor, ActionEligibilityEngine, NodeAction, NodeActionContext};
pub use config::AppConfig;
pub use ids::{NodeId, TeamId};
pub use lifecycle::{DeviceLifecycleState, LifecycleEvent, OptimisticTransition};
pub use node::{NodeRecord, Platform, ScriptsEnabled};
pub use session::{ActingUser, ActorRoles, Role, Session, SubscriptionTier};
