//! Node action use cases
//!
//! ```text
//! node record + session ──→ ListNodeActions ──→ menu
//!                                                 │ selection
//!                                                 ↓
//!                                   DispatchNodeAction ──→ router (modal)
//!                                                 │ confirmed lock/unlock/wipe
//!                                                 ↓
//!                                   ChangeNodeLifecycle ──→ slot (optimistic)
//!                                                 │
//!                                   RefetchNodeVitals  ──→ slot (authoritative)
//! ```

pub mod change_node_lifecycle;
pub mod dispatch_node_action;
pub mod list_node_actions;
pub mod refetch_node_vitals;

pub use change_node_lifecycle::{ChangeNodeLifecycle, LifecycleChange, MutateNodeError};
pub use dispatch_node_action::{DispatchActionError, DispatchNodeAction};
pub use list_node_actions::{ListNodeActions, NodeActionsView};
pub use refetch_node_vitals::{
    RefetchNodeVitals, RefetchNodeVitalsError, RefetchOutcome, RefetchPolicy,
};
