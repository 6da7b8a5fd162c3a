//! Node domain models.

pub mod mdm;
pub mod platform;
pub mod record;
pub mod scripts;
pub mod status;

pub use mdm::{EnrollmentStatus, MdmConfig, MdmDeviceStatus, NodeMdm, PendingAction};
pub use platform::Platform;
pub use record::NodeRecord;
pub use scripts::ScriptsEnabled;
pub use status::NodeStatus;
