//! One predicate per node action: is the action applicable at all?
//!
//! Each predicate is pure and reads only the context. An action whose
//! predicate is false is removed from the menu; disabling is a separate pass
//! (see `eligibility`).
//!
//! `query` and `diskEncryption` are read-only and do not look at the role.

use super::NodeActionContext;
use crate::lifecycle::DeviceLifecycleState;
use crate::node::Platform;

pub fn can_transfer_team(ctx: &NodeActionContext) -> bool {
    ctx.is_premium() && ctx.roles.is_global_elevated()
}

/// Offline nodes keep the action; it is disabled instead.
pub fn can_query_node(ctx: &NodeActionContext) -> bool {
    !ctx.platform.is_ios_or_ipados()
}

pub fn can_show_disk_encryption(ctx: &NodeActionContext) -> bool {
    ctx.is_premium() && ctx.stores_encryption_key && !ctx.platform.is_ios_or_ipados()
}

/// "Turn off MDM".
pub fn can_edit_mdm(ctx: &NodeActionContext) -> bool {
    ctx.is_darwin_managed_by_own_mdm() && ctx.roles.is_elevated()
}

pub fn can_lock_node(ctx: &NodeActionContext) -> bool {
    let platform_path = ctx.platform == Platform::Windows
        || ctx.platform.is_linux_like()
        || ctx.is_darwin_managed_by_own_mdm();

    ctx.is_premium()
        && ctx.lifecycle == DeviceLifecycleState::Unlocked
        && platform_path
        && ctx.roles.is_elevated()
}

pub fn can_wipe_node(ctx: &NodeActionContext) -> bool {
    let platform_path = ctx.platform.is_linux_like()
        || (ctx.is_mdm_enabled_for_platform()
            && ctx.mdm.connected_to_own_mdm
            && ctx.mdm.enrolled);

    ctx.is_premium()
        && ctx.lifecycle == DeviceLifecycleState::Unlocked
        && platform_path
        && ctx.roles.is_elevated()
}

/// On darwin the unlock PIN may be viewed again while the node is still
/// `Unlocking`.
pub fn can_unlock(ctx: &NodeActionContext) -> bool {
    let valid_state = ctx.lifecycle == DeviceLifecycleState::Locked
        || (ctx.lifecycle == DeviceLifecycleState::Unlocking && ctx.platform == Platform::Darwin);
    let platform_path = ctx.is_darwin_managed_by_own_mdm()
        || ctx.platform == Platform::Windows
        || ctx.platform.is_linux_like();

    ctx.is_premium() && ctx.roles.is_elevated() && valid_state && platform_path
}

pub fn can_delete_node(ctx: &NodeActionContext) -> bool {
    ctx.roles.is_elevated()
}

pub fn can_run_script(ctx: &NodeActionContext) -> bool {
    ctx.roles.is_elevated() && ctx.platform.supports_scripts()
}
