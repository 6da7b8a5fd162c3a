use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use fc_app::usecases::{
    DispatchNodeAction, ListNodeActions, NodeActionsView, RefetchNodeVitals, RefetchOutcome,
    RefetchPolicy,
};
use fc_app::LifecycleSlot;
use fc_core::lifecycle::{DeviceLifecycleState, LifecycleEvent};
use fc_core::ports::ActionRouterPort;
use fc_core::{AppConfig, NodeAction, NodeId, NodeRecord, Platform, Session};
use fc_infra::{JsonFileNodeDetail, NodeDetailDto, UserDto};

#[derive(Parser)]
#[command(name = "fleet-console")]
#[command(about = "Inspect which actions the console offers on a node", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Console config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the action menu for a node as JSON
    Actions {
        /// Node detail JSON as returned by the server
        #[arg(short, long)]
        node: PathBuf,

        /// Acting user JSON; without it no session is loaded
        #[arg(short, long)]
        user: Option<PathBuf>,

        /// Override the lifecycle state derived from the node record
        #[arg(short, long, value_parser = parse_lifecycle)]
        lifecycle: Option<DeviceLifecycleState>,
    },

    /// Validate a menu selection and route it
    Dispatch {
        #[arg(short, long)]
        node: PathBuf,

        #[arg(short, long)]
        user: PathBuf,

        /// Action value, e.g. `lock` or `runScript`
        #[arg(short, long)]
        action: String,
    },

    /// Wait until the node file reports fresh vitals, polling as configured
    /// under `[refetch]`
    Refetch {
        #[arg(short, long)]
        node: PathBuf,
    },

    /// Show the lifecycle state after a successful mutation
    Transition {
        #[arg(short, long, value_parser = parse_lifecycle)]
        from: DeviceLifecycleState,

        #[arg(short, long)]
        action: NodeAction,

        #[arg(short, long, value_parser = parse_platform, default_value = "windows")]
        platform: Platform,
    },
}

fn parse_lifecycle(value: &str) -> Result<DeviceLifecycleState, String> {
    DeviceLifecycleState::ALL
        .into_iter()
        .find(|state| state.to_string() == value)
        .ok_or_else(|| format!("unknown lifecycle state: {value}"))
}

fn parse_platform(value: &str) -> Result<Platform, String> {
    match Platform::from_api(value) {
        Platform::Unknown => Err(format!("unknown platform: {value}")),
        platform => Ok(platform),
    }
}

fn read_node(path: &Path) -> anyhow::Result<NodeRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read node file: {}", path.display()))?;
    NodeDetailDto::from_json(&json)
        .with_context(|| format!("Failed to map node detail: {}", path.display()))
}

fn read_session(path: &Path, config: &AppConfig) -> anyhow::Result<Session> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read user file: {}", path.display()))?;
    let user = UserDto::from_json(&json)
        .with_context(|| format!("Failed to map acting user: {}", path.display()))?;
    Ok(Session {
        user,
        tier: config.tier,
        mdm: config.mdm,
    })
}

fn list_actions(
    node: &NodeRecord,
    session: Option<&Session>,
    lifecycle: Option<DeviceLifecycleState>,
) -> NodeActionsView {
    let lifecycle = lifecycle.unwrap_or_else(|| {
        DeviceLifecycleState::resolve(node.mdm.device_status, node.mdm.pending_action)
    });
    ListNodeActions::new().execute(node, session, lifecycle)
}

/// Prints accepted selections; a GUI would open the matching modal instead.
struct StdoutRouter;

impl ActionRouterPort for StdoutRouter {
    fn route(&self, node_id: NodeId, action: NodeAction) {
        info!(%node_id, %action, "routing node action");
        println!("{node_id}: {}", action.label());
    }
}

pub fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Actions {
            node,
            user,
            lifecycle,
        } => {
            let node = read_node(&node)?;
            let session = user
                .as_deref()
                .map(|path| read_session(path, config))
                .transpose()?;

            let menu = list_actions(&node, session.as_ref(), lifecycle);
            println!("{}", serde_json::to_string_pretty(&menu)?);
        }
        Commands::Dispatch { node, user, action } => {
            let node = read_node(&node)?;
            let session = read_session(&user, config)?;

            let menu = list_actions(&node, Some(&session), None);
            DispatchNodeAction::new(Arc::new(StdoutRouter))
                .execute(node.id, &action, &menu.actions)
                .with_context(|| format!("Cannot dispatch {action} on node {}", node.id))?;
        }
        Commands::Refetch { node } => {
            let record = read_node(&node)?;
            let refetch = RefetchNodeVitals::new(
                Arc::new(JsonFileNodeDetail::new(node)),
                RefetchPolicy::from(config),
            );
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("Failed to build async runtime")?;

            let (slot, view) = LifecycleSlot::for_record(&record);
            let outcome = runtime
                .block_on(refetch.execute(record.id, &slot))
                .with_context(|| format!("Refetch of node {} failed", record.id))?;
            match outcome {
                RefetchOutcome::Refreshed(_) => println!("{}: {}", record.id, *view.borrow()),
                RefetchOutcome::Abandoned => println!("{}: refetch abandoned", record.id),
            }
        }
        Commands::Transition {
            from,
            action,
            platform,
        } => {
            let event = LifecycleEvent::from_dispatch(action, platform)
                .with_context(|| format!("{action} does not change the node lifecycle"))?;
            let (slot, view) = LifecycleSlot::new(from);
            slot.apply(event);
            println!("{from} -> {}", *view.borrow());
        }
    }
    Ok(())
}
