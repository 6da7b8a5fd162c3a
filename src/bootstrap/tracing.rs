//! Tracing configuration for the console
//!
//! - **Development**: debug level for the workspace crates
//! - **Production**: the configured level (`[logging] level`)
//! - `RUST_LOG` overrides both
//!
//! Logs go to stderr; stdout carries the command output.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

fn build_filter_directives(is_dev: bool, configured_level: &str) -> Vec<String> {
    let base = if is_dev { "debug" } else { configured_level };
    vec![
        base.to_string(),
        format!("fc_core={base}"),
        format!("fc_app={base}"),
        format!("fc_infra={base}"),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once in `main`, after the config is resolved and before any use case
/// runs.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(configured_level: &str) -> anyhow::Result<()> {
    let directives = build_filter_directives(is_development(), configured_level);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true, "warn");
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"fc_app=debug".to_string()));

        let prod_directives = build_filter_directives(false, "warn");
        assert!(prod_directives.contains(&"warn".to_string()));
        assert!(prod_directives.contains(&"fc_infra=warn".to_string()));
    }
}
