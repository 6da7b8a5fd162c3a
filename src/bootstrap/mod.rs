pub mod config;
pub mod tracing;

pub use config::resolve_config;
pub use self::tracing::init_tracing_subscriber;
