//! Process bootstrap: configuration, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::config::resolve_config;
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::build_app;
