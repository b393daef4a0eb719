//! CloudClip application orchestration layer
//!
//! Use cases validate input and call the ports; [`App`] runs them through
//! per-flow lifecycle state and posts notifications.

pub mod app;
pub mod deps;
pub mod flow;
pub mod notifications;
pub mod session;
pub mod usecases;

pub use app::App;
pub use deps::AppDeps;
pub use flow::{Flow, FlowState};
pub use notifications::NotificationCenter;
pub use session::ShareSession;
