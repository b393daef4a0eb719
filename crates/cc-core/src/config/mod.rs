//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping. Defaults are
//! applied by the loader, not here.

mod app_config;

pub use app_config::AppConfig;
