//! reqwest adapter for the sharing API.

mod client;
mod clipboard;
mod error;
mod files;
mod urls;

pub use client::HttpShareApi;
