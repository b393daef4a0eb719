//! Port interfaces for the application layer
//!
//! Ports define the contract between the flows (use cases) and the
//! infrastructure that talks to the sharing API, renders QR codes and reads
//! the clock.

mod clipboard_api;
mod clock;
mod file_api;
mod qr;
mod url_api;

pub use clipboard_api::ClipboardApiPort;
pub use clock::ClockPort;
pub use file_api::FileApiPort;
pub use qr::{QrEncoderPort, QrImage};
pub use url_api::UrlApiPort;
