pub mod http;
pub mod qr;
pub mod time;

pub use http::HttpShareApi;
pub use qr::QrCodeRenderer;
pub use time::SystemClock;
