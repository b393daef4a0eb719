//! Short URLs: client-side validation and records.

mod record;
mod validation;

pub use record::{ResolveOutcome, ShortUrlRecord, ShortenRequest, ShortenResponse};
pub use validation::{normalize_alias, validate_alias, validate_target_url, MIN_ALIAS_LEN};
