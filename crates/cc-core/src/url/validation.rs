use ::url::Url;

use crate::error::ValidationError;

pub const MIN_ALIAS_LEN: usize = 3;

/// The target must be an absolute URL with both a scheme and a host.
pub fn validate_target_url(raw: &str) -> Result<Url, ValidationError> {
    let parsed = Url::parse(raw.trim()).map_err(|_| ValidationError::InvalidUrl)?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(ValidationError::InvalidUrl),
    }
}

/// A blank alias means "let the backend pick".
pub fn normalize_alias(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Accepts exactly `^[A-Za-z0-9]{3,}$`.
pub fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    if !alias.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::AliasCharset);
    }
    if alias.chars().count() < MIN_ALIAS_LEN {
        return Err(ValidationError::AliasTooShort { min: MIN_ALIAS_LEN });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_rules() {
        assert_eq!(
            validate_alias("ab"),
            Err(ValidationError::AliasTooShort { min: 3 })
        );
        assert_eq!(validate_alias("ab!"), Err(ValidationError::AliasCharset));
        assert_eq!(validate_alias("abc"), Ok(()));
        assert_eq!(validate_alias("Promo2024"), Ok(()));
        assert_eq!(validate_alias("my-link"), Err(ValidationError::AliasCharset));
        assert_eq!(validate_alias("über"), Err(ValidationError::AliasCharset));
    }

    #[test]
    fn blank_alias_is_absent() {
        assert_eq!(normalize_alias(None), None);
        assert_eq!(normalize_alias(Some("   ")), None);
        assert_eq!(normalize_alias(Some(" abc ")), Some("abc"));
    }

    #[test]
    fn target_url_needs_scheme_and_host() {
        assert!(validate_target_url("https://example.com/a?b=c").is_ok());
        assert!(validate_target_url("  http://localhost:8080  ").is_ok());
        assert_eq!(
            validate_target_url("example.com"),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate_target_url("mailto:someone@example.com"),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(validate_target_url(""), Err(ValidationError::InvalidUrl));
    }
}
