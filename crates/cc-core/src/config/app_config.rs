/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the sharing API, e.g. `https://api.cloudclip.app`.
    /// May be empty; the loader decides what to do about that.
    pub api_base_url: String,

    /// Optional request timeout. `0` means none.
    pub request_timeout_secs: u64,

    /// Production build flag. Gates ad initialization.
    pub production: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value.
    ///
    /// Missing keys map to empty values; nothing is validated here.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        Self {
            api_base_url: toml_value
                .get("api")
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_secs: toml_value
                .get("api")
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            production: toml_value
                .get("general")
                .and_then(|g| g.get("production"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        }
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            request_timeout_secs: 0,
            production: false,
        }
    }
}
