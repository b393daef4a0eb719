use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

use crate::error::ValidationError;

pub const SHARE_CODE_LEN: usize = 4;

/// A 4-digit numeric code issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ShareCode(String);

/// The backend has been seen returning codes both as strings and as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum CodeRepr {
    Text(String),
    Number(u32),
}

impl ShareCode {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.len() == SHARE_CODE_LEN && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::IncompleteCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ShareCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ShareCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match CodeRepr::deserialize(deserializer)? {
            CodeRepr::Text(s) => Self::parse(&s),
            CodeRepr::Number(n) => Self::parse(&format!("{:0width$}", n, width = SHARE_CODE_LEN)),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

impl From<ShareCode> for String {
    fn from(code: ShareCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for ShareCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ShareCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for ShareCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
