use std::fmt;

use super::DomainError;

/// Registry key of an optional feature, also its CLI value (`--feature gps`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureFlag(String);

impl FeatureFlag {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(DomainError::InvalidFeatureFlag {
                value: raw.to_string(),
                reason: "flag cannot be empty",
            });
        }
        if raw.starts_with('-') {
            return Err(DomainError::InvalidFeatureFlag {
                value: raw.to_string(),
                reason: "flag cannot start with '-'",
            });
        }
        let valid = raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err(DomainError::InvalidFeatureFlag {
                value: raw.to_string(),
                reason: "only lowercase letters, digits, '-' and '_' are allowed",
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
