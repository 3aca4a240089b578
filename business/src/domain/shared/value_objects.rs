use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{1,15}$").expect("phone pattern is valid"));

/// Phone number identifying the owner of a cart.
///
/// Each owner holds at most one active cart. Surrounding whitespace, spaces
/// and dashes are stripped before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerPhone(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("owner.invalid_phone")]
pub struct InvalidOwnerPhone;

impl OwnerPhone {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, InvalidOwnerPhone> {
        let normalized: String = raw
            .as_ref()
            .trim()
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        if !PHONE_PATTERN.is_match(&normalized) {
            return Err(InvalidOwnerPhone);
        }
        Ok(Self(normalized))
    }

    /// Constructor for values already persisted (no validation).
    pub fn from_repository(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerPhone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OwnerPhone {
    type Err = InvalidOwnerPhone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_short_numeric_owner() {
        let phone = OwnerPhone::parse("555").unwrap();
        assert_eq!(phone.as_str(), "555");
    }

    #[test]
    fn should_strip_separators() {
        let phone = OwnerPhone::parse(" +54 9 2284-123456 ").unwrap();
        assert_eq!(phone.as_str(), "+5492284123456");
    }

    #[test]
    fn should_reject_empty_phone() {
        assert_eq!(OwnerPhone::parse("   "), Err(InvalidOwnerPhone));
    }

    #[test]
    fn should_reject_letters() {
        assert!(OwnerPhone::parse("call-me").is_err());
    }

    #[test]
    fn should_reject_more_than_fifteen_digits() {
        assert!(OwnerPhone::parse("1234567890123456").is_err());
    }

    #[test]
    fn should_display_normalized_value() {
        let phone: OwnerPhone = "2284".parse().unwrap();
        assert_eq!(format!("{}", phone), "2284");
    }
}
