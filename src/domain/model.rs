use crate::utils::error::{GuestError, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age at which a guest counts as an adult. Inclusive, fixed business rule.
pub const ADULT_AGE: u32 = 18;

/// Validated email address. Construction guarantees the value is non-empty
/// and contains at least one `@`, so `domain()` is total.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() || !value.contains('@') {
            return Err(GuestError::InvalidEmail {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// The text after the last `@`.
    pub fn domain(&self) -> &str {
        match self.0.rfind('@') {
            Some(at) => &self.0[at + 1..],
            // unreachable: parse() rejects '@'-free values
            None => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Deserializing goes through parse() so file-backed guest lists are
// validated on decode rather than at extraction time.
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Email::parse(&raw).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub email: Email,
}

impl Person {
    pub fn new(name: &str, age: u32, email: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            age,
            email: Email::parse(email)?,
        })
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

/// Result of one pipeline run: the sorted, deduplicated adult domains plus
/// a few counters for logging and the structured report formats.
#[derive(Debug, Clone, Serialize)]
pub struct DomainReport {
    pub domains: Vec<String>,
    pub guests_total: usize,
    pub adults_total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_well_formed_email() {
        let email = Email::parse("anna@nass.de").unwrap();
        assert_eq!(email.as_str(), "anna@nass.de");
        assert_eq!(email.domain(), "nass.de");
    }

    #[test]
    fn domain_is_text_after_last_at() {
        let email = Email::parse("weird@local@part.example").unwrap();
        assert_eq!(email.domain(), "part.example");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let err = Email::parse("not-an-email").unwrap_err();
        assert!(matches!(err, GuestError::InvalidEmail { ref value } if value == "not-an-email"));
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert!(Email::parse("").is_err());
    }

    #[test]
    fn person_adult_threshold_is_inclusive() {
        let anna = Person::new("Anna", 18, "anna@nass.de").unwrap();
        let bernd = Person::new("Bernd", 17, "bernd@bibel.de").unwrap();
        assert!(anna.is_adult());
        assert!(!bernd.is_adult());
    }

    #[test]
    fn person_with_malformed_email_fails_construction() {
        assert!(Person::new("Gerd", 30, "gerd.example.org").is_err());
    }

    #[test]
    fn email_deserialize_validates() {
        let ok: Email = serde_json::from_str("\"caro@yahoo.de\"").unwrap();
        assert_eq!(ok.domain(), "yahoo.de");

        let err = serde_json::from_str::<Email>("\"caro.yahoo.de\"").unwrap_err();
        assert!(err.to_string().contains('@'));
    }
}
