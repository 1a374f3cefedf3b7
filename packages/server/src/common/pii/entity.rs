use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of PII an analyzer result refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    EmailAddress,
    PhoneNumber,
    Person,
    CreditCard,
    IbanCode,
    Location,
    IpAddress,
    /// Indian Permanent Account Number (e.g. ABCDE1234F)
    Pan,
    /// Indian Aadhaar number in 4-4-4 grouping
    Aadhaar,
    /// Indian Electoral Photo ID Card number
    VoterId,
    /// Generic organization/employee identifier (ORG12345, EMP-90876)
    OrgId,
}

const ALL: [EntityType; 11] = [
    EntityType::EmailAddress,
    EntityType::PhoneNumber,
    EntityType::Person,
    EntityType::CreditCard,
    EntityType::IbanCode,
    EntityType::Location,
    EntityType::IpAddress,
    EntityType::Pan,
    EntityType::Aadhaar,
    EntityType::VoterId,
    EntityType::OrgId,
];

impl EntityType {
    /// Every entity type, in a stable order
    pub fn all() -> &'static [EntityType] {
        &ALL
    }

    /// Wire name used in API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::EmailAddress => "EMAIL_ADDRESS",
            EntityType::PhoneNumber => "PHONE_NUMBER",
            EntityType::Person => "PERSON",
            EntityType::CreditCard => "CREDIT_CARD",
            EntityType::IbanCode => "IBAN_CODE",
            EntityType::Location => "LOCATION",
            EntityType::IpAddress => "IP_ADDRESS",
            EntityType::Pan => "PAN",
            EntityType::Aadhaar => "AADHAAR",
            EntityType::VoterId => "VOTER_ID",
            EntityType::OrgId => "ORG_ID",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an entity name is not one we know about
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity type: {0}")]
pub struct UnknownEntityType(pub String);

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|entity| entity.as_str() == s)
            .ok_or_else(|| UnknownEntityType(s.to_string()))
    }
}
