//! Built-in recognizers for generic PII: emails, phones, cards, IBANs,
//! IP addresses, person names and locations.

use lazy_static::lazy_static;
use regex::Regex;

use super::entity::EntityType;
use super::recognizer::{Pattern, PatternRecognizer, Recognizer, RecognizerResult};
use super::validators::{validate_credit_card, validate_email, validate_iban, validate_ip};

pub fn email_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "EmailRecognizer",
        EntityType::EmailAddress,
        vec![Pattern::new(
            "Email (Medium)",
            r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b",
            0.5,
        )],
    )
    .with_validator(validate_email)
    .with_context(&["email", "mail", "e-mail"])
}

pub fn phone_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "PhoneRecognizer",
        EntityType::PhoneNumber,
        vec![
            // (555) 123-4567, 555-123-4567, +1-555-123-4567, 9876543210
            Pattern::new(
                "North America",
                r"(?:\+1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b",
                0.4,
            ),
            // 98765 43210, +91 98765-43210, +919876543210
            Pattern::new(
                "India mobile",
                r"(?:\+91[-\s]?|\b)[6-9]\d{4}[-\s]?\d{5}\b",
                0.4,
            ),
        ],
    )
    .with_context(&[
        "phone",
        "number",
        "telephone",
        "cell",
        "cellphone",
        "mobile",
        "call",
        "contact",
        "tel",
    ])
}

pub fn credit_card_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "CreditCardRecognizer",
        EntityType::CreditCard,
        vec![
            Pattern::new(
                "All Credit Cards (grouped)",
                r"\b(?:\d{4}[-\s]?){3}\d{4}\b|\b\d{4}[-\s]?\d{6}[-\s]?\d{5}\b",
                0.3,
            ),
            Pattern::new(
                "All Credit Cards (other lengths)",
                r"\b(?:\d{13,14}|\d{17,19})\b",
                0.3,
            ),
        ],
    )
    .with_validator(validate_credit_card)
    .with_context(&["credit", "card", "visa", "mastercard", "amex", "debit"])
}

pub fn iban_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "IbanRecognizer",
        EntityType::IbanCode,
        vec![Pattern::new(
            "IBAN Generic",
            r"\b[A-Z]{2}\d{2}(?: ?[A-Z0-9]{4}){2,7}(?: ?[A-Z0-9]{1,3})?\b",
            0.5,
        )],
    )
    .with_validator(validate_iban)
    .with_context(&["iban", "bank", "account", "transaction"])
}

pub fn ip_recognizer() -> PatternRecognizer {
    PatternRecognizer::new(
        "IpRecognizer",
        EntityType::IpAddress,
        vec![
            Pattern::new(
                "IPv4",
                r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
                0.6,
            ),
            Pattern::new("IPv6", r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b", 0.6),
        ],
    )
    .with_validator(validate_ip)
    .with_context(&["ip", "ipv4", "ipv6", "address", "server", "host"])
}

lazy_static! {
    // Honorific followed by one to three capitalized words
    static ref HONORIFIC_NAME_REGEX: Regex = Regex::new(
        r"\b(?:Mr|Mrs|Ms|Miss|Dr|Prof|Shri|Smt|Sri)\.?[ \t]+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){0,2})"
    ).unwrap();

    // "Name: Rajesh Kumar", "my name is Priya Sharma", "I am Rahul Verma"
    static ref CUE_NAME_REGEX: Regex = Regex::new(
        r"(?:(?i:\bname)[ \t]*(?::|-|(?i:is))|\bI[ \t]+(?i:am))[ \t]*([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){0,2})"
    ).unwrap();
}

/// Person names introduced by an honorific or a naming phrase.
///
/// Only the name itself is reported, not the cue.
pub struct PersonRecognizer;

impl PersonRecognizer {
    pub const SCORE: f64 = 0.85;

    pub fn new() -> Self {
        Self
    }
}

impl Default for PersonRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for PersonRecognizer {
    fn name(&self) -> &str {
        "PersonRecognizer"
    }

    fn supported_entity(&self) -> EntityType {
        EntityType::Person
    }

    fn analyze(&self, text: &str) -> Vec<RecognizerResult> {
        [&*HONORIFIC_NAME_REGEX, &*CUE_NAME_REGEX]
            .iter()
            .flat_map(|regex| regex.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .map(|name| {
                RecognizerResult::new(
                    EntityType::Person,
                    name.start(),
                    name.end(),
                    Self::SCORE,
                    self.name(),
                )
            })
            .collect()
    }
}

/// Place names matched as whole, capitalized words
const LOCATIONS: &[&str] = &[
    // Indian states and union territories
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh", "Goa",
    "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand", "Karnataka", "Kerala",
    "Madhya Pradesh", "Maharashtra", "Manipur", "Meghalaya", "Mizoram", "Nagaland",
    "Odisha", "Punjab", "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura",
    "Uttar Pradesh", "Uttarakhand", "West Bengal", "Jammu and Kashmir", "Ladakh",
    "Puducherry", "Chandigarh",
    // Indian cities
    "Mumbai", "New Delhi", "Delhi", "Bengaluru", "Bangalore", "Hyderabad", "Chennai",
    "Kolkata", "Pune", "Ahmedabad", "Jaipur", "Lucknow", "Kanpur", "Nagpur", "Indore",
    "Bhopal", "Patna", "Surat", "Vadodara", "Coimbatore", "Kochi", "Noida", "Gurugram",
    "Gurgaon", "Visakhapatnam", "Thiruvananthapuram", "Mysuru", "Varanasi",
    // Countries
    "India", "United States", "United Kingdom", "Canada", "Australia", "Germany",
    "France", "Japan", "China", "Singapore", "Nepal", "Bangladesh", "Sri Lanka",
    "Pakistan", "Brazil", "Mexico", "Italy", "Spain", "Netherlands",
    // World cities
    "London", "New York", "San Francisco", "Los Angeles", "Chicago", "Seattle",
    "Toronto", "Sydney", "Berlin", "Paris", "Tokyo", "Dubai", "Hong Kong",
];

lazy_static! {
    static ref LOCATION_REGEX: Regex = {
        let mut names: Vec<&str> = LOCATIONS.to_vec();
        // Longest first so "New Delhi" wins over "Delhi"
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b(?:{})\b", alternation)).unwrap()
    };
}

/// Gazetteer-based location recognizer
pub struct LocationRecognizer;

impl LocationRecognizer {
    pub const SCORE: f64 = 0.85;

    pub fn new() -> Self {
        Self
    }
}

impl Default for LocationRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for LocationRecognizer {
    fn name(&self) -> &str {
        "LocationRecognizer"
    }

    fn supported_entity(&self) -> EntityType {
        EntityType::Location
    }

    fn analyze(&self, text: &str) -> Vec<RecognizerResult> {
        LOCATION_REGEX
            .find_iter(text)
            .map(|mat| {
                RecognizerResult::new(
                    EntityType::Location,
                    mat.start(),
                    mat.end(),
                    Self::SCORE,
                    self.name(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(recognizer: &dyn Recognizer, text: &str) -> Vec<String> {
        recognizer
            .analyze(text)
            .iter()
            .map(|r| r.value(text).to_string())
            .collect()
    }

    #[test]
    fn test_detect_emails() {
        let text = "Contact me at john.doe@example.com or jane@test.org";
        let recognizer = email_recognizer();
        assert_eq!(
            values(&recognizer, text),
            vec!["john.doe@example.com", "jane@test.org"]
        );
        // Validated emails carry full confidence
        assert!(recognizer.analyze(text).iter().all(|r| r.score == 1.0));
    }

    #[test]
    fn test_detect_phones() {
        let text = "Call me at (555) 123-4567 or 555-987-6543 or +1-555-111-2222";
        let found = values(&phone_recognizer(), text);
        assert!(found.contains(&"(555) 123-4567".to_string()));
        assert!(found.contains(&"555-987-6543".to_string()));
        assert!(found.contains(&"+1-555-111-2222".to_string()));
    }

    #[test]
    fn test_detect_indian_mobile() {
        let recognizer = phone_recognizer();
        assert!(values(&recognizer, "phone is 9876543210").contains(&"9876543210".to_string()));
        assert!(values(&recognizer, "reach +91 98765 43210 today")
            .contains(&"+91 98765 43210".to_string()));
        assert!(values(&recognizer, "+919876543210").contains(&"+919876543210".to_string()));
    }

    #[test]
    fn test_phone_does_not_fire_on_aadhaar() {
        assert!(values(&phone_recognizer(), "1234 5678 9012").is_empty());
    }

    #[test]
    fn test_credit_card_requires_luhn() {
        let recognizer = credit_card_recognizer();
        assert_eq!(
            values(&recognizer, "Card: 4532-0151-1283-0366"),
            vec!["4532-0151-1283-0366"]
        );
        assert_eq!(
            values(&recognizer, "Card: 4111111111111111"),
            vec!["4111111111111111"]
        );
        assert!(values(&recognizer, "Card: 1234 5678 9012 3456").is_empty());
    }

    #[test]
    fn test_iban() {
        let recognizer = iban_recognizer();
        assert_eq!(
            values(&recognizer, "IBAN GB82WEST12345698765432 please"),
            vec!["GB82WEST12345698765432"]
        );
        assert_eq!(
            values(&recognizer, "IBAN GB82 WEST 1234 5698 7654 32"),
            vec!["GB82 WEST 1234 5698 7654 32"]
        );
        assert!(values(&recognizer, "GB82WEST12345698765433").is_empty());
    }

    #[test]
    fn test_ip_addresses() {
        let text = "Server at 192.168.1.1 and 10.0.0.5";
        let results = ip_recognizer().analyze(text);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 0.6));
        assert!(values(&ip_recognizer(), "999.999.1.1").is_empty());
    }

    #[test]
    fn test_person_after_cue() {
        let recognizer = PersonRecognizer::new();
        assert_eq!(
            values(&recognizer, "Name: Rajesh Kumar\nEmail: rajesh@example.in"),
            vec!["Rajesh Kumar"]
        );
        assert_eq!(
            values(&recognizer, "Hello, my name is Priya Sharma."),
            vec!["Priya Sharma"]
        );
        assert_eq!(
            values(&recognizer, "Please call Dr. Anil Mehta"),
            vec!["Anil Mehta"]
        );
    }

    #[test]
    fn test_person_after_name_label() {
        assert_eq!(
            values(&PersonRecognizer::new(), "Name - Sunita Rao"),
            vec!["Sunita Rao"]
        );
    }

    #[test]
    fn test_person_after_i_am() {
        assert_eq!(
            values(&PersonRecognizer::new(), "Hello, I am Rahul Verma from Pune"),
            vec!["Rahul Verma"]
        );
    }

    #[test]
    fn test_person_requires_cue() {
        let recognizer = PersonRecognizer::new();
        assert!(values(&recognizer, "Rajesh Kumar went home").is_empty());
        assert!(values(&recognizer, "This is Monday Morning").is_empty());
        assert!(values(&recognizer, "I amended the Budget").is_empty());
    }

    #[test]
    fn test_locations_prefer_longest() {
        let recognizer = LocationRecognizer::new();
        assert_eq!(
            values(&recognizer, "Offices in New Delhi and Mumbai"),
            vec!["New Delhi", "Mumbai"]
        );
        assert!(values(&recognizer, "mumbai").is_empty());
        assert!(values(&recognizer, "Indiana").is_empty());
    }
}
