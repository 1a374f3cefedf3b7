//! Checksum and sanity checks used to confirm or reject pattern matches.

use std::net::IpAddr;

/// Luhn algorithm for credit card validation
pub fn is_valid_luhn(card_number: &str) -> bool {
    let digits: Vec<u32> = card_number.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, &digit)| {
            if idx % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    checksum % 10 == 0
}

/// ISO 13616 IBAN check: move the first four characters to the end,
/// map letters to 10..35 and require the number mod 97 to equal 1.
pub fn is_valid_iban(iban: &str) -> bool {
    let compact: String = iban.chars().filter(|c| !c.is_whitespace()).collect();

    if compact.len() < 15 || compact.len() > 34 || !compact.is_ascii() {
        return false;
    }

    let (head, tail) = compact.split_at(4);
    let mut remainder: u32 = 0;

    for ch in tail.chars().chain(head.chars()) {
        let value = match ch.to_digit(36) {
            Some(v) => v,
            None => return false,
        };
        // Letters expand to two digits, digits stay one
        remainder = if value >= 10 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        };
    }

    remainder == 1
}

pub fn validate_credit_card(value: &str) -> Option<bool> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    Some(is_valid_luhn(&digits))
}

pub fn validate_iban(value: &str) -> Option<bool> {
    Some(is_valid_iban(value))
}

/// Emails whose domain ends in an alphabetic TLD are promoted
pub fn validate_email(value: &str) -> Option<bool> {
    let domain = value.rsplit_once('@').map(|(_, domain)| domain)?;
    let tld = domain.rsplit_once('.').map(|(_, tld)| tld)?;
    Some(tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Unparseable addresses are dropped; parseable ones keep their pattern score
pub fn validate_ip(value: &str) -> Option<bool> {
    match value.parse::<IpAddr>() {
        Ok(_) => None,
        Err(_) => Some(false),
    }
}
