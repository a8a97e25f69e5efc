//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Bangladeshi mobile number regex (local 11-digit form, e.g. 01712968571)
static BD_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^01[3-9]\d{8}$").unwrap()
});

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is a valid Bangladeshi mobile (local form)
pub fn is_valid_bd_mobile(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    BD_MOBILE_REGEX.is_match(&normalized)
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Check if a phone number is valid (either local or international)
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    is_valid_bd_mobile(&normalized) || is_valid_international_phone(&normalized)
}

/// Mask a phone number for log output (e.g., 017****8571)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
