//! Field rules shared by every profile form.
//!
//! Email and URL checks come from `validator`; the federation-specific
//! formats (RFC tax id, phone numbers) live here as custom validators.
//!
//! The custom validators accept an empty string: in a partial update that
//! value clears the stored field and is sent as `null`.

use std::borrow::Cow;
use validator::{ValidateUrl, ValidationError};

/// Fewest digits a phone number may carry (local 10-digit numbers).
const PHONE_MIN_DIGITS: usize = 10;

/// Most digits a phone number may carry (E.164 limit).
const PHONE_MAX_DIGITS: usize = 15;

/// Mexican RFC: 3 letters (companies) or 4 letters (individuals), a 6-digit
/// date block and a 3-character alphanumeric homoclave. Case-insensitive.
pub fn is_valid_rfc(rfc: &str) -> bool {
    let chars: Vec<char> = rfc.trim().to_uppercase().chars().collect();
    let prefix_len = match chars.len() {
        12 => 3,
        13 => 4,
        _ => return false,
    };
    let (prefix, rest) = chars.split_at(prefix_len);
    let (date, homoclave) = rest.split_at(6);

    prefix
        .iter()
        .all(|c| c.is_ascii_uppercase() || *c == 'Ñ' || *c == '&')
        && date.iter().all(char::is_ascii_digit)
        && homoclave.iter().all(char::is_ascii_alphanumeric)
}

/// Digits with optional `+` prefix and common separators.
pub fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if body.is_empty()
        || !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'))
    {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

pub fn validate_rfc(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_valid_rfc(value) {
        Ok(())
    } else {
        Err(ValidationError::new("rfc")
            .with_message(Cow::Borrowed("Enter a valid RFC (e.g. ABC123456XYZ)")))
    }
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_valid_phone(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message(Cow::Borrowed("Enter a phone number with 10 to 15 digits")))
    }
}

pub fn validate_website(value: &str) -> Result<(), ValidationError> {
    check_url(value, "Enter a valid website URL")
}

pub fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    check_url(value, "Enter a valid image URL")
}

fn check_url(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed(message)))
    }
}
