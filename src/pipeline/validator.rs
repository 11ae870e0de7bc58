use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::lead_models::{RawLead, SubmissionRecord, ValidationFailure};

// Loose phone shape: ASCII digits, spaces, +, -, parentheses, at least
// 10 chars. [0-9] rather than \d, which in this engine would also admit
// non-ASCII decimal digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+\-()]{10,}$").expect("phone pattern is valid"));

/// Aggregate submit-time check. Trims every field, then applies the shape
/// rules. A `SubmissionRecord` only ever comes out of here, stamped with
/// the validation time.
pub fn validate(raw: &RawLead) -> Result<SubmissionRecord, ValidationFailure> {
    let name = raw.name.trim();
    let phone = raw.phone.trim();
    let contact_handle = raw.contact_handle.trim();

    if name.chars().count() < 2 {
        return Err(ValidationFailure::NameTooShort);
    }
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationFailure::PhoneInvalid);
    }

    Ok(SubmissionRecord {
        name: name.to_string(),
        phone: phone.to_string(),
        contact_handle: contact_handle.to_string(),
        submitted_at: Utc::now(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    ContactHandle,
}

impl FormField {
    pub fn parse(name: &str) -> Option<FormField> {
        match name {
            "name" => Some(FormField::Name),
            "phone" => Some(FormField::Phone),
            "telegram" => Some(FormField::ContactHandle),
            _ => None,
        }
    }
}

/// On-blur check for a single input. Advisory only: the page toggles its
/// invalid marker off this, but submission is gated solely by `validate`.
/// Mirrors the original per-field rules: required fields must be non-empty,
/// a non-empty phone must match the shape pattern, the handle is free-form.
pub fn validate_field(field: FormField, value: &str) -> bool {
    let value = value.trim();
    match field {
        FormField::Name => !value.is_empty(),
        FormField::Phone => !value.is_empty() && PHONE_RE.is_match(value),
        FormField::ContactHandle => true,
    }
}

/// Normalizes a Ukrainian phone number the way the page's input formatter
/// did: drop everything but digits and `+`, then prefix `380…` with `+`
/// and `0…` with `+38`.
pub fn normalize_phone(raw: &str) -> String {
    let mut value: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    if value.starts_with("380") {
        value.insert(0, '+');
    } else if value.starts_with('0') {
        value.insert_str(0, "+38");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, phone: &str, handle: &str) -> RawLead {
        RawLead {
            name: name.to_string(),
            phone: phone.to_string(),
            contact_handle: handle.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_lead() {
        let record = validate(&raw("Ann", "+380501234567", "")).unwrap();
        assert_eq!(record.name, "Ann");
        assert_eq!(record.phone, "+380501234567");
        assert_eq!(record.contact_handle, "");
    }

    #[test]
    fn rejects_short_name_regardless_of_other_fields() {
        assert_eq!(
            validate(&raw("A", "+380501234567", "@ann")),
            Err(ValidationFailure::NameTooShort)
        );
        assert_eq!(
            validate(&raw("", "+380501234567", "")),
            Err(ValidationFailure::NameTooShort)
        );
    }

    #[test]
    fn name_is_trimmed_before_the_length_check() {
        assert_eq!(
            validate(&raw("  A  ", "+380501234567", "")),
            Err(ValidationFailure::NameTooShort)
        );
        assert!(validate(&raw("  An  ", "+380501234567", "")).is_ok());
    }

    #[test]
    fn rejects_short_or_misshapen_phone() {
        assert_eq!(
            validate(&raw("Ann", "123", "")),
            Err(ValidationFailure::PhoneInvalid)
        );
        // long enough but carries a letter
        assert_eq!(
            validate(&raw("Ann", "+38050123456a", "")),
            Err(ValidationFailure::PhoneInvalid)
        );
        // exactly 9 allowed chars is still too short
        assert_eq!(
            validate(&raw("Ann", "380501234", "")),
            Err(ValidationFailure::PhoneInvalid)
        );
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert_eq!(
            validate(&raw("Ann", "١٢٣٤٥٦٧٨٩٠", "")),
            Err(ValidationFailure::PhoneInvalid)
        );
        assert!(!validate_field(FormField::Phone, "١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn phone_allows_spaces_dashes_and_parens() {
        assert!(validate(&raw("Ann", "+38 (050) 123-45-67", "")).is_ok());
    }

    #[test]
    fn handle_is_unconstrained() {
        assert!(validate(&raw("Ann", "+380501234567", "whatever !@#")).is_ok());
    }

    #[test]
    fn field_check_requires_name_and_phone() {
        assert!(!validate_field(FormField::Name, "   "));
        assert!(validate_field(FormField::Name, "A")); // no length rule on blur
        assert!(!validate_field(FormField::Phone, "123"));
        assert!(validate_field(FormField::Phone, "+380501234567"));
        assert!(validate_field(FormField::ContactHandle, ""));
    }

    #[test]
    fn normalizes_national_prefixes() {
        assert_eq!(normalize_phone("0501234567"), "+380501234567");
        assert_eq!(normalize_phone("380501234567"), "+380501234567");
        assert_eq!(normalize_phone("+380501234567"), "+380501234567");
        assert_eq!(normalize_phone("050 123-45-67"), "+380501234567");
    }
}
