//! # Validation Module
//!
//! Contact-form field validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Per-field, on blur                                           │
//! │  ├── The field the user just left is validated in isolation            │
//! │  └── Error message rendered inline under the input                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Whole form, on submit                                        │
//! │  ├── THIS MODULE: every field validated at once                        │
//! │  └── Any error blocks the send action (no side effect)                 │
//! │                                                                         │
//! │  No failure is fatal: the user corrects and resubmits indefinitely.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gemak_core::validation::{validate_name, validate_phone};
//!
//! assert!(validate_name("Al").is_ok());
//! assert!(validate_phone("+263 773 910 305").is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ValidationError, ValidationResult};
use crate::types::ContactForm;

// =============================================================================
// Constants
// =============================================================================

/// Minimum trimmed length of the name field.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed length of the message field.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Minimum number of characters in a phone number (after the optional `+`).
pub const MIN_PHONE_LEN: usize = 7;

// =============================================================================
// Field
// =============================================================================

/// The validatable contact-form fields, in display order.
///
/// `inquiry_type` is absent: the dropdown is optional and every value it
/// can hold is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    /// All validatable fields.
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Message];

    /// Human-readable label used in error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the name field.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Trimmed length must be at least 2 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: Field::Name.label() });
    }

    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: Field::Name.label(),
            min: MIN_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the phone field.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Optional leading `+`, then at least 7 characters drawn from digits,
///   spaces, hyphens, and parentheses
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required { field: Field::Phone.label() });
    }

    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let shape_ok = rest.chars().count() >= MIN_PHONE_LEN
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-' || c == '(' || c == ')');

    if !shape_ok {
        return Err(ValidationError::InvalidFormat {
            field: Field::Phone.label(),
            reason: "enter a valid phone number",
        });
    }

    Ok(())
}

/// Validates the email field.
///
/// ## Rules
/// - Empty is valid (the field is optional)
/// - Otherwise must have a basic `local@domain.tld` shape: no whitespace,
///   a non-empty local part, a single `@`, and a dot inside the domain
///   with characters on both sides
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Ok(());
    }

    if is_email_shaped(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: Field::Email.label(),
            reason: "enter a valid email address",
        })
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // A dot strictly inside the domain, with at least one character on
    // each side.
    domain
        .as_bytes()
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

/// Validates the message field.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Trimmed length must be at least 10 characters
pub fn validate_message(message: &str) -> ValidationResult<()> {
    let message = message.trim();

    if message.is_empty() {
        return Err(ValidationError::Required { field: Field::Message.label() });
    }

    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(ValidationError::TooShort {
            field: Field::Message.label(),
            min: MIN_MESSAGE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Whole-Form Validation
// =============================================================================

/// Validates one field of the form.
pub fn validate_field(field: Field, form: &ContactForm) -> ValidationResult<()> {
    match field {
        Field::Name => validate_name(&form.name),
        Field::Phone => validate_phone(&form.phone),
        Field::Email => validate_email(&form.email),
        Field::Message => validate_message(&form.message),
    }
}

/// Validates every field at once (the submit path).
///
/// Returns the map of failing fields; an empty map means the form may be
/// sent.
pub fn validate_form(form: &ContactForm) -> BTreeMap<Field, ValidationError> {
    let mut errors = BTreeMap::new();
    for field in Field::ALL {
        if let Err(err) = validate_field(field, form) {
            errors.insert(field, err);
        }
    }
    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Al").is_ok());
        assert!(validate_name("John Doe").is_ok());

        // Length 1 fails, length 2 passes
        assert!(validate_name("A").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+263773910305").is_ok());
        assert!(validate_phone("+263 773 910 305").is_ok());
        assert!(validate_phone("(024) 770-123").is_ok());
        assert!(validate_phone("0773910305").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("123").is_err()); // too short
        assert!(validate_phone("+263-77x-910").is_err()); // bad character
    }

    #[test]
    fn test_validate_email_optional() {
        // Empty is valid: the field is optional
        assert!(validate_email("").is_ok());
    }

    #[test]
    fn test_validate_email_shape() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("you@company.co.zw").is_ok());

        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err()); // no dot in domain
        assert!(validate_email("a@.co").is_err()); // dot at domain start
        assert!(validate_email("a b@c.co").is_err()); // whitespace
        assert!(validate_email("@b.co").is_err()); // empty local part
    }

    #[test]
    fn test_validate_message_length_boundary() {
        assert!(validate_message("123456789").is_err()); // 9 chars
        assert!(validate_message("1234567890").is_ok()); // 10 chars
        assert!(validate_message("").is_err());
        assert!(validate_message("          ").is_err()); // whitespace-only
    }

    #[test]
    fn test_validate_form_collects_all_errors() {
        let form = ContactForm {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            phone: "123".to_string(),
            inquiry_type: None,
            message: "short".to_string(),
        };
        let errors = validate_form(&form);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key(&Field::Name));
        assert!(errors.contains_key(&Field::Phone));
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Message));
    }

    #[test]
    fn test_validate_form_passes_with_optional_fields_empty() {
        let form = ContactForm {
            name: "John".to_string(),
            email: String::new(),
            phone: "+263700000000".to_string(),
            inquiry_type: None,
            message: "Need a quote for CCTV".to_string(),
        };
        assert!(validate_form(&form).is_empty());
    }
}
