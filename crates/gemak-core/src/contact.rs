//! # Contact Composer
//!
//! Renders the deterministic message templates and builds the deep links
//! that hand a conversation over to WhatsApp, the mail client, the phone
//! dialer, or Google Maps.
//!
//! ## Why Bit-Exact Templates?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   What the Business Receives                            │
//! │                                                                         │
//! │  Form fields ──► compose_message() ──► percent-encode ──► wa.me link   │
//! │                                                                         │
//! │  The composed string IS the product: it lands verbatim in the shop's   │
//! │  WhatsApp inbox. Optional lines are omitted entirely (never blank)     │
//! │  so the staff never see "Email:" with nothing after it.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no delivery tracking: once the link opens, sending is entirely
//! in the user's own client.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::{Branch, ContactForm, Product};

// =============================================================================
// Constants
// =============================================================================

/// The shop's WhatsApp line, digits only, as `wa.me` expects.
pub const WHATSAPP_NUMBER: &str = "263773910305";

/// Escape set equivalent to JavaScript's `encodeURIComponent`:
/// everything except alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a string for embedding in a deep-link query parameter.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

// =============================================================================
// Message Templates
// =============================================================================

/// Renders the contact-form message.
///
/// Line-based template, joined with `\n`; the Email and Inquiry lines are
/// present only when their source field is set.
///
/// ```text
/// Hi Gemak Security Shop,
///
/// Name: <name>
/// Phone: <phone>
/// [Email: <email>]
/// [Inquiry: <inquiryType>]
///
/// Message:
/// <message>
/// ```
pub fn compose_message(form: &ContactForm) -> String {
    let mut lines = vec!["Hi Gemak Security Shop,".to_string(), String::new()];
    lines.push(format!("Name: {}", form.name));
    lines.push(format!("Phone: {}", form.phone));
    if !form.email.is_empty() {
        lines.push(format!("Email: {}", form.email));
    }
    if let Some(inquiry) = form.inquiry_type {
        lines.push(format!("Inquiry: {inquiry}"));
    }
    lines.push(String::new());
    lines.push("Message:".to_string());
    lines.push(form.message.clone());
    lines.join("\n")
}

/// The email subject line for a form submission.
///
/// `"<inquiry> — <name>"` when an inquiry type is selected, otherwise
/// `"Inquiry from <name>"`.
pub fn compose_subject(form: &ContactForm) -> String {
    match form.inquiry_type {
        Some(inquiry) => format!("{inquiry} — {}", form.name),
        None => format!("Inquiry from {}", form.name),
    }
}

/// The quick-order message for a product, sent from the shop's quick-view
/// modal.
pub fn order_message(product: &Product) -> String {
    format!(
        "Hi Gemak Security Shop,\n\nI'm interested in ordering:\n\n*{}*\nPrice: {}\nCategory: {}\n\nPlease confirm availability and provide further details. Thank you!",
        product.name, product.price, product.category
    )
}

// =============================================================================
// Deep Links
// =============================================================================

/// Builds a `https://wa.me/...` link carrying the given message.
pub fn whatsapp_url(message: &str) -> String {
    format!("https://wa.me/{WHATSAPP_NUMBER}?text={}", encode_component(message))
}

/// Builds a `mailto:` link with subject and body.
pub fn mailto_url(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

/// Builds a `tel:` link. The dialer tolerates spaces, so the phone number
/// is passed through unencoded.
pub fn tel_url(phone: &str) -> String {
    format!("tel:{phone}")
}

/// The Google-Maps query string for a branch.
pub fn branch_location(branch: &Branch) -> String {
    format!("{}, Zimbabwe", branch.address)
}

/// Embeddable Google-Maps iframe URL for a location query.
pub fn maps_embed_url(location: &str) -> String {
    format!("https://maps.google.com/maps?q={}&output=embed", encode_component(location))
}

/// Google-Maps directions URL for a location query.
pub fn maps_directions_url(location: &str) -> String {
    format!("https://maps.google.com/?q={}", encode_component(location))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::money::Money;
    use crate::types::InquiryType;

    fn form_without_optionals() -> ContactForm {
        ContactForm {
            name: "John".to_string(),
            phone: "+263700000000".to_string(),
            email: String::new(),
            inquiry_type: None,
            message: "Need a quote".to_string(),
        }
    }

    #[test]
    fn test_compose_message_omits_empty_optional_lines() {
        let msg = compose_message(&form_without_optionals());

        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Hi Gemak Security Shop,",
                "",
                "Name: John",
                "Phone: +263700000000",
                "",
                "Message:",
                "Need a quote",
            ]
        );
        assert!(!msg.contains("Email:"));
        assert!(!msg.contains("Inquiry:"));
    }

    #[test]
    fn test_compose_message_includes_optional_lines() {
        let form = ContactForm {
            email: "john@example.co.zw".to_string(),
            inquiry_type: Some(InquiryType::CctvInstallation),
            ..form_without_optionals()
        };
        let msg = compose_message(&form);
        assert!(msg.contains("Email: john@example.co.zw"));
        assert!(msg.contains("Inquiry: CCTV Installation"));
        // Optional lines sit between Phone and the blank separator
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(lines[3], "Phone: +263700000000");
        assert_eq!(lines[4], "Email: john@example.co.zw");
        assert_eq!(lines[5], "Inquiry: CCTV Installation");
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_compose_subject() {
        assert_eq!(compose_subject(&form_without_optionals()), "Inquiry from John");

        let form = ContactForm {
            inquiry_type: Some(InquiryType::AlarmSystem),
            ..form_without_optionals()
        };
        assert_eq!(compose_subject(&form), "Alarm System — John");
    }

    #[test]
    fn test_encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("line1\nline2"), "line1%0Aline2");
        // Characters encodeURIComponent leaves alone
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_whatsapp_url() {
        let url = whatsapp_url("Hi there");
        assert_eq!(url, "https://wa.me/263773910305?text=Hi%20there");
    }

    #[test]
    fn test_mailto_url() {
        let url = mailto_url("info@gemaksecurity.co.zw", "Inquiry from John", "Hello\nWorld");
        assert_eq!(
            url,
            "mailto:info@gemaksecurity.co.zw?subject=Inquiry%20from%20John&body=Hello%0AWorld"
        );
    }

    #[test]
    fn test_order_message_template() {
        let dahua = catalog::products().iter().find(|p| p.id == 2).unwrap();
        assert_eq!(dahua.price, Money::from_dollars(38));
        assert_eq!(
            order_message(dahua),
            "Hi Gemak Security Shop,\n\nI'm interested in ordering:\n\n*Dahua Dome Camera 4MP*\nPrice: $38\nCategory: CCTV Cameras\n\nPlease confirm availability and provide further details. Thank you!"
        );
    }

    #[test]
    fn test_maps_urls() {
        let harare = &catalog::branches()[0];
        let location = branch_location(harare);
        assert_eq!(location, "59 Central Avenue, Zimbabwe");
        assert_eq!(
            maps_embed_url(&location),
            "https://maps.google.com/maps?q=59%20Central%20Avenue%2C%20Zimbabwe&output=embed"
        );
        assert_eq!(
            maps_directions_url(&location),
            "https://maps.google.com/?q=59%20Central%20Avenue%2C%20Zimbabwe"
        );
    }

    #[test]
    fn test_tel_url() {
        assert_eq!(tel_url("+263 773 910 305"), "tel:+263 773 910 305");
    }
}
