//! # Contact Form Session
//!
//! The contact page's form state machine.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Contact Form Session Flow                             │
//! │                                                                         │
//! │  User Action              Session Method          State Change          │
//! │  ───────────              ──────────────          ────────────          │
//! │                                                                         │
//! │  Types in field ─────────► set_name()/... ──────► value updated;       │
//! │                                                   revalidated only if   │
//! │                                                   the field is touched  │
//! │                                                                         │
//! │  Leaves field ───────────► blur(field) ─────────► touched; validated;  │
//! │                                                   inline error set      │
//! │                                                                         │
//! │  Clicks WhatsApp/Email ──► submit(channel) ─────► all fields touched    │
//! │                                                   and validated         │
//! │        │                                                                │
//! │        ├── any error? ──► Err(field → message), NO side effect          │
//! │        │                                                                │
//! │        └── valid? ──────► Ok(SendAction { deep-link url }),             │
//! │                           submitted flag set                            │
//! │                                                                         │
//! │  Success panel shown ────► reset_after_delay() ─► form empty again     │
//! │  (or immediately)          / reset()                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<_>>`: the delayed reset runs on a
//! timer task while the UI keeps calling into the same session.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use gemak_core::contact::{compose_message, compose_subject, mailto_url, whatsapp_url};
use gemak_core::validation::{validate_field, validate_form, Field};
use gemak_core::{catalog, ContactForm, InquiryType};

// =============================================================================
// Constants
// =============================================================================

/// How long the success panel stays up before the form resets.
///
/// A UX affordance, not a correctness constraint: callers that do not want
/// the delay call [`ContactFormSession::reset`] directly.
pub const RESET_DELAY: Duration = Duration::from_secs(4);

// =============================================================================
// Send Action
// =============================================================================

/// Which external client a submission hands off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendChannel {
    WhatsApp,
    Email,
}

/// The outcome of a successful submit: the deep link to open.
///
/// Opening the link is the only side effect, and it is delegated entirely
/// to the user's own client; the session has no visibility into delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAction {
    pub channel: SendChannel,
    pub url: String,
}

/// Field errors keyed for inline display.
pub type FieldErrors = BTreeMap<Field, String>;

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Default)]
struct FormInner {
    form: ContactForm,
    touched: Vec<Field>,
    errors: FieldErrors,
    submitted: Option<SendChannel>,
}

impl FormInner {
    fn revalidate(&mut self, field: Field) {
        match validate_field(field, &self.form) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err.to_string());
            }
        }
    }
}

/// The contact form session.
///
/// Cheap to clone; all clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct ContactFormSession {
    inner: Arc<Mutex<FormInner>>,
}

impl ContactFormSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut FormInner) -> R) -> R {
        let mut inner = self.inner.lock().expect("form mutex poisoned");
        f(&mut inner)
    }

    // =========================================================================
    // Field Setters
    // =========================================================================
    // Each setter revalidates its field only when the field has already
    // been touched, so the user is not shouted at mid-keystroke.

    pub fn set_name(&self, value: impl Into<String>) {
        self.set(Field::Name, |form, v| form.name = v, value.into());
    }

    pub fn set_phone(&self, value: impl Into<String>) {
        self.set(Field::Phone, |form, v| form.phone = v, value.into());
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.set(Field::Email, |form, v| form.email = v, value.into());
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.set(Field::Message, |form, v| form.message = v, value.into());
    }

    /// The inquiry dropdown has no invalid values, so no validation runs.
    pub fn set_inquiry(&self, inquiry: Option<InquiryType>) {
        self.with_inner(|inner| inner.form.inquiry_type = inquiry);
    }

    fn set(&self, field: Field, assign: impl FnOnce(&mut ContactForm, String), value: String) {
        self.with_inner(|inner| {
            assign(&mut inner.form, value);
            if inner.touched.contains(&field) {
                inner.revalidate(field);
            }
        });
    }

    // =========================================================================
    // Blur / Validation
    // =========================================================================

    /// Marks the field as touched and validates it.
    pub fn blur(&self, field: Field) {
        self.with_inner(|inner| {
            if !inner.touched.contains(&field) {
                inner.touched.push(field);
            }
            inner.revalidate(field);
        });
    }

    /// The inline error for a field, if any.
    pub fn error(&self, field: Field) -> Option<String> {
        self.with_inner(|inner| inner.errors.get(&field).cloned())
    }

    /// All current inline errors.
    pub fn errors(&self) -> FieldErrors {
        self.with_inner(|inner| inner.errors.clone())
    }

    /// A snapshot of the field values.
    pub fn form(&self) -> ContactForm {
        self.with_inner(|inner| inner.form.clone())
    }

    /// The channel of a successful submit, while the success panel is up.
    pub fn submitted(&self) -> Option<SendChannel> {
        self.with_inner(|inner| inner.submitted)
    }

    // =========================================================================
    // Submit
    // =========================================================================

    /// Validates everything and, when clean, composes the deep link for
    /// the chosen channel.
    ///
    /// On any validation error the submit is blocked: no deep link is
    /// produced, the error map is returned for inline display, and the
    /// form values are left untouched for correction.
    pub fn submit(&self, channel: SendChannel) -> Result<SendAction, FieldErrors> {
        self.with_inner(|inner| {
            inner.touched = Field::ALL.to_vec();

            let errors = validate_form(&inner.form);
            if !errors.is_empty() {
                inner.errors =
                    errors.into_iter().map(|(field, err)| (field, err.to_string())).collect();
                debug!(fields = inner.errors.len(), "Submit blocked by validation");
                return Err(inner.errors.clone());
            }
            inner.errors.clear();

            let body = compose_message(&inner.form);
            let url = match channel {
                SendChannel::WhatsApp => whatsapp_url(&body),
                SendChannel::Email => {
                    let subject = compose_subject(&inner.form);
                    mailto_url(&catalog::site_info().email, &subject, &body)
                }
            };

            inner.submitted = Some(channel);
            info!(?channel, "Contact form handed off to external client");
            Ok(SendAction { channel, url })
        })
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Resets the session to its initial empty state.
    pub fn reset(&self) {
        self.with_inner(|inner| *inner = FormInner::default());
    }

    /// Resets after [`RESET_DELAY`], once the success panel has had its
    /// moment.
    pub async fn reset_after_delay(&self) {
        tokio::time::sleep(RESET_DELAY).await;
        self.reset();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
