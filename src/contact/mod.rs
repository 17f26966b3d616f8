// SPDX-License-Identifier: MPL-2.0
//! Contact form validation and feedback.
//!
//! The contact form is the one component on the site with user-visible
//! error text. Validation here returns [`FormFeedback`] values; the host
//! resolves them to localized strings through their i18n keys and renders
//! the feedback element. Accepted submissions yield a [`ContactIdentity`]
//! the host persists for prefilling the next visit.

pub mod identity;

pub use identity::ContactIdentity;

/// Outcome of validating a contact form submission.
///
/// Each variant maps to a Fluent message key; see [`FormFeedback::i18n_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFeedback {
    /// Name or email was missing or blank.
    MissingFields,

    /// The email address failed the plausibility check.
    InvalidEmail,

    /// The submission was accepted.
    Received,
}

impl FormFeedback {
    /// Returns the i18n message key for this feedback.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FormFeedback::MissingFields => "contact-error-missing-fields",
            FormFeedback::InvalidEmail => "contact-error-invalid-email",
            FormFeedback::Received => "contact-feedback-received",
        }
    }

    /// Returns true if the submission passed validation.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, FormFeedback::Received)
    }
}

/// A contact form submission as entered by the visitor.
///
/// Fields are raw input; [`ContactSubmission::validate`] trims them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validates the submission.
    ///
    /// On success returns [`FormFeedback::Received`] together with the
    /// trimmed identity to persist. The message body is optional; only
    /// name and email are required.
    pub fn validate(&self) -> (FormFeedback, Option<ContactIdentity>) {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() {
            return (FormFeedback::MissingFields, None);
        }
        if !is_plausible_email(email) {
            return (FormFeedback::InvalidEmail, None);
        }

        (
            FormFeedback::Received,
            Some(ContactIdentity {
                name: name.to_string(),
                email: email.to_string(),
            }),
        )
    }
}

/// Checks an email address for basic plausibility.
///
/// Same shape the site checks for: a non-blank local part, an `@`, and a
/// domain containing a dot, with no whitespace anywhere. Deliberately not
/// an RFC 5322 validator; a mail server has the final word.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}
