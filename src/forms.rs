// Contact and newsletter form flows. The engine never performs network
// I/O: plumbing posts the form and reports back either a response body or
// a failure, and the engine decides what the page shows.
// See steering.md: Interaction Rules

use serde::Deserialize;

use crate::types::{Directive, FormChannel, MessageSettings, StatusKind};

/// Expected shape of the contact endpoint's JSON reply.
#[derive(Debug, Deserialize)]
struct ContactReply {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Contact form flow: clear, submit (host-side), interpret the reply.
#[derive(Debug)]
pub struct ContactFlow {
    fallback: String,
}

impl ContactFlow {
    pub fn new(messages: &MessageSettings) -> Self {
        ContactFlow {
            fallback: messages.contact_fallback.clone(),
        }
    }

    /// Submission intercepted: clear prior status before the POST goes out.
    pub fn on_submit(&self) -> Vec<Directive> {
        vec![Directive::ClearStatus {
            channel: FormChannel::Contact,
        }]
    }

    /// Response body arrived. A malformed body or `success: false` is an
    /// error shown inline, preferring the server's message text.
    pub fn on_response(&self, body: &str) -> Vec<Directive> {
        match serde_json::from_str::<ContactReply>(body) {
            Ok(reply) if reply.success => vec![
                Directive::ShowStatus {
                    channel: FormChannel::Contact,
                    kind: StatusKind::Success,
                    message: reply.message.unwrap_or_default(),
                },
                Directive::ResetForm {
                    form: FormChannel::Contact,
                },
            ],
            Ok(reply) => self.error(reply.message),
            Err(_) => self.error(None),
        }
    }

    /// Request failed before producing a body.
    pub fn on_failure(&self) -> Vec<Directive> {
        self.error(None)
    }

    fn error(&self, message: Option<String>) -> Vec<Directive> {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.fallback.clone());
        vec![Directive::ShowStatus {
            channel: FormChannel::Contact,
            kind: StatusKind::Error,
            message,
        }]
    }
}

/// Newsletter form flow. Client-only: validation and static copy, no
/// network call.
#[derive(Debug)]
pub struct NewsletterFlow {
    invalid: String,
    success: String,
}

impl NewsletterFlow {
    pub fn new(messages: &MessageSettings) -> Self {
        NewsletterFlow {
            invalid: messages.newsletter_invalid.clone(),
            success: messages.newsletter_success.clone(),
        }
    }

    pub fn on_submit(&self, email: &str) -> Vec<Directive> {
        let mut directives = vec![Directive::ClearStatus {
            channel: FormChannel::Newsletter,
        }];

        if !is_valid_email(email.trim()) {
            directives.push(Directive::ShowStatus {
                channel: FormChannel::Newsletter,
                kind: StatusKind::Error,
                message: self.invalid.clone(),
            });
            return directives;
        }

        directives.push(Directive::ShowStatus {
            channel: FormChannel::Newsletter,
            kind: StatusKind::Success,
            message: self.success.clone(),
        });
        directives.push(Directive::ResetForm {
            form: FormChannel::Newsletter,
        });
        directives
    }
}

/// Lightweight address check: non-empty local and domain parts around a
/// single '@', no whitespace, and a '.' inside the domain with a character
/// on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(3, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if parts.next().is_some() || local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
