//! Contact form submission.
//!
//! There is no real delivery endpoint yet: `SimulatedTransport` waits and
//! reports success. The failure path is still modelled so a real transport can
//! be dropped in behind `ContactTransport`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Hidden from people; bots fill it in.
    #[serde(default)]
    pub honeypot: String,
}

impl ContactForm {
    fn clear_visible_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Please enter your name.",
            });
        }
        if !looks_like_email(self.email.trim()) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email address.",
            });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: "message",
                message: "Please enter a message.",
            });
        }
        errors
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// A non-blocking toast shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact transport failed: {0}")]
    Transport(String),
}

/// Delivers a validated contact message.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// Stands in for a delivery endpoint: waits, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    pub delay: Duration,
}

#[async_trait]
impl ContactTransport for SimulatedTransport {
    async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        tokio::time::sleep(self.delay).await;
        info!(
            email = %form.email,
            message_len = form.message.len(),
            "Contact message accepted (simulated)"
        );
        Ok(())
    }
}

/// One view of the contact page: the entered values, where the submission is,
/// and whatever should be shown to the visitor.
#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    pub form: ContactForm,
    pub state: SubmissionState,
    pub notification: Option<Notification>,
    pub errors: Vec<FieldError>,
    /// Every state entered after Idle, in order.
    pub transitions: Vec<SubmissionState>,
}

impl ContactSession {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    fn enter(&mut self, state: SubmissionState) {
        debug!(from = ?self.state, to = ?state, "Contact submission state change");
        self.state = state;
        self.transitions.push(state);
    }

    pub async fn submit(&mut self, transport: &dyn ContactTransport) {
        if !self.form.honeypot.is_empty() {
            warn!("Contact submission discarded: honeypot field filled");
            return;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return;
        }

        self.enter(SubmissionState::Submitting);
        match transport.send(&self.form).await {
            Ok(()) => {
                self.form.clear_visible_fields();
                self.notification = Some(Notification {
                    kind: NotificationKind::Success,
                    message: SUCCESS_MESSAGE,
                });
                self.enter(SubmissionState::Succeeded);
            }
            Err(e) => {
                warn!("Contact submission failed: {e}");
                self.notification = Some(Notification {
                    kind: NotificationKind::Error,
                    message: FAILURE_MESSAGE,
                });
                self.enter(SubmissionState::Failed);
            }
        }
    }

    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}
