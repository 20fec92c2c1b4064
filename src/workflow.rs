//! Contact form state machine.
//!
//! `LeadForm` owns the record being typed and the submit state. A submission
//! is split in two steps around the network call: [`LeadForm::begin_submit`]
//! validates and takes the single-flight slot, [`LeadForm::finish_submit`]
//! applies the outcome and always returns the form to [`SubmitState::Idle`].

use std::collections::BTreeSet;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::models::{ContactSubmission, ProjectType};
use crate::phone::format_phone;
use crate::validation::{self, Field, FieldErrors};

pub const SEND_FAILED_TITLE: &str = "Failed to send";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send, please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Success,
    Destructive,
}

/// A toast request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

/// Why a submission did not leave the browser
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
}

/// Delivery failure as seen by the browser. The server has already logged the
/// real cause; this only carries its opaque description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("lead endpoint failed: {0}")]
    Endpoint(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    record: ContactSubmission,
    state: SubmitState,
    touched: BTreeSet<Field>,
    attempted: bool,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &ContactSubmission {
        &self.record
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.record.name,
            Field::Email => &self.record.email,
            Field::Phone => &self.record.phone,
            Field::ProjectType => &self.record.project_type,
            Field::OtherProjectType => &self.record.other_project_type,
            Field::Message => &self.record.message,
        }
    }

    pub fn project_type(&self) -> Option<ProjectType> {
        self.record.project_type()
    }

    /// Store user input. Phone input is masked before it is kept.
    pub fn set(&mut self, field: Field, value: String) {
        let value = match field {
            Field::Phone => format_phone(&value),
            _ => value,
        };
        *self.slot_mut(field) = value;
        self.touched.insert(field);
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.record.name,
            Field::Email => &mut self.record.email,
            Field::Phone => &mut self.record.phone,
            Field::ProjectType => &mut self.record.project_type,
            Field::OtherProjectType => &mut self.record.other_project_type,
            Field::Message => &mut self.record.message,
        }
    }

    /// Error to show next to `field`. Untouched fields stay quiet until the
    /// first submit attempt.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        if self.attempted || self.touched.contains(&field) {
            validation::validate_field(&self.record, field)
        } else {
            None
        }
    }

    /// Validate and take the in-flight slot. Returns the record to send.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        self.attempted = true;
        validation::validate(&self.record)?;
        self.state = SubmitState::Submitting;
        Ok(self.record.clone())
    }

    /// Apply the delivery result. Success clears the form; failure keeps what
    /// the visitor typed so they can retry.
    pub fn finish_submit(
        &mut self,
        result: Result<(), SubmitError>,
        notifier: &impl Notifier,
        analytics: &impl AnalyticsSink,
    ) -> SubmitOutcome {
        let outcome = match result {
            Ok(()) => {
                analytics.push(AnalyticsEvent::lead_success());
                notifier.notify(Notification {
                    title: "Message sent!".to_string(),
                    description: "Thanks for reaching out. Our team will contact you shortly."
                        .to_string(),
                    variant: Variant::Success,
                });
                self.record = ContactSubmission::default();
                self.touched.clear();
                self.attempted = false;
                SubmitOutcome::Delivered
            }
            Err(err) => {
                leptos::logging::warn!("lead submission failed: {err}");
                notifier.notify(Notification {
                    title: SEND_FAILED_TITLE.to_string(),
                    description: SEND_FAILED_MESSAGE.to_string(),
                    variant: Variant::Destructive,
                });
                SubmitOutcome::Failed
            }
        };
        self.state = SubmitState::Idle;
        outcome
    }
}
