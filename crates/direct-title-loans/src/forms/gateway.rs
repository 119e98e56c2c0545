use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::application::ApplicationDetails;
use super::sda::SdaApplication;

/// Payload handed to a gateway on the final form step.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "form", content = "fields", rename_all = "snake_case")]
pub enum Submission<'a> {
    Application(&'a ApplicationDetails),
    Sda(&'a SdaApplication),
}

impl Submission<'_> {
    pub const fn form_name(&self) -> &'static str {
        match self {
            Submission::Application(_) => "application",
            Submission::Sda(_) => "sda",
        }
    }

    /// The state the applicant selected, used for lead routing.
    pub fn state_code(&self) -> &str {
        match self {
            Submission::Application(details) => &details.state,
            Submission::Sda(application) => &application.state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub accepted_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("lead endpoint rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("lead endpoint unreachable: {0}")]
    Transport(String),
}

/// Outbound hook for completed lead forms (loan management system, CRM).
pub trait SubmissionGateway: Send + Sync {
    fn submit(&self, submission: Submission<'_>) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Placeholder gateway: accepts every submission and records a trace event.
/// Nothing is forwarded or stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingGateway;

impl SubmissionGateway for LoggingGateway {
    fn submit(&self, submission: Submission<'_>) -> Result<SubmissionReceipt, SubmissionError> {
        info!(
            form = submission.form_name(),
            state = submission.state_code(),
            "lead form submitted"
        );
        Ok(SubmissionReceipt {
            accepted_at: Utc::now(),
        })
    }
}
