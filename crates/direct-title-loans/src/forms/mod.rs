//! Lead-capture form state. Every form value is owned by the request that
//! carries it; nothing here is stored between requests.

mod application;
mod gateway;
mod privacy;
mod sda;

pub use application::{
    ApplicationDetails, ApplicationField, ApplicationWizard, WizardAction, WizardError,
    WizardState, WizardStep,
};
pub use gateway::{
    LoggingGateway, Submission, SubmissionError, SubmissionGateway, SubmissionReceipt,
};
pub use privacy::{PrivacyField, PrivacyRequest, ResidentType, PRIVACY_REQUEST_TYPES};
pub use sda::{FormPhase, SdaApplication, SdaField, SdaForm, SdaFormError};

