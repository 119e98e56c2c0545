use serde::{Deserialize, Serialize};

use super::gateway::{Submission, SubmissionError, SubmissionGateway, SubmissionReceipt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdaField {
    State,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl SdaField {
    pub const ALL: [Self; 5] = [
        Self::State,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// State-direct application: a single page posted to the state's portal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SdaApplication {
    pub state: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl SdaApplication {
    pub fn value(&self, field: SdaField) -> &str {
        match field {
            SdaField::State => &self.state,
            SdaField::FirstName => &self.first_name,
            SdaField::LastName => &self.last_name,
            SdaField::Email => &self.email,
            SdaField::Phone => &self.phone,
        }
    }

    pub fn missing(&self) -> Vec<SdaField> {
        SdaField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SdaFormError {
    #[error("state direct application is missing required fields: {}", field_names(.0))]
    MissingFields(Vec<SdaField>),
    #[error("the state direct application has already been submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

fn field_names(fields: &[SdaField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdaForm {
    phase: FormPhase,
    application: SdaApplication,
}

impl SdaForm {
    pub fn new(application: SdaApplication) -> Self {
        Self {
            phase: FormPhase::Editing,
            application,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn application(&self) -> &SdaApplication {
        &self.application
    }

    pub fn submit<G>(&mut self, gateway: &G) -> Result<SubmissionReceipt, SdaFormError>
    where
        G: SubmissionGateway + ?Sized,
    {
        if self.phase == FormPhase::Submitted {
            return Err(SdaFormError::AlreadySubmitted);
        }
        let missing = self.application.missing();
        if !missing.is_empty() {
            return Err(SdaFormError::MissingFields(missing));
        }

        let receipt = gateway.submit(Submission::Sda(&self.application))?;
        self.phase = FormPhase::Submitted;
        Ok(receipt)
    }
}
