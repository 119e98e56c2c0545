use serde::{Deserialize, Serialize};
use tracing::debug;

use super::gateway::{Submission, SubmissionError, SubmissionGateway, SubmissionReceipt};

/// The three pages of the loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    VehicleInfo,
    LoanDetails,
}

impl WizardStep {
    pub const COUNT: u8 = 3;

    pub const fn ordered() -> [Self; 3] {
        [Self::PersonalInfo, Self::VehicleInfo, Self::LoanDetails]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::VehicleInfo => 2,
            Self::LoanDetails => 3,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::VehicleInfo),
            3 => Some(Self::LoanDetails),
            _ => None,
        }
    }

    /// Progress-bar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::VehicleInfo => "Vehicle Info",
            Self::LoanDetails => "Loan Details",
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::VehicleInfo => "Vehicle Information",
            Self::LoanDetails => "Loan Details",
        }
    }

    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub const fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::LoanDetails)
    }

    pub const fn fields(self) -> &'static [ApplicationField] {
        use ApplicationField::*;
        match self {
            Self::PersonalInfo => &[FirstName, LastName, Email, Phone],
            Self::VehicleInfo => &[VehicleYear, VehicleMake, VehicleModel, VehicleMiles],
            Self::LoanDetails => &[LoanAmount, State, City],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationField {
    FirstName,
    LastName,
    Email,
    Phone,
    VehicleYear,
    VehicleMake,
    VehicleModel,
    VehicleMiles,
    LoanAmount,
    State,
    City,
}

impl ApplicationField {
    pub const ALL: [Self; 11] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::VehicleYear,
        Self::VehicleMake,
        Self::VehicleModel,
        Self::VehicleMiles,
        Self::LoanAmount,
        Self::State,
        Self::City,
    ];

    /// Name of the form control, matching the serialized field name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::VehicleYear => "vehicleYear",
            Self::VehicleMake => "vehicleMake",
            Self::VehicleModel => "vehicleModel",
            Self::VehicleMiles => "vehicleMiles",
            Self::LoanAmount => "loanAmount",
            Self::State => "state",
            Self::City => "city",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::VehicleYear => "Year",
            Self::VehicleMake => "Make",
            Self::VehicleModel => "Model",
            Self::VehicleMiles => "Mileage",
            Self::LoanAmount => "How much do you need?",
            Self::State => "State",
            Self::City => "City",
        }
    }

    /// HTML input type for the control.
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::VehicleYear | Self::VehicleMiles | Self::LoanAmount => "number",
            _ => "text",
        }
    }
}

/// Everything the applicant has typed so far, across all steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_year: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_miles: String,
    pub loan_amount: String,
    pub state: String,
    pub city: String,
}

impl ApplicationDetails {
    pub fn value(&self, field: ApplicationField) -> &str {
        match field {
            ApplicationField::FirstName => &self.first_name,
            ApplicationField::LastName => &self.last_name,
            ApplicationField::Email => &self.email,
            ApplicationField::Phone => &self.phone,
            ApplicationField::VehicleYear => &self.vehicle_year,
            ApplicationField::VehicleMake => &self.vehicle_make,
            ApplicationField::VehicleModel => &self.vehicle_model,
            ApplicationField::VehicleMiles => &self.vehicle_miles,
            ApplicationField::LoanAmount => &self.loan_amount,
            ApplicationField::State => &self.state,
            ApplicationField::City => &self.city,
        }
    }

    pub fn set(&mut self, field: ApplicationField, value: impl Into<String>) {
        let slot = match field {
            ApplicationField::FirstName => &mut self.first_name,
            ApplicationField::LastName => &mut self.last_name,
            ApplicationField::Email => &mut self.email,
            ApplicationField::Phone => &mut self.phone,
            ApplicationField::VehicleYear => &mut self.vehicle_year,
            ApplicationField::VehicleMake => &mut self.vehicle_make,
            ApplicationField::VehicleModel => &mut self.vehicle_model,
            ApplicationField::VehicleMiles => &mut self.vehicle_miles,
            ApplicationField::LoanAmount => &mut self.loan_amount,
            ApplicationField::State => &mut self.state,
            ApplicationField::City => &mut self.city,
        };
        *slot = value.into();
    }

    /// Required fields of `step` that are blank.
    pub fn missing(&self, step: WizardStep) -> Vec<ApplicationField> {
        step.fields()
            .iter()
            .copied()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardState {
    InProgress(WizardStep),
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Previous,
    Submit,
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("{} is missing required fields: {}", .step.heading(), field_names(.fields))]
    MissingFields {
        step: WizardStep,
        fields: Vec<ApplicationField>,
    },
    #[error("the application can only be submitted from the loan details step (currently on {})", .0.heading())]
    NotFinalStep(WizardStep),
    #[error("the application has already been submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

fn field_names(fields: &[ApplicationField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multi-step loan application.
///
/// `Next` and `Previous` move between steps; `Submit` on the loan details
/// step hands the details to a [`SubmissionGateway`] and only a successful
/// hand-off reaches [`WizardState::Submitted`]. A failed hand-off leaves the
/// wizard on the final step so the caller can re-render it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationWizard {
    state: WizardState,
    details: ApplicationDetails,
}

impl Default for ApplicationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationWizard {
    pub fn new() -> Self {
        Self::resume(WizardStep::PersonalInfo, ApplicationDetails::default())
    }

    /// Rebuilds the wizard from the step and details carried by a form post.
    pub fn resume(step: WizardStep, details: ApplicationDetails) -> Self {
        Self {
            state: WizardState::InProgress(step),
            details,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::InProgress(step) => Some(step),
            WizardState::Submitted => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.state == WizardState::Submitted
    }

    pub fn details(&self) -> &ApplicationDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut ApplicationDetails {
        &mut self.details
    }

    /// Completion shown by the progress bar, in percent.
    pub fn progress_percent(&self) -> u8 {
        match self.state {
            WizardState::InProgress(step) => {
                ((u16::from(step.number()) * 100) / u16::from(WizardStep::COUNT)) as u8
            }
            WizardState::Submitted => 100,
        }
    }

    fn current_step(&self) -> Result<WizardStep, WizardError> {
        self.step().ok_or(WizardError::AlreadySubmitted)
    }

    fn require_complete(&self, step: WizardStep) -> Result<(), WizardError> {
        let fields = self.details.missing(step);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(WizardError::MissingFields { step, fields })
        }
    }

    /// Checks every step up to and including `last`. The posted step is
    /// client-controlled, so an earlier incomplete step sends the wizard
    /// back to it.
    fn require_complete_through(&mut self, last: WizardStep) -> Result<(), WizardError> {
        for step in WizardStep::ordered().into_iter().filter(|step| *step <= last) {
            if let Err(err) = self.require_complete(step) {
                self.state = WizardState::InProgress(step);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Advances one step once it and every earlier step are filled in. The
    /// loan details step has no successor, so `next` there leaves it in place.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let step = self.current_step()?;
        self.require_complete_through(step)?;
        let target = step.next().unwrap_or(step);
        self.state = WizardState::InProgress(target);
        Ok(target)
    }

    /// Goes back one step; a no-op on the first step.
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        let step = self.current_step()?;
        let target = step.previous().unwrap_or(step);
        self.state = WizardState::InProgress(target);
        Ok(target)
    }

    pub fn submit<G>(&mut self, gateway: &G) -> Result<SubmissionReceipt, WizardError>
    where
        G: SubmissionGateway + ?Sized,
    {
        let step = self.current_step()?;
        if !step.is_final() {
            return Err(WizardError::NotFinalStep(step));
        }
        self.require_complete_through(step)?;

        let receipt = gateway.submit(Submission::Application(&self.details))?;
        self.state = WizardState::Submitted;
        debug!(state = %self.details.state, "application wizard submitted");
        Ok(receipt)
    }

    /// Dispatches a user action. Returns the resulting state.
    pub fn apply<G>(&mut self, action: WizardAction, gateway: &G) -> Result<WizardState, WizardError>
    where
        G: SubmissionGateway + ?Sized,
    {
        match action {
            WizardAction::Next => self.next().map(WizardState::InProgress),
            WizardAction::Previous => self.previous().map(WizardState::InProgress),
            WizardAction::Submit => self.submit(gateway).map(|_| WizardState::Submitted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::LoggingGateway;

    #[test]
    fn step_numbers_round_trip() {
        for step in WizardStep::ordered() {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(4), None);
        assert_eq!(WizardStep::LoanDetails.next(), None);
        assert_eq!(WizardStep::PersonalInfo.previous(), None);
    }

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        for field in ApplicationField::ALL {
            let owners = WizardStep::ordered()
                .into_iter()
                .filter(|step| step.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{} should belong to one step", field.name());
        }
    }

    #[test]
    fn next_reports_missing_fields_and_stays_put() {
        let mut wizard = ApplicationWizard::new();
        wizard.details_mut().set(ApplicationField::FirstName, "Jane");

        let err = wizard.next().expect_err("personal info incomplete");
        match err {
            WizardError::MissingFields { step, fields } => {
                assert_eq!(step, WizardStep::PersonalInfo);
                assert_eq!(
                    fields,
                    vec![
                        ApplicationField::LastName,
                        ApplicationField::Email,
                        ApplicationField::Phone
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(wizard.step(), Some(WizardStep::PersonalInfo));
    }

    #[test]
    fn next_from_later_step_checks_earlier_steps() {
        let mut details = ApplicationDetails::default();
        details.set(ApplicationField::VehicleYear, "2019");
        details.set(ApplicationField::VehicleMake, "Honda");
        details.set(ApplicationField::VehicleModel, "Civic");
        details.set(ApplicationField::VehicleMiles, "42000");
        let mut wizard = ApplicationWizard::resume(WizardStep::VehicleInfo, details);

        let err = wizard.next().expect_err("personal info blank");
        assert!(matches!(
            err,
            WizardError::MissingFields {
                step: WizardStep::PersonalInfo,
                ..
            }
        ));
        assert_eq!(wizard.step(), Some(WizardStep::PersonalInfo));
    }

    #[test]
    fn whitespace_does_not_satisfy_required_fields() {
        let mut details = ApplicationDetails::default();
        details.set(ApplicationField::City, "   ");
        assert!(details
            .missing(WizardStep::LoanDetails)
            .contains(&ApplicationField::City));
    }

    #[test]
    fn progress_tracks_step() {
        let wizard = ApplicationWizard::resume(WizardStep::VehicleInfo, ApplicationDetails::default());
        assert_eq!(wizard.progress_percent(), 66);
        assert_eq!(ApplicationWizard::new().progress_percent(), 33);
    }

    #[test]
    fn submit_before_final_step_is_rejected() {
        let mut wizard = ApplicationWizard::new();
        let err = wizard.submit(&LoggingGateway).expect_err("not on final step");
        assert!(matches!(err, WizardError::NotFinalStep(WizardStep::PersonalInfo)));
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn missing_fields_message_lists_control_names() {
        let err = WizardError::MissingFields {
            step: WizardStep::VehicleInfo,
            fields: vec![ApplicationField::VehicleMake, ApplicationField::VehicleMiles],
        };
        assert_eq!(
            err.to_string(),
            "Vehicle Information is missing required fields: vehicleMake, vehicleMiles"
        );
    }
}
