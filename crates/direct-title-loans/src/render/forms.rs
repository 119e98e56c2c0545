use std::fmt::Write;

use super::layout::bullet_list;
use super::{escape, Chrome, Document, BRAND, MAIN_PHONE};
use crate::forms::{
    ApplicationField, ApplicationWizard, FormPhase, PrivacyField, PrivacyRequest, ResidentType,
    SdaField, SdaForm, SdaFormError, WizardError, WizardStep, PRIVACY_REQUEST_TYPES,
};
use crate::intake::PrivacyReceipt;

const STATE_OPTIONS: [(&str, &str); 2] = [("CA", "California"), ("FL", "Florida")];

const INPUT_CLASS: &str = "w-full p-3 border rounded-lg";

/// What the privacy rights page shows below the rights summary.
#[derive(Debug, Clone, Copy)]
pub enum CcpaView<'a> {
    Form {
        request: &'a PrivacyRequest,
        missing: &'a [PrivacyField],
    },
    Submitted(&'a PrivacyReceipt),
}

fn minimal_open(html: &mut String, width: &str, heading: &str, lead: &str) {
    let _ = writeln!(
        html,
        "<div class=\"{width} w-full\">\n<div class=\"text-center mb-8\">\n\
         <a href=\"/\" class=\"text-2xl font-bold text-[#1e3a8a] mb-4 inline-block\">{}</a>\n\
         <h1 class=\"text-3xl font-bold text-gray-900 mb-2\">{}</h1>\n<p class=\"text-gray-600\">{}</p>\n</div>",
        escape(BRAND),
        escape(heading),
        escape(lead)
    );
}

fn minimal_close(html: &mut String) {
    html.push_str(
        "<div class=\"text-center mt-8\"><a href=\"/\" class=\"text-sm text-gray-500 hover:text-gray-700\">← Back to Homepage</a></div>\n</div>\n",
    );
}

fn alert(html: &mut String, message: &str) {
    let _ = writeln!(
        html,
        "<div class=\"bg-red-50 border border-red-200 text-red-800 p-4 rounded-lg mb-6\" role=\"alert\">{}</div>",
        escape(message)
    );
}

fn success_panel(html: &mut String, heading: &str, text: &str) {
    let _ = writeln!(
        html,
        "<div class=\"bg-green-50 border border-green-200 p-8 rounded-xl text-center\">\n\
         <h2 class=\"text-2xl font-bold text-green-800 mb-4\">{}</h2>\n<p class=\"text-green-700 mb-6\">{}</p>",
        escape(heading),
        escape(text)
    );
}

fn text_input(html: &mut String, name: &str, label: &str, input_type: &str, value: &str, required: bool) {
    let _ = writeln!(
        html,
        "<div class=\"mb-4\"><label for=\"{name}\" class=\"block font-semibold mb-2\">{}</label>\
         <input id=\"{name}\" name=\"{name}\" type=\"{input_type}\" value=\"{}\" class=\"{INPUT_CLASS}\"{}></div>",
        escape(label),
        escape(value),
        if required { " required" } else { "" }
    );
}

fn state_select(html: &mut String, name: &str, label: &str, placeholder: &str, selected: &str) {
    let _ = writeln!(
        html,
        "<div class=\"mb-4\"><label for=\"{name}\" class=\"block font-semibold mb-2\">{}</label>\
         <select id=\"{name}\" name=\"{name}\" class=\"{INPUT_CLASS}\" required>",
        escape(label)
    );
    let _ = writeln!(html, "<option value=\"\">{}</option>", escape(placeholder));
    for (code, state) in STATE_OPTIONS {
        let _ = writeln!(
            html,
            "<option value=\"{code}\"{}>{state}</option>",
            if selected == code { " selected" } else { "" }
        );
    }
    html.push_str("</select></div>\n");
}

fn labels<F: Copy>(fields: &[F], label: impl Fn(F) -> &'static str) -> String {
    fields.iter().map(|field| label(*field)).collect::<Vec<_>>().join(", ")
}

fn wizard_problem(error: &WizardError) -> String {
    match error {
        WizardError::MissingFields { fields, .. } => {
            format!("Please complete: {}.", labels(fields.as_slice(), ApplicationField::label))
        }
        WizardError::Submission(_) => format!(
            "We couldn't submit your application right now. Please try again or call {MAIN_PHONE}."
        ),
        other => other.to_string(),
    }
}

/// The loan application wizard. Steps the applicant is not on travel as
/// hidden inputs so every post carries the full application.
pub fn apply_page(wizard: &ApplicationWizard, problem: Option<&WizardError>) -> Document {
    let mut html = String::with_capacity(8192);
    minimal_open(
        &mut html,
        "max-w-2xl",
        "Apply for a Title Loan",
        "Complete this quick application to get pre-approved",
    );

    match wizard.step() {
        None => {
            let details = wizard.details();
            success_panel(
                &mut html,
                "Application Received",
                &format!(
                    "Thank you, {}. A loan specialist will contact you shortly at {} to finish your {} title loan.",
                    details.first_name, details.phone, details.state
                ),
            );
            html.push_str(
                "<a href=\"/\" class=\"text-[#1e3a8a] hover:underline font-semibold\">Return to Homepage</a>\n</div>\n",
            );
        }
        Some(step) => wizard_step(&mut html, wizard, step, problem),
    }

    minimal_close(&mut html);
    Document::new(
        "Apply for a Title Loan | Direct Title Loans",
        "Apply online for a fast title loan. Get pre-approved in minutes and keep driving your car.",
        "/apply",
        html,
    )
    .with_chrome(Chrome::Minimal)
}

fn wizard_step(
    html: &mut String,
    wizard: &ApplicationWizard,
    step: WizardStep,
    problem: Option<&WizardError>,
) {
    let details = wizard.details();

    html.push_str("<div class=\"mb-8\">\n<div class=\"flex justify-between mb-2\">\n");
    for candidate in WizardStep::ordered() {
        let tone = if step >= candidate {
            "text-[#1e3a8a]"
        } else {
            "text-gray-400"
        };
        let _ = writeln!(
            html,
            "<span class=\"text-sm font-medium {tone}\">{}</span>",
            candidate.label()
        );
    }
    let _ = writeln!(
        html,
        "</div>\n<div class=\"w-full bg-gray-200 rounded-full h-2\">\
         <div class=\"bg-[#1e3a8a] h-2 rounded-full\" style=\"width: {}%\"></div></div>\n</div>",
        wizard.progress_percent()
    );

    html.push_str("<form method=\"post\" action=\"/apply\" class=\"bg-white p-8 rounded-xl shadow-lg\">\n");
    let _ = writeln!(
        html,
        "<h2 class=\"text-2xl font-bold mb-6\">{}</h2>",
        step.heading()
    );
    if let Some(error) = problem {
        alert(html, &wizard_problem(error));
    }
    let _ = writeln!(
        html,
        "<input type=\"hidden\" name=\"step\" value=\"{}\">",
        step.number()
    );
    for field in ApplicationField::ALL {
        if step.fields().contains(&field) {
            continue;
        }
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
            field.name(),
            escape(details.value(field))
        );
    }

    for &field in step.fields() {
        match field {
            ApplicationField::State => state_select(
                html,
                field.name(),
                field.label(),
                "Select State",
                details.value(field),
            ),
            _ => text_input(
                html,
                field.name(),
                field.label(),
                field.input_type(),
                details.value(field),
                true,
            ),
        }
    }

    if step.is_final() {
        html.push_str(
            "<div class=\"bg-blue-50 border border-blue-200 p-4 rounded-lg mb-6\"><p class=\"text-sm text-gray-700\">\
             By submitting this application, you agree to our \
             <a href=\"/terms-and-conditions\" class=\"text-[#1e3a8a] hover:underline\">Terms and Conditions</a> and \
             <a href=\"/privacy-policy\" class=\"text-[#1e3a8a] hover:underline\">Privacy Policy</a>. \
             You also consent to receive communications via email and phone.</p></div>\n",
        );
    }

    // Primary button first so Enter advances rather than going back.
    html.push_str("<div class=\"flex flex-row-reverse justify-between mt-8\">\n");
    let (action, label) = if step.is_final() {
        ("submit", "Submit Application")
    } else {
        ("next", "Next")
    };
    let _ = writeln!(
        html,
        "<button type=\"submit\" name=\"action\" value=\"{action}\" class=\"bg-[#1e3a8a] text-white px-8 py-3 rounded-lg font-semibold\">{label}</button>"
    );
    if step.previous().is_some() {
        html.push_str(
            "<button type=\"submit\" name=\"action\" value=\"previous\" formnovalidate \
             class=\"px-6 py-3 border border-gray-300 rounded-lg font-semibold\">Previous</button>\n",
        );
    }
    html.push_str("</div>\n</form>\n");
}

fn sda_label(field: SdaField) -> &'static str {
    match field {
        SdaField::State => "State",
        SdaField::FirstName => "First Name",
        SdaField::LastName => "Last Name",
        SdaField::Email => "Email",
        SdaField::Phone => "Phone",
    }
}

pub fn sda_page(form: &SdaForm, problem: Option<&SdaFormError>) -> Document {
    let mut html = String::with_capacity(4096);
    minimal_open(
        &mut html,
        "max-w-xl",
        "State Direct Application",
        "Apply directly through your state's portal",
    );

    match form.phase() {
        FormPhase::Submitted => {
            success_panel(
                &mut html,
                "Application Submitted",
                "We'll contact you shortly to discuss your loan options.",
            );
            html.push_str(
                "<a href=\"/\" class=\"text-[#1e3a8a] hover:underline font-semibold\">Return to Homepage</a>\n</div>\n",
            );
        }
        FormPhase::Editing => {
            let application = form.application();
            html.push_str("<form method=\"post\" action=\"/sda\" class=\"bg-white p-8 rounded-xl shadow-lg\">\n");
            match problem {
                Some(SdaFormError::MissingFields(fields)) => {
                    alert(&mut html, &format!("Please complete: {}.", labels(fields.as_slice(), sda_label)));
                }
                Some(SdaFormError::Submission(_)) => alert(
                    &mut html,
                    &format!("We couldn't submit your application right now. Please try again or call {MAIN_PHONE}."),
                ),
                Some(other) => alert(&mut html, &other.to_string()),
                None => {}
            }
            state_select(
                &mut html,
                SdaField::State.name(),
                "Select Your State",
                "Choose a state...",
                &application.state,
            );
            for (field, input_type) in [
                (SdaField::FirstName, "text"),
                (SdaField::LastName, "text"),
                (SdaField::Email, "email"),
                (SdaField::Phone, "tel"),
            ] {
                text_input(
                    &mut html,
                    field.name(),
                    sda_label(field),
                    input_type,
                    application.value(field),
                    true,
                );
            }
            html.push_str(
                "<div class=\"bg-blue-50 border border-blue-200 p-4 rounded-lg mb-6\"><p class=\"text-sm text-gray-700\">\
                 By submitting, you consent to be contacted regarding your application.</p></div>\n\
                 <button type=\"submit\" class=\"w-full bg-[#1e3a8a] text-white px-8 py-3 rounded-lg font-semibold\">Submit Application</button>\n\
                 </form>\n",
            );
        }
    }

    minimal_close(&mut html);
    Document::new(
        "State Direct Application | Direct Title Loans",
        "Apply for a title loan directly through your state's portal.",
        "/sda",
        html,
    )
    .with_chrome(Chrome::Minimal)
}

fn privacy_label(field: PrivacyField) -> &'static str {
    match field {
        PrivacyField::ResidentType => "Residency",
        PrivacyField::Name => "Full Name",
        PrivacyField::Email => "Email",
    }
}

pub fn ccpa_page(view: CcpaView<'_>) -> Document {
    let mut html = String::with_capacity(8192);
    html.push_str("<div class=\"py-20\">\n<div class=\"container mx-auto px-4 max-w-4xl\">\n");
    html.push_str("<h1 class=\"text-4xl font-bold mb-8\">CCPA Privacy Rights</h1>\n");
    html.push_str("<div class=\"prose max-w-none mb-12\">\n");
    html.push_str(
        "<p>California residents have specific privacy rights under the California Consumer Privacy Act (CCPA).</p>\n<h2>Your Rights</h2>\n",
    );
    bullet_list(
        &mut html,
        &[
            "Right to know what personal information we collect",
            "Right to delete your personal information",
            "Right to opt-out of the sale of personal information",
            "Right to non-discrimination for exercising your rights",
        ],
    );
    html.push_str("</div>\n");

    match view {
        CcpaView::Submitted(receipt) => {
            success_panel(
                &mut html,
                "Request Submitted Successfully",
                "We will respond to your request within 45 days as required by law.",
            );
            let _ = writeln!(
                html,
                "<p class=\"text-sm text-green-700\">Reference: <code>{}</code></p>\n</div>",
                escape(receipt.request_id.as_str())
            );
        }
        CcpaView::Form { request, missing } => privacy_form(&mut html, request, missing),
    }

    html.push_str("</div>\n</div>\n");
    Document::new(
        "CCPA Privacy Rights | Direct Title Loans",
        "Exercise your California and Virginia privacy rights. Submit a request to know, delete, or opt out.",
        "/ccpa",
        html,
    )
}

fn privacy_form(html: &mut String, request: &PrivacyRequest, missing: &[PrivacyField]) {
    html.push_str("<form method=\"post\" action=\"/ccpa\" class=\"bg-gray-50 p-8 rounded-xl\">\n");
    html.push_str("<h2 class=\"text-2xl font-bold mb-6\">Submit a Privacy Request</h2>\n");
    if !missing.is_empty() {
        alert(
            html,
            &format!("Please complete: {}.", labels(missing, privacy_label)),
        );
    }

    html.push_str(
        "<fieldset class=\"mb-6\"><legend class=\"block font-semibold mb-2\">Are you a California or Virginia resident?</legend>\n",
    );
    let resident = request.resident();
    for (idx, option) in ResidentType::ALL.into_iter().enumerate() {
        let _ = writeln!(
            html,
            "<label class=\"flex items-center\"><input type=\"radio\" name=\"residentType\" value=\"{}\" class=\"mr-2\"{}{}>{}</label>",
            option.code(),
            if resident == Some(option) { " checked" } else { "" },
            if idx == 0 { " required" } else { "" },
            option.label()
        );
    }
    html.push_str("</fieldset>\n");

    html.push_str(
        "<fieldset class=\"mb-6\"><legend class=\"block font-semibold mb-2\">Select your request type(s):</legend>\n",
    );
    for kind in PRIVACY_REQUEST_TYPES {
        let checked = request.request_types.iter().any(|chosen| chosen == kind);
        let _ = writeln!(
            html,
            "<label class=\"flex items-center\"><input type=\"checkbox\" name=\"requestTypes\" value=\"{}\" class=\"mr-2\"{}>{}</label>",
            escape(kind),
            if checked { " checked" } else { "" },
            escape(kind)
        );
    }
    html.push_str("</fieldset>\n");

    text_input(html, "name", "Full Name", "text", &request.name, true);
    text_input(html, "email", "Email", "email", &request.email, true);
    text_input(html, "phone", "Phone (optional)", "tel", &request.phone, false);
    html.push_str(
        "<button type=\"submit\" class=\"bg-[#1e3a8a] text-white px-8 py-3 rounded-lg font-semibold\">Submit Request</button>\n</form>\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ApplicationDetails, LoggingGateway, SdaApplication, SubmissionError};
    use crate::intake::RequestId;

    fn personal_details() -> ApplicationDetails {
        let mut details = ApplicationDetails::default();
        details.set(ApplicationField::FirstName, "Jane");
        details.set(ApplicationField::LastName, "O'Neil");
        details.set(ApplicationField::Email, "jane@example.com");
        details.set(ApplicationField::Phone, "213-555-0199");
        details
    }

    #[test]
    fn first_step_has_no_previous_button() {
        let page = apply_page(&ApplicationWizard::new(), None);
        assert_eq!(page.chrome, Chrome::Minimal);
        assert!(page.body.contains("name=\"step\" value=\"1\""));
        assert!(page.body.contains("value=\"next\""));
        assert!(!page.body.contains("value=\"previous\""));
        assert!(page.body.contains("width: 33%"));
    }

    #[test]
    fn later_steps_carry_earlier_answers_as_hidden_inputs() {
        let wizard = ApplicationWizard::resume(WizardStep::VehicleInfo, personal_details());
        let page = apply_page(&wizard, None);
        assert!(page
            .body
            .contains("<input type=\"hidden\" name=\"lastName\" value=\"O&#x27;Neil\">"));
        assert!(page.body.contains("id=\"vehicleMake\""));
        assert!(page.body.contains("value=\"previous\""));
    }

    #[test]
    fn final_step_offers_submit_and_state_choices() {
        let mut details = personal_details();
        details.set(ApplicationField::State, "FL");
        let page = apply_page(&ApplicationWizard::resume(WizardStep::LoanDetails, details), None);
        assert!(page.body.contains("value=\"submit\""));
        assert!(page.body.contains("<option value=\"FL\" selected>Florida</option>"));
        assert!(page.body.contains("Terms and Conditions"));
    }

    #[test]
    fn missing_fields_are_listed_by_label() {
        let error = WizardError::MissingFields {
            step: WizardStep::PersonalInfo,
            fields: vec![ApplicationField::FirstName, ApplicationField::Phone],
        };
        let page = apply_page(&ApplicationWizard::new(), Some(&error));
        assert!(page.body.contains("Please complete: First Name, Phone."));
    }

    #[test]
    fn gateway_failure_keeps_the_form() {
        let error = WizardError::Submission(SubmissionError::Rejected { status: 502 });
        let wizard = ApplicationWizard::resume(WizardStep::LoanDetails, personal_details());
        let page = apply_page(&wizard, Some(&error));
        assert!(page.body.contains("role=\"alert\""));
        assert!(page.body.contains("<form method=\"post\" action=\"/apply\""));
        assert!(!page.body.contains("Application Received"));
    }

    #[test]
    fn sda_submitted_view_replaces_form() {
        let mut form = SdaForm::new(SdaApplication {
            state: "CA".to_string(),
            first_name: "Lee".to_string(),
            last_name: "Park".to_string(),
            email: "lee@example.com".to_string(),
            phone: "619-555-0100".to_string(),
        });
        form.submit(&LoggingGateway).expect("complete form submits");
        let page = sda_page(&form, None);
        assert!(page.body.contains("Application Submitted"));
        assert!(!page.body.contains("<form"));
    }

    #[test]
    fn ccpa_form_remembers_choices() {
        let request = PrivacyRequest::from_pairs([
            ("residentType", "VA"),
            ("requestTypes", "Delete my data"),
        ]);
        let missing = request.missing();
        let page = ccpa_page(CcpaView::Form {
            request: &request,
            missing: &missing,
        });
        assert!(page.body.contains("value=\"VA\" class=\"mr-2\" checked"));
        assert!(page.body.contains("value=\"Delete my data\" class=\"mr-2\" checked"));
        assert!(page.body.contains("Please complete: Full Name, Email."));
    }

    #[test]
    fn ccpa_submitted_view_shows_reference() {
        let receipt = PrivacyReceipt {
            success: true,
            request_id: RequestId::compose(1, "abc123xyz"),
            message: String::new(),
        };
        let page = ccpa_page(CcpaView::Submitted(&receipt));
        assert!(page.body.contains("within 45 days"));
        assert!(page.body.contains("PR-1-abc123xyz"));
        assert!(!page.body.contains("<form"));
    }
}
