use crate::infra::{AppState, SiteState};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Json, Router};
use direct_title_loans::content::{ContentError, ServiceRecord};
use direct_title_loans::error::AppError;
use direct_title_loans::forms::{
    ApplicationDetails, ApplicationWizard, PrivacyRequest, SdaApplication, SdaForm, SdaFormError,
    WizardAction, WizardError, WizardStep,
};
use direct_title_loans::intake::privacy_router;
use direct_title_loans::render::{
    apply_page, ccpa_page, city_page, not_found_page, page_for_path, sda_page, service_page,
    state_page, CcpaView, Document,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

/// Wizard post: the step being shown, the button pressed and every field
/// collected so far.
#[derive(Debug, Deserialize)]
pub(crate) struct ApplyForm {
    #[serde(default)]
    step: String,
    #[serde(default)]
    action: String,
    #[serde(flatten)]
    details: ApplicationDetails,
}

impl ApplyForm {
    fn step(&self) -> WizardStep {
        self.step
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(WizardStep::from_number)
            .unwrap_or(WizardStep::PersonalInfo)
    }

    fn action(&self) -> WizardAction {
        match self.action.as_str() {
            "previous" => WizardAction::Previous,
            "submit" => WizardAction::Submit,
            _ => WizardAction::Next,
        }
    }
}

pub(crate) fn site_router(state: SiteState) -> Router {
    let privacy = privacy_router(state.intake.clone());

    Router::new()
        .route("/", get(fixed_page))
        .route("/about", get(fixed_page))
        .route("/services", get(fixed_page))
        .route("/services/:service", get(service_detail))
        .route("/locations", get(fixed_page))
        .route("/locations/:state", get(state_detail))
        .route("/locations/:state/:city", get(city_detail))
        .route("/privacy-policy", get(fixed_page))
        .route("/terms-and-conditions", get(fixed_page))
        .route("/apply", get(fixed_page).post(apply_submit))
        .route("/sda", get(fixed_page).post(sda_submit))
        .route("/ccpa", get(fixed_page).post(ccpa_submit))
        .fallback(not_found)
        .with_state(state)
        .merge(privacy)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

fn html(state: &SiteState, status: StatusCode, document: &Document) -> Response {
    (status, Html(state.renderer.render(document))).into_response()
}

fn page_response(state: &SiteState, path: &str, page: Result<Document, ContentError>) -> Response {
    match page {
        Ok(document) => html(state, StatusCode::OK, &document),
        Err(err) if err.is_not_found() => {
            info!(%path, error = %err, "page not found");
            html(state, StatusCode::NOT_FOUND, &not_found_page(path))
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

async fn fixed_page(State(state): State<SiteState>, uri: Uri) -> Response {
    let page = page_for_path(&state.registry, uri.path());
    page_response(&state, uri.path(), page)
}

async fn service_detail(
    State(state): State<SiteState>,
    Path(service): Path<String>,
    uri: Uri,
) -> Response {
    let page = state.registry.resolve_service(&service).map(service_page);
    page_response(&state, uri.path(), page)
}

async fn state_detail(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Response {
    let page = state
        .registry
        .resolve_state(&slug)
        .map(|record| state_page(&state.registry, record));
    page_response(&state, uri.path(), page)
}

async fn city_detail(
    State(state): State<SiteState>,
    Path((state_slug, city_slug)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    let page = state
        .registry
        .resolve_location(&state_slug, &city_slug)
        .map(|location| {
            let featured: Vec<&ServiceRecord> = state.registry.featured_services().collect();
            city_page(location, &featured)
        });
    page_response(&state, uri.path(), page)
}

async fn not_found(State(state): State<SiteState>, uri: Uri) -> Response {
    info!(path = %uri.path(), "no route for path");
    html(&state, StatusCode::NOT_FOUND, &not_found_page(uri.path()))
}

fn wizard_status(error: &WizardError) -> StatusCode {
    match error {
        WizardError::MissingFields { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        WizardError::Submission(_) => StatusCode::BAD_GATEWAY,
        WizardError::NotFinalStep(_) | WizardError::AlreadySubmitted => StatusCode::BAD_REQUEST,
    }
}

async fn apply_submit(State(state): State<SiteState>, Form(form): Form<ApplyForm>) -> Response {
    let action = form.action();
    let mut wizard = ApplicationWizard::resume(form.step(), form.details);

    match wizard.apply(action, state.gateway.as_ref()) {
        Ok(_) => html(&state, StatusCode::OK, &apply_page(&wizard, None)),
        Err(err) => {
            if matches!(err, WizardError::Submission(_)) {
                warn!(error = %err, "loan application hand-off failed");
            }
            let status = wizard_status(&err);
            html(&state, status, &apply_page(&wizard, Some(&err)))
        }
    }
}

async fn sda_submit(
    State(state): State<SiteState>,
    Form(application): Form<SdaApplication>,
) -> Response {
    let mut form = SdaForm::new(application);
    match form.submit(state.gateway.as_ref()) {
        Ok(_) => html(&state, StatusCode::OK, &sda_page(&form, None)),
        Err(err) => {
            let status = match &err {
                SdaFormError::MissingFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
                SdaFormError::Submission(_) => {
                    warn!(error = %err, "state direct application hand-off failed");
                    StatusCode::BAD_GATEWAY
                }
                SdaFormError::AlreadySubmitted => StatusCode::BAD_REQUEST,
            };
            html(&state, status, &sda_page(&form, Some(&err)))
        }
    }
}

async fn ccpa_submit(
    State(state): State<SiteState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let request = PrivacyRequest::from_pairs(pairs);
    let missing = request.missing();
    if !missing.is_empty() {
        let view = CcpaView::Form {
            request: &request,
            missing: &missing,
        };
        return html(&state, StatusCode::UNPROCESSABLE_ENTITY, &ccpa_page(view));
    }

    let receipt = state.intake.receive_request(&request);
    html(&state, StatusCode::OK, &ccpa_page(CcpaView::Submitted(&receipt)))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use direct_title_loans::config::SiteConfig;
    use direct_title_loans::content::ContentRegistry;
    use direct_title_loans::forms::{
        LoggingGateway, Submission, SubmissionError, SubmissionGateway, SubmissionReceipt,
    };
    use direct_title_loans::intake::{ClockedRequestIds, PrivacyIntake};
    use direct_title_loans::render::SiteRenderer;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use regex::Regex;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct DownGateway;

    impl SubmissionGateway for DownGateway {
        fn submit(&self, _: Submission<'_>) -> Result<SubmissionReceipt, SubmissionError> {
            Err(SubmissionError::Rejected { status: 503 })
        }
    }

    fn app_with(gateway: Arc<dyn SubmissionGateway>) -> Router {
        let registry = ContentRegistry::embedded().expect("fixtures load");
        let renderer = SiteRenderer::new(&SiteConfig::default(), &registry);
        let site = SiteState::new(
            registry,
            renderer,
            gateway,
            PrivacyIntake::new(ClockedRequestIds),
        );
        let app_state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        site_router(site).layer(Extension(app_state))
    }

    fn app() -> Router {
        app_with(Arc::new(LoggingGateway))
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        send(app(), Request::get(uri).body(Body::empty()).expect("request")).await
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
    }

    const LOAN_DETAILS: &str = "step=3&action=submit&firstName=Ana&lastName=Ruiz&email=ana%40example.com\
        &phone=305-555-0100&vehicleYear=2019&vehicleMake=Honda&vehicleModel=Civic&vehicleMiles=41000\
        &loanAmount=4000&state=FL&city=Miami";

    #[tokio::test]
    async fn city_page_renders() {
        let (status, body) = get_page("/locations/california/los-angeles").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Title Loans in Los Angeles, CA"));
        assert!(body.contains("application/ld+json"));
    }

    #[tokio::test]
    async fn unknown_slugs_render_not_found_page() {
        for uri in [
            "/locations/texas/austin",
            "/locations/California/los-angeles",
            "/locations/florida/miami/",
            "/services/boat-title-loans",
            "/no-such-page",
        ] {
            let (status, body) = get_page(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body.contains("Page Not Found"), "{uri}");
        }
    }

    #[tokio::test]
    async fn fixed_pages_render() {
        for uri in ["/", "/about", "/services", "/locations", "/ccpa", "/sda"] {
            let (status, _) = get_page(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn wizard_advances_through_posts() {
        let (status, body) = send(
            app(),
            form_post(
                "/apply",
                "step=1&action=next&firstName=Ana&lastName=Ruiz&email=ana%40example.com&phone=305-555-0100",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("name=\"step\" value=\"2\""));
        assert!(body.contains("<input type=\"hidden\" name=\"firstName\" value=\"Ana\">"));
    }

    #[tokio::test]
    async fn wizard_reports_missing_fields() {
        let (status, body) = send(app(), form_post("/apply", "step=1&action=next&firstName=Ana")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Please complete: Last Name, Email, Phone."));
        assert!(body.contains("name=\"step\" value=\"1\""));
    }

    #[tokio::test]
    async fn wizard_submission_shows_confirmation() {
        let (status, body) = send(app(), form_post("/apply", LOAN_DETAILS)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Application Received"));
        assert!(!body.contains("<form"));
    }

    #[tokio::test]
    async fn failed_hand_off_keeps_final_step() {
        let (status, body) = send(app_with(Arc::new(DownGateway)), form_post("/apply", LOAN_DETAILS)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("name=\"step\" value=\"3\""));
        assert!(!body.contains("Application Received"));
    }

    #[tokio::test]
    async fn submit_with_blank_earlier_steps_returns_to_step_one() {
        let (status, body) = send(
            app_with(Arc::new(DownGateway)),
            form_post("/apply", "step=3&action=submit&loanAmount=4000&state=FL&city=Miami"),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("name=\"step\" value=\"1\""));
        assert!(body.contains("Please complete: First Name, Last Name, Email, Phone."));
        assert!(!body.contains("Application Received"));
    }

    #[tokio::test]
    async fn next_from_claimed_step_two_checks_step_one() {
        let (status, body) = send(
            app(),
            form_post(
                "/apply",
                "step=2&action=next&vehicleYear=2019&vehicleMake=Honda&vehicleModel=Civic&vehicleMiles=41000",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("name=\"step\" value=\"1\""));
    }

    #[tokio::test]
    async fn sda_post_submits() {
        let (status, body) = send(
            app(),
            form_post(
                "/sda",
                "state=CA&firstName=Lee&lastName=Park&email=lee%40example.com&phone=619-555-0100",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Application Submitted"));
    }

    #[tokio::test]
    async fn ccpa_post_acknowledges_with_reference() {
        let (status, body) = send(
            app(),
            form_post(
                "/ccpa",
                "residentType=CA&requestTypes=Delete+my+data&requestTypes=Opt-out+of+data+sale\
                 &name=Jane+Doe&email=jane%40example.com&phone=",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Request Submitted Successfully"));
        let reference = Regex::new(r"<code>PR-\d+-[a-z0-9]{9}</code>").expect("regex");
        assert!(reference.is_match(&body));
    }

    #[tokio::test]
    async fn ccpa_post_requires_name_and_email() {
        let (status, body) = send(app(), form_post("/ccpa", "residentType=VA")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Please complete: Full Name, Email."));
    }

    #[tokio::test]
    async fn privacy_api_is_mounted() {
        let request = Request::post("/api/privacy-request")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Jane"}"#))
            .expect("request");
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn probes_report_status() {
        let (status, body) = get_page("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ok"));

        let (status, body) = get_page("/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ready"));
    }
}
