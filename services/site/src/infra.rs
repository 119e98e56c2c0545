use direct_title_loans::content::ContentRegistry;
use direct_title_loans::forms::SubmissionGateway;
use direct_title_loans::intake::PrivacyIntake;
use direct_title_loans::render::SiteRenderer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Operational state for the probe and metrics endpoints.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Everything the page handlers read. Shared read-only across requests.
#[derive(Clone)]
pub(crate) struct SiteState {
    pub(crate) registry: Arc<ContentRegistry>,
    pub(crate) renderer: Arc<SiteRenderer>,
    pub(crate) gateway: Arc<dyn SubmissionGateway>,
    pub(crate) intake: Arc<PrivacyIntake>,
}

impl SiteState {
    pub(crate) fn new(
        registry: ContentRegistry,
        renderer: SiteRenderer,
        gateway: Arc<dyn SubmissionGateway>,
        intake: PrivacyIntake,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            renderer: Arc::new(renderer),
            gateway,
            intake: Arc::new(intake),
        }
    }
}
