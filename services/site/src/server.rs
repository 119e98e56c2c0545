use crate::cli::ServeArgs;
use crate::infra::{AppState, SiteState};
use crate::routes::site_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use direct_title_loans::config::AppConfig;
use direct_title_loans::content::ContentRegistry;
use direct_title_loans::error::AppError;
use direct_title_loans::forms::LoggingGateway;
use direct_title_loans::intake::{ClockedRequestIds, PrivacyIntake};
use direct_title_loans::render::SiteRenderer;
use direct_title_loans::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let registry = ContentRegistry::load(config.site.content_dir.as_deref())?;
    let renderer = SiteRenderer::new(&config.site, &registry);
    info!(
        locations = registry.locations().len(),
        services = registry.services().len(),
        base_url = renderer.base_url(),
        "content registry loaded"
    );
    let site = SiteState::new(
        registry,
        renderer,
        Arc::new(LoggingGateway),
        PrivacyIntake::new(ClockedRequestIds),
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = site_router(site)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "direct title loans site ready");

    axum::serve(listener, app).await?;
    Ok(())
}
