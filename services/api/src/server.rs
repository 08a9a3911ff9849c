use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryListingStore};
use crate::routes::with_import_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use family_directory::config::AppConfig;
use family_directory::error::AppError;
use family_directory::import::{ImportState, ListingImporter};
use family_directory::telemetry;
use std::sync::atomic::Ordering;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryListingStore::default());
    let import_state = Arc::new(ImportState {
        importer: ListingImporter::new(store),
        max_payload_bytes: config.import.max_payload_bytes,
    });

    let app = with_import_routes(import_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        import_limit = config.import.max_payload_bytes,
        "family directory api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
