use std::time::Duration;

use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Cors,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// In-flight requests get this long to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, config.cors, &addr);

        tracing::info!(%addr, "catalog api listening");
        tracing::info!("swagger ui at http://{}/docs, schema at /openapi.json", addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_GRACE))
            .await?;

        tracing::info!("catalog api stopped");
        Ok(())
    }

    /// Mounts the API, its Swagger UI and the OpenAPI document under one router.
    fn routes(container: DependencyContainer, cors: Cors, addr: &str) -> impl Endpoint + use<> {
        let api = OpenApiService::new(
            (container.health_api, container.product_api),
            "Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));

        let docs = api.swagger_ui();
        let schema = api.spec_endpoint();

        Route::new()
            .nest("/", api)
            .nest("/docs", docs)
            .nest("/openapi.json", schema)
            .with(cors)
            .with(Tracing)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
