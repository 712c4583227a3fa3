//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Serve static assets for paths no route claims
//! - Wire up middleware (CORS, request id, timeout, body limit, access log)
//! - Bind to the listener and shut down gracefully

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::PhonebookConfig;
use crate::http::middleware::{access_log_middleware, AccessLog};
use crate::http::{pages, persons};
use crate::phonebook::PersonStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: PersonStore,
}

/// HTTP server for the phonebook.
pub struct HttpServer {
    router: Router,
    config: PhonebookConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`.
    pub fn new(config: PhonebookConfig, store: PersonStore) -> Self {
        let router = Self::build_router(&config, AppState { store });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &PhonebookConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(pages::root))
            .route("/info", get(pages::info))
            .route(
                "/api/persons",
                get(persons::list_persons).post(persons::create_person),
            )
            .route(
                "/api/persons/{id}",
                get(persons::get_person).delete(persons::delete_person),
            )
            .with_state(state);

        if config.static_files.enabled {
            router = router.fallback_service(ServeDir::new(&config.static_files.dir));
        }

        let access_log = AccessLog {
            max_body_bytes: config.limits.max_body_bytes,
        };

        router
            .layer(middleware::from_fn_with_state(access_log, access_log_middleware))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(CorsLayer::permissive())
    }

    /// A clone of the fully layered router, for in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_dir = %self.config.static_files.dir,
            static_enabled = self.config.static_files.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
