//! HTTP surface for Pillminder: router, handlers and server lifecycle.

mod assistant;
mod error;
mod middleware;
mod routes;
mod state;

use axum::http::{Method, header::CONTENT_TYPE};
use axum::routing::{get, post};
use axum::{Router, middleware::from_fn};
use log::{info, warn};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use assistant::{CHATBOT_FALLBACK, CHATBOT_GREETING, CHATBOT_REMINDER_HELP, chatbot_reply};
pub use error::AppError;
pub use middleware::REQUEST_ID_HEADER;
pub use state::AppState;

/// Build the application router with every route and layer attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(routes::index))
        .route("/healthz", get(routes::healthz))
        .route("/add_reminder", post(routes::reminders::add_reminder))
        .route("/get_reminders", get(routes::reminders::get_reminders))
        .route("/update_status", post(routes::reminders::update_status))
        .route("/ai", get(routes::completion::ai))
        .route("/medicine_search", post(routes::medicine::medicine_search))
        .route("/medicine_lookup", get(routes::medicine::medicine_lookup))
        .route("/chatbot", post(routes::demo::chatbot))
        .route("/send_sms", post(routes::demo::send_sms))
        .layer(from_fn(middleware::log_requests))
        .layer(cors)
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, letting in-flight requests finish.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("server listening (addr={addr})");
    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;
    info!("server stopped (addr={addr})");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(err) => {
                warn!("failed to install Ctrl+C handler (error={err})");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(err) => {
                warn!("failed to install SIGTERM handler (error={err})");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
