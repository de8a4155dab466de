use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::AddressService;
use crate::storage::AddressStore;

pub mod routes;

/// Build the HTTP router over a shared service
pub fn router<S: AddressStore + 'static>(service: Arc<AddressService<S>>) -> Router {
    Router::new()
        .route(
            "/address/",
            get(routes::list_addresses::<S>)
                .post(routes::create_address::<S>)
                .delete(routes::delete_all_addresses::<S>),
        )
        .route(
            "/address/{name}",
            get(routes::get_address::<S>)
                .put(routes::update_address::<S>)
                .delete(routes::delete_address::<S>),
        )
        .route("/address-range", get(routes::addresses_in_range::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

pub async fn start_server<S: AddressStore + 'static>(
    addr: SocketAddr,
    service: Arc<AddressService<S>>,
) -> anyhow::Result<()> {
    let app = router(service);

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
